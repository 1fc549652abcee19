mod mediano_controller;

pub use mediano_controller::{add_mediano, configure, get_all_medianos};
