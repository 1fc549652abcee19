mod order_controller;

pub use order_controller::{configure, get_all_orders, place_order};
