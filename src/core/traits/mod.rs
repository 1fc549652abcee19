mod repository;

pub use repository::{Entity, Repository};
