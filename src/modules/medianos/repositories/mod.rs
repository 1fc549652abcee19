mod mediano_repository;

pub use mediano_repository::{MedianoRepository, MySqlMedianoRepository};
