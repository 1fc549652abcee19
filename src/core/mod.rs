pub mod error;
pub mod storage;
pub mod traits;

pub use error::{AppError, Result};
pub use storage::InMemoryRepository;
pub use traits::{Entity, Repository};
