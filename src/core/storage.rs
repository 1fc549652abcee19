//! In-process storage backend.
//!
//! Backs the services in tests, where no MySQL instance is available.
//! Identifiers start at 1 and grow by one for every row, child rows included.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::{AppError, Result};
use crate::core::traits::{Entity, Repository};

struct Table<T> {
    rows: Vec<T>,
    last_id: i64,
}

/// Repository holding its records in memory
pub struct InMemoryRepository<T> {
    table: Mutex<Table<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                rows: Vec::new(),
                last_id: 0,
            }),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn save(&self, draft: T::Draft) -> Result<T> {
        let mut table = self
            .table
            .lock()
            .map_err(|_| AppError::internal("In-memory table lock poisoned"))?;

        let mut last_id = table.last_id;
        let entity = T::from_draft(draft, &mut || {
            last_id += 1;
            last_id
        });
        table.last_id = last_id;
        table.rows.push(entity.clone());

        Ok(entity)
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        let table = self
            .table
            .lock()
            .map_err(|_| AppError::internal("In-memory table lock poisoned"))?;

        Ok(table.rows.clone())
    }
}
