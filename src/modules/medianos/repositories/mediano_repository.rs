use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{Repository, Result};
use crate::modules::medianos::models::{Mediano, NewMediano};

/// Persistence gateway for medianos
pub type MedianoRepository = dyn Repository<Mediano>;

/// MySQL-backed mediano storage over the `medianos` table
#[derive(Clone)]
pub struct MySqlMedianoRepository {
    pool: MySqlPool,
}

impl MySqlMedianoRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Mediano> for MySqlMedianoRepository {
    async fn save(&self, draft: NewMediano) -> Result<Mediano> {
        let result = sqlx::query(
            r#"
            INSERT INTO medianos (sku, name, height, weight, description, price, status)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.sku)
        .bind(&draft.name)
        .bind(draft.height)
        .bind(draft.weight)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(draft.status)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id() as i64;
        tracing::debug!(id, "Inserted mediano row");

        Ok(Mediano::with_id(id, draft))
    }

    async fn find_all(&self) -> Result<Vec<Mediano>> {
        let medianos = sqlx::query_as::<_, Mediano>(
            r#"
            SELECT id, sku, name, height, weight, description, price, status
            FROM medianos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(medianos)
    }
}
