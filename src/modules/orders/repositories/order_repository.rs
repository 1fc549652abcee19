// MySQL storage for orders and their line items
//
// An order is written to `orders` and its items to `order_items` inside one
// transaction, so a failed item insert leaves no half-written order behind.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, MySql, MySqlPool, Transaction};

use crate::core::{Repository, Result};
use crate::modules::orders::models::{NewOrder, Order, OrderItem};

/// Persistence gateway for orders
pub type OrderRepository = dyn Repository<Order>;

/// MySQL-backed order storage
#[derive(Clone)]
pub struct MySqlOrderRepository {
    pool: MySqlPool,
}

#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    order_number: String,
}

#[derive(Debug, FromRow)]
struct OrderItemRow {
    order_id: i64,
    #[sqlx(flatten)]
    item: OrderItem,
}

impl MySqlOrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert an order and its items within an existing transaction
    pub async fn save_with_tx(
        &self,
        tx: &mut Transaction<'_, MySql>,
        draft: NewOrder,
    ) -> Result<Order> {
        let order_id = sqlx::query("INSERT INTO orders (order_number) VALUES (?)")
            .bind(&draft.order_number)
            .execute(&mut **tx)
            .await?
            .last_insert_id() as i64;

        let mut order_items = Vec::with_capacity(draft.order_items.len());
        for item in draft.order_items {
            let item_id = sqlx::query(
                r#"
                INSERT INTO order_items (order_id, sku, price, quantity)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(order_id)
            .bind(&item.sku)
            .bind(item.price)
            .bind(item.quantity)
            .execute(&mut **tx)
            .await?
            .last_insert_id() as i64;

            order_items.push(OrderItem::with_id(item_id, item));
        }

        Ok(Order {
            id: order_id,
            order_number: draft.order_number,
            order_items,
        })
    }
}

#[async_trait]
impl Repository<Order> for MySqlOrderRepository {
    async fn save(&self, draft: NewOrder) -> Result<Order> {
        let mut tx = self.pool.begin().await?;

        let order = self.save_with_tx(&mut tx, draft).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, OrderRow>(
            "SELECT id, order_number FROM orders ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let items = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT id, order_id, sku, price, quantity
            FROM order_items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut items_by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
        for row in items {
            items_by_order.entry(row.order_id).or_default().push(row.item);
        }

        Ok(orders
            .into_iter()
            .map(|row| Order {
                id: row.id,
                order_number: row.order_number,
                order_items: items_by_order.remove(&row.id).unwrap_or_default(),
            })
            .collect())
    }
}
