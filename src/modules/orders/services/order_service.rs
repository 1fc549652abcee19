use std::sync::Arc;

use tracing::info;

use crate::core::Result;
use crate::modules::orders::models::{NewOrder, OrderRequest, OrderResponse};
use crate::modules::orders::repositories::OrderRepository;

/// Service for placing and listing orders
pub struct OrderService {
    order_repo: Arc<OrderRepository>,
}

impl OrderService {
    pub fn new(order_repo: Arc<OrderRepository>) -> Self {
        Self { order_repo }
    }

    /// Place an order under a newly generated order number
    pub async fn place_order(&self, request: OrderRequest) -> Result<()> {
        let order = self.order_repo.save(NewOrder::from_request(request)).await?;

        info!(
            order_id = order.id,
            order_number = %order.order_number,
            "Order placed: {}",
            order
        );

        Ok(())
    }

    /// List every stored order with its items
    pub async fn get_all_orders(&self) -> Result<Vec<OrderResponse>> {
        let orders = self.order_repo.find_all().await?;

        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }
}
