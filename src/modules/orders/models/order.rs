// Order: a numbered set of line items stored by orders-service
//
// The order number is generated when the order is placed. An order and its
// items are persisted together and never modified afterwards.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::Entity;

/// Stored order with its line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub order_items: Vec<OrderItem>,
}

/// Stored line item, owned by exactly one order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub id: i64,
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// An order that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub order_number: String,
    pub order_items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewOrderItem {
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Request body for POST /api/order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub order_items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Element of the GET /api/order response array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: i64,
    pub order_number: String,
    pub order_items: Vec<OrderItemResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemResponse {
    pub id: i64,
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl NewOrder {
    /// Build a draft from the request under a freshly generated order number
    pub fn from_request(request: OrderRequest) -> Self {
        Self {
            order_number: Uuid::new_v4().to_string(),
            order_items: request
                .order_items
                .into_iter()
                .map(NewOrderItem::from)
                .collect(),
        }
    }
}

impl From<OrderItemRequest> for NewOrderItem {
    fn from(request: OrderItemRequest) -> Self {
        Self {
            sku: request.sku,
            price: request.price,
            quantity: request.quantity,
        }
    }
}

impl OrderItem {
    pub fn with_id(id: i64, draft: NewOrderItem) -> Self {
        Self {
            id,
            sku: draft.sku,
            price: draft.price,
            quantity: draft.quantity,
        }
    }
}

impl Entity for Order {
    type Draft = NewOrder;

    fn from_draft(draft: NewOrder, next_id: &mut dyn FnMut() -> i64) -> Self {
        let id = next_id();
        let order_items = draft
            .order_items
            .into_iter()
            .map(|item| OrderItem::with_id(next_id(), item))
            .collect();

        Self {
            id,
            order_number: draft.order_number,
            order_items,
        }
    }
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            sku: item.sku,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number,
            order_items: order
                .order_items
                .into_iter()
                .map(OrderItemResponse::from)
                .collect(),
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order {{ id: {}, order_number: {}, items: {} }}",
            self.id,
            self.order_number,
            self.order_items.len()
        )
    }
}
