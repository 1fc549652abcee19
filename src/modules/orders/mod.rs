// Orders module (orders-service)

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{NewOrder, Order, OrderItem, OrderRequest, OrderResponse};
pub use repositories::{MySqlOrderRepository, OrderRepository};
pub use services::OrderService;
