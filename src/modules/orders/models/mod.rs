mod order;

pub use order::{
    NewOrder, NewOrderItem, Order, OrderItem, OrderItemRequest, OrderItemResponse, OrderRequest,
    OrderResponse,
};
