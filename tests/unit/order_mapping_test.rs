// Property-based tests for placing and listing orders
//
// - Item fields survive the round trip unchanged and keep their order
// - Orders and items never share an id within their own table

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;
use storefront::core::InMemoryRepository;
use storefront::orders::models::OrderItemRequest;
use storefront::orders::{Order, OrderRequest, OrderService};

fn order_item() -> impl Strategy<Value = OrderItemRequest> {
    (
        proptest::option::of("[A-Z0-9-]{1,16}"),
        proptest::option::of((0i64..10_000_000).prop_map(|cents| cents as f64 / 100.0)),
        proptest::option::of(0i64..10_000),
    )
        .prop_map(|(sku, price, quantity)| OrderItemRequest {
            sku,
            price,
            quantity,
        })
}

fn order_request() -> impl Strategy<Value = OrderRequest> {
    proptest::collection::vec(order_item(), 0..8).prop_map(|order_items| OrderRequest { order_items })
}

proptest! {
    #[test]
    fn test_orders_round_trip(requests in proptest::collection::vec(order_request(), 1..10)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let listed = runtime.block_on(async {
            let service = OrderService::new(Arc::new(InMemoryRepository::<Order>::new()));
            for request in &requests {
                service.place_order(request.clone()).await.unwrap();
            }
            service.get_all_orders().await.unwrap()
        });

        prop_assert_eq!(listed.len(), requests.len());

        let mut order_ids = HashSet::new();
        let mut item_ids = HashSet::new();
        for (request, order) in requests.iter().zip(listed.iter()) {
            prop_assert!(order_ids.insert(order.id));
            prop_assert_eq!(order.order_items.len(), request.order_items.len());

            for (sent, stored) in request.order_items.iter().zip(order.order_items.iter()) {
                prop_assert!(item_ids.insert(stored.id));
                prop_assert_eq!(&sent.sku, &stored.sku);
                prop_assert_eq!(sent.price, stored.price);
                prop_assert_eq!(sent.quantity, stored.quantity);
            }
        }
    }
}
