// Integration test for the complete orders-service flow over MySQL

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::StatusCode;
use helpers::*;
use storefront::orders::OrderResponse;

#[actix_web::test]
#[ignore = "Requires test database configuration"]
async fn test_place_and_list_order() {
    let pool = create_test_pool().await;
    let srv = spawn_orders_server_with_pool(pool.clone());

    let sku = TestDataFactory::random_sku();
    let response = srv
        .post("/api/order")
        .send_json(&TestDataFactory::order_payload(&[sku.as_str(), sku.as_str()]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let mut response = srv.get("/api/order").send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let orders: Vec<OrderResponse> = response.json().limit(10 * 1024 * 1024).await.unwrap();
    let ours: Vec<_> = orders
        .into_iter()
        .filter(|o| {
            o.order_items
                .iter()
                .any(|i| i.sku.as_deref() == Some(sku.as_str()))
        })
        .collect();

    assert_eq!(ours.len(), 1);
    let items = &ours[0].order_items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].price, Some(10.0));
    assert_eq!(items[0].quantity, Some(1));
    assert_eq!(items[1].price, Some(11.0));
    assert_eq!(items[1].quantity, Some(2));

    cleanup_orders_with_sku(&pool, &sku).await;
}
