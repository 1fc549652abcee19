// Integration test for the complete products-service flow over MySQL
//
// POST a mediano over HTTP, then GET the list and find it again with an
// assigned id and unchanged fields.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::StatusCode;
use helpers::*;
use storefront::medianos::MedianoResponse;

#[actix_web::test]
#[ignore = "Requires test database configuration"]
async fn test_create_and_list_mediano() {
    let pool = create_test_pool().await;
    let srv = spawn_products_server_with_pool(pool.clone());

    let payload = TestDataFactory::mediano_payload();
    let sku = payload["sku"].as_str().unwrap().to_string();

    for _ in 0..2 {
        let response = srv.post("/api/mediano").send_json(&payload).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let mut response = srv.get("/api/mediano").send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let medianos: Vec<MedianoResponse> = response.json().limit(10 * 1024 * 1024).await.unwrap();
    let ours: Vec<_> = medianos
        .into_iter()
        .filter(|m| m.sku.as_deref() == Some(sku.as_str()))
        .collect();

    assert_eq!(ours.len(), 2, "Both POSTs must be listed exactly once");
    assert_ne!(ours[0].id, ours[1].id);
    for mediano in &ours {
        assert_eq!(mediano.name.as_deref(), Some("Test Mediano"));
        assert_eq!(mediano.height, Some(10.25));
        assert_eq!(mediano.weight, Some(0.5));
        assert_eq!(mediano.description.as_deref(), Some("integration test product"));
        assert_eq!(mediano.price, Some(149.5));
        assert_eq!(mediano.status, Some(false));
    }

    cleanup_medianos(&pool, &sku).await;
}
