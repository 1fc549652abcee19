// Test Data Factory
//
// Generates request payloads for tests. SKUs carry a UUID so rows written by
// one test can be told apart from rows written by another.

use serde_json::{json, Value};
use uuid::Uuid;

/// Test data factory for generating unique test data
pub struct TestDataFactory;

impl TestDataFactory {
    /// Generate random SKU with TEST prefix
    pub fn random_sku() -> String {
        format!("TEST-{}", Uuid::new_v4())
    }

    /// The reference mediano payload: `{sku:"A1", name:"Box", ...}`
    pub fn box_mediano_payload() -> Value {
        json!({
            "sku": "A1",
            "name": "Box",
            "height": 1.5,
            "weight": 2.0,
            "description": "d",
            "price": 9.99,
            "status": true
        })
    }

    /// Mediano payload with a unique SKU
    pub fn mediano_payload() -> Value {
        json!({
            "sku": Self::random_sku(),
            "name": "Test Mediano",
            "height": 10.25,
            "weight": 0.5,
            "description": "integration test product",
            "price": 149.5,
            "status": false
        })
    }

    /// Order payload with one line per SKU
    pub fn order_payload(skus: &[&str]) -> Value {
        let items: Vec<Value> = skus
            .iter()
            .enumerate()
            .map(|(i, sku)| {
                json!({
                    "sku": sku,
                    "price": 10.0 + i as f64,
                    "quantity": (i + 1) as i64
                })
            })
            .collect();

        json!({ "order_items": items })
    }
}
