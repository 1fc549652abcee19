// Mediano: the catalogue product stored by products-service
//
// A mediano is created from a MedianoRequest (no id), persisted once in the
// `medianos` table, and read back as a MedianoResponse (with id). None of the
// fields are constrained: anything missing from the request is stored as NULL.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::Entity;

/// Stored product row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Mediano {
    /// Auto-increment primary key
    pub id: i64,
    pub sku: Option<String>,
    pub name: Option<String>,
    pub height: Option<f32>,
    pub weight: Option<f32>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub status: Option<bool>,
}

/// A mediano that has not been persisted yet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewMediano {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub height: Option<f32>,
    pub weight: Option<f32>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub status: Option<bool>,
}

/// Request body for POST /api/mediano
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedianoRequest {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub height: Option<f32>,
    pub weight: Option<f32>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub status: Option<bool>,
}

/// Element of the GET /api/mediano response array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedianoResponse {
    pub id: i64,
    pub sku: Option<String>,
    pub name: Option<String>,
    pub height: Option<f32>,
    pub weight: Option<f32>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub status: Option<bool>,
}

impl From<MedianoRequest> for NewMediano {
    fn from(request: MedianoRequest) -> Self {
        Self {
            sku: request.sku,
            name: request.name,
            height: request.height,
            weight: request.weight,
            description: request.description,
            price: request.price,
            status: request.status,
        }
    }
}

impl From<Mediano> for MedianoResponse {
    fn from(mediano: Mediano) -> Self {
        Self {
            id: mediano.id,
            sku: mediano.sku,
            name: mediano.name,
            height: mediano.height,
            weight: mediano.weight,
            description: mediano.description,
            price: mediano.price,
            status: mediano.status,
        }
    }
}

impl Mediano {
    /// Attach a storage-assigned id to a draft
    pub fn with_id(id: i64, draft: NewMediano) -> Self {
        Self {
            id,
            sku: draft.sku,
            name: draft.name,
            height: draft.height,
            weight: draft.weight,
            description: draft.description,
            price: draft.price,
            status: draft.status,
        }
    }
}

impl Entity for Mediano {
    type Draft = NewMediano;

    fn from_draft(draft: NewMediano, next_id: &mut dyn FnMut() -> i64) -> Self {
        Self::with_id(next_id(), draft)
    }
}

/// Short form used in log lines: identifier, name and description only
impl std::fmt::Display for Mediano {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mediano {{ id: {}, name: {:?}, description: {:?} }}",
            self.id,
            self.name.as_deref().unwrap_or_default(),
            self.description.as_deref().unwrap_or_default()
        )
    }
}
