use std::sync::Arc;

use tracing::info;

use crate::core::Result;
use crate::modules::medianos::models::{MedianoRequest, MedianoResponse, NewMediano};
use crate::modules::medianos::repositories::MedianoRepository;

/// Service mapping mediano requests to stored rows and back
pub struct MedianoService {
    mediano_repo: Arc<MedianoRepository>,
}

impl MedianoService {
    pub fn new(mediano_repo: Arc<MedianoRepository>) -> Self {
        Self { mediano_repo }
    }

    /// Store a new mediano built field-for-field from the request
    pub async fn add_mediano(&self, request: MedianoRequest) -> Result<()> {
        let mediano = self.mediano_repo.save(NewMediano::from(request)).await?;

        info!(mediano_id = mediano.id, "Mediano added: {}", mediano);

        Ok(())
    }

    /// List every stored mediano
    pub async fn get_all_medianos(&self) -> Result<Vec<MedianoResponse>> {
        let medianos = self.mediano_repo.find_all().await?;

        Ok(medianos.into_iter().map(MedianoResponse::from).collect())
    }
}
