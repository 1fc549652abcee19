// Medianos module (products-service)

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Mediano, MedianoRequest, MedianoResponse, NewMediano};
pub use repositories::{MedianoRepository, MySqlMedianoRepository};
pub use services::MedianoService;
