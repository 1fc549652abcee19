mod mediano_service;

pub use mediano_service::MedianoService;
