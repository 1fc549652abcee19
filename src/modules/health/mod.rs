// Liveness and readiness probes shared by both services

pub mod controllers;

pub use controllers::configure;
