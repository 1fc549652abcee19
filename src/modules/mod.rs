pub mod health;
pub mod medianos;
pub mod orders;
