// Test Helper Modules
//
// Shared infrastructure for contract and integration tests. Each test target
// pulls this in with `#[path = "../helpers/mod.rs"] mod helpers;` and uses
// only part of it.
#![allow(dead_code)]

pub mod test_data;
pub mod test_database;

pub use test_data::*;
pub use test_database::*;
pub use test_server::*;
