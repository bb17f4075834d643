pub mod kit_repo;
pub mod models;
