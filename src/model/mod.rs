//! Domain models and request/response DTOs.

pub mod api;
pub mod beer;
