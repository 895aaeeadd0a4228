//! Service layer traits consumed by the controller layer.

pub mod beer;
