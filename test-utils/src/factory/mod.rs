//! Entity factories for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out
//! the fields they actually care about.

pub mod beer;
pub mod helpers;
