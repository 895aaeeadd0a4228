//! HTTP request handlers.
//!
//! Controllers decode requests, run entity validation, call the service layer
//! through its capability trait, and encode responses. No business state lives
//! here.

pub mod beer;
