pub mod beer;
pub mod prelude;
