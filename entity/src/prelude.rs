pub use super::beer::Entity as Beer;
