//! Domain models and operation parameter types.
//!
//! Models here sit between the data layer (SeaORM entities) and the controller
//! layer (DTOs). Conversions in both directions happen at these boundaries.

pub mod application;
pub mod counter;
pub mod department;
pub mod identifier;
pub mod user;
