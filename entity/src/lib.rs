//! SeaORM entity models for the campus registry schema.

pub mod prelude;

pub mod application;
pub mod counter;
pub mod department;
pub mod user;
