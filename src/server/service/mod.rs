//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They work with
//! domain models, issue identifiers through the sequence issuer and coordinate
//! the repository calls that consume them.

pub mod application;
pub mod department;
pub mod identifier;
pub mod sequence;
pub mod user;
