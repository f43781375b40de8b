//! Request and response DTOs shared by the HTTP surface.

pub mod api;
pub mod application;
pub mod counter;
pub mod department;
pub mod user;
