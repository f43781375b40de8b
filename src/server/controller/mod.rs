//! HTTP request handlers.
//!
//! Controllers check access through the guards, convert DTOs into domain
//! parameters, call the services and convert results back into DTOs.

pub mod application;
pub mod auth;
pub mod counter;
pub mod department;

#[cfg(test)]
mod test;
