//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let department = factory::department::create_department(&db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let teacher = factory::user::UserFactory::new(&db)
//!     .employee_id("EMP042")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `department` - Create department entities
//! - `application` - Create admissions application entities
//! - `helpers` - Unique id generation and entities with dependencies

pub mod application;
pub mod department;
pub mod helpers;
pub mod user;

pub use application::create_application;
pub use department::create_department;
pub use user::create_user;
