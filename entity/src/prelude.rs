pub use super::application::Entity as Application;
pub use super::counter::Entity as Counter;
pub use super::department::Entity as Department;
pub use super::user::Entity as User;
