pub use super::searches::Entity as Searches;
pub use super::users::Entity as Users;
