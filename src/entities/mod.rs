pub mod prelude;

pub mod searches;
pub mod users;
