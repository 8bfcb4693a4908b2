pub mod containers;
pub mod deposit;
pub mod schema;
pub mod user;
