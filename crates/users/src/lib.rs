//! `shopkeeper-users` — panel user accounts.

pub mod user;

pub use user::User;
