pub mod auth;
pub mod catalogue;
pub mod events;
pub mod exchanges;
pub mod messages;
pub mod points;
pub mod profile;
pub mod proposals;
pub mod requests;
pub mod reviews;
