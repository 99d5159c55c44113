//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the acting user, from a Bearer token bound to a live session.

pub mod auth;
