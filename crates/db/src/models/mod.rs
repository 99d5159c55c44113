//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - Joined view types returned by list/detail queries, where needed

pub mod category;
pub mod event;
pub mod exchange;
pub mod message;
pub mod point;
pub mod proposal;
pub mod request;
pub mod review;
pub mod session;
pub mod skill;
pub mod user;
pub mod user_skill;
