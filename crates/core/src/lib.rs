//! Domain types, errors and pure validation logic for the SkillSwap backend.
//!
//! Nothing in this crate performs I/O. The database and HTTP layers depend
//! on it. `sqlx` is used only to derive the column encodings of the choice
//! enums and [`types::Rating`].

pub mod error;
pub mod forms;
pub mod points;
pub mod status;
pub mod types;
