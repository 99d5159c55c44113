//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&SqlitePool` as the first argument. Joins and ordering are
//! part of each method's contract and are documented on the method.

pub mod category_repo;
pub mod event_repo;
pub mod exchange_repo;
pub mod message_repo;
pub mod point_repo;
pub mod proposal_repo;
pub mod request_repo;
pub mod review_repo;
pub mod session_repo;
pub mod skill_repo;
pub mod user_repo;
pub mod user_skill_repo;

pub use category_repo::CategoryRepo;
pub use event_repo::{EventRepo, ParticipationRepo};
pub use exchange_repo::ExchangeRepo;
pub use message_repo::MessageRepo;
pub use point_repo::{LedgerError, PointRepo};
pub use proposal_repo::ProposalRepo;
pub use request_repo::RequestRepo;
pub use review_repo::ReviewRepo;
pub use session_repo::SessionRepo;
pub use skill_repo::SkillRepo;
pub use user_repo::UserRepo;
pub use user_skill_repo::UserSkillRepo;
