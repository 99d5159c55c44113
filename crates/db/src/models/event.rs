//! Event and event-participation models.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::FromRow;
use skillswap_core::status::ParticipationStatus;
use skillswap_core::types::{DbId, Timestamp};

/// A row from the `events` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub organizer_id: DbId,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub max_participants: i32,
    pub category_id: Option<DbId>,
    pub created_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateEvent {
    pub title: String,
    pub description: Option<String>,
    pub organizer_id: DbId,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub max_participants: i32,
    pub category_id: Option<DbId>,
}

/// An event plus how many non-declined participants it has.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct EventWithCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub event: Event,
    pub participant_count: i64,
}

impl EventWithCount {
    pub fn is_full(&self) -> bool {
        self.participant_count >= i64::from(self.event.max_participants)
    }
}

/// A row from the `event_participations` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct EventParticipation {
    pub id: DbId,
    pub user_id: DbId,
    pub event_id: DbId,
    pub status: ParticipationStatus,
    pub registered_at: Timestamp,
}

