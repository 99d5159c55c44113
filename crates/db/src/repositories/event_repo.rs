//! Repositories for the `events` and `event_participations` tables.

use chrono::Utc;
use sqlx::SqlitePool;
use skillswap_core::status::ParticipationStatus;
use skillswap_core::types::DbId;

use crate::models::event::{CreateEvent, Event, EventParticipation, EventWithCount};

const COLUMNS: &str = "id, title, description, organizer_id, event_date, event_time, location, \
                       max_participants, category_id, created_at";

/// Events with their count of non-declined participants.
const WITH_COUNT: &str = "SELECT e.id, e.title, e.description, e.organizer_id, e.event_date, \
                                 e.event_time, e.location, e.max_participants, e.category_id, \
                                 e.created_at, \
                                 (SELECT COUNT(*) FROM event_participations ep \
                                  WHERE ep.event_id = e.id AND ep.status <> 'declined') \
                                     AS participant_count \
                          FROM events e";

pub struct EventRepo;

impl EventRepo {
    pub async fn create(pool: &SqlitePool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                (title, description, organizer_id, event_date, event_time, location,
                 max_participants, category_id, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.organizer_id)
            .bind(input.event_date)
            .bind(input.event_time)
            .bind(&input.location)
            .bind(input.max_participants)
            .bind(input.category_id)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    pub async fn find_with_count(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<EventWithCount>, sqlx::Error> {
        let query = format!("{WITH_COUNT} WHERE e.id = ?");
        sqlx::query_as::<_, EventWithCount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All events by date, then time (untimed events first), then id.
    pub async fn list_with_count(pool: &SqlitePool) -> Result<Vec<EventWithCount>, sqlx::Error> {
        let query = format!("{WITH_COUNT} ORDER BY e.event_date, e.event_time, e.id");
        sqlx::query_as::<_, EventWithCount>(&query)
            .fetch_all(pool)
            .await
    }
}

const PARTICIPATION_COLUMNS: &str = "id, user_id, event_id, status, registered_at";

pub struct ParticipationRepo;

impl ParticipationRepo {
    /// Register `user_id` for `event_id` with status `pending`, provided
    /// the event still has room.
    ///
    /// The capacity check and the insert are a single statement. Returns
    /// `None` when the event is full or does not exist. A second
    /// registration violates `uq_event_participations_user_event`.
    pub async fn join(
        pool: &SqlitePool,
        user_id: DbId,
        event_id: DbId,
    ) -> Result<Option<EventParticipation>, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_participations (user_id, event_id, status, registered_at)
             SELECT ?, e.id, ?, ?
             FROM events e
             WHERE e.id = ?
               AND (SELECT COUNT(*) FROM event_participations ep
                    WHERE ep.event_id = e.id AND ep.status <> 'declined') < e.max_participants
             RETURNING {PARTICIPATION_COLUMNS}"
        );
        sqlx::query_as::<_, EventParticipation>(&query)
            .bind(user_id)
            .bind(ParticipationStatus::Pending)
            .bind(Utc::now())
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find(
        pool: &SqlitePool,
        user_id: DbId,
        event_id: DbId,
    ) -> Result<Option<EventParticipation>, sqlx::Error> {
        let query = format!(
            "SELECT {PARTICIPATION_COLUMNS} FROM event_participations
             WHERE user_id = ? AND event_id = ?"
        );
        sqlx::query_as::<_, EventParticipation>(&query)
            .bind(user_id)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }
}
