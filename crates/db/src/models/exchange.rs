//! Exchange entity model, DTOs and joined views.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use skillswap_core::status::{ExchangeFormat, ExchangeStatus};
use skillswap_core::types::{DbId, Timestamp};

use super::user::UserSummary;

/// A row from the `exchanges` table. `user1_id != user2_id` is a storage
/// constraint.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Exchange {
    pub id: DbId,
    pub user1_id: DbId,
    pub user2_id: DbId,
    pub proposal_id: Option<DbId>,
    pub request_id: Option<DbId>,
    pub status: ExchangeStatus,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub format: ExchangeFormat,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl Exchange {
    pub fn is_participant(&self, user_id: DbId) -> bool {
        self.user1_id == user_id || self.user2_id == user_id
    }

    /// The participant who is not `user_id`, or `None` if `user_id` is not
    /// part of this exchange.
    pub fn counterpart(&self, user_id: DbId) -> Option<DbId> {
        if self.user1_id == user_id {
            Some(self.user2_id)
        } else if self.user2_id == user_id {
            Some(self.user1_id)
        } else {
            None
        }
    }
}

/// DTO for creating an exchange. Status always starts `active`.
#[derive(Debug)]
pub struct CreateExchange {
    pub user1_id: DbId,
    pub user2_id: DbId,
    pub proposal_id: Option<DbId>,
    pub request_id: Option<DbId>,
    pub format: ExchangeFormat,
}

/// Body for changing an exchange's status.
#[derive(Debug, Deserialize)]
pub struct UpdateExchangeStatus {
    pub status: ExchangeStatus,
}

/// Originating proposal, as embedded in an exchange view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProposalRef {
    pub id: DbId,
    pub description: Option<String>,
    pub format: ExchangeFormat,
}

/// Originating request, as embedded in an exchange view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestRef {
    pub id: DbId,
    pub description: Option<String>,
}

/// An exchange with both users and its origin joined in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeDetail {
    pub id: DbId,
    pub user1: UserSummary,
    pub user2: UserSummary,
    pub proposal: Option<ProposalRef>,
    pub request: Option<RequestRef>,
    pub status: ExchangeStatus,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub format: ExchangeFormat,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, FromRow)]
pub(crate) struct ExchangeDetailRow {
    pub id: DbId,
    pub user1_id: DbId,
    pub user1_email: String,
    pub user1_full_name: String,
    pub user2_id: DbId,
    pub user2_email: String,
    pub user2_full_name: String,
    pub proposal_id: Option<DbId>,
    pub proposal_description: Option<String>,
    pub proposal_format: Option<ExchangeFormat>,
    pub request_id: Option<DbId>,
    pub request_description: Option<String>,
    pub status: ExchangeStatus,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub format: ExchangeFormat,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl From<ExchangeDetailRow> for ExchangeDetail {
    fn from(row: ExchangeDetailRow) -> Self {
        let proposal = row.proposal_id.map(|id| ProposalRef {
            id,
            description: row.proposal_description,
            format: row.proposal_format.unwrap_or_default(),
        });
        let request = row.request_id.map(|id| RequestRef {
            id,
            description: row.request_description,
        });
        Self {
            id: row.id,
            user1: UserSummary {
                id: row.user1_id,
                email: row.user1_email,
                full_name: row.user1_full_name,
            },
            user2: UserSummary {
                id: row.user2_id,
                email: row.user2_email,
                full_name: row.user2_full_name,
            },
            proposal,
            request,
            status: row.status,
            start_date: row.start_date,
            end_date: row.end_date,
            format: row.format,
            location: row.location,
            notes: row.notes,
            created_at: row.created_at,
        }
    }
}
