//! Shared response envelope for API handlers.
//!
//! Every successful response is `{ "data": ..., "message"?: ..., "next"?: ... }`.
//! `message` is the success notification shown to the user and `next` names
//! the view the client should go to after a state change.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse::new(items)))
/// Ok(Json(DataResponse::new(proposal).with_message("Proposal created").with_next("/proposals/")))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'static str>,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
            next: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_next(mut self, path: &'static str) -> Self {
        self.next = Some(path);
        self
    }
}
