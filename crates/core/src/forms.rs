//! Form validation for every entity-creation workflow.
//!
//! Each `validate_*` function takes the raw submitted input plus whatever
//! choice sets the form needs (looked up by the caller) and returns either a
//! validated value or a [`FieldErrors`] list naming each failing field.
//! Nothing here touches the database.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::status::{ExchangeFormat, SkillLevel};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum length of short text fields (names, titles).
pub const MAX_NAME_LENGTH: usize = 255;

/// Smallest and largest review rating.
pub const MIN_REVIEW_RATING: i16 = 1;
pub const MAX_REVIEW_RATING: i16 = 5;

/// Participant cap applied when an event does not specify one.
pub const DEFAULT_MAX_PARTICIPANTS: i32 = 10;

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered list of field errors produced by one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Whether any error is attached to `field`.
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// `Ok(value)` when no errors were recorded, otherwise `Err(self)`.
    fn finish<T>(self, build: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(build())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Trim a free-text field, mapping blank input to `None`.
fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Require a non-blank text field no longer than [`MAX_NAME_LENGTH`].
fn required_name(errors: &mut FieldErrors, field: &str, value: &Option<String>) -> String {
    match optional_text(value) {
        None => {
            errors.add(field, "This field is required");
            String::new()
        }
        Some(s) if s.chars().count() > MAX_NAME_LENGTH => {
            errors.add(
                field,
                format!("Must be at most {MAX_NAME_LENGTH} characters"),
            );
            s
        }
        Some(s) => s,
    }
}

/// Parse an optional choice field, falling back to `default` when absent.
fn choice<T: std::str::FromStr + Copy>(
    errors: &mut FieldErrors,
    field: &str,
    value: &Option<String>,
    default: T,
) -> T {
    match optional_text(value) {
        None => default,
        Some(raw) => match raw.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                errors.add(field, format!("'{raw}' is not a valid choice"));
                default
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Proposals and requests
// ---------------------------------------------------------------------------

/// Skill choice sets for a proposal or request form.
///
/// `offered` is narrowed to the skills the acting user already holds;
/// `wanted` is every skill in the catalogue.
#[derive(Debug, Clone, Default)]
pub struct SkillChoices {
    pub offered: Vec<DbId>,
    pub wanted: Vec<DbId>,
}

/// Raw proposal form input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProposalInput {
    pub skill_offered: Option<DbId>,
    pub skill_wanted: Option<DbId>,
    pub description: Option<String>,
    pub format: Option<String>,
    pub deadlines: Option<String>,
}

/// A proposal that passed validation. Authorship is supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProposal {
    pub skill_offered: DbId,
    pub skill_wanted: DbId,
    pub description: Option<String>,
    pub format: ExchangeFormat,
    pub deadlines: Option<String>,
}

/// Check the offered/wanted pair against the form's choice sets.
fn validate_skill_pair(
    errors: &mut FieldErrors,
    offered: Option<DbId>,
    wanted: Option<DbId>,
    choices: &SkillChoices,
) -> (DbId, DbId) {
    let offered = match offered {
        None => {
            errors.add("skill_offered", "This field is required");
            0
        }
        Some(id) if !choices.offered.contains(&id) => {
            errors.add(
                "skill_offered",
                "Select one of your own skills; that choice is not available",
            );
            id
        }
        Some(id) => id,
    };
    let wanted = match wanted {
        None => {
            errors.add("skill_wanted", "This field is required");
            0
        }
        Some(id) if !choices.wanted.contains(&id) => {
            errors.add("skill_wanted", "Select a valid skill; that choice is not available");
            id
        }
        Some(id) => id,
    };
    (offered, wanted)
}

pub fn validate_proposal(
    input: &ProposalInput,
    choices: &SkillChoices,
) -> Result<ValidProposal, FieldErrors> {
    let mut errors = FieldErrors::new();
    let (skill_offered, skill_wanted) =
        validate_skill_pair(&mut errors, input.skill_offered, input.skill_wanted, choices);
    let format = choice(&mut errors, "format", &input.format, ExchangeFormat::default());

    errors.finish(|| ValidProposal {
        skill_offered,
        skill_wanted,
        description: optional_text(&input.description),
        format,
        deadlines: optional_text(&input.deadlines),
    })
}

/// Raw learning-request form input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestInput {
    pub skill_wanted: Option<DbId>,
    pub skill_offered: Option<DbId>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRequest {
    pub skill_wanted: DbId,
    pub skill_offered: DbId,
    pub description: Option<String>,
}

pub fn validate_request(
    input: &RequestInput,
    choices: &SkillChoices,
) -> Result<ValidRequest, FieldErrors> {
    let mut errors = FieldErrors::new();
    let (skill_offered, skill_wanted) =
        validate_skill_pair(&mut errors, input.skill_offered, input.skill_wanted, choices);

    errors.finish(|| ValidRequest {
        skill_wanted,
        skill_offered,
        description: optional_text(&input.description),
    })
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
    pub category: Option<DbId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSkill {
    pub name: String,
    pub description: Option<String>,
    pub level: SkillLevel,
    pub category_id: DbId,
}

/// Validate a new skill. `category_ids` are the existing categories.
pub fn validate_skill(input: &SkillInput, category_ids: &[DbId]) -> Result<ValidSkill, FieldErrors> {
    let mut errors = FieldErrors::new();
    let name = required_name(&mut errors, "name", &input.name);

    let level = match optional_text(&input.level) {
        None => {
            errors.add("level", "This field is required");
            SkillLevel::Novice
        }
        Some(raw) => raw.parse::<SkillLevel>().unwrap_or_else(|_| {
            errors.add("level", format!("'{raw}' is not a valid choice"));
            SkillLevel::Novice
        }),
    };

    let category_id = match input.category {
        None => {
            errors.add("category", "This field is required");
            0
        }
        Some(id) if !category_ids.contains(&id) => {
            errors.add("category", "Select a valid category; that choice is not available");
            id
        }
        Some(id) => id,
    };

    errors.finish(|| ValidSkill {
        name,
        description: optional_text(&input.description),
        level,
        category_id,
    })
}

// ---------------------------------------------------------------------------
// Registration and login
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationInput {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// Normalize an email address: trim whitespace and lowercase the domain.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Baseline password strength check.
pub fn validate_password_strength(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        ));
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err("Password must not be entirely numeric".to_string());
    }
    Ok(())
}

/// Validate a registration form.
///
/// `email_taken` reports whether the normalized email already belongs to a
/// user; the caller looks it up with [`normalize_email`].
pub fn validate_registration(
    input: &RegistrationInput,
    email_taken: bool,
) -> Result<ValidRegistration, FieldErrors> {
    let mut errors = FieldErrors::new();

    let email = match optional_text(&input.email) {
        None => {
            errors.add("email", "This field is required");
            String::new()
        }
        Some(raw) => {
            let email = normalize_email(&raw);
            if !email.validate_email() {
                errors.add("email", "Enter a valid email address");
            } else if email_taken {
                errors.add("email", "A user with this email already exists");
            }
            email
        }
    };

    let full_name = required_name(&mut errors, "full_name", &input.full_name);

    let password = input.password.clone().unwrap_or_default();
    if password.is_empty() {
        errors.add("password", "This field is required");
    } else if let Err(msg) = validate_password_strength(&password) {
        errors.add("password", msg);
    }

    match input.password_confirm.as_deref() {
        None | Some("") => errors.add("password_confirm", "This field is required"),
        Some(confirm) if !password.is_empty() && confirm != password => {
            errors.add("password_confirm", "The two password fields didn't match")
        }
        Some(_) => {}
    }

    errors.finish(|| ValidRegistration {
        email,
        full_name,
        password,
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Check that both login fields are present; returns `(email, password)`.
pub fn validate_login(input: &LoginInput) -> Result<(String, String), FieldErrors> {
    let mut errors = FieldErrors::new();
    let email = optional_text(&input.email).map(|e| normalize_email(&e));
    if email.is_none() {
        errors.add("email", "This field is required");
    }
    let password = input.password.clone().filter(|p| !p.is_empty());
    if password.is_none() {
        errors.add("password", "This field is required");
    }
    errors.finish(|| (email.unwrap_or_default(), password.unwrap_or_default()))
}

// ---------------------------------------------------------------------------
// Reviews, messages, events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewInput {
    pub rating: Option<i16>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidReview {
    pub rating: i16,
    pub text: Option<String>,
}

pub fn validate_review(input: &ReviewInput) -> Result<ValidReview, FieldErrors> {
    let mut errors = FieldErrors::new();
    let rating = match input.rating {
        None => {
            errors.add("rating", "This field is required");
            0
        }
        Some(r) if !(MIN_REVIEW_RATING..=MAX_REVIEW_RATING).contains(&r) => {
            errors.add(
                "rating",
                format!("Rating must be between {MIN_REVIEW_RATING} and {MAX_REVIEW_RATING}"),
            );
            r
        }
        Some(r) => r,
    };
    errors.finish(|| ValidReview {
        rating,
        text: optional_text(&input.text),
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageInput {
    pub text: Option<String>,
}

/// Validate a chat message body; returns the trimmed text.
pub fn validate_message(input: &MessageInput) -> Result<String, FieldErrors> {
    let mut errors = FieldErrors::new();
    let text = optional_text(&input.text);
    if text.is_none() {
        errors.add("text", "This field is required");
    }
    errors.finish(|| text.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub max_participants: Option<i32>,
    pub category: Option<DbId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEvent {
    pub title: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub max_participants: i32,
    pub category_id: Option<DbId>,
}

/// Validate a new event. `category_ids` are the existing categories.
pub fn validate_event(input: &EventInput, category_ids: &[DbId]) -> Result<ValidEvent, FieldErrors> {
    let mut errors = FieldErrors::new();
    let title = required_name(&mut errors, "title", &input.title);

    let event_date = input.event_date.unwrap_or_else(|| {
        errors.add("event_date", "This field is required");
        NaiveDate::MIN
    });

    let max_participants = input.max_participants.unwrap_or(DEFAULT_MAX_PARTICIPANTS);
    if max_participants < 1 {
        errors.add("max_participants", "Must be at least 1");
    }

    if let Some(id) = input.category {
        if !category_ids.contains(&id) {
            errors.add("category", "Select a valid category; that choice is not available");
        }
    }

    errors.finish(|| ValidEvent {
        title,
        description: optional_text(&input.description),
        event_date,
        event_time: input.event_time,
        location: optional_text(&input.location),
        max_participants,
        category_id: input.category,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
