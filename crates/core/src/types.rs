use std::fmt;

use serde::{Serialize, Serializer};

/// All database primary keys are SQLite INTEGER PRIMARY KEY (64-bit).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A user rating between 0.00 and 5.00, held as whole hundredths.
///
/// Stored as an INTEGER column so values round-trip exactly. Serialized as
/// a two-decimal string (`"4.25"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, sqlx::Type)]
#[sqlx(transparent)]
pub struct Rating(i32);

impl Rating {
    pub const MAX_HUNDREDTHS: i32 = 500;

    /// `None` outside `0..=500`.
    pub fn from_hundredths(hundredths: i32) -> Option<Self> {
        (0..=Self::MAX_HUNDREDTHS)
            .contains(&hundredths)
            .then_some(Rating(hundredths))
    }

    pub fn hundredths(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
