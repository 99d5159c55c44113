//! Choice enums stored as TEXT columns.
//!
//! Each variant's string value is what lands in the database and what the
//! JSON API accepts and returns. The `CHECK` constraints in the migrations
//! must list exactly these values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $val)]
                #[sqlx(rename = $val)]
                $variant
            ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The stored/serialized string value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $val),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($val => Ok($name::$variant),)+
                    other => Err(format!(
                        "invalid {} '{other}'",
                        stringify!($name)
                    )),
                }
            }
        }
    };
}

define_choice_enum! {
    /// How well a skill is mastered.
    SkillLevel {
        Novice = "novice",
        Intermediate = "intermediate",
        Expert = "expert",
    }
}

define_choice_enum! {
    /// Whether sessions happen online or in person.
    ExchangeFormat {
        Online = "online",
        Offline = "offline",
    }
}

impl Default for ExchangeFormat {
    fn default() -> Self {
        ExchangeFormat::Online
    }
}

define_choice_enum! {
    /// Exchange lifecycle status. New exchanges start `Active`.
    ExchangeStatus {
        Active = "active",
        Completed = "completed",
        Rejected = "rejected",
    }
}

impl ExchangeStatus {
    /// Whether an exchange in `self` may move to `next`.
    ///
    /// Only active exchanges change state, and only to a terminal state.
    pub fn can_transition_to(self, next: ExchangeStatus) -> bool {
        matches!(
            (self, next),
            (ExchangeStatus::Active, ExchangeStatus::Completed)
                | (ExchangeStatus::Active, ExchangeStatus::Rejected)
        )
    }
}

define_choice_enum! {
    /// Event participation status. New participations start `Pending`.
    ParticipationStatus {
        Confirmed = "confirmed",
        Pending = "pending",
        Declined = "declined",
    }
}

define_choice_enum! {
    /// Why a point transaction happened.
    PointReason {
        Training = "training",
        Review = "review",
        PremiumPurchase = "premium_purchase",
        ManualAdjustment = "manual_adjustment",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for level in SkillLevel::ALL {
            assert_eq!(level.as_str().parse::<SkillLevel>(), Ok(*level));
        }
        assert_eq!(
            "premium_purchase".parse::<PointReason>(),
            Ok(PointReason::PremiumPurchase)
        );
    }

    #[test]
    fn rejects_unknown_value() {
        let err = "guru".parse::<SkillLevel>().unwrap_err();
        assert!(err.contains("SkillLevel"));
    }

    #[test]
    fn serializes_to_stored_value() {
        let json = serde_json::to_string(&ExchangeStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let parsed: ExchangeFormat = serde_json::from_str("\"offline\"").unwrap();
        assert_eq!(parsed, ExchangeFormat::Offline);
    }

    #[test]
    fn default_format_is_online() {
        assert_eq!(ExchangeFormat::default(), ExchangeFormat::Online);
    }

    #[test]
    fn only_active_exchanges_transition() {
        assert!(ExchangeStatus::Active.can_transition_to(ExchangeStatus::Completed));
        assert!(ExchangeStatus::Active.can_transition_to(ExchangeStatus::Rejected));
        assert!(!ExchangeStatus::Active.can_transition_to(ExchangeStatus::Active));
        assert!(!ExchangeStatus::Completed.can_transition_to(ExchangeStatus::Rejected));
        assert!(!ExchangeStatus::Rejected.can_transition_to(ExchangeStatus::Completed));
    }
}
