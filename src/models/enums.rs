//! Closed wire enumerations.
//!
//! Every severity/status/urgency/risk field the backend returns is a closed
//! set. Serde is routed through the exact wire strings so an unrecognized
//! value fails decode instead of slipping through unstyled: the UI maps each
//! member to exactly one visual tone (see `views::badge`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A wire value outside its closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {field} value: {value:?}")]
pub struct UnknownValue {
    pub field: &'static str,
    pub value: String,
}

/// Macro to generate an enum with as_str + FromStr + serde through the
/// wire string form.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member, for exhaustive rendering tables and tests.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(UnknownValue {
                        field: stringify!($name),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

wire_enum!(
    /// How urgently a symptom assessment says care is needed.
    UrgencyLevel {
        Normal => "NORMAL",
        Moderate => "MODERATE",
        Urgent => "URGENT",
    }
);

wire_enum!(
    /// Record-level status and per-finding severity.
    Severity {
        Normal => "NORMAL",
        Monitor => "MONITOR",
        Urgent => "URGENT",
    }
);

wire_enum!(
    /// Where a single test value sits relative to its normal range.
    TestStatus {
        Normal => "NORMAL",
        High => "HIGH",
        Low => "LOW",
    }
);

wire_enum!(
    /// Overall risk of a report explanation.
    RiskLevel {
        Low => "LOW",
        Moderate => "MODERATE",
        High => "HIGH",
    }
);

wire_enum!(
    /// Direction of a tracked test across reports.
    TrendDirection {
        Improving => "IMPROVING",
        Worsening => "WORSENING",
        Stable => "STABLE",
    }
);

wire_enum!(
    /// Dashboard metric movement.
    TrendArrow {
        Up => "up",
        Down => "down",
        Stable => "stable",
    }
);

wire_enum!(
    /// Who authored a chat turn.
    MessageRole {
        User => "user",
        Assistant => "assistant",
    }
);
