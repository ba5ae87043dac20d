//! Dismissible alert notices shown at the top of a page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "bg-green-50 border-green-200 text-green-800",
            AlertKind::Error => "bg-red-50 border-red-200 text-red-800",
            AlertKind::Warning => "bg-yellow-50 border-yellow-200 text-yellow-800",
            AlertKind::Info => "bg-blue-50 border-blue-200 text-blue-800",
        }
    }
}

/// A notice with its kind; dismissal is the host's concern, the flag just
/// says whether a close affordance should be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: AlertKind,
    pub message: String,
    pub dismissible: bool,
}

impl Notice {
    pub fn success(message: &str) -> Notice {
        Notice {
            kind: AlertKind::Success,
            message: message.to_string(),
            dismissible: true,
        }
    }

    pub fn error(message: &str) -> Notice {
        Notice {
            kind: AlertKind::Error,
            message: message.to_string(),
            dismissible: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_are_dismissible_by_default() {
        let notice = Notice::error("Failed to upload record. Please try again.");
        assert!(notice.dismissible);
        assert_eq!(notice.kind, AlertKind::Error);
    }

    #[test]
    fn kinds_map_to_distinct_styles() {
        let classes: Vec<_> = [
            AlertKind::Success,
            AlertKind::Error,
            AlertKind::Warning,
            AlertKind::Info,
        ]
        .iter()
        .map(|k| k.css_class())
        .collect();
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
