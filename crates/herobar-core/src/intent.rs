//! Keyword-driven visitor-intent classifier.

use serde::{Deserialize, Serialize};

/// Visitor urgency category driving which copy variant is shown.
///
/// `Off` disables the hero and sticky bar for the page entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Emergency,
    SameDay,
    Planned,
    Off,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Emergency => write!(f, "emergency"),
            Intent::SameDay => write!(f, "same_day"),
            Intent::Planned => write!(f, "planned"),
            Intent::Off => write!(f, "off"),
        }
    }
}

impl Intent {
    /// Parse an explicit intent token.
    ///
    /// Trims and lowercases the input; `same-day` is accepted as a
    /// historical spelling of `same_day`. Unknown tokens return `None` so
    /// callers fall through to the keyword scan.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "emergency" => Some(Intent::Emergency),
            "same_day" | "same-day" => Some(Intent::SameDay),
            "planned" => Some(Intent::Planned),
            "off" => Some(Intent::Off),
            _ => None,
        }
    }
}

/// Terms signalling an active emergency. Checked first; any match wins.
pub const EMERGENCY_TERMS: &[&str] = &[
    "locked-out",
    "lockout",
    "lock-out",
    "emergency",
    "24-hour",
    "burglary",
    "break-in",
    "boarding-up",
    "lost-keys",
    "snapped-key",
    "key-extraction",
    "gain-entry",
    "upvc-repair",
];

/// Terms signalling a same-day (but not emergency) job.
pub const SAME_DAY_TERMS: &[&str] = &["same-day", "today", "urgent", "fast", "quick", "rapid"];

/// Terms signalling planned or quoted work. Checked last.
pub const PLANNED_TERMS: &[&str] = &[
    "lock-change",
    "lock-replacement",
    "install",
    "installation",
    "upgrade",
    "smart-lock",
    "rekey",
    "key-cut",
    "quote",
    "price",
    "cost",
    "survey",
];

/// Classify a page view into an [`Intent`].
///
/// An explicit override that parses to a valid intent is returned directly
/// (including `off`). Otherwise the request path and page title are scanned
/// against the three keyword sets in fixed priority order: emergency, then
/// same-day, then planned. Within a set any match suffices; order across
/// sets is what matters.
///
/// Inputs with no keyword match default to `Emergency`.
///
/// Total over its inputs; calling twice on identical input yields the same
/// result.
#[must_use]
pub fn classify(path: &str, title: &str, explicit: Option<&str>) -> Intent {
    if let Some(intent) = explicit.and_then(Intent::parse) {
        return intent;
    }

    let haystack = normalize(path, title);

    if EMERGENCY_TERMS.iter().any(|t| haystack.contains(t)) {
        return Intent::Emergency;
    }
    if SAME_DAY_TERMS.iter().any(|t| haystack.contains(t)) {
        return Intent::SameDay;
    }
    if PLANNED_TERMS.iter().any(|t| haystack.contains(t)) {
        return Intent::Planned;
    }

    Intent::Emergency
}

/// Build the match haystack from path and title.
///
/// Lowercases both and maps whitespace and underscores to hyphens so the
/// hyphenated term lists match URL slugs and human titles alike.
fn normalize(path: &str, title: &str) -> String {
    let mut haystack = String::with_capacity(path.len() + title.len() + 1);
    haystack.push_str(path);
    haystack.push(' ');
    haystack.push_str(title);

    haystack
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_whitespace() || c == '_' {
                '-'
            } else {
                c
            }
        })
        .collect()
}
