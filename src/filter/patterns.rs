//! Sensitive pattern detection.
// Allow expect() on static regex patterns - these are guaranteed to compile
#![allow(clippy::expect_used)]
//!
//! Detects contact information (phone numbers, email addresses) in content.

use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

// Note: These patterns are static and guaranteed to compile, so expect() is safe.
// Digits are spelled `[0-9]` so Arabic-Indic digits never count as phone digits.

/// Gulf-region mobile (optional `965`, leading 5/6/9, seven more digits) or
/// Syria-region number (optional `963`, nine digits).
///
/// Boundaries are ASCII-only: Arabic letters count as non-word characters, so
/// a number written straight after a one-letter prefix such as `و` still
/// matches.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)(?:965)?[569][0-9]{7}(?-u:\b)|(?-u:\b)(?:963)?[0-9]{9}(?-u:\b)")
        .expect("static regex: phone pattern")
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("static regex: email pattern")
});

/// A structural pattern identifying contact data.
///
/// The set is closed and evaluated in the order of [`SensitivePattern::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitivePattern {
    /// Phone number.
    Phone,
    /// Email address.
    Email,
}

impl SensitivePattern {
    /// All patterns, in evaluation order.
    pub const ALL: [Self; 2] = [Self::Phone, Self::Email];

    /// Short machine name (`phone`, `email`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// Label reported in `detected_words` when the pattern matches.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Phone => "رقم هاتف",
            Self::Email => "بريد إلكتروني",
        }
    }

    /// Replacement text for every match of the pattern.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Phone => "[رقم مخفي 🔒]",
            Self::Email => "[إيميل مخفي 🔒]",
        }
    }

    /// Parses a machine name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "phone" => Some(Self::Phone),
            "email" => Some(Self::Email),
            _ => None,
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Self::Phone => &PHONE_REGEX,
            Self::Email => &EMAIL_REGEX,
        }
    }

    /// Checks if content contains the pattern.
    #[must_use]
    pub fn is_match(self, content: &str) -> bool {
        self.regex().is_match(content)
    }

    /// Replaces every match with the placeholder.
    ///
    /// Borrows the input unchanged when nothing matches.
    #[must_use]
    pub fn redact(self, content: &str) -> Cow<'_, str> {
        // NoExpand: placeholders are literal, never capture-group references
        self.regex()
            .replace_all(content, regex::NoExpand(self.placeholder()))
    }
}

impl fmt::Display for SensitivePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
