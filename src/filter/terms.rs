//! Prohibited vocabulary.
//!
//! An ordered, immutable list of disallowed terms, each compiled once into a
//! case-insensitive literal matcher.

use super::SensitivePattern;
use crate::{Error, Result};
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::warn;

/// Terms compiled into the crate, used when no configuration supplies a list.
const BUILTIN_TERMS: &[&str] = &[
    // Arabic
    "غبي",
    "حمار",
    "حيوان",
    "حقير",
    "تافه",
    "وسخ",
    "زبالة",
    "يلعن",
    "كلب",
    "قذر",
    // Latin script
    "stupid",
    "idiot",
    "dumb",
    "shit",
    "fuck",
    "bitch",
    "bastard",
    "damn",
];

static BUILTIN: LazyLock<ProhibitedTermList> =
    LazyLock::new(|| ProhibitedTermList::compile(BUILTIN_TERMS.iter().map(|t| (*t).to_string())));

/// A single prohibited term and its matcher.
#[derive(Debug, Clone)]
struct Term {
    text: String,
    /// `None` when the term could not be compiled; such a term never matches.
    matcher: Option<Regex>,
}

impl Term {
    fn compile(text: String) -> Self {
        let matcher = match RegexBuilder::new(&regex::escape(&text))
            .case_insensitive(true)
            .build()
        {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!(
                    term_len = text.len(),
                    error = %e,
                    "skipping prohibited term that failed to compile"
                );
                None
            },
        };
        Self { text, matcher }
    }

    fn is_match(&self, content: &str) -> bool {
        self.matcher.as_ref().is_some_and(|m| m.is_match(content))
    }

    /// Returns true if the term could match text spanning `replacement` once
    /// it is inserted next to arbitrary text.
    ///
    /// That is the case when the term contains the replacement, or when a
    /// proper prefix of the term ends the replacement, or a proper suffix of
    /// the term starts it.
    fn straddles(&self, replacement: &str) -> bool {
        let term = self.text.to_lowercase();
        let replacement = replacement.to_lowercase();
        if term.contains(&replacement) {
            return true;
        }
        term.char_indices().skip(1).any(|(i, _)| {
            replacement.ends_with(&term[..i]) || replacement.starts_with(&term[i..])
        })
    }
}

/// Ordered set of case-insensitive literal terms.
///
/// Order is significant: matched terms are reported in list order.
#[derive(Debug, Clone)]
pub struct ProhibitedTermList {
    terms: Vec<Term>,
}

impl ProhibitedTermList {
    /// Builds a term list from user-supplied entries.
    ///
    /// Entries are trimmed and case-insensitive duplicates are dropped,
    /// keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTerm`] if an entry is empty after trimming, or
    /// if it could match inside or across the edge of a sensitive-pattern
    /// placeholder (redacted output would then flag itself again).
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted = Vec::new();
        for raw in terms {
            let term = raw.as_ref().trim();
            if term.is_empty() {
                return Err(Error::InvalidTerm {
                    term: raw.as_ref().to_string(),
                    reason: "term is empty".to_string(),
                });
            }
            accepted.push(term.to_string());
        }

        let list = Self::compile(accepted);
        for pattern in SensitivePattern::ALL {
            list.ensure_no_match_in(pattern.placeholder(), "placeholder")?;
        }
        Ok(list)
    }

    /// Returns the built-in term list.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Compiles terms without validation, dropping case-insensitive duplicates.
    fn compile<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .filter(|t| seen.insert(t.to_lowercase()))
            .map(Term::compile)
            .collect();
        Self { terms }
    }

    /// Fails if any term matches inside `replacement` or across its edges.
    ///
    /// `what` names the replacement in the error message.
    pub(crate) fn ensure_no_match_in(&self, replacement: &str, what: &str) -> Result<()> {
        for term in &self.terms {
            if term.is_match(replacement) {
                return Err(Error::InvalidTerm {
                    term: term.text.clone(),
                    reason: format!("term matches inside the {what} '{replacement}'"),
                });
            }
            if term.straddles(replacement) {
                return Err(Error::InvalidTerm {
                    term: term.text.clone(),
                    reason: format!("term overlaps an edge of the {what} '{replacement}'"),
                });
            }
        }
        Ok(())
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the list has no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates terms in list order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.text.as_str())
    }

    /// Iterates terms with a usable matcher, in list order.
    pub(crate) fn matchers(&self) -> impl Iterator<Item = (&str, &Regex)> {
        self.terms
            .iter()
            .filter_map(|t| t.matcher.as_ref().map(|m| (t.text.as_str(), m)))
    }
}

impl Default for ProhibitedTermList {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Parses a newline-separated word list.
///
/// Blank lines and lines starting with `#` are ignored.
#[must_use]
pub fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}
