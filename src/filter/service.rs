//! Content filter service.
//!
//! Scans user-submitted text for prohibited vocabulary and, on request,
//! contact information, producing a redacted copy and a report.

use super::{ProhibitedTermList, SensitivePattern};
use crate::config::FilterConfig;
use crate::{Error, Result};
use regex::NoExpand;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Mask substituted for every prohibited term match.
pub const DEFAULT_MASK: &str = "****";

static GLOBAL: LazyLock<ContentFilterService> = LazyLock::new(ContentFilterService::default);

/// Options for a single filter call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOptions {
    /// Reserved for a mode that marks matches without redacting them.
    ///
    /// Currently has no effect.
    pub mask_only: bool,
    /// Also scan for and redact contact information.
    pub block_sensitive: bool,
}

impl FilterOptions {
    /// Creates default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mask_only: false,
            block_sensitive: false,
        }
    }

    /// Enables contact-information redaction.
    #[must_use]
    pub const fn with_block_sensitive(mut self) -> Self {
        self.block_sensitive = true;
        self
    }

    /// Sets the reserved mask-only flag.
    #[must_use]
    pub const fn with_mask_only(mut self) -> Self {
        self.mask_only = true;
        self
    }
}

/// Outcome category for presenting a warning to the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Nothing was found.
    Clean,
    /// No prohibited terms, but contact information was redacted.
    ContactInfoRedacted,
    /// Prohibited terms were found.
    Flagged,
}

/// Result of filtering a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    /// True iff the prohibited-term pass found nothing.
    ///
    /// Contact-information matches do not affect this flag.
    pub is_clean: bool,
    /// Input with matches replaced by the mask or placeholders.
    pub cleaned_text: String,
    /// Matched terms followed by sensitive-pattern labels, in rule order.
    ///
    /// Each term appears at most once regardless of occurrence count.
    pub detected_words: Vec<String>,
    /// Sensitive patterns that were redacted, in evaluation order.
    pub sensitive_matches: Vec<SensitivePattern>,
}

impl FilterResult {
    fn empty() -> Self {
        Self {
            is_clean: true,
            cleaned_text: String::new(),
            detected_words: Vec::new(),
            sensitive_matches: Vec::new(),
        }
    }

    /// Returns the warning category for this result.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if !self.is_clean {
            Verdict::Flagged
        } else if self.sensitive_matches.is_empty() {
            Verdict::Clean
        } else {
            Verdict::ContactInfoRedacted
        }
    }

    /// Returns true if any contact information was redacted.
    #[must_use]
    pub fn contact_info_redacted(&self) -> bool {
        !self.sensitive_matches.is_empty()
    }
}

/// Filters prohibited vocabulary and contact information from text.
///
/// The term table and mask are fixed at construction, so a single instance
/// can be shared across threads.
#[derive(Debug, Clone)]
pub struct ContentFilterService {
    terms: ProhibitedTermList,
    mask: String,
}

impl ContentFilterService {
    /// Creates a service over the given terms with the default mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTerm`] if a term matches inside the default mask.
    pub fn new(terms: ProhibitedTermList) -> Result<Self> {
        terms.ensure_no_match_in(DEFAULT_MASK, "mask")?;
        Ok(Self {
            terms,
            mask: DEFAULT_MASK.to_string(),
        })
    }

    /// Replaces the mask token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the mask is empty or looks like
    /// contact information, and [`Error::InvalidTerm`] if a term could match
    /// inside it or across its edges.
    pub fn with_mask(mut self, mask: impl Into<String>) -> Result<Self> {
        let mask = mask.into();
        if mask.is_empty() {
            return Err(Error::InvalidInput("mask must not be empty".to_string()));
        }
        if let Some(pattern) = SensitivePattern::ALL.into_iter().find(|p| p.is_match(&mask)) {
            return Err(Error::InvalidInput(format!(
                "mask '{mask}' matches the {pattern} pattern"
            )));
        }
        self.terms.ensure_no_match_in(&mask, "mask")?;
        self.mask = mask;
        Ok(self)
    }

    /// Builds a service from loaded configuration.
    ///
    /// Falls back to the built-in term list when the configuration has none.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured term or the mask is invalid.
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        let terms = match &config.terms {
            Some(terms) => ProhibitedTermList::new(terms)?,
            None => ProhibitedTermList::builtin(),
        };
        Self::new(terms)?.with_mask(config.mask.clone())
    }

    /// Returns the process-wide service built from the built-in term list.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Returns the term list.
    #[must_use]
    pub const fn terms(&self) -> &ProhibitedTermList {
        &self.terms
    }

    /// Returns the mask token.
    #[must_use]
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// Filters `text`.
    ///
    /// Terms are detected against the original input, so inserted masks are
    /// never re-scanned. Sensitive patterns run afterwards over the partially
    /// redacted text, and only when `options.block_sensitive` is set.
    #[instrument(
        skip(self, text),
        fields(text_len = text.len(), block_sensitive = options.block_sensitive)
    )]
    pub fn filter(&self, text: &str, options: FilterOptions) -> FilterResult {
        metrics::counter!("content_filter_calls_total").increment(1);

        if text.is_empty() {
            return FilterResult::empty();
        }

        let mut cleaned_text = text.to_string();
        let mut detected_words = Vec::new();

        for (term, matcher) in self.terms.matchers() {
            if matcher.is_match(text) {
                detected_words.push(term.to_string());
                cleaned_text = matcher
                    .replace_all(&cleaned_text, NoExpand(&self.mask))
                    .into_owned();
            }
        }

        let is_clean = detected_words.is_empty();
        if !is_clean {
            metrics::counter!("content_filter_flagged_total").increment(1);
        }

        let mut sensitive_matches = Vec::new();
        if options.block_sensitive {
            for pattern in SensitivePattern::ALL {
                if pattern.is_match(&cleaned_text) {
                    detected_words.push(pattern.label().to_string());
                    sensitive_matches.push(pattern);
                    cleaned_text = pattern.redact(&cleaned_text).into_owned();
                    metrics::counter!(
                        "content_filter_sensitive_redacted_total",
                        "pattern" => pattern.name()
                    )
                    .increment(1);
                }
            }
        }

        debug!(
            terms_found = detected_words.len() - sensitive_matches.len(),
            sensitive_found = sensitive_matches.len(),
            is_clean,
            "content filtered"
        );

        FilterResult {
            is_clean,
            cleaned_text,
            detected_words,
            sensitive_matches,
        }
    }

    /// Returns true if `text` contains no prohibited term.
    ///
    /// Contact information is not considered.
    #[must_use]
    pub fn is_safe(&self, text: &str) -> bool {
        self.filter(text, FilterOptions::default()).is_clean
    }
}

impl Default for ContentFilterService {
    fn default() -> Self {
        Self {
            terms: ProhibitedTermList::builtin(),
            mask: DEFAULT_MASK.to_string(),
        }
    }
}
