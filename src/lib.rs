//! # Contentguard
//!
//! Moderation filter for user-submitted text in a learning portal.
//!
//! Contentguard masks a fixed vocabulary of prohibited terms (Arabic and
//! Latin script, matched case-insensitively) and, on request, redacts
//! contact information such as phone numbers and email addresses.
//!
//! ## Features
//!
//! - Pure, synchronous filtering with no I/O
//! - Immutable term tables shareable across threads
//! - TOML configuration for term lists and the mask token
//! - Linear-time matching, safe on adversarial input
//!
//! ## Example
//!
//! ```rust
//! use contentguard::{ContentFilterService, FilterOptions};
//!
//! let service = ContentFilterService::global();
//! let result = service.filter(
//!     "راسلني على student@example.com",
//!     FilterOptions::new().with_block_sensitive(),
//! );
//! assert!(result.is_clean);
//! assert_eq!(result.cleaned_text, "راسلني على [إيميل مخفي 🔒]");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod config;
pub mod filter;
pub mod observability;

pub use config::FilterConfig;
pub use filter::{
    ContentFilterService, FilterOptions, FilterResult, ProhibitedTermList, SensitivePattern,
    Verdict,
};

/// Error type for contentguard operations.
///
/// Filtering itself never fails; errors come from building a service or
/// loading configuration.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Empty or contact-like mask, unknown log format |
/// | `InvalidTerm` | Empty term, term matching inside the mask or a placeholder |
/// | `OperationFailed` | Config or word list cannot be read or parsed, logging init fails |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A prohibited term was rejected.
    ///
    /// Raised when:
    /// - The term is empty after trimming
    /// - The term would match inside the mask token or a placeholder, which
    ///   would make already-redacted text flag itself
    #[error("invalid term '{term}': {reason}")]
    InvalidTerm {
        /// The rejected term.
        term: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An operation failed.
    ///
    /// Raised when:
    /// - A config file or word list cannot be read
    /// - TOML parsing fails
    /// - The logging subscriber cannot be installed
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for contentguard operations.
pub type Result<T> = std::result::Result<T, Error>;
