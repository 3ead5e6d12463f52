//! Content filtering.
//!
//! Prohibited-term masking and contact-information redaction for
//! user-submitted text.
//!
//! # Example
//!
//! ```rust
//! use contentguard::filter::{ContentFilterService, FilterOptions};
//!
//! let service = ContentFilterService::global();
//! let result = service.filter("you are STUPID", FilterOptions::default());
//! assert!(!result.is_clean);
//! assert_eq!(result.cleaned_text, "you are ****");
//! ```

mod patterns;
mod service;
mod terms;

pub use patterns::SensitivePattern;
pub use service::{ContentFilterService, DEFAULT_MASK, FilterOptions, FilterResult, Verdict};
pub use terms::{ProhibitedTermList, parse_word_list};
