//! Secret detection for environment variable checks.
//!
//! Variables that look like credentials are never echoed back in check
//! output; only their length is reported.
//!
//! # Example
//!
//! ```
//! use preflight::secrets::SecretMatcher;
//!
//! let matcher = SecretMatcher::with_builtins();
//! assert!(matcher.is_secret("OA_OPENAI_KEY"));
//! assert!(!matcher.is_secret("STARDEW_APP_PATH"));
//! ```

pub mod pattern;

pub use pattern::{describe_secret, SecretMatcher, SecretPattern, BUILTIN_PATTERNS};
