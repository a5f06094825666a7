//! Length-tiered password policy
//!
//! This library decides whether a candidate password is acceptable. The
//! longer the password, the fewer character classes it needs:
//!
//! | Length  | Required classes                          |
//! |---------|-------------------------------------------|
//! | < 8     | rejected                                  |
//! | 8..12   | lowercase, uppercase, digit and symbol    |
//! | 12..16  | lowercase, uppercase and digit            |
//! | 16..20  | lowercase and uppercase                   |
//! | >= 20   | none                                      |
//!
//! Length is counted in bytes. A symbol is any byte outside `[A-Za-z0-9]`.
//!
//! # Features
//!
//! - `async` (default): Enables async validation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the `pwd-policy` binary
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{is_valid, validate_password};
//! use secrecy::SecretString;
//!
//! assert!(is_valid("jdfKd&1a"));
//!
//! let password = SecretString::new("jdfKd&ca".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let verdict = validate_password(&password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let verdict = validate_password(&password);
//!
//! assert!(!verdict.is_accepted());
//! println!("Reasons: {:?}", verdict.reasons);
//! ```

// Internal modules
mod input;
mod policy;
mod sections;
mod validator;
mod verdict;

// Public API
pub use input::{InputError, read_candidates, read_candidates_from_path};
pub use policy::{Band, CharClass, CharClasses, MIN_LENGTH};
pub use validator::{is_valid, validate_password, validate_password_bytes};
pub use verdict::{Outcome, Verdict};

#[cfg(feature = "async")]
pub use validator::validate_password_tx;
