//! Password validator - applies the length-tiered policy.

use secrecy::{ExposeSecret, SecretSlice, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::Candidate;
use crate::sections::{SectionResult, character_class_section, length_section};
use crate::verdict::Verdict;

/// Returns `true` if the password satisfies the policy for its length.
///
/// Length is counted in bytes and every byte outside `[A-Za-z0-9]` counts
/// as a symbol. Never panics, for any input.
///
/// ```
/// assert!(pwd_policy::is_valid("jdfKd&1a"));
/// assert!(!pwd_policy::is_valid("jdfKd&ca"));
/// assert!(pwd_policy::is_valid("a".repeat(20)));
/// ```
pub fn is_valid<P: AsRef<[u8]>>(password: P) -> bool {
    Candidate::scan(password.as_ref()).is_accepted()
}

/// Validates a password and reports why it was rejected.
///
/// # Arguments
/// * `password` - The password to validate
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `Verdict` with the length band, the outcome and any reasons.
pub fn validate_password(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Verdict {
    #[cfg(not(feature = "async"))]
    let token = ();
    run_sections(password.expose_secret().as_bytes(), token)
}

/// Same as [`validate_password`] for candidates that may not be UTF-8.
pub fn validate_password_bytes(
    password: &SecretSlice<u8>,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Verdict {
    #[cfg(not(feature = "async"))]
    let token = ();
    run_sections(password.expose_secret(), token)
}

#[cfg(feature = "async")]
type Token = Option<CancellationToken>;

#[cfg(not(feature = "async"))]
type Token = ();

fn run_sections(pwd: &[u8], token: Token) -> Verdict {
    let candidate = Candidate::scan(pwd);
    let band = candidate.band();
    let mut reasons = Vec::new();

    #[cfg(not(feature = "async"))]
    let _ = token;

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&Candidate) -> SectionResult); 2] = [
        ("length", length_section),
        ("classes", character_class_section),
    ];

    for (section_name, section_fn) in sections {
        // Check cancellation before each section (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Validation cancelled before section: {}", section_name);
                    return Verdict::cancelled(band, reasons);
                }
            }
        }

        if let Some(reason) = section_fn(&candidate) {
            #[cfg(feature = "tracing")]
            tracing::debug!(section = section_name, %band, "Password rejected: {}", reason);
            #[cfg(not(feature = "tracing"))]
            let _ = section_name;
            reasons.push(reason);
        }
    }

    Verdict::completed(band, reasons)
}

/// Validates a password and sends the verdict over `tx`.
///
/// A closed receiver is logged and otherwise ignored.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Verdict>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("validation is about to start...");

    let verdict = validate_password(password, Some(token));

    if let Err(e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password verdict: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
