//! Length section - rejects passwords below the minimum length.

use super::SectionResult;
use crate::policy::{Band, Candidate, MIN_LENGTH};

/// Checks if the password meets the minimum length.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(candidate: &Candidate) -> SectionResult {
    if candidate.band() == Band::TooShort {
        return Some(format!(
            "Password must be at least {} characters",
            MIN_LENGTH
        ));
    }
    None
}
