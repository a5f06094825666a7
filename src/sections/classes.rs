//! Character class section - checks the classes required by the length band.

use super::SectionResult;
use crate::policy::{Band, Candidate};

/// Checks that the password contains every class its band requires.
///
/// Passwords rejected on length are left to the length section.
///
/// # Returns
/// - `Some(reason)` listing the missing classes
/// - `None` if nothing required is missing
pub fn character_class_section(candidate: &Candidate) -> SectionResult {
    let band = candidate.band();
    if band == Band::TooShort {
        return None;
    }

    let missing: Vec<String> = band
        .missing_classes(&candidate.classes)
        .into_iter()
        .map(|class| class.to_string())
        .collect();

    if !missing.is_empty() {
        return Some(format!(
            "Missing for a {}-character password: {}",
            candidate.len,
            missing.join(", ")
        ));
    }
    None
}
