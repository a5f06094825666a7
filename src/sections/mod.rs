//! Policy sections
//!
//! Each section checks one part of the length-tiered policy.

mod classes;
mod length;

pub use classes::character_class_section;
pub use length::length_section;

/// Result type for section functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;
