//! Policy table - length bands and character class detection.

use std::fmt;

/// Shortest length that can be accepted at all.
pub const MIN_LENGTH: usize = 8;
/// Below this length a symbol is required.
pub const SYMBOL_REQUIRED_BELOW: usize = 12;
/// Below this length a digit is required.
pub const DIGIT_REQUIRED_BELOW: usize = 16;
/// Below this length mixed case is required. At or above it anything goes.
pub const MIXED_CASE_REQUIRED_BELOW: usize = 20;

/// A character class recognised by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    /// Anything outside `[A-Za-z0-9]`, including whitespace and non-ASCII bytes.
    Symbol,
}

impl CharClass {
    /// Classifies a single byte.
    pub fn of(byte: u8) -> Self {
        match byte {
            b'a'..=b'z' => CharClass::Lowercase,
            b'A'..=b'Z' => CharClass::Uppercase,
            b'0'..=b'9' => CharClass::Digit,
            _ => CharClass::Symbol,
        }
    }

    fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "numbers",
            CharClass::Symbol => "special characters",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presence flags for the four classes, collected in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl CharClasses {
    pub fn scan(password: &[u8]) -> Self {
        let mut classes = CharClasses::default();
        for &byte in password {
            match CharClass::of(byte) {
                CharClass::Lowercase => classes.has_lower = true,
                CharClass::Uppercase => classes.has_upper = true,
                CharClass::Digit => classes.has_digit = true,
                CharClass::Symbol => classes.has_symbol = true,
            }
        }
        classes
    }

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.has_lower,
            CharClass::Uppercase => self.has_upper,
            CharClass::Digit => self.has_digit,
            CharClass::Symbol => self.has_symbol,
        }
    }
}

/// Length range with a fixed set of requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    /// Shorter than [`MIN_LENGTH`]; never accepted.
    TooShort,
    /// 8..12: mixed case, digit and symbol.
    Short,
    /// 12..16: mixed case and digit.
    Medium,
    /// 16..20: mixed case.
    Long,
    /// 20 and up: no class requirement.
    Passphrase,
}

impl Band {
    pub fn for_length(len: usize) -> Self {
        if len < MIN_LENGTH {
            Band::TooShort
        } else if len < SYMBOL_REQUIRED_BELOW {
            Band::Short
        } else if len < DIGIT_REQUIRED_BELOW {
            Band::Medium
        } else if len < MIXED_CASE_REQUIRED_BELOW {
            Band::Long
        } else {
            Band::Passphrase
        }
    }

    /// Classes a password in this band must contain.
    ///
    /// Requirements accumulate as the band gets shorter. `TooShort` returns
    /// nothing since it is rejected on length alone.
    pub fn required_classes(self) -> &'static [CharClass] {
        use CharClass::*;
        match self {
            Band::TooShort | Band::Passphrase => &[],
            Band::Short => &[Lowercase, Uppercase, Digit, Symbol],
            Band::Medium => &[Lowercase, Uppercase, Digit],
            Band::Long => &[Lowercase, Uppercase],
        }
    }

    /// Required classes that `classes` does not contain, in table order.
    pub fn missing_classes(self, classes: &CharClasses) -> Vec<CharClass> {
        self.required_classes()
            .iter()
            .copied()
            .filter(|&class| !classes.contains(class))
            .collect()
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Band::TooShort => "too-short",
            Band::Short => "short",
            Band::Medium => "medium",
            Band::Long => "long",
            Band::Passphrase => "passphrase",
        };
        f.write_str(name)
    }
}

/// A scanned candidate: its length plus the classes it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub len: usize,
    pub classes: CharClasses,
}

impl Candidate {
    pub fn scan(password: &[u8]) -> Self {
        Self {
            len: password.len(),
            classes: CharClasses::scan(password),
        }
    }

    pub fn band(&self) -> Band {
        Band::for_length(self.len)
    }

    /// Applies the policy table.
    pub fn is_accepted(&self) -> bool {
        match self.band() {
            Band::TooShort => false,
            band => band.missing_classes(&self.classes).is_empty(),
        }
    }
}
