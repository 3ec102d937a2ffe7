//! Plaintext validation and normalization.

use core::fmt;

/// A validated message: non-empty, ASCII uppercase A–Z only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plaintext(String);

impl Plaintext {
    /// Validate a raw input line and uppercase it.
    ///
    /// The empty check looks at the trimmed input; the letters-only check
    /// looks at the full raw string, so surrounding spaces are rejected as
    /// non-letters rather than silently dropped.
    pub fn parse(raw: &str) -> Result<Plaintext, PlaintextError> {
        if raw.trim().is_empty() {
            return Err(PlaintextError::Empty);
        }
        if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PlaintextError::NonAlpha);
        }
        Ok(Plaintext(raw.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a parsed plaintext.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Plaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a plaintext line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaintextError {
    /// Empty or whitespace-only input.
    Empty,
    /// A character outside ASCII A–Z / a–z.
    NonAlpha,
}

impl fmt::Display for PlaintextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Plaintext cannot be empty."),
            Self::NonAlpha => {
                write!(f, "Plaintext must contain letters only (A-Z, a-z).")
            }
        }
    }
}

impl std::error::Error for PlaintextError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_mixed_input() {
        let pt = Plaintext::parse("HelloWorld").unwrap();
        assert_eq!(pt.as_str(), "HELLOWORLD");
        assert_eq!(pt.len(), 10);
    }

    #[test]
    fn already_uppercase_is_untouched() {
        assert_eq!(Plaintext::parse("ATTACK").unwrap().as_str(), "ATTACK");
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(Plaintext::parse(""), Err(PlaintextError::Empty));
        assert_eq!(Plaintext::parse("   "), Err(PlaintextError::Empty));
        assert_eq!(Plaintext::parse("\t"), Err(PlaintextError::Empty));
    }

    #[test]
    fn digits_rejected() {
        assert_eq!(Plaintext::parse("abc123"), Err(PlaintextError::NonAlpha));
    }

    #[test]
    fn punctuation_and_interior_spaces_rejected() {
        assert_eq!(Plaintext::parse("HELLO WORLD"), Err(PlaintextError::NonAlpha));
        assert_eq!(Plaintext::parse("HELLO!"), Err(PlaintextError::NonAlpha));
    }

    #[test]
    fn surrounding_spaces_rejected_not_trimmed() {
        // The letters-only check sees the raw string, spaces included.
        assert_eq!(Plaintext::parse(" HELLO "), Err(PlaintextError::NonAlpha));
    }

    #[test]
    fn non_ascii_letters_rejected() {
        assert_eq!(Plaintext::parse("ÜBER"), Err(PlaintextError::NonAlpha));
    }

    #[test]
    fn error_messages_match_session_wording() {
        assert_eq!(PlaintextError::Empty.to_string(), "Plaintext cannot be empty.");
        assert_eq!(
            PlaintextError::NonAlpha.to_string(),
            "Plaintext must contain letters only (A-Z, a-z)."
        );
    }
}
