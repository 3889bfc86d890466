// Scan Target (hostname or address handed to the scanner)

use super::error::{DomainError, Result};

/// Validated scan target
///
/// Always non-empty and never starts with `-`, so it cannot be mistaken
/// for a scanner flag once placed after `-host`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target(String);

impl Target {
    /// Parse and validate a raw target string (surrounding whitespace is trimmed)
    pub fn parse(raw: impl AsRef<str>) -> Result<Self> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(DomainError::EmptyTarget);
        }
        if trimmed.starts_with('-') {
            return Err(DomainError::FlagLikeTarget(trimmed.to_string()));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::WhitespaceInTarget(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
