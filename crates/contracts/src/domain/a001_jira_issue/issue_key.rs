use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// ID Type
// ============================================================================

/// Jira issue key in `PROJECT-123` form.
///
/// Keys are normalised on parse: surrounding whitespace is dropped and the
/// project part is uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IssueKey(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueKeyError {
    #[error("issue key is empty")]
    Empty,
    #[error("issue key `{0}` has no `-` separator")]
    MissingSeparator(String),
    #[error("issue key `{0}` has an invalid project part")]
    InvalidProject(String),
    #[error("issue key `{0}` has an invalid issue number")]
    InvalidNumber(String),
}

impl IssueKey {
    pub fn parse(raw: &str) -> Result<Self, IssueKeyError> {
        let normalized = raw.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(IssueKeyError::Empty);
        }

        // Project keys never contain `-`, so the last one splits project from number.
        let (project, number) = normalized
            .rsplit_once('-')
            .ok_or_else(|| IssueKeyError::MissingSeparator(normalized.clone()))?;

        let mut chars = project.chars();
        let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_uppercase());
        if !starts_with_letter
            || !chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(IssueKeyError::InvalidProject(normalized));
        }

        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(IssueKeyError::InvalidNumber(normalized));
        }

        Ok(Self(normalized))
    }

    /// Cheap check used by the selector while the user types.
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for IssueKey {
    type Err = IssueKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IssueKey {
    type Error = IssueKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IssueKey> for String {
    fn from(key: IssueKey) -> Self {
        key.0
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes() {
        let key = IssueKey::parse("  proj-42 ").unwrap();
        assert_eq!(key.as_str(), "PROJ-42");
    }

    #[test]
    fn test_project_with_digits_and_underscore() {
        assert!(IssueKey::is_valid("AB_2-7"));
        assert!(IssueKey::is_valid("X1-100"));
    }

    #[test]
    fn test_invalid_keys() {
        assert_eq!(IssueKey::parse("   "), Err(IssueKeyError::Empty));
        assert_eq!(
            IssueKey::parse("PROJ42"),
            Err(IssueKeyError::MissingSeparator("PROJ42".to_string()))
        );
        assert_eq!(
            IssueKey::parse("1PROJ-4"),
            Err(IssueKeyError::InvalidProject("1PROJ-4".to_string()))
        );
        assert_eq!(
            IssueKey::parse("PROJ-"),
            Err(IssueKeyError::InvalidNumber("PROJ-".to_string()))
        );
        assert_eq!(
            IssueKey::parse("PROJ-+4"),
            Err(IssueKeyError::InvalidNumber("PROJ-+4".to_string()))
        );
        assert!(!IssueKey::is_valid("PR OJ-4"));
        assert!(!IssueKey::is_valid("-4"));
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let key: IssueKey = serde_json::from_str("\"abc-1\"").unwrap();
        assert_eq!(key.to_string(), "ABC-1");
        assert!(serde_json::from_str::<IssueKey>("\"abc\"").is_err());
    }
}
