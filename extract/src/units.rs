//! Configurable set of unit tokens, such as currency or percent symbols, that
//! a source table may place in a column of their own.

use serde::{Deserialize, Serialize};

/// Tokens used when no configuration is supplied.
pub const DEFAULT_UNITS: &[&str] = &["$", "%", "bps", "pts"];

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum UnitsError {
    #[error("allowed unit token at index {0} is empty")]
    EmptyToken(usize),
}

/// Literal substrings that mark a cell as a unit fragment rather than a
/// numeric fragment.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AllowedUnits(Vec<String>);

impl AllowedUnits {
    pub fn new<I, S>(tokens: I) -> Result<Self, UnitsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if let Some(index) = tokens.iter().position(String::is_empty) {
            return Err(UnitsError::EmptyToken(index));
        }
        Ok(Self(tokens))
    }

    /// True if any token occurs anywhere in `cell`.
    pub fn contained_in(&self, cell: &str) -> bool {
        self.0.iter().any(|token| cell.contains(token.as_str()))
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }
}

impl Default for AllowedUnits {
    fn default() -> Self {
        Self(DEFAULT_UNITS.iter().map(|s| s.to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for AllowedUnits {
    type Error = UnitsError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AllowedUnits> for Vec<String> {
    fn from(value: AllowedUnits) -> Self {
        value.0
    }
}
