//! Candidate Origin values and the rules for accepting them

use crate::error::{CorsairError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Origins probed when the user supplies no override, in probe order
pub const DEFAULT_ORIGINS: &[&str] = &["http://evil.com", "http://localhost", "null"];

/// A request origin to probe with: either the literal `null` or a
/// `scheme://host[:port]` value with an http or https scheme.
///
/// The value is used verbatim as the `Origin` header payload; no
/// normalization happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Origin(String);

impl Origin {
    /// Accepts a candidate origin string, rejecting anything that is not
    /// `null` and does not start with `http://` or `https://`.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value == "null" || value.starts_with("http://") || value.starts_with("https://") {
            Ok(Self(value))
        } else {
            Err(CorsairError::InvalidOrigin(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the `null` sentinel origin
    pub fn is_null(&self) -> bool {
        self.0 == "null"
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the ordered origin set for a scan.
///
/// Falls back to [`DEFAULT_ORIGINS`] when no override is given. Any invalid
/// candidate rejects the whole set, so a scan never runs against a partial
/// origin list. Duplicates are kept and order is preserved.
pub fn build(user_supplied: Option<Vec<String>>) -> Result<Vec<Origin>> {
    match user_supplied {
        Some(values) => values.into_iter().map(Origin::parse).collect(),
        None => Ok(default_set()),
    }
}

/// The default origin set as validated [`Origin`] values
pub fn default_set() -> Vec<Origin> {
    DEFAULT_ORIGINS
        .iter()
        .map(|value| Origin((*value).to_string()))
        .collect()
}
