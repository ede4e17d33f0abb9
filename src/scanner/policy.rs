//! CORS policy evaluation
//!
//! [`CorsPolicy::evaluate`] is a pure mapping from a requested origin and the
//! observed response headers to a [`Verdict`]. It performs no I/O, keeps no
//! state, and has no error path; invalid origins are rejected upstream by the
//! origin set builder.

use crate::models::{MatchMode, Verdict, VerdictKind};
use crate::origins::Origin;
use reqwest::header::HeaderMap;

/// Classifies server CORS behavior for one probed origin
#[derive(Debug, Clone, Copy, Default)]
pub struct CorsPolicy {
    match_mode: MatchMode,
}

impl CorsPolicy {
    pub fn new(match_mode: MatchMode) -> Self {
        Self { match_mode }
    }

    /// Maps the requested origin and response headers to a verdict.
    ///
    /// The checks run in order and the first hit wins: a missing header beats
    /// everything, the wildcard check beats any origin comparison, and a
    /// matching origin beats the null-origin checks. A header that is empty
    /// or not readable as a string counts as missing.
    pub fn evaluate(&self, origin: &Origin, headers: &HeaderMap) -> Verdict {
        let allow_origin = header_value(headers, "access-control-allow-origin");
        let allow_credentials = header_value(headers, "access-control-allow-credentials");

        let (kind, reason) = match allow_origin.as_deref() {
            None => (
                VerdictKind::NoPolicy,
                format!("No Access-Control-Allow-Origin header found for origin: {origin}"),
            ),
            Some("*") => (
                VerdictKind::WildcardVulnerable,
                format!("Wildcard (*) is used for Access-Control-Allow-Origin with Origin: {origin}"),
            ),
            Some(acao) if self.origin_matches(origin, acao) => (
                VerdictKind::CorrectlyConfigured,
                format!("CORS configured correctly for origin: {origin}"),
            ),
            Some(acao) if acao != "null" => (
                VerdictKind::MismatchVulnerable,
                format!(
                    "Access-Control-Allow-Origin is set to {acao} which doesn't match the origin {origin}"
                ),
            ),
            Some(_) if origin.is_null() => (
                VerdictKind::CorrectlyConfigured,
                "CORS configured correctly for origin: null".to_string(),
            ),
            Some(_) => (
                VerdictKind::NullOriginVulnerable,
                "Null origin allowed, but a specific origin was requested.".to_string(),
            ),
        };

        Verdict {
            origin: origin.clone(),
            kind,
            allow_origin,
            allow_credentials,
            reason,
        }
    }

    fn origin_matches(&self, origin: &Origin, allow_origin: &str) -> bool {
        match self.match_mode {
            MatchMode::Contains => allow_origin.contains(origin.as_str()),
            MatchMode::Exact => allow_origin == origin.as_str(),
        }
    }
}

/// Reads a header as a string, treating empty or unreadable values as absent
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
