//! Core data models for the corsair scanner

use crate::origins::{self, Origin};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// How the requested origin is compared against the ACAO header value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// The ACAO value only has to contain the requested origin as a
    /// substring. This is the historical check and the default; it accepts
    /// values such as `http://evil.com.attacker.com` for `http://evil.com`.
    #[default]
    Contains,
    /// The ACAO value must equal the requested origin exactly
    Exact,
}

/// Output verbosity for the console reporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Verbosity {
    /// Errors and vulnerability warnings only
    Errors,
    /// Errors plus basic per-origin information
    Info,
    /// Everything, including missing-policy notices
    Debug,
}

impl Verbosity {
    /// Maps the CLI's numeric levels (0, 1, 2) onto the enum
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Errors,
            1 => Verbosity::Info,
            _ => Verbosity::Debug,
        }
    }
}

/// Classification of one (origin, response) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerdictKind {
    /// No Access-Control-Allow-Origin header in the response
    NoPolicy,
    /// The server answers `*` regardless of the origin sent
    WildcardVulnerable,
    /// The allowed origin matches the requested one
    CorrectlyConfigured,
    /// The server allows an origin other than the requested one
    MismatchVulnerable,
    /// The server grants the `null` origin while a specific origin was sent
    NullOriginVulnerable,
}

impl VerdictKind {
    /// True for the categories reported as potential vulnerabilities
    pub fn is_vulnerable(&self) -> bool {
        matches!(
            self,
            VerdictKind::WildcardVulnerable
                | VerdictKind::MismatchVulnerable
                | VerdictKind::NullOriginVulnerable
        )
    }

    /// Short human-readable label for summaries
    pub fn label(&self) -> &'static str {
        match self {
            VerdictKind::NoPolicy => "No Policy",
            VerdictKind::WildcardVulnerable => "Wildcard",
            VerdictKind::CorrectlyConfigured => "Correctly Configured",
            VerdictKind::MismatchVulnerable => "Origin Mismatch",
            VerdictKind::NullOriginVulnerable => "Null Origin Allowed",
        }
    }
}

/// The evaluator's verdict for a single probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// The origin that was sent with the request
    pub origin: Origin,
    pub kind: VerdictKind,
    /// Observed Access-Control-Allow-Origin value, if any
    pub allow_origin: Option<String>,
    /// Observed Access-Control-Allow-Credentials value, if any
    pub allow_credentials: Option<String>,
    /// Human-readable explanation of the classification
    pub reason: String,
}

/// A network-level failure for one origin's probe.
///
/// Includes non-2xx/3xx HTTP statuses; those responses are never evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportFailure {
    pub status: Option<u16>,
    pub message: String,
}

impl std::fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of probing one origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeOutcome {
    pub origin: Origin,
    pub result: std::result::Result<Verdict, TransportFailure>,
}

/// Configuration for one scan run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    /// Target URL to scan
    pub target: String,
    /// Ordered origin set to probe with
    pub origins: Vec<Origin>,
    /// User-Agent header value
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Whether to follow HTTP redirects
    pub follow_redirects: bool,
    pub verbosity: Verbosity,
    /// Number of origins probed at once; 1 keeps the sequential behavior
    pub concurrency: usize,
    pub match_mode: MatchMode,
}

impl Default for ScanRequest {
    fn default() -> Self {
        Self {
            target: String::new(),
            origins: origins::default_set(),
            user_agent: "vuln-CORS-Misconfiguration-Scanner/1.0".to_string(),
            timeout_secs: 10,
            follow_redirects: false,
            verbosity: Verbosity::Info,
            concurrency: 1,
            match_mode: MatchMode::Contains,
        }
    }
}

/// Result of a complete scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Target URL
    pub target: String,
    /// Unique scan identifier
    pub scan_id: String,
    /// Scan start time (local timezone)
    pub started_at: DateTime<Local>,
    /// Scan end time (local timezone)
    pub finished_at: Option<DateTime<Local>>,
    /// One outcome per probed origin, in origin order
    pub outcomes: Vec<ProbeOutcome>,
    /// Total HTTP requests made
    pub total_requests: u64,
}

impl ScanReport {
    /// Creates a new ScanReport with a generated scan id
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            scan_id: uuid::Uuid::new_v4().to_string(),
            started_at: Local::now(),
            finished_at: None,
            outcomes: Vec::new(),
            total_requests: 0,
        }
    }

    /// Marks the scan as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Local::now());
    }

    /// Returns the number of verdicts of the given kind
    pub fn count_by_kind(&self, kind: VerdictKind) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(v) if v.kind == kind))
            .count()
    }

    /// Returns the number of origins whose probe failed at the transport layer
    pub fn transport_failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Returns the number of verdicts flagged as potential vulnerabilities
    pub fn vulnerable_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(v) if v.kind.is_vulnerable()))
            .count()
    }
}
