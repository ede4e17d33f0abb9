//! Configuration management for the corsair scanner

use crate::error::{CorsairError, Result};
use crate::models::{MatchMode, ScanRequest, Verbosity};
use crate::origins;
use serde::Deserialize;
use std::path::Path;
use url::Url;

/// File-based configuration structure
#[derive(Debug, Deserialize)]
struct FileConfig {
    scan: Option<ScanSection>,
    origins: Option<OriginsSection>,
}

#[derive(Debug, Deserialize)]
struct ScanSection {
    user_agent: Option<String>,
    timeout_secs: Option<u64>,
    follow_redirects: Option<bool>,
    verbosity: Option<u8>,
    concurrency: Option<usize>,
    exact_origin_match: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct OriginsSection {
    test: Option<Vec<String>>,
}

/// Loads configuration from a TOML file and merges it over the defaults
pub fn load_config(path: &Path) -> Result<ScanRequest> {
    let content = std::fs::read_to_string(path).map_err(CorsairError::IoError)?;
    let file_config: FileConfig = toml::from_str(&content)?;

    let mut request = ScanRequest::default();

    if let Some(scan) = file_config.scan {
        if let Some(ua) = scan.user_agent {
            request.user_agent = ua;
        }
        if let Some(timeout) = scan.timeout_secs {
            request.timeout_secs = timeout;
        }
        if let Some(follow) = scan.follow_redirects {
            request.follow_redirects = follow;
        }
        if let Some(level) = scan.verbosity {
            request.verbosity = Verbosity::from_level(level);
        }
        if let Some(limit) = scan.concurrency {
            request.concurrency = limit.max(1);
        }
        if scan.exact_origin_match == Some(true) {
            request.match_mode = MatchMode::Exact;
        }
    }

    if let Some(section) = file_config.origins {
        if let Some(values) = section.test {
            request.origins = origins::build(Some(values))?;
        }
    }

    Ok(request)
}

/// Merges CLI arguments into an existing ScanRequest.
///
/// Fails before any network activity when the target URL or any supplied
/// origin is invalid.
#[allow(clippy::too_many_arguments)]
pub fn merge_cli_args(
    request: &mut ScanRequest,
    target: String,
    origins_override: Option<Vec<String>>,
    user_agent: Option<String>,
    timeout: Option<u64>,
    allow_redirects: bool,
    verbosity: Option<u8>,
    concurrency: Option<usize>,
    exact_origin_match: bool,
) -> Result<()> {
    request.target = validate_target(target)?;

    if let Some(values) = origins_override {
        request.origins = origins::build(Some(values))?;
    }
    if let Some(ua) = user_agent {
        request.user_agent = ua;
    }
    if let Some(t) = timeout {
        request.timeout_secs = t;
    }
    if allow_redirects {
        request.follow_redirects = true;
    }
    if let Some(level) = verbosity {
        request.verbosity = Verbosity::from_level(level);
    }
    if let Some(limit) = concurrency {
        request.concurrency = limit.max(1);
    }
    if exact_origin_match {
        request.match_mode = MatchMode::Exact;
    }

    Ok(())
}

/// Checks that the target parses with a scheme and host, returning it verbatim
pub fn validate_target(target: String) -> Result<String> {
    let parsed = Url::parse(&target).map_err(|_| CorsairError::InvalidTarget(target.clone()))?;
    if !parsed.has_host() {
        return Err(CorsairError::InvalidTarget(target));
    }
    Ok(target)
}
