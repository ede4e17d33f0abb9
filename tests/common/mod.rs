//! Common test utilities

use corsair::models::{ScanRequest, Verbosity};

/// Creates a test ScanRequest pointing at a wiremock server
pub fn test_request(target: &str) -> ScanRequest {
    ScanRequest {
        target: target.to_string(),
        timeout_secs: 10,
        verbosity: Verbosity::Debug,
        ..ScanRequest::default()
    }
}
