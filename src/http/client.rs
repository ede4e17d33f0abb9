//! HTTP client wrapper with request tracking

use crate::error::Result;
use crate::models::ScanRequest;
use reqwest::{Client, Response};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Thin reqwest wrapper carrying the scan's client settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    request_count: Arc<AtomicU64>,
}

impl HttpClient {
    /// Creates a new HttpClient from the scan request
    pub fn from_request(request: &ScanRequest) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(request.timeout_secs))
            .user_agent(&request.user_agent)
            .redirect(if request.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .danger_accept_invalid_certs(false)
            .build()?;

        Ok(Self {
            client,
            request_count: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Sends a GET request with custom headers
    pub async fn get_with_headers(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<Response> {
        self.request_count.fetch_add(1, Ordering::Relaxed);

        let mut req = self.client.get(url);
        for (key, value) in headers {
            req = req.header(key.as_str(), value.as_str());
        }

        Ok(req.send().await?)
    }

    /// Returns the total number of requests made
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }
}
