//! Probe driver: one HTTP exchange per candidate origin

pub mod policy;

pub use policy::CorsPolicy;

use crate::error::{CorsairError, Result};
use crate::http::HttpClient;
use crate::models::{ProbeOutcome, ScanReport, ScanRequest, TransportFailure, Verdict};
use crate::origins::Origin;
use crate::report::{render_outcome, Reporter};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Drives one probe per origin and collects outcomes in origin order
pub struct ScanEngine {
    policy: CorsPolicy,
}

impl ScanEngine {
    pub fn new(policy: CorsPolicy) -> Self {
        Self { policy }
    }

    /// Runs the scan described by `request`, reporting through `reporter`.
    ///
    /// One origin's failure never aborts the scan: it is recorded as a
    /// transport failure and the remaining origins still run. The returned
    /// report holds exactly one outcome per origin, in origin order.
    pub async fn run(&self, request: &ScanRequest, reporter: &dyn Reporter) -> Result<ScanReport> {
        let client = HttpClient::from_request(request)?;
        let mut report = ScanReport::new(&request.target);

        reporter.info(&format!("Scanning URL: {}", request.target));

        let outcomes = if request.concurrency > 1 {
            self.run_concurrent(&client, request, reporter).await
        } else {
            self.run_sequential(&client, request, reporter).await
        };

        report.outcomes = outcomes;
        report.total_requests = client.request_count();
        report.finish();

        Ok(report)
    }

    /// Sequential execution: each origin completes and is reported before
    /// the next request starts.
    async fn run_sequential(
        &self,
        client: &HttpClient,
        request: &ScanRequest,
        reporter: &dyn Reporter,
    ) -> Vec<ProbeOutcome> {
        let mut outcomes = Vec::with_capacity(request.origins.len());

        for origin in &request.origins {
            let outcome = probe(client, &self.policy, &request.target, origin).await;
            render_outcome(&outcome, reporter);
            outcomes.push(outcome);
        }

        outcomes
    }

    /// Concurrent execution through a bounded worker pool. Results are
    /// index-tagged and reported only after origin order is restored, so the
    /// output never interleaves.
    async fn run_concurrent(
        &self,
        client: &HttpClient,
        request: &ScanRequest,
        reporter: &dyn Reporter,
    ) -> Vec<ProbeOutcome> {
        let limit = Arc::new(Semaphore::new(request.concurrency));
        let mut set = JoinSet::new();

        for (index, origin) in request.origins.iter().enumerate() {
            let client = client.clone();
            let policy = self.policy;
            let target = request.target.clone();
            let origin = origin.clone();
            let limit = Arc::clone(&limit);

            set.spawn(async move {
                let outcome = match limit.acquire_owned().await {
                    Ok(_permit) => probe(&client, &policy, &target, &origin).await,
                    Err(_) => ProbeOutcome {
                        origin: origin.clone(),
                        result: Err(TransportFailure {
                            status: None,
                            message: "probe pool closed before this origin ran".to_string(),
                        }),
                    },
                };
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<ProbeOutcome>> = vec![None; request.origins.len()];
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((index, outcome)) => slots[index] = Some(outcome),
                Err(e) => reporter.error(&format!("Probe task failed: {e}")),
            }
        }

        let outcomes: Vec<ProbeOutcome> = slots.into_iter().flatten().collect();
        for outcome in &outcomes {
            render_outcome(outcome, reporter);
        }

        outcomes
    }
}

/// Issues one GET with the candidate origin and classifies the response
async fn probe(
    client: &HttpClient,
    policy: &CorsPolicy,
    target: &str,
    origin: &Origin,
) -> ProbeOutcome {
    let result = probe_inner(client, policy, target, origin)
        .await
        .map_err(failure_from);

    ProbeOutcome {
        origin: origin.clone(),
        result,
    }
}

async fn probe_inner(
    client: &HttpClient,
    policy: &CorsPolicy,
    target: &str,
    origin: &Origin,
) -> Result<Verdict> {
    let headers = vec![("Origin".to_string(), origin.as_str().to_string())];
    let response = client.get_with_headers(target, &headers).await?;

    // Anything outside 2xx/3xx is a failed exchange, not a policy to evaluate.
    let status = response.status();
    if !(status.is_success() || status.is_redirection()) {
        return Err(CorsairError::UnexpectedStatus {
            status: status.as_u16(),
        });
    }

    Ok(policy.evaluate(origin, response.headers()))
}

fn failure_from(err: CorsairError) -> TransportFailure {
    let status = match &err {
        CorsairError::UnexpectedStatus { status } => Some(*status),
        CorsairError::HttpError(e) => e.status().map(|s| s.as_u16()),
        _ => None,
    };

    TransportFailure {
        status,
        message: err.to_string(),
    }
}
