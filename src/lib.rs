//! Corsair - CORS misconfiguration scanner
//!
//! Probes a target URL with a set of candidate `Origin` header values and
//! classifies the server's `Access-Control-Allow-Origin` behavior into a
//! per-origin security verdict: wildcard policies, mismatched or reflected
//! origins, and null-origin grants.

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod origins;
pub mod report;
pub mod scanner;
