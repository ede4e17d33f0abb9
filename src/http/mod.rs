//! HTTP client module for the corsair scanner

pub mod client;
pub use client::HttpClient;
