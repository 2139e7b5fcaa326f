//! Reachability probing
//!
//! This module handles the single outbound HTTP call made for every
//! hyperlink, including:
//! - Building the shared HTTP client from the probe configuration
//! - Issuing one bounded GET per link, with no retries
//! - Classifying transport errors and HTTP statuses into Working/Broken

mod prober;

pub use prober::{build_http_client, probe_url};
