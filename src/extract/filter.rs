//! Link filtering
//!
//! Removes targets that are not worth probing: empty strings, vendor
//! boilerplate, and (by default) mailto links. Order-preserving and
//! deliberately without deduplication: a URL appearing twice in one
//! document is probed twice.

use crate::config::FilterConfig;
use url::Url;

/// Filters a sequence of raw targets down to probe-ready URLs.
///
/// Idempotent: filtering an already-filtered sequence changes nothing.
pub fn filter_targets(targets: Vec<String>, config: &FilterConfig) -> Vec<String> {
    targets
        .into_iter()
        .filter(|target| !target.is_empty())
        .filter(|target| !is_excluded_domain(target, config))
        .filter(|target| !(config.exclude_mailto && is_mailto(target)))
        .collect()
}

/// Returns true if the target contains any configured boilerplate domain
fn is_excluded_domain(target: &str, config: &FilterConfig) -> bool {
    config
        .excluded_domains
        .iter()
        .any(|domain| target.contains(domain.as_str()))
}

/// Returns true if the target parses as a mailto URL.
///
/// Targets that do not parse at all are kept; the prober will classify them
/// as broken, which is the more informative outcome.
fn is_mailto(target: &str) -> bool {
    Url::parse(target)
        .map(|url| url.scheme() == "mailto")
        .unwrap_or(false)
}
