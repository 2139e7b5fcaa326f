//! Hyperlink extraction from document containers
//!
//! This module contains the pieces that turn a container file into a list of
//! probe-ready URLs:
//! - compiled manifest/hyperlink patterns ([`Matchers`])
//! - the zip-container reader ([`extract_targets`])
//! - the link filter ([`filter_targets`])

mod extractor;
mod filter;
mod matchers;

pub use extractor::extract_targets;
pub use filter::filter_targets;
pub use matchers::Matchers;
