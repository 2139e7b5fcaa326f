//! Directory traversal and document discovery
//!
//! The scanner walks a root path recursively, picks up every file whose
//! extension matches a supported container kind, and runs extraction and
//! filtering on each hit. Traversal and extraction failures are logged and
//! recovered locally so that a single bad entry never aborts the scan.

use crate::config::FilterConfig;
use crate::document::types::{Document, DocumentKind};
use crate::extract::{extract_targets, filter_targets, Matchers};
use std::path::Path;
use walkdir::WalkDir;

/// Scans a directory tree for supported office documents.
///
/// Every discovered document comes back with its hyperlink targets already
/// extracted and filtered, in traversal order. A document whose container
/// cannot be read is kept in the result with zero links; the condition is
/// logged so it does not pass silently.
///
/// # Arguments
///
/// * `root` - Directory to walk recursively
/// * `matchers` - Compiled manifest and hyperlink patterns
/// * `filter` - Link filter policy
pub fn scan_documents(root: &Path, matchers: &Matchers, filter: &FilterConfig) -> Vec<Document> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let kind = match DocumentKind::from_path(entry.path()) {
            Some(kind) => kind,
            None => continue,
        };

        let targets = match extract_targets(entry.path(), kind, matchers) {
            Ok(targets) => filter_targets(targets, filter),
            Err(e) => {
                tracing::warn!(
                    "Could not extract links from {}: {} (reporting it with zero links)",
                    entry.path().display(),
                    e
                );
                Vec::new()
            }
        };

        tracing::debug!(
            "Found {} with {} links after filtering",
            entry.path().display(),
            targets.len()
        );

        documents.push(Document::new(entry.path().to_path_buf(), kind, targets));
    }

    documents
}
