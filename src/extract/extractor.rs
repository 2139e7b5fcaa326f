//! Zip-container reading and manifest extraction

use crate::document::DocumentKind;
use crate::extract::matchers::Matchers;
use crate::ExtractResult;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use zip::ZipArchive;

/// Extracts raw hyperlink targets from an office document.
///
/// Opens the container, reads the content of every internal entry whose path
/// matches the kind's manifest pattern (a presentation carries one manifest
/// per slide), and captures the hyperlink relationship targets in document
/// order. A container with no matching manifest entry yields an empty list;
/// that is a normal document without links, not an error.
///
/// The archive handle is dropped when this function returns, on every path.
///
/// # Arguments
///
/// * `path` - Path of the container file
/// * `kind` - Container kind, selects the manifest pattern
/// * `matchers` - Compiled pattern set
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Raw targets, unfiltered, in document order
/// * `Err(ExtractError)` - The container or a manifest entry was unreadable
pub fn extract_targets(
    path: &Path,
    kind: DocumentKind,
    matchers: &Matchers,
) -> ExtractResult<Vec<String>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let manifest = matchers.manifest(kind);
    let mut content = String::new();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if manifest.is_match(entry.name()) {
            entry.read_to_string(&mut content)?;
        }
    }

    Ok(matchers.capture_targets(&content))
}
