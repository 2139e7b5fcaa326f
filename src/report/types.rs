use crate::document::Document;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One broken link, denormalized for report convenience.
///
/// Carries the owning document's path as plain data; the link itself stays
/// owned by its document.
#[derive(Debug, Clone, Serialize)]
pub struct BrokenLink {
    pub document: PathBuf,
    pub url: String,
}

/// The aggregated, read-only result of one full validation run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Generation timestamp, local time
    pub generated_at: String,
    /// Scanned root directories, rendered as absolute paths
    pub directories: Vec<PathBuf>,
    /// All scanned documents with final link states, in scan order
    pub documents: Vec<Document>,
    /// Every broken link, in document-then-link order
    pub broken_links: Vec<BrokenLink>,
    /// True iff no document has a broken link
    pub all_valid: bool,
}

impl Report {
    /// Assembles the report from fully validated documents.
    ///
    /// Called exactly once per run, after the whole-batch barrier; the result
    /// is read-only from then on.
    pub fn assemble(directories: Vec<PathBuf>, documents: Vec<Document>) -> Report {
        let broken_links: Vec<BrokenLink> = documents
            .iter()
            .flat_map(|document| {
                document.broken_links().map(|link| BrokenLink {
                    document: document.path.clone(),
                    url: link.url.clone(),
                })
            })
            .collect();

        let all_valid = documents.iter().all(|document| document.is_valid);

        Report {
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            directories: directories.iter().map(|d| absolute_path(d)).collect(),
            documents,
            broken_links,
            all_valid,
        }
    }
}

/// Returns the absolute form of a path, falling back to the original when it
/// cannot be resolved
fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
