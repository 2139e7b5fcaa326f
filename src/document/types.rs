use serde::Serialize;
use std::path::{Path, PathBuf};

/// The closed set of supported document container kinds.
///
/// Each kind maps a file extension to the internal path pattern of its
/// relationship manifest (see [`crate::extract::Matchers`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentKind {
    /// Word-processing package (`.docx`)
    WordProcessing,
    /// Presentation package (`.pptx`)
    Presentation,
}

impl DocumentKind {
    /// Determines the container kind from a file's extension.
    ///
    /// Returns `None` for anything that is not a supported office package;
    /// the scanner silently skips those entries.
    pub fn from_path(path: &Path) -> Option<DocumentKind> {
        let extension = path.extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "docx" => Some(DocumentKind::WordProcessing),
            "pptx" => Some(DocumentKind::Presentation),
            _ => None,
        }
    }
}

/// Terminal reachability state of a hyperlink.
///
/// Every link starts `Unknown` and is written exactly once by the validation
/// coordinator; it is never re-checked within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkStatus {
    /// Not yet probed
    Unknown,
    /// The target answered within the time budget
    Working,
    /// The target failed to answer (transport error or error status)
    Broken,
}

impl LinkStatus {
    /// Returns true once the link has been probed
    pub fn is_resolved(&self) -> bool {
        !matches!(self, LinkStatus::Unknown)
    }
}

/// A single hyperlink extracted from a document's relationship manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hyperlink {
    /// Target URL as recorded in the manifest
    pub url: String,
    /// Reachability state after probing
    pub status: LinkStatus,
}

impl Hyperlink {
    /// Creates an unprobed hyperlink for the given target
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: LinkStatus::Unknown,
        }
    }
}

/// One discovered office document and its extracted hyperlinks
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Path of the container file, as produced by the traversal
    pub path: PathBuf,
    /// Container kind, determined by extension
    pub kind: DocumentKind,
    /// True iff every hyperlink resolved as working
    pub is_valid: bool,
    /// Hyperlinks in manifest order, already filtered
    pub hyperlinks: Vec<Hyperlink>,
}

impl Document {
    /// Creates a document with the given filtered link targets.
    ///
    /// Documents start out valid; the coordinator recomputes validity after
    /// all of the document's links have resolved.
    pub fn new(path: PathBuf, kind: DocumentKind, targets: Vec<String>) -> Self {
        Self {
            path,
            kind,
            is_valid: true,
            hyperlinks: targets.into_iter().map(Hyperlink::new).collect(),
        }
    }

    /// Returns the broken hyperlinks of this document, in manifest order
    pub fn broken_links(&self) -> impl Iterator<Item = &Hyperlink> {
        self.hyperlinks
            .iter()
            .filter(|link| link.status == LinkStatus::Broken)
    }
}
