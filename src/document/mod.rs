//! Document model and discovery
//!
//! This module defines the document data model (document, hyperlink, link
//! status) and the scanner that walks a directory tree looking for supported
//! office packages.

mod scanner;
mod types;

pub use scanner::scan_documents;
pub use types::{Document, DocumentKind, Hyperlink, LinkStatus};
