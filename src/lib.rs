//! Doclink: an office-document hyperlink auditor
//!
//! This crate scans a directory tree for word-processing (`.docx`) and
//! presentation (`.pptx`) packages, extracts the hyperlink targets recorded in
//! each document's relationship manifest, probes every target concurrently,
//! and renders the aggregated result as a self-contained HTML report.

pub mod config;
pub mod document;
pub mod extract;
pub mod probe;
pub mod report;
pub mod validate;

use thiserror::Error;

/// Main error type for doclink operations
#[derive(Debug, Error)]
pub enum DoclinkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid manifest pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Errors raised while reading a document container.
///
/// These are always recovered locally: a document whose container cannot be
/// read is reported with zero links rather than aborting the batch.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read container: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed archive: {0}")]
    Archive(#[from] zip::result::ZipError),
}

/// Errors raised while producing the report artifact.
///
/// Unlike extraction and probe failures these are fatal to the run: nothing
/// downstream can proceed without the report file.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render report template: {0}")]
    Template(#[from] tera::Error),
}

/// Result type alias for doclink operations
pub type Result<T> = std::result::Result<T, DoclinkError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for container extraction
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

// Re-export commonly used types
pub use config::Config;
pub use document::{scan_documents, Document, DocumentKind, Hyperlink, LinkStatus};
pub use extract::Matchers;
pub use report::{BrokenLink, Report};
pub use validate::Validator;
