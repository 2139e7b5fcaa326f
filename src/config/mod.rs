//! Configuration module for doclink
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. When no file is given, compiled-in defaults apply;
//! command-line flags override either.
//!
//! # Example
//!
//! ```no_run
//! use doclink::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("doclink.toml")).unwrap();
//! println!("Probe timeout: {}s", config.probe.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FilterConfig, ProbeConfig, ReportConfig, ScanConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default};

// Re-export validation entry point
pub use validation::validate;
