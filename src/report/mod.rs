//! Report assembly and rendering
//!
//! This module owns the read-only result of a validation run and its two
//! thin output steps:
//! - Rendering the report as a self-contained HTML file
//! - Opening the written file in the user's default viewer

mod html;
mod types;
mod viewer;

pub use html::{render_report, write_report};
pub use types::{BrokenLink, Report};
pub use viewer::open_report;
