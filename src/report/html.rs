//! HTML rendering of the validation report

use crate::report::types::Report;
use crate::ReportError;
use std::path::Path;
use tera::{Context, Tera};

/// The report template, embedded so the binary is self-contained
const REPORT_TEMPLATE: &str = include_str!("report.html.tera");

/// Renders the report as a self-contained HTML page
///
/// # Arguments
///
/// * `report` - The assembled validation report
///
/// # Returns
///
/// * `Ok(String)` - The rendered HTML
/// * `Err(ReportError)` - The template failed to render
pub fn render_report(report: &Report) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("report.html", REPORT_TEMPLATE)?;
    let context = Context::from_serialize(report)?;
    Ok(tera.render("report.html", &context)?)
}

/// Renders the report and writes it to the given path.
///
/// A failure here is fatal to the run: the report file is the whole point of
/// the program, so the error propagates instead of being absorbed.
pub fn write_report(report: &Report, path: &Path) -> Result<(), ReportError> {
    let html = render_report(report)?;
    std::fs::write(path, html)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, DocumentKind, LinkStatus};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_report() -> Report {
        let mut doc = Document::new(
            PathBuf::from("docs/handbook.docx"),
            DocumentKind::WordProcessing,
            vec![
                "https://example.com/alive".to_string(),
                "https://example.com/dead".to_string(),
            ],
        );
        doc.hyperlinks[0].status = LinkStatus::Working;
        doc.hyperlinks[1].status = LinkStatus::Broken;
        doc.is_valid = false;

        Report::assemble(vec![PathBuf::from(".")], vec![doc])
    }

    /// Tera autoescapes HTML templates, so slashes in paths and URLs render
    /// as `&#x2F;` entities (browsers decode them in both text and href)
    fn escaped(s: &str) -> String {
        s.replace('/', "&#x2F;")
    }

    #[test]
    fn test_render_contains_documents_and_links() {
        let html = render_report(&sample_report()).unwrap();

        assert!(html.contains(&escaped("docs/handbook.docx")));
        assert!(html.contains(&escaped("https://example.com/alive")));
        assert!(html.contains(&escaped("https://example.com/dead")));
        assert!(html.contains("Broken links"));
    }

    #[test]
    fn test_render_escapes_markup_in_targets() {
        let mut doc = Document::new(
            PathBuf::from("evil.docx"),
            DocumentKind::WordProcessing,
            vec!["https://example.com/<script>alert(1)</script>".to_string()],
        );
        doc.hyperlinks[0].status = LinkStatus::Broken;
        doc.is_valid = false;
        let report = Report::assemble(vec![PathBuf::from(".")], vec![doc]);

        let html = render_report(&report).unwrap();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_valid_banner_for_empty_batch() {
        let report = Report::assemble(vec![PathBuf::from(".")], vec![]);
        let html = render_report(&report).unwrap();

        assert!(html.contains("All documents valid"));
        assert!(!html.contains("Broken links found"));
    }

    #[test]
    fn test_write_report_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.html");

        write_report(&sample_report(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_write_report_fails_on_unwritable_path() {
        let result = write_report(&sample_report(), Path::new("/nonexistent/dir/report.html"));
        assert!(matches!(result, Err(ReportError::Io(_))));
    }
}
