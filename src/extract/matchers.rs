use crate::document::DocumentKind;
use crate::ConfigError;
use regex::Regex;

/// Internal manifest path pattern for word-processing packages
const WORD_MANIFEST_PATTERN: &str = r"^word/_rels/document\.xml\.rels$";

/// Internal manifest path pattern for presentation packages (one entry per slide)
const PRESENTATION_MANIFEST_PATTERN: &str = r"^ppt/slides/_rels/.*\.xml\.rels$";

/// Matches one hyperlink relationship record and captures its target
/// attribute. The capture cannot cross the closing quote and may be empty;
/// empty targets are captured as empty strings and left to the filter.
const HYPERLINK_RECORD_PATTERN: &str = r#"Type="http://schemas\.openxmlformats\.org/officeDocument/2006/relationships/hyperlink" Target="(?P<url>[^"]*)""#;

/// Immutable set of compiled patterns used by extraction.
///
/// Built once at startup and passed explicitly into the scanner and the
/// extractor; there is no global matcher registry.
#[derive(Debug)]
pub struct Matchers {
    word_manifest: Regex,
    presentation_manifest: Regex,
    hyperlink_record: Regex,
}

impl Matchers {
    /// Compiles the full pattern set.
    ///
    /// The patterns are fixed, so a failure here means the binary itself is
    /// wrong; it is still surfaced as a [`ConfigError`] rather than a panic.
    pub fn compile() -> Result<Matchers, ConfigError> {
        Ok(Matchers {
            word_manifest: Regex::new(WORD_MANIFEST_PATTERN)?,
            presentation_manifest: Regex::new(PRESENTATION_MANIFEST_PATTERN)?,
            hyperlink_record: Regex::new(HYPERLINK_RECORD_PATTERN)?,
        })
    }

    /// Returns the manifest path pattern for the given container kind
    pub fn manifest(&self, kind: DocumentKind) -> &Regex {
        match kind {
            DocumentKind::WordProcessing => &self.word_manifest,
            DocumentKind::Presentation => &self.presentation_manifest,
        }
    }

    /// Captures every hyperlink target in the given manifest content,
    /// in document order
    pub fn capture_targets(&self, content: &str) -> Vec<String> {
        self.hyperlink_record
            .captures_iter(content)
            .map(|capture| capture["url"].to_string())
            .collect()
    }
}
