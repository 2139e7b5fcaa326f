//! Opening the written report in the user's default viewer

use std::path::Path;

/// Opens the report file with the platform's default handler.
///
/// A viewer failure is a non-fatal condition: the report file already exists,
/// so the run still succeeded. The failure is logged and otherwise ignored.
pub fn open_report(path: &Path) {
    match open::that(path) {
        Ok(()) => tracing::info!("Opened {} in the default viewer", path.display()),
        Err(e) => tracing::warn!("Could not open {} in a viewer: {}", path.display(), e),
    }
}
