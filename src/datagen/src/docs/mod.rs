//! Business documentation rendered as PDFs next to the raw data.

pub mod content;
pub mod pdf;

use std::fs;
use std::path::PathBuf;

use common::layout::Layout;
use tracing::debug;

use crate::error::Result;

/// Writes every document into the documentation directory and returns the paths in
/// render order.
pub fn generate_documents(layout: &Layout) -> Result<Vec<PathBuf>> {
    let dir = layout.documentation_dir();
    fs::create_dir_all(&dir)?;

    let mut paths = Vec::new();
    for document in content::documents() {
        let path = dir.join(document.file_name);
        let pages = pdf::render(&document, &path)?;
        debug!("{} rendered, {} pages", path.display(), pages);
        paths.push(path);
    }

    Ok(paths)
}
