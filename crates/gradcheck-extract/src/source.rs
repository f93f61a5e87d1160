//! Page sources: turn a transcript file into page texts.
//!
//! Layout-preserving text extraction is delegated to Poppler's `pdftotext
//! -layout`; column alignment in its output is what the line grammar relies
//! on. Text dumps use form feed (`\x0c`) between pages, which is also what
//! `pdftotext` emits.

use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::ExtractError;

pub const PAGE_BREAK: char = '\u{000C}';

/// Split a text dump into pages.
///
/// Blank pages are kept so that a document without a text layer still
/// counts as non-empty. Only the blank tail after a final page break is
/// dropped, since `pdftotext` terminates every page with one.
pub fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split(PAGE_BREAK).map(str::to_string).collect();
    if pages.len() > 1 && pages.last().is_some_and(|last| last.trim().is_empty()) {
        pages.pop();
    }
    pages
}

/// Load the pages of a transcript from a `.pdf` or a text dump.
pub fn load_pages(path: &Path) -> Result<Vec<String>, ExtractError> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        pdftotext(path)?
    } else {
        std::fs::read_to_string(path).map_err(|e| unavailable(path, e.to_string()))?
    };

    let pages = split_pages(&text);
    info!(path = %path.display(), pages = pages.len(), "loaded transcript pages");
    Ok(pages)
}

fn pdftotext(path: &Path) -> Result<String, ExtractError> {
    if !path.exists() {
        return Err(unavailable(path, "file not found".into()));
    }
    let out = Command::new("pdftotext")
        .arg("-layout")
        .arg("-q")
        .arg(path)
        .arg("-")
        .output()
        .map_err(|e| unavailable(path, format!("cannot run pdftotext: {e}")))?;
    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        return Err(unavailable(
            path,
            format!("pdftotext failed: {}", stderr.trim()),
        ));
    }
    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

fn unavailable(path: &Path, reason: String) -> ExtractError {
    ExtractError::SourceUnavailable {
        path: path.to_path_buf(),
        reason,
    }
}
