use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no course records matched in {lines} lines across {pages} pages")]
    NoRecordsMatched { pages: usize, lines: usize },

    #[error("page source unavailable: {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },
}
