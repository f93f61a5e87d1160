//! Transcript extraction: line grammar, page scanning, page sources.

mod error;
pub mod grammar;
pub mod scanner;
pub mod source;

pub use error::ExtractError;
pub use scanner::{PageScanner, Transcript, scan_pages, scan_text_pages};
