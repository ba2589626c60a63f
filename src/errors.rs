// errors.rs
use crate::scraper::ScraperError;
use crate::store::StoreError;
use std::fmt;

/// Errors that end a monitor run. Surfaced as a non-zero exit so the
/// surrounding automation skips the commit/push steps.
#[derive(Debug)]
pub enum MonitorError {
    Scraper(ScraperError),
    Store(StoreError),
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::Scraper(e) => write!(f, "Scrape failed: {e}"),
            MonitorError::Store(e) => write!(f, "Seen-listings store failed: {e}"),
        }
    }
}

impl std::error::Error for MonitorError {}
