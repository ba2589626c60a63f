use crate::mailer::MailerError;
use crate::monitor::{ListingSource, Notifier};
use crate::scraper::{Listing, ScraperError};
use std::cell::RefCell;
use std::collections::HashSet;

pub fn listing(id: &str) -> Listing {
    Listing {
        id: id.to_string(),
        url: format!("https://streeteasy.com/building/{id}"),
        title: format!("Apartment {id} - 2 beds • 1 bath"),
        price: "$3,000".to_string(),
        address: format!("{id} Main St"),
    }
}

pub fn set(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

/// Canned listing source.
pub struct StaticSource {
    listings: Vec<Listing>,
}

impl StaticSource {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            listings: ids.iter().map(|id| listing(id)).collect(),
        }
    }
}

impl ListingSource for StaticSource {
    fn fetch_listings(&self) -> Result<Vec<Listing>, ScraperError> {
        Ok(self.listings.clone())
    }
}

/// Source whose fetch always fails.
pub struct FailingSource;

impl ListingSource for FailingSource {
    fn fetch_listings(&self) -> Result<Vec<Listing>, ScraperError> {
        Err(ScraperError::Network("connection reset".to_string()))
    }
}

/// Records notified ids; fails for ids listed in `fail_for`.
pub struct RecordingNotifier {
    sent: RefCell<Vec<String>>,
    fail_for: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            fail_for: Vec::new(),
        }
    }

    pub fn failing_for(ids: &[&str]) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            fail_for: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn sent_ids(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, listing: &Listing) -> Result<(), MailerError> {
        if self.fail_for.contains(&listing.id) {
            return Err(MailerError::ApiError("simulated send failure".to_string()));
        }
        self.sent.borrow_mut().push(listing.id.clone());
        Ok(())
    }
}
