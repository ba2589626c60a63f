// src/monitor.rs

use crate::errors::MonitorError;
use crate::mailer::MailerError;
use crate::scraper::{Listing, ScraperError};
use crate::store::SeenStore;
use std::collections::HashSet;

/// Where current listings come from. Production uses the StreetEasy
/// scraper; tests substitute a canned source.
pub trait ListingSource {
    fn fetch_listings(&self) -> Result<Vec<Listing>, ScraperError>;
}

/// Delivery channel for new-listing alerts.
pub trait Notifier {
    fn notify(&self, listing: &Listing) -> Result<(), MailerError>;
}

/// Counters from one monitor cycle.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub fetched: usize,
    pub new_found: usize,
    pub notified: usize,
    pub notify_failed: usize,
}

pub struct Monitor<'a> {
    source: &'a dyn ListingSource,
    notifier: Option<&'a dyn Notifier>,
    store: &'a dyn SeenStore,
}

impl<'a> Monitor<'a> {
    pub fn new(
        source: &'a dyn ListingSource,
        notifier: Option<&'a dyn Notifier>,
        store: &'a dyn SeenStore,
    ) -> Self {
        Self {
            source,
            notifier,
            store,
        }
    }

    /// One full cycle: load seen-set, fetch, diff, alert, persist.
    ///
    /// A listing only becomes seen once its alert went out, so a failed
    /// send is retried on the next scheduled run. Without a notifier the
    /// alert is the log line itself and the listing is marked seen.
    pub fn run(&self) -> Result<RunSummary, MonitorError> {
        let seen = self.store.load().map_err(MonitorError::Store)?;
        println!("Previously seen listings: {}", seen.len());

        let fetched = self
            .source
            .fetch_listings()
            .map_err(MonitorError::Scraper)?;

        let mut summary = RunSummary {
            fetched: fetched.len(),
            ..RunSummary::default()
        };

        if fetched.is_empty() {
            eprintln!("⚠️ No listings found. Check if the scraper needs updating.");
            return Ok(summary);
        }

        // Source order, deduped within the fetch itself.
        let mut in_fetch = HashSet::new();
        let new_listings: Vec<&Listing> = fetched
            .iter()
            .filter(|l| in_fetch.insert(l.id.clone()))
            .filter(|l| !seen.contains(&l.id))
            .collect();

        summary.new_found = new_listings.len();

        if new_listings.is_empty() {
            println!("📭 No new listings found.");
            return Ok(summary);
        }

        println!("🎉 Found {} new listing(s)!", new_listings.len());

        let mut updated = seen.clone();
        for listing in &new_listings {
            println!("  • {} - {}", listing.title, listing.price);

            match self.notifier {
                Some(notifier) => match notifier.notify(listing) {
                    Ok(()) => {
                        updated.insert(listing.id.clone());
                        summary.notified += 1;
                    }
                    Err(e) => {
                        // Left unseen so the alert is retried next run.
                        eprintln!("⚠️ Alert for {} failed: {e}", listing.url);
                        summary.notify_failed += 1;
                    }
                },
                None => {
                    updated.insert(listing.id.clone());
                }
            }
        }

        if updated != seen {
            self.store.save(&updated).map_err(MonitorError::Store)?;
        }

        Ok(summary)
    }
}
