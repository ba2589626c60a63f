mod models;
mod scraper;
mod scraper_error;

pub use models::Listing;
pub use scraper_error::ScraperError;
pub use self::scraper::{parse_listings, StreetEasyScraper};
