// listing card
//  ├── a[class*="ListingDescription-module__addressTextAction"] → url, address
//  ├── p[class*="ListingDescription-module__title"]             → title
//  ├── span[class*="PriceInfo-module__price"]                   → price
//  └── span[class*="BedsBathsSqft-module__text"] (repeated)     → beds/baths

/// One rental listing as scraped from a search results page.
///
/// `id` is the canonical absolute listing URL, which is stable and unique
/// across fetches; the remaining fields only feed alert content.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub url: String,
    pub title: String,
    pub price: String,
    pub address: String,
}
