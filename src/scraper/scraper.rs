// scraper.rs
use crate::monitor::ListingSource;
use crate::scraper::Listing;
use crate::scraper::ScraperError;
use chrono::Local;
use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONNECTION, UPGRADE_INSECURE_REQUESTS, USER_AGENT};
use reqwest::StatusCode;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use url::Url;

const BASE_URL: &str = "https://streeteasy.com";

/// Cards considered per fetch. The search sorts newest first, so the head
/// of the page covers everything that can have appeared between runs.
const MAX_CARDS: usize = 20;

const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0",
];

pub struct StreetEasyScraper {
    client: Client,
    search_url: String,
}

impl StreetEasyScraper {
    pub fn new(search_url: String) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client, search_url })
    }

    pub fn fetch_html(&self) -> Result<String, ScraperError> {
        // Brief random pause so the fetch cadence looks less mechanical.
        let delay_ms = rand::thread_rng().gen_range(1000..=3000);
        std::thread::sleep(Duration::from_millis(delay_ms));

        let user_agent = USER_AGENTS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(USER_AGENTS[0]);

        let resp = self
            .client
            .get(&self.search_url)
            .header(USER_AGENT, user_agent)
            .header(
                ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
            )
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(CONNECTION, "keep-alive")
            .header(UPGRADE_INSECURE_REQUESTS, "1")
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ScraperError::Blocked(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(ScraperError::Network(format!("HTTP {status}")));
        }

        resp.text().map_err(|e| ScraperError::Network(e.to_string()))
    }
}

impl ListingSource for StreetEasyScraper {
    fn fetch_listings(&self) -> Result<Vec<Listing>, ScraperError> {
        println!(
            "[{}] Checking StreetEasy for new listings...",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        let html = self.fetch_html()?;
        let listings = parse_listings(&html)?;

        println!("Found {} listings", listings.len());
        Ok(listings)
    }
}

/// Extract listings from a search results page. Pure over the document
/// text so fixtures can exercise it offline.
pub fn parse_listings(html: &str) -> Result<Vec<Listing>, ScraperError> {
    let document = Html::parse_document(html);

    let card_sel = sel(r#"div[data-testid="listing-card"]"#)?;
    let fallback_card_sel = sel(r#"div[class*="ListingCard-module__cardContainer"]"#)?;
    let tag_text_sel = sel(r#"span[data-testid="tag-text"]"#)?;
    let sponsored_sel = sel(r#"p[class*="ImageContainerFooter-module__sponsoredTag"]"#)?;
    let address_sel = sel(r#"a[class*="ListingDescription-module__addressTextAction"]"#)?;
    let building_link_sel = sel(r#"a[href*="/building/"]"#)?;
    let price_sel = sel(r#"span[class*="PriceInfo-module__price"]"#)?;
    let title_sel = sel(r#"p[class*="ListingDescription-module__title"]"#)?;
    let beds_baths_sel = sel(r#"span[class*="BedsBathsSqft-module__text"]"#)?;

    let mut cards: Vec<ElementRef> = document.select(&card_sel).collect();
    if cards.is_empty() {
        cards = document.select(&fallback_card_sel).collect();
    }

    let mut listings = Vec::new();

    for card in cards.into_iter().take(MAX_CARDS) {
        // Featured and sponsored cards resurface old inventory; skip them.
        let featured = card
            .select(&tag_text_sel)
            .any(|tag| element_text(&tag) == "Featured");
        if featured || card.select(&sponsored_sel).next().is_some() {
            continue;
        }

        let link = match card
            .select(&address_sel)
            .next()
            .or_else(|| card.select(&building_link_sel).next())
        {
            Some(link) => link,
            None => continue,
        };

        let href = match link.value().attr("href") {
            Some(href) => href,
            None => continue,
        };

        let url = match absolutize(href) {
            Some(url) => url,
            None => continue,
        };

        let address = element_text(&link);

        let price = card
            .select(&price_sel)
            .next()
            .map(|e| element_text(&e))
            .unwrap_or_else(|| "Price not found".to_string());

        let title = card
            .select(&title_sel)
            .next()
            .map(|e| element_text(&e))
            .unwrap_or_else(|| address.clone());

        let beds_baths: Vec<String> = card
            .select(&beds_baths_sel)
            .map(|e| element_text(&e))
            .collect();

        let title = if beds_baths.is_empty() {
            title
        } else {
            format!("{} - {}", title, beds_baths.join(" • "))
        };

        listings.push(Listing {
            id: url.clone(),
            url,
            title,
            price,
            address,
        });
    }

    Ok(listings)
}

fn sel(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::HtmlParse(e.to_string()))
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Listing hrefs come through relative on some card variants.
fn absolutize(href: &str) -> Option<String> {
    if href.starts_with("http") {
        return Some(href.to_string());
    }

    Url::parse(BASE_URL)
        .ok()?
        .join(href)
        .ok()
        .map(|u| u.to_string())
}
