// src/config.rs

use std::env;

/// Default StreetEasy search: selected Manhattan/Brooklyn areas, up to
/// $4,700/month, 2+ beds, newest first.
pub const STREETEASY_URL: &str =
    "https://streeteasy.com/for-rent/nyc/price:-4700%7Carea:102,119,136,141%7Cbeds%3E=2?sort_by=listed_desc";

pub const SEEN_LISTINGS_FILE: &str = "seen_listings.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub search_url: String,
    pub seen_file: String,
    pub email: Option<EmailConfig>,
}

/// Sender identity, sender credential (the mail API key), and the alert
/// recipients. All three env vars must be present for email alerts.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub from: String,
    pub password: String,
    pub recipients: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// built-in defaults. A `.env` file is honored when present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let search_url = env::var("SEARCH_URL").unwrap_or_else(|_| STREETEASY_URL.to_string());
        let seen_file =
            env::var("SEEN_LISTINGS_FILE").unwrap_or_else(|_| SEEN_LISTINGS_FILE.to_string());

        let email = match (
            env::var("EMAIL_FROM"),
            env::var("EMAIL_PASSWORD"),
            env::var("EMAIL_TO"),
        ) {
            (Ok(from), Ok(password), Ok(to)) => {
                let recipients = parse_recipients(&to);
                if recipients.is_empty() {
                    None
                } else {
                    Some(EmailConfig {
                        from,
                        password,
                        recipients,
                    })
                }
            }
            _ => None,
        };

        Self {
            search_url,
            seen_file,
            email,
        }
    }
}

/// EMAIL_TO accepts several addresses separated by commas or semicolons.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.replace(';', ",")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
