// src/mailer.rs

use crate::monitor::Notifier;
use crate::scraper::Listing;
use chrono::Local;
use reqwest::blocking::Client;
use serde::Serialize;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum MailerError {
    RequestFailed(String),
    ApiError(String),
}

impl fmt::Display for MailerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailerError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            MailerError::ApiError(msg) => write!(f, "API error: {}", msg),
        }
    }
}

impl Error for MailerError {}

/// Sends one transactional email per new listing through Brevo.
pub struct AlertMailer {
    api_key: String,
    sender_email: String,
    recipients: Vec<String>,
    client: Client,
}

#[derive(Serialize)]
struct BrevoSender<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct BrevoRecipient<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoPayload<'a> {
    sender: BrevoSender<'a>,
    to: Vec<BrevoRecipient<'a>>,
    subject: &'a str,
    html_content: String,
}

impl AlertMailer {
    pub fn new(api_key: String, sender_email: String, recipients: Vec<String>) -> Self {
        Self {
            api_key,
            sender_email,
            recipients,
            client: Client::new(),
        }
    }

    pub fn send_listing_alert(&self, listing: &Listing) -> Result<(), MailerError> {
        let subject = format!("🏠 New StreetEasy Listing: {}", listing.title);
        let html_content = format!(
            r#"
            <h2>New apartment matching your criteria</h2>
            <p>📍 {title}</p>
            <p>💰 {price}</p>
            <p>📍 {address}</p>
            <p><a href="{url}">View the listing</a></p>
            <hr>
            <p>Found at: {found_at}</p>
        "#,
            title = listing.title,
            price = listing.price,
            address = listing.address,
            url = listing.url,
            found_at = Local::now().format("%Y-%m-%d %H:%M:%S"),
        );

        let payload = BrevoPayload {
            sender: BrevoSender {
                name: "StreetEasy Monitor",
                email: &self.sender_email,
            },
            to: self
                .recipients
                .iter()
                .map(|email| BrevoRecipient {
                    email: email.as_str(),
                })
                .collect(),
            subject: subject.as_str(),
            html_content,
        };

        let resp = self
            .client
            .post("https://api.brevo.com/v3/smtp/email")
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let error_body = resp.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MailerError::ApiError(format!(
                "Failed to send alert: {}",
                error_body
            )));
        }

        println!("✅ Email sent to {} recipient(s)", self.recipients.len());

        Ok(())
    }
}

impl Notifier for AlertMailer {
    fn notify(&self, listing: &Listing) -> Result<(), MailerError> {
        self.send_listing_alert(listing)
    }
}
