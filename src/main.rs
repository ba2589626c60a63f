use crate::config::Config;
use crate::mailer::AlertMailer;
use crate::monitor::{Monitor, Notifier};
use crate::scraper::StreetEasyScraper;
use crate::store::JsonFileStore;
use chrono::Local;

mod config;
mod errors;
mod mailer;
mod monitor;
mod scraper;
mod store;

#[cfg(test)]
mod tests;

fn main() {
    let config = Config::from_env();

    println!("🏠 StreetEasy Monitor Starting...");
    println!("Monitoring: {}", config.search_url);

    let scraper = match StreetEasyScraper::new(config.search_url.clone()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("❌ Scraper init failed: {e}");
            std::process::exit(1);
        }
    };

    let store = JsonFileStore::new(config.seen_file.clone());

    let mailer = config.email.as_ref().map(|email| {
        AlertMailer::new(
            email.password.clone(),
            email.from.clone(),
            email.recipients.clone(),
        )
    });
    if mailer.is_none() {
        println!("Email credentials not configured. Alerts will be logged only.");
    }

    let monitor = Monitor::new(
        &scraper,
        mailer.as_ref().map(|m| m as &dyn Notifier),
        &store,
    );

    match monitor.run() {
        Ok(_) => {
            println!(
                "✅ Check completed at {}",
                Local::now().format("%Y-%m-%d %H:%M:%S")
            );
        }
        Err(e) => {
            eprintln!("❌ Monitor run failed: {e}");
            std::process::exit(1);
        }
    }
}
