use std::io::Read;

use anyhow::{Context, Result};
use tracing::info;

use slack_payload::announcer::{ListingAnnouncer, MessageDefaults};
use slack_payload::models::Listing;
use slack_payload::slack::SlackNotifier;

/// Reads a JSON array of listings on stdin and announces them in one Slack
/// message. Without `SLACK_WEBHOOK_URL` the payload is printed instead.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    info!("Starting listing announcer");

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read listings from stdin")?;

    let listings: Vec<Listing> =
        serde_json::from_str(&input).context("stdin is not a JSON array of listings")?;
    info!("Read {} listing(s)", listings.len());

    let notifier = SlackNotifier::new();
    let enabled = notifier.is_enabled();
    let announcer = ListingAnnouncer::new(notifier, MessageDefaults::from_env());

    if enabled {
        let sent = announcer.announce(&listings).await?;
        info!("Announced {} listing(s)", sent);
    } else if let Some(message) = announcer.build_message(&listings)? {
        println!("{}", message.to_json()?);
    } else {
        info!("No listings to announce");
    }

    Ok(())
}
