use anyhow::Result;
use tracing::{info, warn};

use crate::error::ValidationError;
use crate::models::Listing;
use crate::payload::{Message, MessageBuilder};
use crate::traits::Notifier;

/// Top-level overrides applied to every announcement. `None` leaves the
/// webhook's own default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDefaults {
    pub username: Option<String>,
    pub icon_emoji: Option<String>,
    pub channel: Option<String>,
}

impl MessageDefaults {
    /// Reads `SLACK_USERNAME`, `SLACK_ICON_EMOJI` and `SLACK_CHANNEL`.
    pub fn from_env() -> Self {
        Self {
            username: std::env::var("SLACK_USERNAME").ok(),
            icon_emoji: std::env::var("SLACK_ICON_EMOJI").ok(),
            channel: std::env::var("SLACK_CHANNEL").ok(),
        }
    }

    fn apply(&self, mut builder: MessageBuilder) -> MessageBuilder {
        if let Some(username) = &self.username {
            builder = builder.username(username);
        }
        if let Some(icon_emoji) = &self.icon_emoji {
            builder = builder.icon_emoji(icon_emoji);
        }
        if let Some(channel) = &self.channel {
            builder = builder.channel(channel);
        }
        builder
    }
}

/// Turns batches of listings into one message each and hands it to a
/// [`Notifier`].
#[derive(Clone)]
pub struct ListingAnnouncer<N> {
    notifier: N,
    defaults: MessageDefaults,
}

impl<N: Notifier> ListingAnnouncer<N> {
    pub fn new(notifier: N, defaults: MessageDefaults) -> Self {
        Self { notifier, defaults }
    }

    /// One attachment per listing, in feed order. Returns `None` for an empty
    /// batch.
    pub fn build_message(&self, listings: &[Listing]) -> Result<Option<Message>, ValidationError> {
        if listings.is_empty() {
            return Ok(None);
        }

        let attachments = listings
            .iter()
            .map(Listing::to_attachment)
            .collect::<Result<Vec<_>, _>>()?;

        let text = match listings.len() {
            1 => "Found 1 new listing".to_string(),
            n => format!("Found {n} new listings"),
        };

        let message = self
            .defaults
            .apply(Message::builder(text))
            .attachments(attachments)
            .build()?;

        Ok(Some(message))
    }

    /// Builds and sends the announcement, returning how many listings it
    /// covered.
    pub async fn announce(&self, listings: &[Listing]) -> Result<usize> {
        let Some(message) = self.build_message(listings)? else {
            info!("No new listings found");
            return Ok(0);
        };

        for listing in listings {
            info!("New listing: {} - {}", listing.title, listing.price);
        }

        if let Err(e) = self.notifier.notify(&message).await {
            warn!("Announcement for {} listing(s) failed", listings.len());
            return Err(e);
        }

        Ok(listings.len())
    }
}
