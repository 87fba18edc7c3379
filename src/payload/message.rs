use serde::Serialize;

use super::Attachment;
use crate::error::ValidationError;

/// The complete webhook payload.
///
/// `text` is always present, even when the attachments carry the content.
/// Unset overrides are left out of the JSON so the webhook falls back to its
/// configured defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<Attachment>,
}

impl Message {
    /// A message with only `text` set.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        Self::builder(text).build()
    }

    /// Starts a message with the required top-level text.
    pub fn builder(text: impl Into<String>) -> MessageBuilder {
        MessageBuilder {
            text: text.into(),
            username: None,
            icon_emoji: None,
            channel: None,
            attachments: Vec::new(),
        }
    }

    /// Wire JSON for the webhook request body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn icon_emoji(&self) -> Option<&str> {
        self.icon_emoji.as_deref()
    }

    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }
}

/// Serializes `message` to the webhook's JSON body.
pub fn serialize(message: &Message) -> Result<String, serde_json::Error> {
    message.to_json()
}

/// Collects message options; the text is checked in [`MessageBuilder::build`].
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    text: String,
    username: Option<String>,
    icon_emoji: Option<String>,
    channel: Option<String>,
    attachments: Vec<Attachment>,
}

impl MessageBuilder {
    /// Overrides the webhook's bot name.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Emoji code such as `:bell:` used as the avatar.
    #[must_use]
    pub fn icon_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(emoji.into());
        self
    }

    /// Target channel (`#name`) or user (`@name`).
    #[must_use]
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Appends one attachment after those already added.
    #[must_use]
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Appends `attachments` in iteration order.
    #[must_use]
    pub fn attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments.extend(attachments);
        self
    }

    /// Fails with [`ValidationError::EmptyText`] when the text is empty.
    pub fn build(self) -> Result<Message, ValidationError> {
        if self.text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        Ok(Message {
            text: self.text,
            username: self.username,
            icon_emoji: self.icon_emoji,
            channel: self.channel,
            attachments: self.attachments,
        })
    }
}
