//! Attachments: the colored content blocks under a message.
//!
//! An [`Attachment`] is assembled from already-built [`Field`]s, [`Action`]s
//! and an optional [`Footer`] through [`AttachmentBuilder`]. The builder
//! checks the color and every URL option once, in [`AttachmentBuilder::build`];
//! children are trusted as they were validated when constructed.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::validate;
use super::{Action, Field, Footer};
use crate::error::ValidationError;
use crate::traits::ToFields;

/// Color of the bar drawn along the attachment's left edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Good,
    Warning,
    Danger,
    /// `#RGB` or `#RRGGBB`, kept as written.
    Hex(String),
}

impl Color {
    /// Wire form: the keyword, or the hex string as written.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Hex(hex) => hex,
        }
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(Self::Good),
            "warning" => Ok(Self::Warning),
            "danger" => Ok(Self::Danger),
            hex if validate::is_hex_color(hex) => Ok(Self::Hex(hex.to_string())),
            other => Err(ValidationError::InvalidColor(other.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A rich content block attached to a message.
///
/// Field order matches the wire layout; unset options and empty lists are
/// left out of the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pretext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title_link: Option<String>,
    #[serde(rename = "text", skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<Field>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    actions: Vec<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumb_url: Option<String>,
    #[serde(flatten)]
    footer: Option<Footer>,
}

impl Attachment {
    /// Starts an attachment with every option unset.
    pub fn builder() -> AttachmentBuilder {
        AttachmentBuilder::default()
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn footer(&self) -> Option<&Footer> {
        self.footer.as_ref()
    }
}

/// Collects attachment options; nothing is checked until [`build`].
///
/// [`build`]: AttachmentBuilder::build
#[derive(Debug, Clone, Default)]
pub struct AttachmentBuilder {
    color: Option<String>,
    pretext: Option<String>,
    author_name: Option<String>,
    author_link: Option<String>,
    author_icon: Option<String>,
    title: Option<String>,
    title_link: Option<String>,
    body: Option<String>,
    fields: Vec<Field>,
    actions: Vec<Action>,
    image_url: Option<String>,
    thumb_url: Option<String>,
    footer: Option<Footer>,
}

impl AttachmentBuilder {
    /// `good`, `warning`, `danger`, or a `#RGB`/`#RRGGBB` hex string.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn pretext(mut self, pretext: impl Into<String>) -> Self {
        self.pretext = Some(pretext.into());
        self
    }

    #[must_use]
    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn author_link(mut self, url: impl Into<String>) -> Self {
        self.author_link = Some(url.into());
        self
    }

    #[must_use]
    pub fn author_icon(mut self, url: impl Into<String>) -> Self {
        self.author_icon = Some(url.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn title_link(mut self, url: impl Into<String>) -> Self {
        self.title_link = Some(url.into());
        self
    }

    /// Main text of the attachment, sent as `text`.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends one field after those already added.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Appends the fields `record` maps itself to.
    #[must_use]
    pub fn fields_from<R: ToFields + ?Sized>(self, record: &R) -> Self {
        self.fields(record.to_fields())
    }

    /// Appends one action after those already added.
    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    #[must_use]
    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn thumb_url(mut self, url: impl Into<String>) -> Self {
        self.thumb_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: Footer) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Validates the color and URL options and assembles the attachment.
    pub fn build(self) -> Result<Attachment, ValidationError> {
        let color: Option<Color> = self.color.as_deref().map(str::parse).transpose()?;

        Ok(Attachment {
            color,
            pretext: self.pretext,
            author_name: self.author_name,
            author_link: validate::optional_url("author_link", self.author_link)?,
            author_icon: validate::optional_url("author_icon", self.author_icon)?,
            title: self.title,
            title_link: validate::optional_url("title_link", self.title_link)?,
            body: self.body,
            fields: self.fields,
            actions: self.actions,
            image_url: validate::optional_url("image_url", self.image_url)?,
            thumb_url: validate::optional_url("thumb_url", self.thumb_url)?,
            footer: self.footer,
        })
    }
}
