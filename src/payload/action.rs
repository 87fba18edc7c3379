use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::validate;
use crate::error::ValidationError;

/// What the action renders as. Buttons are the only kind incoming webhooks
/// support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    #[default]
    Button,
}

/// Button styling hint for the client. `Danger` is advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    #[default]
    Default,
    Primary,
    Danger,
}

impl ActionKind {
    /// Lower-case wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
        }
    }
}

impl ActionStyle {
    /// Lower-case wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Danger => "danger",
        }
    }
}

impl FromStr for ActionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "button" => Ok(Self::Button),
            _ => Err(ValidationError::UnsupportedKind(s.to_string())),
        }
    }
}

impl FromStr for ActionStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "primary" => Ok(Self::Primary),
            "danger" => Ok(Self::Danger),
            _ => Err(ValidationError::UnsupportedStyle(s.to_string())),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ActionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link button attached to an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    #[serde(rename = "type")]
    kind: ActionKind,
    #[serde(rename = "text")]
    label: String,
    #[serde(rename = "url")]
    target_url: String,
    style: ActionStyle,
}

impl Action {
    /// Fails unless `target_url` is an absolute http or https URL. The URL is
    /// kept exactly as given.
    pub fn new(
        label: impl Into<String>,
        target_url: impl Into<String>,
        style: ActionStyle,
        kind: ActionKind,
    ) -> Result<Self, ValidationError> {
        let target_url = validate::http_url("url", target_url.into())?;

        Ok(Self {
            kind,
            label: label.into(),
            target_url,
            style,
        })
    }

    /// A default-styled button.
    pub fn button(
        label: impl Into<String>,
        target_url: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(label, target_url, ActionStyle::Default, ActionKind::Button)
    }

    /// Same as [`Action::new`] with `style` and `kind` given as text, matched
    /// case-insensitively.
    pub fn parse(
        label: impl Into<String>,
        target_url: impl Into<String>,
        style: &str,
        kind: &str,
    ) -> Result<Self, ValidationError> {
        let kind = kind.parse()?;
        let style = style.parse()?;
        Self::new(label, target_url, style, kind)
    }

    /// Returns the same button with a different style.
    #[must_use]
    pub fn with_style(mut self, style: ActionStyle) -> Self {
        self.style = style;
        self
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Button caption, sent as `text`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The URL exactly as it was given.
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    pub fn style(&self) -> ActionStyle {
        self.style
    }
}
