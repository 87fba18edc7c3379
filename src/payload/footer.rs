use chrono::{DateTime, TimeZone};
use serde::Serialize;

use super::validate;
use crate::error::ValidationError;

/// Longest footer text the webhook accepts, in characters.
pub const FOOTER_MAX_CHARS: usize = 300;

/// Small text, icon and timestamp shown under an attachment.
///
/// Serializes as the three flat attachment keys `footer`, `footer_icon` and
/// `ts`; the attachment flattens it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    #[serde(rename = "footer", skip_serializing_if = "String::is_empty")]
    text: String,
    #[serde(rename = "footer_icon", skip_serializing_if = "Option::is_none")]
    icon_url: Option<String>,
    #[serde(rename = "ts", skip_serializing_if = "Option::is_none")]
    timestamp: Option<i64>,
}

impl Footer {
    /// Fails with [`ValidationError::FooterTooLong`] past
    /// [`FOOTER_MAX_CHARS`] characters.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        let len = text.chars().count();

        if len > FOOTER_MAX_CHARS {
            return Err(ValidationError::FooterTooLong {
                len,
                max: FOOTER_MAX_CHARS,
            });
        }

        Ok(Self {
            text,
            icon_url: None,
            timestamp: None,
        })
    }

    /// Sets the icon. Clients only draw it next to non-empty text.
    ///
    /// Fails with [`ValidationError::InvalidUrl`] unless `url` is absolute.
    pub fn with_icon(mut self, url: impl Into<String>) -> Result<Self, ValidationError> {
        self.icon_url = Some(validate::absolute_url("footer_icon", url.into())?);
        Ok(self)
    }

    /// Stores `at` as whole seconds since the Unix epoch, dropping any
    /// fractional second (toward zero, also before 1970).
    #[must_use]
    pub fn with_timestamp<Tz: TimeZone>(self, at: DateTime<Tz>) -> Self {
        let mut secs = at.timestamp();
        if secs < 0 && at.timestamp_subsec_nanos() > 0 {
            secs += 1;
        }
        self.with_epoch_seconds(secs)
    }

    /// Stores raw seconds since the Unix epoch.
    #[must_use]
    pub fn with_epoch_seconds(mut self, secs: i64) -> Self {
        self.timestamp = Some(secs);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }

    /// Seconds since the Unix epoch, sent as `ts`.
    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn test_footer_length_limit() {
        assert!(Footer::new("a".repeat(FOOTER_MAX_CHARS)).is_ok());

        let err = Footer::new("a".repeat(FOOTER_MAX_CHARS + 1)).unwrap_err();
        assert_eq!(err, ValidationError::FooterTooLong { len: 301, max: 300 });
    }

    #[test]
    fn test_footer_length_counts_characters() {
        // 300 two-byte characters
        assert!(Footer::new("\u{e9}".repeat(FOOTER_MAX_CHARS)).is_ok());
    }

    #[test]
    fn test_timestamp_truncates_to_seconds() {
        let at = Utc.timestamp_opt(1_700_000_000, 999_000_000).unwrap();
        let footer = Footer::new("Found").unwrap().with_timestamp(at);
        assert_eq!(footer.timestamp(), Some(1_700_000_000));

        let before_epoch = Utc.timestamp_opt(-11, 500_000_000).unwrap();
        let footer = Footer::new("Old").unwrap().with_timestamp(before_epoch);
        assert_eq!(footer.timestamp(), Some(-10));
    }

    #[test]
    fn test_timestamp_ignores_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = offset.with_ymd_and_hms(2024, 1, 1, 2, 0, 0).unwrap();
        let footer = Footer::new("Paris").unwrap().with_timestamp(at);
        assert_eq!(footer.timestamp(), Some(1_704_067_200));
    }

    #[test]
    fn test_footer_icon_must_be_absolute_url() {
        let err = Footer::new("Bot").unwrap().with_icon("not a url").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidUrl {
                field: "footer_icon",
                value: "not a url".to_string(),
            }
        );

        let footer = Footer::new("Bot")
            .unwrap()
            .with_icon("https://example.com/icon.png")
            .unwrap();
        assert_eq!(footer.icon_url(), Some("https://example.com/icon.png"));
    }

    #[test]
    fn test_footer_without_optionals() {
        let footer = Footer::new("Bot").unwrap();
        let json = serde_json::to_string(&footer).expect("serialize");
        assert_eq!(json, r#"{"footer":"Bot"}"#);
    }

    #[test]
    fn test_footer_keys() {
        let footer = Footer::new("Bot")
            .unwrap()
            .with_icon("https://example.com/icon.png")
            .unwrap()
            .with_epoch_seconds(42);
        let json = serde_json::to_string(&footer).expect("serialize");
        assert_eq!(
            json,
            r#"{"footer":"Bot","footer_icon":"https://example.com/icon.png","ts":42}"#
        );
    }
}
