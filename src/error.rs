//! Validation errors raised while building payload values

use thiserror::Error;

/// A constructor input broke one of the payload rules.
///
/// Raised synchronously by the builder that received the bad input. No
/// partially built value is ever returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value of `field` does not parse as an absolute URL.
    #[error("{field} is not an absolute URL: '{value}'")]
    InvalidUrl { field: &'static str, value: String },

    /// The URL parsed but its scheme is not accepted for `field`.
    #[error("{field} must use http or https, got '{scheme}'")]
    UnsupportedScheme { field: &'static str, scheme: String },

    /// Not one of `good`, `warning`, `danger` or a `#RGB`/`#RRGGBB` hex color.
    #[error("invalid attachment color: '{0}'")]
    InvalidColor(String),

    /// Footer text exceeds the webhook limit.
    #[error("footer text is {len} characters, limit is {max}")]
    FooterTooLong { len: usize, max: usize },

    /// The top-level message text is empty.
    #[error("message text must not be empty")]
    EmptyText,

    /// Action style outside `default`, `primary`, `danger`.
    #[error("unsupported action style: '{0}'")]
    UnsupportedStyle(String),

    /// Action type other than `button`.
    #[error("unsupported action type: '{0}'")]
    UnsupportedKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = ValidationError::InvalidUrl {
            field: "title_link",
            value: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "title_link is not an absolute URL: 'nope'");

        let err = ValidationError::FooterTooLong { len: 301, max: 300 };
        assert_eq!(err.to_string(), "footer text is 301 characters, limit is 300");
    }
}
