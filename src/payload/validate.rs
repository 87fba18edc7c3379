//! Shared checks used by the payload builders

use url::Url;

use crate::error::ValidationError;

/// Accepts `value` when it parses as an absolute URL and hands it back
/// untouched. The parsed form is only used for checking, so the caller's
/// spelling survives into the payload.
pub(crate) fn absolute_url(field: &'static str, value: String) -> Result<String, ValidationError> {
    match Url::parse(&value) {
        Ok(_) => Ok(value),
        Err(_) => Err(ValidationError::InvalidUrl { field, value }),
    }
}

/// Like [`absolute_url`], restricted to http and https.
pub(crate) fn http_url(field: &'static str, value: String) -> Result<String, ValidationError> {
    let scheme = match Url::parse(&value) {
        Ok(url) => url.scheme().to_string(),
        Err(_) => return Err(ValidationError::InvalidUrl { field, value }),
    };

    if scheme == "http" || scheme == "https" {
        Ok(value)
    } else {
        Err(ValidationError::UnsupportedScheme { field, scheme })
    }
}

pub(crate) fn optional_url(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    value.map(|v| absolute_url(field, v)).transpose()
}

/// `#RGB` or `#RRGGBB`.
pub(crate) fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_keeps_caller_spelling() {
        let raw = "https://example.com/a b?q=caf\u{e9}".to_string();
        assert_eq!(absolute_url("image_url", raw.clone()), Ok(raw));
    }

    #[test]
    fn test_absolute_url_rejects_relative() {
        let err = absolute_url("thumb_url", "/images/1.png".to_string()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidUrl {
                field: "thumb_url",
                value: "/images/1.png".to_string(),
            }
        );
    }

    #[test]
    fn test_http_url_rejects_other_schemes() {
        let err = http_url("url", "ftp://example.com/file".to_string()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedScheme {
                field: "url",
                scheme: "ftp".to_string(),
            }
        );
        assert!(http_url("url", "HTTPS://example.com".to_string()).is_ok());
    }

    #[test]
    fn test_hex_colors() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#36a64F"));
        assert!(!is_hex_color("36a64f"));
        assert!(!is_hex_color("#36a64"));
        assert!(!is_hex_color("#ggg"));
        assert!(!is_hex_color("#"));
    }
}
