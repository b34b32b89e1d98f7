//! Navitia client error taxonomy.

use std::fmt;

use super::convert::ConversionError;

/// Errors from the Navitia HTTP client.
///
/// Every failure on the way to a departures list collapses into one of
/// these five kinds; the display text is what ends up on the board.
#[derive(Debug)]
pub enum NavitiaError {
    /// The request did not complete in time
    Timeout,

    /// Transport-level failure (connection refused, DNS, TLS, ...)
    Network(reqwest::Error),

    /// The request URL could not be built
    BadUrl(String),

    /// The API answered with a non-success status code
    BadStatus(u16),

    /// The response body did not decode into departures
    BadBody(String),
}

impl fmt::Display for NavitiaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavitiaError::Timeout => write!(f, "the request expired, please retry"),
            NavitiaError::Network(_) => write!(f, "network error, check your connection"),
            NavitiaError::BadUrl(url) => write!(f, "invalid URL: {url}"),
            NavitiaError::BadStatus(code) => write!(f, "server error: {code}"),
            NavitiaError::BadBody(text) => write!(f, "response body decode error: {text}"),
        }
    }
}

impl std::error::Error for NavitiaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavitiaError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NavitiaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NavitiaError::Timeout
        } else if err.is_builder() {
            NavitiaError::BadUrl(err.url().map(|u| u.to_string()).unwrap_or_default())
        } else {
            NavitiaError::Network(err)
        }
    }
}

impl From<ConversionError> for NavitiaError {
    fn from(err: ConversionError) -> Self {
        NavitiaError::BadBody(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            NavitiaError::Timeout.to_string(),
            "the request expired, please retry"
        );
        assert_eq!(
            NavitiaError::BadUrl("http://[".into()).to_string(),
            "invalid URL: http://["
        );
        assert_eq!(
            NavitiaError::BadStatus(503).to_string(),
            "server error: 503"
        );
        assert_eq!(
            NavitiaError::BadBody("missing field `direction`".into()).to_string(),
            "response body decode error: missing field `direction`"
        );
    }

    #[test]
    fn conversion_error_becomes_bad_body() {
        let err = NavitiaError::from(ConversionError::MissingSeparator("20250119".into()));
        match err {
            NavitiaError::BadBody(text) => assert!(text.contains("expected a separator")),
            other => panic!("expected BadBody, got {other:?}"),
        }
    }
}
