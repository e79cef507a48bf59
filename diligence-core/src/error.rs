//! Error types for Diligence core.

use std::{error::Error, fmt, io};

/// Error type for Diligence core operations.
#[derive(Debug)]
pub enum DiligenceError {
    /// A fact provider could not produce its record.
    Provider {
        /// Name of the failing provider (e.g. "code_structure").
        provider: &'static str,
        /// Failure description reported by the provider.
        message: String,
    },
    /// An underlying I/O error.
    Io(io::Error),
    /// A payload could not be serialized or parsed.
    Json(serde_json::Error),
    /// A catch-all error with a message.
    Other(String),
}

impl DiligenceError {
    /// Build a provider failure.
    pub fn provider(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Provider {
            provider,
            message: message.into(),
        }
    }
}

impl fmt::Display for DiligenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider { provider, message } => {
                write!(f, "{provider} provider failed: {message}")
            }
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for DiligenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Provider { .. } | Self::Other(_) => None,
        }
    }
}

impl From<io::Error> for DiligenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for DiligenceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Convenience result type for Diligence core.
pub type Result<T> = std::result::Result<T, DiligenceError>;

#[cfg(test)]
mod tests {
    use super::DiligenceError;
    use std::error::Error;
    use std::io;

    #[test]
    fn provider_error_names_the_provider() {
        let error = DiligenceError::provider("website", "dns lookup failed");
        assert_eq!(
            format!("{error}"),
            "website provider failed: dns lookup failed"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn io_error_formats_message() {
        let error = DiligenceError::Io(io::Error::other("boom"));
        assert_eq!(format!("{error}"), "io error: boom");
        assert!(error.source().is_some());
    }

    #[test]
    fn other_error_formats_message() {
        let error = DiligenceError::Other("diligence failed".to_string());
        assert_eq!(format!("{error}"), "diligence failed");
    }

    #[test]
    fn from_json_error_maps_variant() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: DiligenceError = parse.into();
        assert!(matches!(error, DiligenceError::Json(_)));
    }

    #[test]
    fn from_io_error_maps_variant() {
        let error: DiligenceError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        match error {
            DiligenceError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("expected Io variant"),
        }
    }
}
