#![forbid(unsafe_code)]

//! Top-level error type for the landing binary.

use std::fmt;
use std::io;

use ndl_i18n::I18nError;

use crate::config::ConfigError;

/// Anything that can stop the landing page from starting or running.
#[derive(Debug)]
pub enum LandingError {
    /// Terminal or log-file I/O.
    Io(io::Error),
    /// Configuration could not be loaded or is invalid.
    Config(ConfigError),
    /// The bundled dictionaries could not be loaded.
    I18n(I18nError),
}

impl fmt::Display for LandingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::I18n(e) => write!(f, "localization error: {e}"),
        }
    }
}

impl std::error::Error for LandingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::I18n(e) => Some(e),
        }
    }
}

impl From<io::Error> for LandingError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for LandingError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<I18nError> for LandingError {
    fn from(e: I18nError) -> Self {
        Self::I18n(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn wraps_validation_errors() {
        let err: LandingError = ConfigError::Validation(vec!["a".into(), "b".into()]).into();
        assert_eq!(err.to_string(), "configuration error: validation errors: a; b");
        assert!(err.source().is_some());
    }

    #[test]
    fn wraps_io_errors() {
        let err: LandingError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, LandingError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn wraps_i18n_errors() {
        let err: LandingError = I18nError::NotAnObject.into();
        assert!(err.to_string().starts_with("localization error"));
    }
}
