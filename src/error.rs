// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A catalog was built from zero artworks.
    EmptyCatalog,
    /// A jump targeted a position outside the catalog.
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
}

impl Error {
    /// Returns the i18n message key used when surfacing this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::EmptyCatalog => "error-empty-catalog",
            Error::IndexOutOfRange { .. } => "error-index-out-of-range",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::EmptyCatalog => {
                write!(f, "Config Error: catalog must contain at least one artwork")
            }
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index {} is out of range for a catalog of {}", index, len)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn empty_catalog_is_reported_as_config_error() {
        let message = Error::EmptyCatalog.to_string();
        assert!(message.starts_with("Config Error"));
        assert!(message.contains("at least one artwork"));
    }

    #[test]
    fn index_out_of_range_mentions_both_bounds() {
        let err = Error::IndexOutOfRange { index: 20, len: 15 };
        let message = format!("{}", err);
        assert!(message.contains("20"));
        assert!(message.contains("15"));
    }

    #[test]
    fn toml_parse_failure_becomes_config_error() {
        let err: Error = toml::from_str::<toml::Table>("not = valid = toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            Error::Io(String::new()).i18n_key(),
            Error::Config(String::new()).i18n_key(),
            Error::EmptyCatalog.i18n_key(),
            Error::IndexOutOfRange { index: 0, len: 0 }.i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
