//! Error types produced while reading and querying configuration.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias for results carrying a [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by [`Configuration`](crate::Configuration).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested section does not exist.
    #[error("No section: '{section}'")]
    NoSection {
        /// Section that was looked up.
        section: String,
    },

    /// The section exists but does not hold the requested option.
    #[error("No option '{option}' in section: '{section}'")]
    NoOption {
        /// Section that was searched.
        section: String,
        /// Option name as supplied by the caller.
        option: String,
    },

    /// A value read as a boolean is not one of the recognised tokens.
    #[error("Not a boolean: '{value}' for option '{option}' in section '{section}'")]
    InvalidBoolean {
        /// Section holding the value.
        section: String,
        /// Option holding the value.
        option: String,
        /// The offending text.
        value: String,
    },

    /// An option line appeared before any `[Section]` header.
    #[error("line {line}: option defined before any section header")]
    MissingSectionHeader {
        /// One-based line number.
        line: usize,
    },

    /// A line is neither a header, an option, a comment nor a continuation.
    #[error("line {line}: cannot parse '{content}'")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// The raw line text.
        content: String,
    },

    /// Error originating from a configuration file.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O or parse error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConfigError {
    /// Returns `true` for the lookup failures that optional accessors absorb.
    ///
    /// # Examples
    ///
    /// ```
    /// use ini_config::Configuration;
    ///
    /// let config = Configuration::new();
    /// let err = config.get("Driver", "type").unwrap_err();
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NoSection { .. } | Self::NoOption { .. })
    }

    pub(crate) fn no_section(section: &str) -> Self {
        Self::NoSection {
            section: section.to_owned(),
        }
    }

    pub(crate) fn no_option(section: &str, option: &str) -> Self {
        Self::NoOption {
            section: section.to_owned(),
            option: option.to_owned(),
        }
    }

    pub(crate) fn file(
        path: &camino::Utf8Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}
