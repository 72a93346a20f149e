//! Lookups that tolerate missing sections and options.

use uncased::UncasedStr;

use crate::error::{ConfigError, ConfigResult};
use crate::store::Configuration;

const TRUTHY: [&str; 4] = ["1", "yes", "true", "on"];
const FALSY: [&str; 4] = ["0", "no", "false", "off"];

/// Interpret `value` as a boolean.
///
/// Matching is case-insensitive: `1`, `yes`, `true` and `on` are `true`;
/// `0`, `no`, `false` and `off` are `false`. Anything else yields `None`.
///
/// # Examples
///
/// ```
/// use ini_config::parse_bool;
///
/// assert_eq!(parse_bool("Yes"), Some(true));
/// assert_eq!(parse_bool("OFF"), Some(false));
/// assert_eq!(parse_bool("enabled"), None);
/// ```
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    let uncased = UncasedStr::new(value);
    if TRUTHY.iter().any(|token| uncased == *token) {
        Some(true)
    } else if FALSY.iter().any(|token| uncased == *token) {
        Some(false)
    } else {
        None
    }
}

impl Configuration {
    /// Look up `option` in `section`, returning `default` when either is
    /// missing.
    ///
    /// A present value always wins over `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ini_config::Configuration;
    ///
    /// let mut config = Configuration::new();
    /// config.set("Driver", "type", "firefox");
    /// assert_eq!(config.get_optional("Driver", "type", Some("chrome")), Some("firefox"));
    /// assert_eq!(config.get_optional("Driver", "window", Some("chrome")), Some("chrome"));
    /// assert_eq!(config.get_optional("No section", "type", None), None);
    /// ```
    #[must_use]
    pub fn get_optional<'a>(
        &'a self,
        section: &str,
        option: &str,
        default: Option<&'a str>,
    ) -> Option<&'a str> {
        self.get(section, option).ok().or(default)
    }

    /// Look up `option` in `section` and interpret it as a boolean.
    ///
    /// # Errors
    ///
    /// Returns the lookup error when the value is missing and
    /// [`ConfigError::InvalidBoolean`] when it is not a recognised token
    /// (see [`parse_bool`]).
    pub fn getboolean(&self, section: &str, option: &str) -> ConfigResult<bool> {
        let value = self.get(section, option)?;
        parse_bool(value).ok_or_else(|| ConfigError::InvalidBoolean {
            section: section.to_owned(),
            option: option.to_owned(),
            value: value.to_owned(),
        })
    }

    /// Boolean lookup returning `default` when the section or option is
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBoolean`] when a value is present but is
    /// not a recognised token. Malformed values are never replaced by the
    /// default.
    pub fn getboolean_optional(
        &self,
        section: &str,
        option: &str,
        default: bool,
    ) -> ConfigResult<bool> {
        match self.getboolean(section, option) {
            Err(err) if err.is_not_found() => Ok(default),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_bool;
    use crate::{ConfigError, Configuration};
    use rstest::{fixture, rstest};

    #[fixture]
    fn config() -> Configuration {
        let mut config = Configuration::new();
        config.set("Driver", "type", "firefox");
        config.set("Server", "enabled", "true");
        config.set("Server", "verbose", "sometimes");
        config
    }

    #[rstest]
    #[case("true", Some(true))]
    #[case("TRUE", Some(true))]
    #[case("yes", Some(true))]
    #[case("On", Some(true))]
    #[case("1", Some(true))]
    #[case("false", Some(false))]
    #[case("No", Some(false))]
    #[case("off", Some(false))]
    #[case("0", Some(false))]
    #[case("", None)]
    #[case("2", None)]
    #[case(" true", None)]
    #[case("truthy", None)]
    fn recognises_boolean_tokens(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool(raw), expected);
    }

    #[rstest]
    #[case("No section", "No option", None, None)]
    #[case("No section", "No option", Some("chrome"), Some("chrome"))]
    #[case("Driver", "No option", None, None)]
    #[case("Driver", "No option", Some("chrome"), Some("chrome"))]
    #[case("Driver", "type", None, Some("firefox"))]
    #[case("Driver", "type", Some("chrome"), Some("firefox"))]
    fn get_optional_falls_back(
        config: Configuration,
        #[case] section: &str,
        #[case] option: &str,
        #[case] default: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(config.get_optional(section, option, default), expected);
    }

    #[rstest]
    #[case("No section", "No option", false, false)]
    #[case("No section", "No option", true, true)]
    #[case("Server", "No option", false, false)]
    #[case("Server", "No option", true, true)]
    #[case("Server", "enabled", false, true)]
    #[case("Server", "enabled", true, true)]
    fn getboolean_optional_falls_back(
        config: Configuration,
        #[case] section: &str,
        #[case] option: &str,
        #[case] default: bool,
        #[case] expected: bool,
    ) -> anyhow::Result<()> {
        assert_eq!(config.getboolean_optional(section, option, default)?, expected);
        Ok(())
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn malformed_boolean_is_surfaced(config: Configuration, #[case] default: bool) {
        let err = config
            .getboolean_optional("Server", "verbose", default)
            .expect_err("malformed boolean must not be defaulted");
        assert!(matches!(
            err,
            ConfigError::InvalidBoolean { ref value, .. } if value == "sometimes"
        ));
    }

    #[rstest]
    fn strict_getboolean_reports_missing(config: Configuration) {
        assert!(matches!(
            config.getboolean("Server", "missing"),
            Err(ConfigError::NoOption { .. })
        ));
    }
}
