//! Overrides keyed as `Section_option`.
//!
//! External sources such as the process environment or a test-context
//! mapping name a setting by joining the section and option with an
//! underscore. Keys that do not start with a known section are skipped:
//! these sources routinely carry many unrelated entries.

use figment::providers::Env;
use tracing::{debug, trace};

use crate::store::Configuration;

impl Configuration {
    /// Split an override key into a known section and the remaining option.
    ///
    /// Sections are tried in order and the first one followed by `_` wins.
    /// Everything after that underscore, further underscores included, is
    /// the option name.
    fn split_override_key<'k>(&self, key: &'k str) -> Option<(&'k str, &'k str)> {
        self.sections().find_map(|name| {
            let option = key.strip_prefix(name)?.strip_prefix('_')?;
            if option.is_empty() {
                return None;
            }
            let (prefix, _) = key.split_at(name.len());
            Some((prefix, option))
        })
    }

    /// Overwrite configured values from `Section_option` keyed entries.
    ///
    /// Entries are applied in iteration order, so when several keys resolve
    /// to the same option the last one wins. Unmatched keys are ignored.
    /// Matching options are created when absent. Returns the number of
    /// entries applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use ini_config::Configuration;
    ///
    /// let mut config = Configuration::new();
    /// config.set("AppiumCapabilities", "platformName", "Android");
    ///
    /// let overrides = HashMap::from([
    ///     ("AppiumCapabilities_platformName", "iOS"),
    ///     ("PATH", "/usr/bin"),
    /// ]);
    /// assert_eq!(config.update_properties(&overrides), 1);
    /// assert_eq!(config.get("AppiumCapabilities", "platformName")?, "iOS");
    /// # Ok::<(), ini_config::ConfigError>(())
    /// ```
    pub fn update_properties<I, K, V>(&mut self, source: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut applied = 0;
        for (key, value) in source {
            let key_str = key.as_ref();
            let Some((section, option)) = self.split_override_key(key_str) else {
                trace!(key = key_str, "override key matches no section");
                continue;
            };
            debug!(section, option, "applying configuration override");
            self.set(section, option, value.as_ref());
            applied += 1;
        }
        applied
    }

    /// Apply [`update_properties`](Self::update_properties) to the process
    /// environment. Variable names are matched case-sensitively.
    pub fn update_properties_from_env(&mut self) -> usize {
        let env = Env::raw().lowercase(false);
        self.update_properties(env.iter().map(|(key, value)| (key.as_str().to_owned(), value)))
    }
}
