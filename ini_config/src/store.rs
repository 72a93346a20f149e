//! Section-scoped string storage.
//!
//! Sections and options keep their insertion order. Names are case-sensitive.
//! Every option name crossing this boundary passes through [`crate::mangle`], so the
//! entries held here are always in internal form.

use crate::error::{ConfigError, ConfigResult};
use crate::mangle::{to_external, to_internal};

/// Ordered options of a single section, keyed by internal name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Section {
    entries: Vec<(String, String)>,
}

impl Section {
    fn position(&self, option: &str) -> Option<usize> {
        self.entries.iter().position(|(name, _)| name == option)
    }

    pub(crate) fn get(&self, option: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == option)
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn get_mut(&mut self, option: &str) -> Option<&mut String> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name == option)
            .map(|(_, value)| value)
    }

    /// Overwrites in place so a redefined option keeps its original slot.
    pub(crate) fn insert(&mut self, option: String, value: String) {
        match self.get_mut(&option) {
            Some(slot) => *slot = value,
            None => self.entries.push((option, value)),
        }
    }

    fn remove(&mut self, option: &str) -> bool {
        self.position(option)
            .map(|idx| self.entries.remove(idx))
            .is_some()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// An INI-style configuration: named sections of string options.
///
/// # Examples
///
/// ```
/// use ini_config::Configuration;
///
/// let mut config = Configuration::new();
/// config.set("Capabilities", "goog:loggingPrefs", "{'browser': 'ALL'}");
/// assert_eq!(config.options("Capabilities")?, ["goog:loggingPrefs"]);
/// assert!(config.remove_option("Capabilities", "goog:loggingPrefs"));
/// assert!(!config.remove_option("Capabilities", "goog:loggingPrefs"));
/// # Ok::<(), ini_config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    sections: Vec<(String, Section)>,
}

impl Configuration {
    /// Create an empty configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    pub(crate) fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|(section, _)| section == name)
            .map(|(_, section)| section)
    }

    fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections
            .iter_mut()
            .find(|(section, _)| section == name)
            .map(|(_, section)| section)
    }

    /// Fetch a section for writing, appending it when absent.
    #[expect(
        clippy::indexing_slicing,
        reason = "the index is either a found position or the slot just pushed"
    )]
    pub(crate) fn section_entry(&mut self, name: &str) -> &mut Section {
        let idx = self
            .sections
            .iter()
            .position(|(section, _)| section == name)
            .unwrap_or_else(|| {
                self.sections.push((name.to_owned(), Section::default()));
                self.sections.len() - 1
            });
        &mut self.sections[idx].1
    }

    pub(crate) fn iter_sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    /// Section names in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(name, _)| name.as_str())
    }

    /// Whether `section` exists.
    #[must_use]
    pub fn has_section(&self, section: &str) -> bool {
        self.section(section).is_some()
    }

    /// Add an empty section. Returns `false` if it already existed.
    pub fn add_section(&mut self, section: &str) -> bool {
        if self.has_section(section) {
            return false;
        }
        self.sections.push((section.to_owned(), Section::default()));
        true
    }

    /// Remove a section and all its options. Returns `true` if it existed.
    pub fn remove_section(&mut self, section: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|(name, _)| name != section);
        self.sections.len() != before
    }

    /// Look up the value of `option` in `section`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoSection`] when the section is absent and
    /// [`ConfigError::NoOption`] when the option is absent.
    pub fn get(&self, section: &str, option: &str) -> ConfigResult<&str> {
        let entries = self
            .section(section)
            .ok_or_else(|| ConfigError::no_section(section))?;
        entries
            .get(&to_internal(option))
            .ok_or_else(|| ConfigError::no_option(section, option))
    }

    /// Store `value` under `section`/`option`, creating the section if needed
    /// and overwriting any previous value.
    pub fn set(&mut self, section: &str, option: &str, value: impl Into<String>) {
        self.section_entry(section)
            .insert(to_internal(option).into_owned(), value.into());
    }

    /// Whether `section` holds `option`. A missing section yields `false`.
    #[must_use]
    pub fn has_option(&self, section: &str, option: &str) -> bool {
        self.section(section)
            .is_some_and(|entries| entries.get(&to_internal(option)).is_some())
    }

    /// Remove `option` from `section`. Returns `true` if a value was removed.
    pub fn remove_option(&mut self, section: &str, option: &str) -> bool {
        self.section_mut(section)
            .is_some_and(|entries| entries.remove(&to_internal(option)))
    }

    /// Option names of `section` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoSection`] when the section is absent.
    pub fn options(&self, section: &str) -> ConfigResult<Vec<String>> {
        let entries = self
            .section(section)
            .ok_or_else(|| ConfigError::no_section(section))?;
        Ok(entries
            .iter()
            .map(|(name, _)| to_external(name).into_owned())
            .collect())
    }

    /// `(option, value)` pairs of `section` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoSection`] when the section is absent.
    pub fn items(&self, section: &str) -> ConfigResult<Vec<(String, String)>> {
        let entries = self
            .section(section)
            .ok_or_else(|| ConfigError::no_section(section))?;
        Ok(entries
            .iter()
            .map(|(name, value)| (to_external(name).into_owned(), value.to_owned()))
            .collect())
    }

    /// Produce a fully independent copy.
    ///
    /// Nothing is shared between the copy and `self`; later mutations on
    /// either are never visible through the other.
    #[must_use]
    pub fn deepcopy(&self) -> Self {
        self.clone()
    }
}
