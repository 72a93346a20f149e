//! Loading configuration from files on disk.

use camino::Utf8Path;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::store::Configuration;

impl Configuration {
    /// Read the INI file at `path` into a new configuration.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use ini_config::Configuration;
    ///
    /// # fn run() -> ini_config::ConfigResult<()> {
    /// let config = Configuration::from_file("conf/properties.cfg")?;
    /// let browser = config.get_optional("Driver", "type", Some("firefox"));
    /// # let _ = browser;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::File`] when the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Utf8Path>) -> ConfigResult<Self> {
        let mut config = Self::new();
        config.read_file(path)?;
        Ok(config)
    }

    /// Merge the INI file at `path` into this configuration.
    ///
    /// Values from the file overwrite values already present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::File`] wrapping the I/O or parse failure.
    pub fn read_file(&mut self, path: impl AsRef<Utf8Path>) -> ConfigResult<()> {
        let file_path = path.as_ref();
        let data =
            std::fs::read_to_string(file_path).map_err(|e| ConfigError::file(file_path, e))?;
        self.read_str(&data)
            .map_err(|e| ConfigError::file(file_path, e))?;
        debug!(path = %file_path, sections = self.sections().count(), "loaded configuration file");
        Ok(())
    }
}
