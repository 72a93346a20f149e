//! Sectioned INI configuration with a few conveniences layered on top.
//!
//! [`Configuration`] stores string values grouped into named sections and
//! adds:
//!
//! - optional lookups that fall back to a caller-supplied default
//!   ([`Configuration::get_optional`], [`Configuration::getboolean_optional`]);
//! - overrides keyed as `Section_option`, typically sourced from the process
//!   environment ([`Configuration::update_properties`]);
//! - `{Section_option}` placeholder substitution
//!   ([`Configuration::translate`]);
//! - option names containing `:`, which are stored under a mangled name (see
//!   [`mangle`]).
//!
//! ```
//! use ini_config::Configuration;
//!
//! # fn main() -> Result<(), ini_config::ConfigError> {
//! let mut config: Configuration = "[Driver]\ntype = firefox\n".parse()?;
//! config.update_properties([("Driver_type", "chrome")]);
//! assert_eq!(config.translate("browser={Driver_type}"), "browser=chrome");
//! assert_eq!(config.get_optional("Driver", "window", Some("max")), Some("max"));
//! # Ok(())
//! # }
//! ```

mod accessor;
mod error;
mod file;
pub mod mangle;
mod overrides;
mod parser;
mod provider;
mod store;
mod translate;
mod writer;

pub use accessor::parse_bool;
pub use error::{ConfigError, ConfigResult};
pub use store::Configuration;
