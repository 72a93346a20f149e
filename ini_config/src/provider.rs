//! Exposes a [`Configuration`] as a `figment` provider.
//!
//! Each section becomes a nested dictionary keyed by external option names,
//! so typed settings can be extracted with serde:
//!
//! ```
//! use figment::Figment;
//! use ini_config::Configuration;
//!
//! #[derive(serde::Deserialize)]
//! struct Server {
//!     enabled: bool,
//!     port: u16,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config: Configuration = "[Server]\nenabled = true\nport = 4723\n".parse()?;
//! let server: Server = Figment::from(config).extract_inner("Server")?;
//! assert!(server.enabled);
//! assert_eq!(server.port, 4723);
//! # Ok(())
//! # }
//! ```

use figment::{
    Metadata, Profile, Provider,
    error::Error,
    value::{Dict, Map, Value},
};

use crate::mangle::to_external;
use crate::store::Configuration;

/// Parse scalars the way `figment`'s environment provider does, keeping the
/// raw text when it is not a recognised literal.
fn parse_value(raw: &str) -> Value {
    raw.parse()
        .unwrap_or_else(|_| Value::from(raw.to_owned()))
}

impl Provider for Configuration {
    fn metadata(&self) -> Metadata {
        Metadata::named("INI configuration")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let dict = self
            .iter_sections()
            .map(|(name, section)| {
                let options: Dict = section
                    .iter()
                    .map(|(option, value)| (to_external(option).into_owned(), parse_value(value)))
                    .collect();
                (name.to_owned(), Value::from(options))
            })
            .collect();
        Ok(Profile::Default.collect(dict))
    }
}
