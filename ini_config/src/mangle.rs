//! Reversible encoding for option names containing the `:` delimiter.
//!
//! INI text uses `:` (as well as `=`) to separate an option from its value,
//! so an option such as `goog:loggingPrefs` cannot be written literally.
//! Internally every `:` is replaced by [`MANGLE_TOKEN`]; the public
//! [`Configuration`](crate::Configuration) API applies the transform on every
//! read, write, existence check, removal and enumeration, so callers only ever
//! see the external form.
//!
//! Names that already contain [`MANGLE_TOKEN`] literally do not survive the
//! round trip: `a___b` decodes to `a:b`. This collision is accepted.
//!
//! ```
//! use ini_config::mangle::{to_external, to_internal};
//!
//! assert_eq!(to_internal("goog:loggingPrefs"), "goog___loggingPrefs");
//! assert_eq!(to_external("goog___loggingPrefs"), "goog:loggingPrefs");
//! ```

use std::borrow::Cow;

/// Character reserved by the INI syntax as a key/value separator.
pub const RESERVED_DELIMITER: char = ':';

/// Token stored in place of [`RESERVED_DELIMITER`].
pub const MANGLE_TOKEN: &str = "___";

/// Encode an external option name into its stored form.
#[must_use]
pub fn to_internal(name: &str) -> Cow<'_, str> {
    if name.contains(RESERVED_DELIMITER) {
        Cow::Owned(name.replace(RESERVED_DELIMITER, MANGLE_TOKEN))
    } else {
        Cow::Borrowed(name)
    }
}

/// Decode a stored option name back into its external form.
#[must_use]
pub fn to_external(name: &str) -> Cow<'_, str> {
    if name.contains(MANGLE_TOKEN) {
        let mut buf = [0_u8; 4];
        Cow::Owned(name.replace(MANGLE_TOKEN, RESERVED_DELIMITER.encode_utf8(&mut buf)))
    } else {
        Cow::Borrowed(name)
    }
}
