//! Rendering a configuration back to INI text.

use std::fmt;

use crate::store::Configuration;

/// Renders INI text that [`Configuration::read_str`] reads back unchanged,
/// within the limits below.
///
/// Options are written under their stored names, so `goog:loggingPrefs`
/// appears as `goog___loggingPrefs`. Multi-line values are written as
/// tab-indented continuation lines. Names and values are written without
/// escaping, so these do not survive a re-read:
///
/// - values with surrounding whitespace or blank interior lines;
/// - option names containing `=`, which split at the first `=`;
/// - option or section names with surrounding whitespace, or that are empty;
/// - option names starting with `#` or `;`, which read as comments.
impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, section) in self.iter_sections() {
            writeln!(f, "[{name}]")?;
            for (option, value) in section.iter() {
                let mut lines = value.split('\n');
                write!(f, "{option} = {}", lines.next().unwrap_or_default())?;
                for line in lines {
                    write!(f, "\n\t{line}")?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
