//! Reader for INI text.
//!
//! Supported syntax:
//!
//! - `[Section]` headers; repeating a header reopens the existing section;
//! - `option = value` or `option: value`, split on the first `=` or `:`;
//! - full-line comments starting with `#` or `;`;
//! - continuation lines, indented deeper than the option they extend and
//!   joined to its value with `\n`.
//!
//! An indented line with no open value, or no deeper than the open option,
//! is read as an ordinary header or option. A blank line ends a multi-line
//! value. Option names are stored verbatim, so
//! a name containing `:` must be written in its mangled form.

use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};
use crate::store::Configuration;

/// Classification of a single non-blank, non-comment line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Header(&'a str),
    Entry { option: &'a str, value: &'a str },
    Continuation(&'a str),
}

fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with('#') || trimmed.starts_with(';')
}

fn indent_of(raw: &str) -> usize {
    raw.len() - raw.trim_start().len()
}

/// Classify `raw`. Only when `continuing` is set may an indented line extend
/// the open value; otherwise it is read like any other line.
fn classify(raw: &str, continuing: bool) -> Option<Line<'_>> {
    let trimmed = raw.trim();
    if continuing && raw.starts_with(char::is_whitespace) {
        return Some(Line::Continuation(trimmed));
    }
    if let Some(name) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return Some(Line::Header(name.trim()));
    }
    let (key, value) = trimmed.split_once(['=', ':'])?;
    let option = key.trim_end();
    if option.is_empty() {
        return None;
    }
    Some(Line::Entry {
        option,
        value: value.trim_start(),
    })
}

impl Configuration {
    /// Merge INI `text` into this configuration.
    ///
    /// Options already present are overwritten, so reading several sources
    /// in turn lets later ones take precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSectionHeader`] for an option that
    /// precedes every header and [`ConfigError::MalformedLine`] for a line
    /// that cannot be classified. The configuration may hold entries read
    /// before the failing line.
    pub fn read_str(&mut self, text: &str) -> ConfigResult<()> {
        // The section, and the option with its indentation, that a deeper
        // indented line would extend.
        let mut current_section: Option<&str> = None;
        let mut current_option: Option<(&str, usize)> = None;
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                current_option = None;
                continue;
            }
            if is_comment(trimmed) {
                continue;
            }
            let indent = indent_of(raw);
            let continuing = current_option.is_some_and(|(_, open)| indent > open);
            match classify(raw, continuing) {
                Some(Line::Header(name)) => {
                    self.section_entry(name);
                    current_section = Some(name);
                    current_option = None;
                }
                Some(Line::Entry { option, value }) => {
                    let section =
                        current_section.ok_or(ConfigError::MissingSectionHeader { line })?;
                    self.section_entry(section)
                        .insert(option.to_owned(), value.to_owned());
                    current_option = Some((option, indent));
                }
                Some(Line::Continuation(extra)) => {
                    let target = match (current_section, current_option) {
                        (Some(section), Some((option, _))) => {
                            self.section_entry(section).get_mut(option)
                        }
                        _ => None,
                    };
                    let Some(value) = target else {
                        return Err(ConfigError::MalformedLine {
                            line,
                            content: raw.to_owned(),
                        });
                    };
                    value.push('\n');
                    value.push_str(extra);
                }
                None => {
                    return Err(ConfigError::MalformedLine {
                        line,
                        content: raw.to_owned(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Configuration {
    type Err = ConfigError;

    fn from_str(text: &str) -> ConfigResult<Self> {
        let mut config = Self::new();
        config.read_str(text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{Line, classify};
    use crate::{ConfigError, Configuration};
    use rstest::rstest;

    #[rstest]
    #[case("[Driver]", false, Some(Line::Header("Driver")))]
    #[case("[ Driver ]", false, Some(Line::Header("Driver")))]
    #[case("type = firefox", false, Some(Line::Entry { option: "type", value: "firefox" }))]
    #[case("type: firefox", true, Some(Line::Entry { option: "type", value: "firefox" }))]
    #[case("type=", false, Some(Line::Entry { option: "type", value: "" }))]
    #[case(
        "goog___loggingPrefs: {'performance': 'ALL'}",
        false,
        Some(Line::Entry { option: "goog___loggingPrefs", value: "{'performance': 'ALL'}" })
    )]
    #[case(
        "url = http://localhost:4723",
        false,
        Some(Line::Entry { option: "url", value: "http://localhost:4723" })
    )]
    #[case("  --headless", true, Some(Line::Continuation("--headless")))]
    #[case("  type = firefox", false, Some(Line::Entry { option: "type", value: "firefox" }))]
    #[case("  [Server]", false, Some(Line::Header("Server")))]
    #[case("  --headless", false, None)]
    #[case("= value", false, None)]
    #[case("just words", false, None)]
    fn classifies_lines(
        #[case] raw: &str,
        #[case] continuing: bool,
        #[case] expected: Option<Line<'_>>,
    ) {
        assert_eq!(classify(raw, continuing), expected);
    }

    #[test]
    fn reads_indented_options() -> anyhow::Result<()> {
        let config: Configuration =
            "[Driver]\n  type = firefox\n  window_width = 1024\n    maximised\n".parse()?;
        assert_eq!(config.get("Driver", "type")?, "firefox");
        assert_eq!(config.get("Driver", "window_width")?, "1024\nmaximised");
        assert_eq!(config.options("Driver")?, ["type", "window_width"]);
        Ok(())
    }

    #[test]
    fn reads_sections_and_comments() -> anyhow::Result<()> {
        let config: Configuration = "\
# leading comment
[Driver]
type = firefox
; another comment
[Server]
enabled: true
"
        .parse()?;
        assert_eq!(config.sections().collect::<Vec<_>>(), ["Driver", "Server"]);
        assert_eq!(config.get("Driver", "type")?, "firefox");
        assert_eq!(config.get("Server", "enabled")?, "true");
        Ok(())
    }

    #[test]
    fn joins_continuation_lines() -> anyhow::Result<()> {
        let config: Configuration = "[Driver]\narguments = --start-maximized\n\t--incognito\n"
            .parse()?;
        assert_eq!(
            config.get("Driver", "arguments")?,
            "--start-maximized\n--incognito"
        );
        Ok(())
    }

    #[test]
    fn duplicate_options_and_sections_keep_last_value() -> anyhow::Result<()> {
        let config: Configuration =
            "[Driver]\ntype = firefox\n[Server]\nenabled = false\n[Driver]\ntype = chrome\n"
                .parse()?;
        assert_eq!(config.get("Driver", "type")?, "chrome");
        assert_eq!(config.options("Driver")?, ["type"]);
        assert_eq!(config.sections().count(), 2);
        Ok(())
    }

    #[test]
    fn mangled_names_read_as_external() -> anyhow::Result<()> {
        let config: Configuration = "[Capabilities]\ngoog___loggingPrefs = {}\n".parse()?;
        assert_eq!(config.options("Capabilities")?, ["goog:loggingPrefs"]);
        Ok(())
    }

    #[test]
    fn later_sources_take_precedence() -> anyhow::Result<()> {
        let mut config: Configuration = "[Driver]\ntype = firefox\nwidth = 800\n".parse()?;
        config.read_str("[Driver]\ntype = chrome\n")?;
        assert_eq!(config.get("Driver", "type")?, "chrome");
        assert_eq!(config.get("Driver", "width")?, "800");
        Ok(())
    }

    #[rstest]
    #[case("type = firefox\n", 1)]
    #[case("\n# comment\nkey: value\n", 3)]
    fn rejects_options_before_header(#[case] text: &str, #[case] expected: usize) {
        let err = text
            .parse::<Configuration>()
            .expect_err("option without section");
        assert!(matches!(
            err,
            ConfigError::MissingSectionHeader { line } if line == expected
        ));
    }

    #[rstest]
    #[case("[Driver]\nnot an option\n", 2)]
    #[case("[Driver]\n  orphan continuation\n", 2)]
    #[case("[Driver]\ntype = firefox\n\n  after blank\n", 4)]
    fn rejects_malformed_lines(#[case] text: &str, #[case] expected: usize) {
        let err = text.parse::<Configuration>().expect_err("malformed");
        assert!(matches!(
            err,
            ConfigError::MalformedLine { line, .. } if line == expected
        ));
    }
}
