//! `{Section_option}` placeholder substitution.

use tracing::trace;

use crate::store::Configuration;

impl Configuration {
    /// Replace `{Section_option}` placeholders in `input` with configured
    /// values.
    ///
    /// The first underscore in a placeholder separates the section from the
    /// option; later underscores belong to the option name. Placeholders that
    /// do not resolve, including bare `{Section}` references, are kept
    /// verbatim so a later stage can resolve them. Substitution is a single
    /// left-to-right pass: inserted values are never scanned again.
    ///
    /// # Examples
    ///
    /// ```
    /// use ini_config::Configuration;
    ///
    /// let mut config = Configuration::new();
    /// config.set("Driver", "type", "firefox");
    /// config.set("Server", "enabled", "true");
    ///
    /// assert_eq!(config.translate("{Driver_type}/{Server_enabled}"), "firefox/true");
    /// assert_eq!(config.translate("[{Driver_type}] {Server}"), "[firefox] {Server}");
    /// ```
    #[must_use]
    pub fn translate(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some((before, after_open)) = rest.split_once('{') {
            out.push_str(before);
            let Some((token, after_close)) = after_open.split_once('}') else {
                out.push('{');
                out.push_str(after_open);
                return out;
            };
            if token.contains('{') {
                // A nearer `{` starts the candidate placeholder.
                out.push('{');
                rest = after_open;
                continue;
            }
            match self.resolve_placeholder(token) {
                Some(value) => out.push_str(value),
                None => {
                    trace!(placeholder = token, "leaving unresolved placeholder");
                    out.push('{');
                    out.push_str(token);
                    out.push('}');
                }
            }
            rest = after_close;
        }
        out.push_str(rest);
        out
    }

    fn resolve_placeholder(&self, token: &str) -> Option<&str> {
        let (section, option) = token.split_once('_')?;
        self.get(section, option).ok()
    }
}
