//! core::options
//!
//! Invocation options parsed from the raw tail after the snippet name.
//!
//! # Grammar
//!
//! Tokens are scanned left to right:
//! - `--flag` opens a pending flag (prefix stripped).
//! - The next non-flag token becomes that flag's value.
//! - A flag followed by another flag, or left pending at the end of input,
//!   resolves to boolean `true`.
//! - Any other token is a positional pass-through argument.
//!
//! Flags are not validated against a known set. Unknown flags are kept and
//! only consulted if their name matches a declared snippet parameter.
//!
//! # Example
//!
//! ```
//! use snippets_run::core::options::{InvocationOptions, OptionValue};
//!
//! let opts = InvocationOptions::parse(["a", "--name", "world", "--dry", "b"]);
//! assert_eq!(opts.positional(), ["a", "b"]);
//! assert_eq!(opts.get("name"), Some(&OptionValue::Text("world".into())));
//! assert_eq!(opts.get("dry"), Some(&OptionValue::Flag));
//! ```

use std::collections::HashMap;
use std::fmt;

/// Prefix that marks a token as a flag.
pub const FLAG_PREFIX: &str = "--";

/// Value attached to a named option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// `--flag value`
    Text(String),
    /// `--flag` with no value (boolean `true`)
    Flag,
}

impl OptionValue {
    /// String form used when the option feeds a snippet parameter.
    ///
    /// A bare flag becomes `"true"`.
    pub fn as_str(&self) -> &str {
        match self {
            OptionValue::Text(s) => s,
            OptionValue::Flag => "true",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named options plus positional pass-through arguments.
///
/// Built once from the invocation tail and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationOptions {
    options: HashMap<String, OptionValue>,
    positional: Vec<String>,
}

impl InvocationOptions {
    /// Parse the invocation tail (everything after the snippet name).
    ///
    /// A repeated flag keeps its last value.
    pub fn parse<I, S>(tail: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = HashMap::new();
        let mut positional = Vec::new();
        let mut pending: Option<String> = None;

        for token in tail {
            let token = token.as_ref();

            if let Some(name) = token.strip_prefix(FLAG_PREFIX) {
                if let Some(prev) = pending.take() {
                    options.insert(prev, OptionValue::Flag);
                }
                pending = Some(name.to_string());
                continue;
            }

            match pending.take() {
                Some(flag) => {
                    options.insert(flag, OptionValue::Text(token.to_string()));
                }
                None => positional.push(token.to_string()),
            }
        }

        if let Some(flag) = pending {
            options.insert(flag, OptionValue::Flag);
        }

        Self {
            options,
            positional,
        }
    }

    /// Look up a named option.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// Positional pass-through arguments, in invocation order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Number of named options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> OptionValue {
        OptionValue::Text(s.to_string())
    }

    #[test]
    fn empty_tail() {
        let opts = InvocationOptions::parse(Vec::<String>::new());
        assert!(opts.positional().is_empty());
        assert_eq!(opts.option_count(), 0);
    }

    #[test]
    fn flag_with_value() {
        let opts = InvocationOptions::parse(["--name", "world"]);
        assert_eq!(opts.get("name"), Some(&text("world")));
        assert!(opts.positional().is_empty());
    }

    #[test]
    fn flag_followed_by_flag_is_boolean() {
        let opts = InvocationOptions::parse(["--verbose", "--name", "x"]);
        assert_eq!(opts.get("verbose"), Some(&OptionValue::Flag));
        assert_eq!(opts.get("name"), Some(&text("x")));
    }

    #[test]
    fn trailing_flag_is_boolean() {
        let opts = InvocationOptions::parse(["pos", "--force"]);
        assert_eq!(opts.get("force"), Some(&OptionValue::Flag));
        assert_eq!(opts.positional(), ["pos"]);
    }

    #[test]
    fn positionals_keep_order_around_flags() {
        let opts = InvocationOptions::parse(["a", "--k", "v", "b", "c"]);
        assert_eq!(opts.positional(), ["a", "b", "c"]);
        assert_eq!(opts.get("k"), Some(&text("v")));
    }

    #[test]
    fn single_dash_is_positional() {
        let opts = InvocationOptions::parse(["-x", "-"]);
        assert_eq!(opts.positional(), ["-x", "-"]);
        assert_eq!(opts.option_count(), 0);
    }

    #[test]
    fn repeated_flag_last_wins() {
        let opts = InvocationOptions::parse(["--n", "1", "--n", "2"]);
        assert_eq!(opts.get("n"), Some(&text("2")));
    }

    #[test]
    fn empty_value_is_kept() {
        let opts = InvocationOptions::parse(["--name", ""]);
        assert_eq!(opts.get("name"), Some(&text("")));
    }

    #[test]
    fn bare_double_dash_opens_empty_flag() {
        let opts = InvocationOptions::parse(["--", "v"]);
        assert_eq!(opts.get(""), Some(&text("v")));
    }

    #[test]
    fn flag_value_as_str() {
        assert_eq!(OptionValue::Flag.as_str(), "true");
        assert_eq!(text("abc").to_string(), "abc");
    }
}
