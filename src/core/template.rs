//! core::template
//!
//! Placeholder substitution for snippet scripts.
//!
//! # Syntax
//!
//! - `${name}` or `${ name }` - replaced by the resolved value of `name`
//!
//! Only declared parameter names are matched. A placeholder naming anything
//! else is passed through byte for byte. Substitution is a single pass:
//! replaced values are never re-scanned.
//!
//! # Example
//!
//! ```
//! use snippets_run::core::inputs::ResolvedInputs;
//! use snippets_run::core::template::substitute;
//!
//! let inputs: ResolvedInputs = [("name", "world")].into_iter().collect();
//! let out = substitute("echo ${ name } ${other}", &inputs).unwrap();
//! assert_eq!(out, "echo world ${other}");
//! ```

use regex::{Captures, Regex};
use thiserror::Error;

use super::inputs::ResolvedInputs;

/// Errors from building the placeholder matcher.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to build placeholder matcher: {0}")]
    Matcher(#[from] regex::Error),
}

/// Build the matcher for the given parameter names.
///
/// Returns `None` when there are no names; nothing can match.
fn placeholder_matcher<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<Option<Regex>, TemplateError> {
    let alternation = names
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");

    if alternation.is_empty() {
        return Ok(None);
    }

    let pattern = format!(r"\$\{{\s*({})\s*\}}", alternation);
    Ok(Some(Regex::new(&pattern)?))
}

/// Replace every declared placeholder in `script` with its resolved value.
///
/// The set of declared names is the key set of `inputs`. A declared name
/// whose value is empty substitutes to the empty string.
pub fn substitute(script: &str, inputs: &ResolvedInputs) -> Result<String, TemplateError> {
    let Some(matcher) = placeholder_matcher(inputs.names())? else {
        return Ok(script.to_string());
    };

    let rewritten = matcher.replace_all(script, |caps: &Captures<'_>| {
        inputs.get(&caps[1]).unwrap_or_default().to_string()
    });

    Ok(rewritten.into_owned())
}
