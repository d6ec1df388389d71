//! Environment variable interpolation for config files.
//!
//! Supports the following syntax:
//! - `$VAR` or `${VAR}` - substitute with env var value, error if missing
//! - `${VAR:-default}` - use default if VAR is unset or empty
//! - `${VAR-default}` - use default only if VAR is unset
//! - `$$` - escape sequence for literal `$`

use regex::{Captures, Regex};
use std::env;
use std::sync::LazyLock;

/// Matches `$$`, `${VAR}`, `${VAR:-default}`, `${VAR-default}`, and bare
/// `$VAR` references.
static VAR_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \$\$                              # literal dollar escape
        |
        \$\{
            (?P<braced>[A-Za-z_][A-Za-z0-9_]*)
            (?: (?P<sep>:?-) (?P<default>[^}]*) )?
        \}
        |
        \$(?P<bare>[A-Za-z_][A-Za-z0-9_]*)
        ",
    )
    .expect("invalid interpolation pattern")
});

/// Result of environment variable interpolation.
#[derive(Debug)]
pub struct InterpolationResult {
    /// The interpolated text.
    pub text: String,
    /// Any errors encountered during interpolation.
    pub errors: Vec<String>,
}

impl InterpolationResult {
    /// Returns true if there were no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Interpolate environment variables in the given text.
///
/// Errors are accumulated rather than returned on first failure so the user
/// can see every missing variable in one pass.
pub fn interpolate(input: &str) -> InterpolationResult {
    let mut errors = Vec::new();

    let text = VAR_REF
        .replace_all(input, |caps: &Captures| {
            let whole = &caps[0];
            if whole == "$$" {
                return "$".to_string();
            }

            let name = caps
                .name("braced")
                .or_else(|| caps.name("bare"))
                .map(|m| m.as_str())
                .unwrap_or_default();
            let separator = caps.name("sep").map(|m| m.as_str());
            let default = caps.name("default").map(|m| m.as_str());

            match resolve(name, separator, default) {
                Ok(value) => value,
                Err(message) => {
                    errors.push(message);
                    whole.to_string()
                }
            }
        })
        .to_string();

    InterpolationResult { text, errors }
}

/// Resolve a single variable reference against the process environment.
///
/// The `:-` separator substitutes the default for empty values as well;
/// the `-` separator only applies when the variable is unset.
fn resolve(name: &str, separator: Option<&str>, default: Option<&str>) -> Result<String, String> {
    match env::var(name) {
        Ok(value) if value.is_empty() && separator == Some(":-") => {
            Ok(default.unwrap_or_default().to_string())
        }
        Ok(value) => {
            // A value with line breaks would corrupt the surrounding YAML.
            if value.contains(['\n', '\r']) {
                return Err(format!(
                    "environment variable '{name}' contains line breaks, which is not allowed"
                ));
            }
            Ok(value)
        }
        Err(_) => match default {
            Some(default) => Ok(default.to_string()),
            None => Err(format!("environment variable '{name}' is not set")),
        },
    }
}
