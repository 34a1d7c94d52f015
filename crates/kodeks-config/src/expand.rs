//! Environment variable expansion for configuration strings.
//!
//! Supports `${VAR}` (required) and `${VAR:-default}` (with fallback).
//! Text outside `${...}` references passes through unchanged.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a value.
///
/// `field` names the config field for error messages.
///
/// # Errors
///
/// Returns `ConfigError::EnvVar` for an unclosed reference, an empty
/// variable name, or a required variable that is not set.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut result = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find('}') else {
            return Err(env_error(field, "unclosed ${ reference"));
        };

        let reference = &after_open[..end];
        result.push_str(&resolve(reference, field)?);
        rest = &after_open[end + 1..];
    }

    result.push_str(rest);
    Ok(result)
}

/// Resolve a single `NAME` or `NAME:-default` reference.
fn resolve(reference: &str, field: &str) -> Result<String, ConfigError> {
    let (name, default) = match reference.split_once(":-") {
        Some((name, default)) => (name, Some(default)),
        None => (reference, None),
    };

    if name.is_empty() {
        return Err(env_error(field, "empty variable name in ${} reference"));
    }

    match std::env::var(name) {
        Ok(value) => Ok(value),
        Err(_) => match default {
            Some(default) => Ok(default.to_owned()),
            None => Err(env_error(field, &format!("${{{name}}} not set"))),
        },
    }
}

fn env_error(field: &str, message: &str) -> ConfigError {
    ConfigError::EnvVar {
        field: field.to_owned(),
        message: message.to_owned(),
    }
}
