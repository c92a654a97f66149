//! Username selection from the startup argument list.

use thiserror::Error;

/// Shown when no usable `--username=<value>` argument was given.
pub const FALLBACK_USERNAME: &str = "Anonymous";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("no startup argument given, expected --username=<value>")]
    Missing,
    #[error("expected exactly one startup argument, got {0}")]
    TooMany(usize),
    #[error("malformed startup argument `{0}`, expected --key=value")]
    Malformed(String),
    #[error("startup argument `{0}` has an empty value")]
    EmptyValue(String),
}

/// Returns `value` when `args` is exactly one `--key=value` argument.
pub fn resolve_username(args: &[String]) -> Result<String, IdentityError> {
    let arg = match args {
        [] => return Err(IdentityError::Missing),
        [arg] => arg,
        _ => return Err(IdentityError::TooMany(args.len())),
    };

    let (key, value) = arg
        .strip_prefix("--")
        .and_then(|rest| rest.split_once('='))
        .ok_or_else(|| IdentityError::Malformed(arg.clone()))?;

    if key.is_empty() {
        return Err(IdentityError::Malformed(arg.clone()));
    }
    if value.is_empty() {
        return Err(IdentityError::EmptyValue(arg.clone()));
    }
    Ok(value.to_string())
}

/// Like [`resolve_username`], but falls back to [`FALLBACK_USERNAME`] and logs why.
pub fn username_or_fallback(args: &[String]) -> String {
    resolve_username(args).unwrap_or_else(|err| {
        tracing::warn!(%err, "using fallback username");
        FALLBACK_USERNAME.to_string()
    })
}
