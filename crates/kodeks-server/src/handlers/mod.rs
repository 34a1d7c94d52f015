//! HTTP request handlers.

pub(crate) mod articles;
pub(crate) mod documents;
pub(crate) mod health;
pub(crate) mod practice;

/// Treat an empty query parameter as absent.
///
/// The upstream service reads parameters with a `''` default and
/// branches on truthiness, so `?code=` and a missing `code` behave
/// identically.
pub(crate) fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}
