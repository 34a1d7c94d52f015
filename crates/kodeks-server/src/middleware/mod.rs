//! HTTP middleware.

pub(crate) mod cors;
