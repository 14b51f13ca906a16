//! Browser-facing services: network fetches and DOM writes.

pub(crate) mod config;
pub(crate) mod dom;
