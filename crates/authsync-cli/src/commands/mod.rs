//! CLI command implementations for authsync.

pub mod provision;
pub mod validate;
