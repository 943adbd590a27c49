//! # authsync-client
//!
//! The remote boundary of authsync: everything that talks HTTP.
//!
//! This crate provides:
//! - [`TokenProvider`] - acquires a bearer token via the client-credentials
//!   grant, once per process
//! - [`AuthzApi`] - the trait the reconciliation engine is written against
//! - [`HttpAuthzClient`] - the reqwest-backed implementation
//! - [`ApiError`] - the error taxonomy for auth, remote, and transport
//!   failures
//!
//! No call is retried; the first failure is surfaced with the failing
//! request's method, URL, status, and response body so a run's single error
//! identifies exactly which remote call broke.

pub mod api;
pub mod error;
pub mod http;
pub mod token;

pub use api::{AuthzApi, NewGroup, NewPermission, NewRole};
pub use error::ApiError;
pub use http::HttpAuthzClient;
pub use token::{TokenCredentials, TokenProvider};
