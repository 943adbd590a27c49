//! # authsync-core
//!
//! Shared types for authsync: the declarative manifest (what the remote
//! authorization service *should* contain) and the remote records (what it
//! actually returned).
//!
//! The manifest is loaded from a JSON or YAML file and describes
//! applications with their permissions and roles, plus global groups.
//! Remote records carry the server-assigned `_id` that later provisioning
//! steps need for link calls.

pub mod manifest;
pub mod remote;

pub use manifest::{ApplicationDef, GroupDef, Manifest, ManifestError, RoleDef};
pub use remote::{Group, Permission, Role};
