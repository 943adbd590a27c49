//! The `AuthzApi` trait: the seam between the reconciliation engine and the
//! HTTP transport.
//!
//! The engine is generic over this trait, so tests drive it with an
//! in-memory fake while production uses [`crate::HttpAuthzClient`].

use async_trait::async_trait;
use serde::Serialize;

use authsync_core::{Group, Permission, Role};

use crate::error::ApiError;

/// Creation payload for a permission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPermission {
    pub name: String,
    pub description: String,
    pub application_type: String,
    pub application_id: String,
}

/// Creation payload for a role. Permissions are attached afterwards via the
/// role update call, never at creation time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRole {
    pub name: String,
    pub description: String,
    pub application_type: String,
    pub application_id: String,
}

/// Creation payload for a group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
    pub name: String,
    pub description: String,
}

/// Operations the provisioning run performs against the remote service.
///
/// Every method maps to exactly one HTTP call. None of them retry; a failed
/// call aborts the run.
#[async_trait]
pub trait AuthzApi: Send + Sync {
    /// List all permissions across applications.
    async fn fetch_permissions(&self) -> Result<Vec<Permission>, ApiError>;

    /// List all roles across applications.
    async fn fetch_roles(&self) -> Result<Vec<Role>, ApiError>;

    /// List all groups.
    async fn fetch_groups(&self) -> Result<Vec<Group>, ApiError>;

    /// Create a permission and return the record with its server-assigned id.
    async fn create_permission(&self, payload: &NewPermission) -> Result<Permission, ApiError>;

    /// Create a role and return the record with its server-assigned id.
    async fn create_role(&self, payload: &NewRole) -> Result<Role, ApiError>;

    /// Replace a role wholesale. The body is the full role (minus its id,
    /// which travels in the path) with `permissions` already resolved to
    /// remote permission ids.
    async fn update_role(&self, id: &str, role: &Role) -> Result<(), ApiError>;

    /// Create a group and return the record with its server-assigned id.
    async fn create_group(&self, payload: &NewGroup) -> Result<Group, ApiError>;

    /// Replace a group's nested-group set with the given remote ids.
    async fn set_nested_groups(&self, id: &str, nested_ids: &[String]) -> Result<(), ApiError>;
}
