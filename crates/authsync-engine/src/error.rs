//! Error types for provisioning runs.

use thiserror::Error;

use authsync_client::ApiError;

/// Errors that terminate a provisioning run.
///
/// Nothing is retried or recovered: the first error at any stage is the
/// run's outcome. A name lookup that comes up empty at link time is an
/// explicit unresolved-reference error, never a panic.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// A remote call failed (token, fetch, create, or link).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A role declares a permission name that does not exist for its
    /// application, even after permission reconciliation.
    #[error("role '{role}' in application '{application_id}' references unknown permission '{permission}'")]
    UnresolvedPermission {
        application_id: String,
        role: String,
        permission: String,
    },

    /// A group declares a nested group name with no remote counterpart.
    #[error("group '{group}' references unknown nested group '{nested}'")]
    UnresolvedGroup { group: String, nested: String },

    /// A role that should have been reconciled earlier in the run is absent
    /// from the snapshot at link time.
    #[error("role '{role}' in application '{application_id}' is missing from the remote snapshot")]
    MissingRole {
        application_id: String,
        role: String,
    },

    /// A group that should have been reconciled earlier in the run is absent
    /// from the snapshot at link time.
    #[error("group '{group}' is missing from the remote snapshot")]
    MissingGroup { group: String },
}
