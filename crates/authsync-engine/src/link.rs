//! Relationship linking: replace-style "set" calls that attach resolved
//! remote identifiers to already-existing entities.
//!
//! Linking is unconditional: whenever a definition lists any references, the
//! call is issued, even if the same set was attached by a previous run. The
//! remote endpoints have replace semantics, so re-sending the same resolved
//! set is idempotent in effect. No diffing, no merging.

use authsync_core::{GroupDef, RoleDef};
use authsync_client::AuthzApi;

use crate::error::ProvisionError;
use crate::snapshot::Snapshot;

/// Attaches a role's declared permission set.
///
/// Resolves every declared permission name through the snapshot (a miss is
/// [`ProvisionError::UnresolvedPermission`] and no call is issued), then
/// replaces the role wholesale with `permissions` set to the resolved ids.
/// Returns `true` when an update call was issued, `false` for the empty
/// no-op case.
pub async fn link_role_permissions<C: AuthzApi + ?Sized>(
    api: &C,
    snapshot: &mut Snapshot,
    application_id: &str,
    role_def: &RoleDef,
) -> Result<bool, ProvisionError> {
    if role_def.permissions.is_empty() {
        return Ok(false);
    }

    let permission_ids = role_def
        .permissions
        .iter()
        .map(|name| {
            snapshot
                .permission(application_id, name)
                .map(|p| p.id.clone())
                .ok_or_else(|| ProvisionError::UnresolvedPermission {
                    application_id: application_id.to_string(),
                    role: role_def.name.clone(),
                    permission: name.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut role = snapshot
        .role(application_id, &role_def.name)
        .cloned()
        .ok_or_else(|| ProvisionError::MissingRole {
            application_id: application_id.to_string(),
            role: role_def.name.clone(),
        })?;
    role.permissions = permission_ids;

    tracing::info!(
        role = %role.name,
        application_id,
        permissions = role.permissions.len(),
        "setting role permissions"
    );
    api.update_role(&role.id, &role).await?;

    // Keep the snapshot consistent with what the service now holds.
    if let Some(stored) = snapshot.role_mut(application_id, &role_def.name) {
        stored.permissions = role.permissions;
    }

    Ok(true)
}

/// Attaches a group's declared nested-group set.
///
/// Same contract as [`link_role_permissions`]: empty `nested` is a no-op, an
/// unresolved name fails the run before any call, and the call replaces the
/// full nested set.
pub async fn link_nested_groups<C: AuthzApi + ?Sized>(
    api: &C,
    snapshot: &mut Snapshot,
    group_def: &GroupDef,
) -> Result<bool, ProvisionError> {
    if group_def.nested.is_empty() {
        return Ok(false);
    }

    let nested_ids = group_def
        .nested
        .iter()
        .map(|name| {
            snapshot
                .group(name)
                .map(|g| g.id.clone())
                .ok_or_else(|| ProvisionError::UnresolvedGroup {
                    group: group_def.name.clone(),
                    nested: name.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let group_id = snapshot
        .group(&group_def.name)
        .map(|g| g.id.clone())
        .ok_or_else(|| ProvisionError::MissingGroup {
            group: group_def.name.clone(),
        })?;

    tracing::info!(
        group = %group_def.name,
        nested = nested_ids.len(),
        "setting nested groups"
    );
    api.set_nested_groups(&group_id, &nested_ids).await?;

    Ok(true)
}
