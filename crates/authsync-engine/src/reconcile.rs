//! Entity reconciliation: create-if-absent against the snapshot index.
//!
//! Each function checks the snapshot for an entry with the same scope key
//! before issuing a create, and appends the created record (carrying its
//! server-assigned id) on success. Calls are made one at a time; the caller
//! is responsible for keeping them sequential.

use authsync_client::{AuthzApi, NewGroup, NewPermission, NewRole};

use crate::error::ProvisionError;
use crate::snapshot::Snapshot;

/// Application type stamped on created permissions and roles.
const APPLICATION_TYPE: &str = "client";

/// Result of reconciling one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The entity was created remotely during this call.
    Created,
    /// A matching entity already existed; no remote call was made.
    AlreadyExists,
}

impl Outcome {
    pub fn created(self) -> bool {
        matches!(self, Outcome::Created)
    }
}

/// Ensures a permission exists for the application.
pub async fn reconcile_permission<C: AuthzApi + ?Sized>(
    api: &C,
    snapshot: &mut Snapshot,
    application_id: &str,
    name: &str,
) -> Result<Outcome, ProvisionError> {
    if snapshot.permission(application_id, name).is_some() {
        return Ok(Outcome::AlreadyExists);
    }

    let payload = NewPermission {
        name: name.to_string(),
        description: permission_description(name),
        application_type: APPLICATION_TYPE.to_string(),
        application_id: application_id.to_string(),
    };

    let created = api.create_permission(&payload).await?;
    tracing::info!(name, application_id, id = %created.id, "created permission");
    snapshot.insert_permission(created);

    Ok(Outcome::Created)
}

/// Ensures a role exists for the application. Permissions are attached
/// separately by the linker, never at creation time.
pub async fn reconcile_role<C: AuthzApi + ?Sized>(
    api: &C,
    snapshot: &mut Snapshot,
    application_id: &str,
    name: &str,
) -> Result<Outcome, ProvisionError> {
    if snapshot.role(application_id, name).is_some() {
        return Ok(Outcome::AlreadyExists);
    }

    let payload = NewRole {
        name: name.to_string(),
        description: role_description(name),
        application_type: APPLICATION_TYPE.to_string(),
        application_id: application_id.to_string(),
    };

    let created = api.create_role(&payload).await?;
    tracing::info!(name, application_id, id = %created.id, "created role");
    snapshot.insert_role(created);

    Ok(Outcome::Created)
}

/// Ensures a group exists. Groups are global, so the scope key is the name
/// alone.
pub async fn reconcile_group<C: AuthzApi + ?Sized>(
    api: &C,
    snapshot: &mut Snapshot,
    name: &str,
) -> Result<Outcome, ProvisionError> {
    if snapshot.group(name).is_some() {
        return Ok(Outcome::AlreadyExists);
    }

    let payload = NewGroup {
        name: name.to_string(),
        description: group_description(name),
    };

    let created = api.create_group(&payload).await?;
    tracing::info!(name, id = %created.id, "created group");
    snapshot.insert_group(created);

    Ok(Outcome::Created)
}

/// Human-readable description for a permission: each word title-cased, with
/// `:` and `-` separators turned into spaces (`read:data` -> `Read Data`).
pub fn permission_description(name: &str) -> String {
    title_case_words(name).replace([':', '-'], " ")
}

pub fn role_description(name: &str) -> String {
    format!("The {name} role")
}

pub fn group_description(name: &str) -> String {
    format!("The '{name}' Group")
}

/// Uppercases the first character of every alphanumeric word and lowercases
/// the rest, leaving separators in place.
fn title_case_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_alphanumeric() || c == '_' {
            if at_word_start {
                out.extend(c.to_uppercase());
                at_word_start = false;
            } else {
                out.extend(c.to_lowercase());
            }
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_description_colon_separator() {
        assert_eq!(permission_description("read:data"), "Read Data");
    }

    #[test]
    fn test_permission_description_dash_and_case() {
        assert_eq!(permission_description("UPDATE-client"), "Update Client");
    }

    #[test]
    fn test_permission_description_multiple_separators() {
        assert_eq!(permission_description("read:user-profile"), "Read User Profile");
    }

    #[test]
    fn test_permission_description_single_word() {
        assert_eq!(permission_description("admin"), "Admin");
    }

    #[test]
    fn test_role_and_group_descriptions() {
        assert_eq!(role_description("admin"), "The admin role");
        assert_eq!(group_description("engineering"), "The 'engineering' Group");
    }
}
