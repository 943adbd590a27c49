//! In-memory snapshot of remote state, indexed by scope key.
//!
//! The snapshot is loaded once at the start of a run and appended to as
//! entities are created, so later stages resolve remote identifiers without
//! re-fetching. It is owned by the orchestrator, passed `&mut` through the
//! stages, and discarded when the run ends.
//!
//! Scope keys: (applicationId, name) for permissions and roles, name alone
//! for groups.

use std::collections::HashMap;

use authsync_core::{Group, Permission, Role};

type ScopeKey = (String, String);

fn scope_key(application_id: &str, name: &str) -> ScopeKey {
    (application_id.to_string(), name.to_string())
}

/// Indexed view of the remote service's permissions, roles, and groups.
#[derive(Debug, Default)]
pub struct Snapshot {
    permissions: HashMap<ScopeKey, Permission>,
    roles: HashMap<ScopeKey, Role>,
    groups: HashMap<String, Group>,
}

impl Snapshot {
    /// Builds the snapshot from freshly fetched lists.
    ///
    /// The remote service guarantees scope-key uniqueness, so colliding
    /// entries (which it should never return) collapse to the last one.
    pub fn new(permissions: Vec<Permission>, roles: Vec<Role>, groups: Vec<Group>) -> Self {
        Self {
            permissions: permissions
                .into_iter()
                .map(|p| (scope_key(&p.application_id, &p.name), p))
                .collect(),
            roles: roles
                .into_iter()
                .map(|r| (scope_key(&r.application_id, &r.name), r))
                .collect(),
            groups: groups.into_iter().map(|g| (g.name.clone(), g)).collect(),
        }
    }

    pub fn permission(&self, application_id: &str, name: &str) -> Option<&Permission> {
        self.permissions.get(&scope_key(application_id, name))
    }

    pub fn role(&self, application_id: &str, name: &str) -> Option<&Role> {
        self.roles.get(&scope_key(application_id, name))
    }

    pub fn role_mut(&mut self, application_id: &str, name: &str) -> Option<&mut Role> {
        self.roles.get_mut(&scope_key(application_id, name))
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// Records a newly created permission so later lookups and links see it.
    pub fn insert_permission(&mut self, permission: Permission) {
        self.permissions.insert(
            scope_key(&permission.application_id, &permission.name),
            permission,
        );
    }

    /// Records a newly created role.
    pub fn insert_role(&mut self, role: Role) {
        self.roles
            .insert(scope_key(&role.application_id, &role.name), role);
    }

    /// Records a newly created group.
    pub fn insert_group(&mut self, group: Group) {
        self.groups.insert(group.name.clone(), group);
    }

    pub fn permission_count(&self) -> usize {
        self.permissions.len()
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
