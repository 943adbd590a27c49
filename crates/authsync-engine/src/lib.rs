//! # authsync-engine
//!
//! The reconciliation core: given a declarative [`Manifest`] and a client
//! for the remote authorization service, converge the remote state onto the
//! manifest by creating whatever is missing and linking relationships.
//!
//! ## How a run works
//!
//! A run is five linear stages; each completes fully before the next:
//!
//! 1. **FetchState** - load permissions, roles, and groups concurrently into
//!    an in-memory [`Snapshot`] indexed by scope key
//! 2. **ReconcilePermissions** - create missing permissions, in manifest
//!    order, one call at a time
//! 3. **ReconcileRolesAndLink** - per role: create-if-missing, then
//!    immediately attach its permission set (the role's remote id only
//!    exists after creation-or-lookup)
//! 4. **ReconcileGroups** - create missing groups
//! 5. **LinkNestedGroups** - attach nested-group sets, after every group
//!    exists so forward references resolve
//!
//! Creation is not idempotent-safe at the HTTP layer, so the existence check
//! immediately before each sequential create is what prevents duplicates
//! within a run. The first failed call aborts the run.
//!
//! [`Manifest`]: authsync_core::Manifest

pub mod error;
pub mod link;
pub mod orchestrator;
pub mod reconcile;
pub mod snapshot;

pub use error::ProvisionError;
pub use orchestrator::{Provisioner, RunSummary};
pub use reconcile::Outcome;
pub use snapshot::Snapshot;
