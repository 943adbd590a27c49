//! Declarative manifest types.
//!
//! The manifest is the input to a provisioning run. It lists applications
//! (each with the permissions and roles it should have) and global groups
//! (which may nest other groups by name).
//!
//! # Manifest Format
//!
//! ```yaml
//! applications:
//!   - id: app1
//!     permissions: ["read:data", "write:data"]
//!     roles:
//!       - name: admin
//!         permissions: ["read:data", "write:data"]
//! groups:
//!   - name: engineering
//!   - name: all-staff
//!     nested: [engineering]
//! ```
//!
//! The same structure is accepted as JSON (`data.json` style). Loading
//! dispatches on the file extension.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete declarative description of the desired remote state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Applications and their scoped permissions/roles.
    #[serde(default)]
    pub applications: Vec<ApplicationDef>,

    /// Global groups (not application-scoped).
    #[serde(default)]
    pub groups: Vec<GroupDef>,
}

/// One application's desired permissions and roles.
///
/// The `id` is the application identifier in the remote system; this tool
/// never creates applications, only entities scoped to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDef {
    pub id: String,

    /// Permission names to ensure exist for this application.
    #[serde(default)]
    pub permissions: Vec<String>,

    /// Roles to ensure exist for this application.
    #[serde(default)]
    pub roles: Vec<RoleDef>,
}

/// A role and the permission names it should carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDef {
    pub name: String,

    /// Permission names to attach. Must all appear in the owning
    /// application's `permissions` list (or already exist remotely).
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// A group and the group names nested under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDef {
    pub name: String,

    /// Names of groups to nest under this one. No cycle check is performed
    /// locally; the remote service is the authority on nesting validity.
    #[serde(default)]
    pub nested: Vec<String>,
}

/// Error type for manifest loading.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported manifest extension '{0}' (use .json, .yaml or .yml)")]
    UnsupportedExtension(String),
}

impl Manifest {
    /// Load a manifest from a file, dispatching on the extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Self::from_json(&content),
            "yaml" | "yml" => Self::from_yaml(&content),
            other => Err(ManifestError::UnsupportedExtension(other.to_string())),
        }
    }

    /// Parse a manifest from JSON content.
    pub fn from_json(content: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(content).map_err(ManifestError::from)
    }

    /// Parse a manifest from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ManifestError> {
        serde_yaml::from_str(content).map_err(ManifestError::from)
    }

    /// Total number of permission declarations across all applications.
    pub fn permission_count(&self) -> usize {
        self.applications.iter().map(|a| a.permissions.len()).sum()
    }

    /// Total number of role declarations across all applications.
    pub fn role_count(&self) -> usize {
        self.applications.iter().map(|a| a.roles.len()).sum()
    }
}
