//! Remote record types returned by the Authorization Extension API.
//!
//! Field names follow the wire format (camelCase, `_id` for the
//! server-assigned identifier). `_id` is never serialized: the only place a
//! full record is sent back to the service is the role update call, whose
//! endpoint identifies the role by path and rejects an `_id` in the body.

use serde::{Deserialize, Serialize};

/// A permission scoped to an application.
///
/// Unique per (applicationId, name).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    #[serde(rename = "_id", skip_serializing)]
    pub id: String,

    pub application_id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub application_type: String,
}

/// A role scoped to an application, carrying permission identifiers.
///
/// Unique per (applicationId, name). `permissions` holds remote permission
/// ids, not names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(rename = "_id", skip_serializing)]
    pub id: String,

    pub application_id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub application_type: String,

    /// Remote permission ids attached to this role.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// A global group, possibly nesting other groups.
///
/// Unique per name. `nested` holds remote group ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(rename = "_id", skip_serializing)]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Remote ids of groups nested under this one.
    #[serde(default)]
    pub nested: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_wire_names() {
        let json = r#"{
            "_id": "p-1",
            "applicationId": "app1",
            "name": "read:data",
            "description": "Read Data",
            "applicationType": "client"
        }"#;

        let p: Permission = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "p-1");
        assert_eq!(p.application_id, "app1");
        assert_eq!(p.name, "read:data");
    }

    #[test]
    fn test_role_serializes_without_id() {
        let role = Role {
            id: "r-1".to_string(),
            application_id: "app1".to_string(),
            name: "admin".to_string(),
            description: "The admin role".to_string(),
            application_type: "client".to_string(),
            permissions: vec!["p-1".to_string()],
        };

        let value = serde_json::to_value(&role).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["applicationId"], "app1");
        assert_eq!(value["permissions"][0], "p-1");
    }

    #[test]
    fn test_group_optional_fields_default() {
        let json = r#"{ "_id": "g-1", "name": "engineering" }"#;

        let g: Group = serde_json::from_str(json).unwrap();
        assert_eq!(g.id, "g-1");
        assert!(g.description.is_empty());
        assert!(g.nested.is_empty());
    }
}
