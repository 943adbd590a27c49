//! Reqwest-backed implementation of [`AuthzApi`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;
use url::Url;

use authsync_core::{Group, Permission, Role};

use crate::api::{AuthzApi, NewGroup, NewPermission, NewRole};
use crate::error::ApiError;

/// HTTP client for the Authorization Extension API.
///
/// Holds the base URL and the bearer token for the run. Every call carries
/// `Authorization: Bearer {token}`.
pub struct HttpAuthzClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
}

#[derive(Debug, Deserialize)]
struct PermissionList {
    permissions: Vec<Permission>,
}

#[derive(Debug, Deserialize)]
struct RoleList {
    roles: Vec<Role>,
}

#[derive(Debug, Deserialize)]
struct GroupList {
    groups: Vec<Group>,
}

impl HttpAuthzClient {
    /// Creates a client against the given API base URL.
    pub fn new(base_url: Url, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: token.into(),
        }
    }

    /// Creates a client with a per-request timeout.
    pub fn with_timeout(
        base_url: Url,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::transport(base_url.as_str(), e))?;

        Ok(Self {
            http,
            base_url,
            token: token.into(),
        })
    }

    /// Joins a path onto the base URL. The base is treated as a directory
    /// even without a trailing slash, so `/api` + `roles/1` is `/api/roles/1`
    /// (`Url::join` would drop the `api` segment instead).
    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}/{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url
    }

    async fn check_status(
        method: &'static str,
        url: &Url,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Remote {
            method,
            url: url.to_string(),
            status,
            body,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);

        let response = self
            .http
            .get(url.clone())
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ApiError::transport(url.as_str(), e))?;

        let response = Self::check_status("GET", &url, response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::transport(url.as_str(), e))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);

        let response = self
            .http
            .post(url.clone())
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::transport(url.as_str(), e))?;

        let response = Self::check_status("POST", &url, response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::transport(url.as_str(), e))
    }

    async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.endpoint(path);

        let response = self
            .http
            .put(url.clone())
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::transport(url.as_str(), e))?;

        Self::check_status("PUT", &url, response).await?;
        Ok(())
    }

    async fn patch_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.endpoint(path);

        let response = self
            .http
            .patch(url.clone())
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::transport(url.as_str(), e))?;

        Self::check_status("PATCH", &url, response).await?;
        Ok(())
    }
}

#[async_trait]
impl AuthzApi for HttpAuthzClient {
    async fn fetch_permissions(&self) -> Result<Vec<Permission>, ApiError> {
        let list: PermissionList = self.get_json("permissions").await?;
        tracing::info!(count = list.permissions.len(), "loaded permissions");
        Ok(list.permissions)
    }

    async fn fetch_roles(&self) -> Result<Vec<Role>, ApiError> {
        let list: RoleList = self.get_json("roles").await?;
        tracing::info!(count = list.roles.len(), "loaded roles");
        Ok(list.roles)
    }

    async fn fetch_groups(&self) -> Result<Vec<Group>, ApiError> {
        let list: GroupList = self.get_json("groups").await?;
        tracing::info!(count = list.groups.len(), "loaded groups");
        Ok(list.groups)
    }

    async fn create_permission(&self, payload: &NewPermission) -> Result<Permission, ApiError> {
        self.post_json("permissions", payload).await
    }

    async fn create_role(&self, payload: &NewRole) -> Result<Role, ApiError> {
        self.post_json("roles", payload).await
    }

    async fn update_role(&self, id: &str, role: &Role) -> Result<(), ApiError> {
        self.put_json(&format!("roles/{id}"), role).await
    }

    async fn create_group(&self, payload: &NewGroup) -> Result<Group, ApiError> {
        self.post_json("groups", payload).await
    }

    async fn set_nested_groups(&self, id: &str, nested_ids: &[String]) -> Result<(), ApiError> {
        self.patch_json(&format!("groups/{id}/nested"), &nested_ids)
            .await
    }
}
