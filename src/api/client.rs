// ABOUTME: HTTP client for the dashboard backend, including the Monday.com
// integration endpoints consumed by the connection wizard

use crate::api::error::{ApiError, ConnectError, FetchError};
use crate::api::types::{
    BoardsRequest, BoardsResponse, ColumnOption, ColumnsRequest, ColumnsResponse, ConnectRequest,
    ConnectResponse, RemoteOption, WorkspacesRequest, WorkspacesResponse,
};
use crate::models::Company;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// The dependent-resource lookups and the final connect call, abstracted so
/// the app loop and the headless connect command can run against a scripted
/// implementation in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntegrationGateway {
    /// List Monday.com workspaces reachable with the given API token.
    async fn fetch_workspaces(&self, api_token: &str) -> Result<Vec<RemoteOption>, FetchError>;

    /// List boards inside a workspace.
    async fn fetch_boards(
        &self,
        api_token: &str,
        workspace_id: &str,
    ) -> Result<Vec<RemoteOption>, FetchError>;

    /// List numeric columns of a board.
    async fn fetch_columns(
        &self,
        api_token: &str,
        board_id: &str,
    ) -> Result<Vec<ColumnOption>, FetchError>;

    /// Persist the finished configuration for a company.
    async fn connect(&self, request: &ConnectRequest) -> Result<ConnectResponse, ConnectError>;
}

/// REST client for the dashboard backend.
///
/// Stateless beyond the base URL and the backend access token: every call
/// maps a request to a response and returns data for the caller to apply.
#[derive(Debug, Clone)]
pub struct DashboardApiClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl DashboardApiClient {
    /// Create a client for the given backend base URL and access token.
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("linkdeck/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!("GET {}", path);
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!("POST {}", path);
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .ok()
                .and_then(|body| extract_detail(&body))
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch the company roster.
    pub async fn list_companies(&self) -> Result<Vec<Company>, ApiError> {
        self.get_json("/api/companies/").await
    }
}

/// Pull the human-readable `detail` field out of a backend error body,
/// falling back to the raw body for non-JSON responses.
fn extract_detail(body: &str) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("detail")
            .and_then(|d| d.as_str())
            .map(ToString::to_string)
            .or_else(|| Some(body.to_string())),
        Err(_) => Some(body.to_string()),
    }
}

#[async_trait]
impl IntegrationGateway for DashboardApiClient {
    async fn fetch_workspaces(&self, api_token: &str) -> Result<Vec<RemoteOption>, FetchError> {
        let response: WorkspacesResponse = self
            .post_json("/api/monday/workspaces", &WorkspacesRequest { api_token })
            .await
            .map_err(|e| e.into_fetch_error("workspaces"))?;
        Ok(response.workspaces)
    }

    async fn fetch_boards(
        &self,
        api_token: &str,
        workspace_id: &str,
    ) -> Result<Vec<RemoteOption>, FetchError> {
        let response: BoardsResponse = self
            .post_json(
                "/api/monday/boards",
                &BoardsRequest {
                    workspace_id,
                    api_token,
                },
            )
            .await
            .map_err(|e| e.into_fetch_error("boards"))?;
        Ok(response.boards)
    }

    async fn fetch_columns(
        &self,
        api_token: &str,
        board_id: &str,
    ) -> Result<Vec<ColumnOption>, FetchError> {
        let response: ColumnsResponse = self
            .post_json(
                "/api/monday/columns",
                &ColumnsRequest {
                    api_token,
                    board_id,
                },
            )
            .await
            .map_err(|e| e.into_fetch_error("columns"))?;
        Ok(response.columns)
    }

    async fn connect(&self, request: &ConnectRequest) -> Result<ConnectResponse, ConnectError> {
        self.post_json("/api/monday/connect", request)
            .await
            .map_err(ApiError::into_connect_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client =
            DashboardApiClient::new("http://localhost:8000/", "t", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url("/api/companies/"), "http://localhost:8000/api/companies/");
    }

    #[test]
    fn test_extract_detail_prefers_json_detail_field() {
        assert_eq!(
            extract_detail(r#"{"detail": "Invalid Monday.com API token"}"#),
            Some("Invalid Monday.com API token".to_string())
        );
    }

    #[test]
    fn test_extract_detail_falls_back_to_raw_body() {
        assert_eq!(extract_detail("bad gateway"), Some("bad gateway".to_string()));
        assert_eq!(extract_detail(""), None);
    }
}
