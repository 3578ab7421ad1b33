// ABOUTME: Wire types for the dashboard backend's Monday.com integration endpoints

#![allow(dead_code)]
#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

/// A selectable Monday.com workspace or board, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteOption {
    pub id: String,
    pub name: String,
}

impl RemoteOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A Monday.com board column. The backend pre-filters to numeric columns,
/// but the `column_type` is still carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOption {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

impl ColumnOption {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            column_type: column_type.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkspacesRequest<'a> {
    pub api_token: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspacesResponse {
    #[serde(default)]
    pub workspaces: Vec<RemoteOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardsRequest<'a> {
    pub workspace_id: &'a str,
    pub api_token: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardsResponse {
    #[serde(default)]
    pub boards: Vec<RemoteOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnsRequest<'a> {
    pub api_token: &'a str,
    pub board_id: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnsResponse {
    #[serde(default)]
    pub columns: Vec<ColumnOption>,
}

/// Final payload of the wizard. Column names travel alongside ids so the
/// backend can label board updates without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectRequest {
    pub company_id: i64,
    pub api_token: String,
    pub workspace_id: String,
    pub board_id: String,
    pub views_column_id: String,
    pub views_column_name: String,
    pub likes_column_id: String,
    pub likes_column_name: String,
    pub comments_column_id: String,
    pub comments_column_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspaces_response_deserializes() {
        let json = r#"{"workspaces": [{"id": "w1", "name": "Main"}]}"#;
        let response: WorkspacesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.workspaces, vec![RemoteOption::new("w1", "Main")]);
    }

    #[test]
    fn test_workspaces_response_defaults_to_empty() {
        let response: WorkspacesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.workspaces.is_empty());
    }

    #[test]
    fn test_column_option_maps_type_field() {
        let json = r#"{"columns": [{"id": "c1", "title": "Views", "type": "numeric"}]}"#;
        let response: ColumnsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.columns[0].column_type, "numeric");
    }

    #[test]
    fn test_connect_request_serializes_flat_fields() {
        let request = ConnectRequest {
            company_id: 7,
            api_token: "tok123".to_string(),
            workspace_id: "w1".to_string(),
            board_id: "b1".to_string(),
            views_column_id: "c1".to_string(),
            views_column_name: "Views".to_string(),
            likes_column_id: "c2".to_string(),
            likes_column_name: "Likes".to_string(),
            comments_column_id: "c3".to_string(),
            comments_column_name: "Comments".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["company_id"], 7);
        assert_eq!(json["views_column_name"], "Views");
        assert_eq!(json["comments_column_id"], "c3");
    }
}
