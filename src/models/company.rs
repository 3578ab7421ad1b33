// ABOUTME: Company data model as served by the dashboard backend's roster endpoint

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A company whose social links are tracked by the backend.
///
/// Owned by the backend; the client never mutates it. The wizard only
/// references a company by id when submitting a connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub monday_connected: bool,
}

impl Company {
    /// Date the company was created, formatted for table display.
    pub fn created_label(&self) -> String {
        self.created_at
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Label for the Monday.com connection status column.
    pub fn monday_status_label(&self) -> &'static str {
        if self.monday_connected {
            "Connected"
        } else {
            "Not Connected"
        }
    }

    /// Action label for the connect button ("Connect" vs "Reconnect").
    pub fn connect_action_label(&self) -> &'static str {
        if self.monday_connected {
            "Reconnect"
        } else {
            "Connect"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(connected: bool) -> Company {
        Company {
            id: 1,
            name: "Acme".to_string(),
            created_at: Some("2025-03-14T09:26:53Z".parse().unwrap()),
            monday_connected: connected,
        }
    }

    #[test]
    fn test_company_deserializes_from_backend_shape() {
        let json = r#"{"id": 3, "name": "Acme", "created_at": "2025-03-14T09:26:53Z", "monday_connected": true}"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.id, 3);
        assert_eq!(company.name, "Acme");
        assert!(company.monday_connected);
    }

    #[test]
    fn test_company_tolerates_missing_optional_fields() {
        let company: Company = serde_json::from_str(r#"{"id": 1, "name": "Acme"}"#).unwrap();
        assert!(company.created_at.is_none());
        assert!(!company.monday_connected);
        assert_eq!(company.created_label(), "");
    }

    #[test]
    fn test_created_label_formats_date() {
        assert_eq!(company(false).created_label(), "2025-03-14");
    }

    #[test]
    fn test_status_labels_follow_connection_flag() {
        assert_eq!(company(true).monday_status_label(), "Connected");
        assert_eq!(company(false).monday_status_label(), "Not Connected");
        assert_eq!(company(true).connect_action_label(), "Reconnect");
        assert_eq!(company(false).connect_action_label(), "Connect");
    }
}
