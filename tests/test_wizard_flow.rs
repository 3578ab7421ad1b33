// ABOUTME: End-to-end wizard flow tests driving the controller through a
// scripted gateway, covering the happy path and credential reset

use async_trait::async_trait;
use linkdeck::api::{
    ColumnOption, ConnectError, ConnectRequest, ConnectResponse, FetchError, IntegrationGateway,
    RemoteOption,
};
use linkdeck::models::Company;
use linkdeck::wizard::{self, MetricRole, WizardSession};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Gateway returning a fixed Monday.com universe and counting calls.
#[derive(Default)]
struct ScriptedGateway {
    calls: AtomicUsize,
    fail_boards: bool,
}

impl ScriptedGateway {
    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IntegrationGateway for ScriptedGateway {
    async fn fetch_workspaces(&self, api_token: &str) -> Result<Vec<RemoteOption>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(api_token, "tok123");
        Ok(vec![RemoteOption::new("w1", "Main")])
    }

    async fn fetch_boards(
        &self,
        _api_token: &str,
        workspace_id: &str,
    ) -> Result<Vec<RemoteOption>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_boards {
            return Err(FetchError::new("boards", "backend returned 502: bad gateway"));
        }
        assert_eq!(workspace_id, "w1");
        Ok(vec![RemoteOption::new("b1", "Board A")])
    }

    async fn fetch_columns(
        &self,
        _api_token: &str,
        board_id: &str,
    ) -> Result<Vec<ColumnOption>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(board_id, "b1");
        Ok(vec![
            ColumnOption::new("c1", "Views", "numeric"),
            ColumnOption::new("c2", "Likes", "numeric"),
            ColumnOption::new("c3", "Comments", "numeric"),
        ])
    }

    async fn connect(&self, _request: &ConnectRequest) -> Result<ConnectResponse, ConnectError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ConnectResponse {
            message: Some("Successfully connected to Monday.com".to_string()),
        })
    }
}

fn company() -> Company {
    Company {
        id: 7,
        name: "Acme Media".to_string(),
        created_at: None,
        monday_connected: false,
    }
}

#[tokio::test]
async fn test_full_wizard_flow_produces_connect_payload() {
    let gateway = ScriptedGateway::default();
    let mut session = WizardSession::open(&company());

    session.set_credential("tok123");
    assert!(wizard::drain_fetches(&mut session, &gateway).await.is_empty());
    assert_eq!(session.workspaces(), [RemoteOption::new("w1", "Main")]);

    session.set_workspace("w1");
    assert!(wizard::drain_fetches(&mut session, &gateway).await.is_empty());
    assert_eq!(session.boards(), [RemoteOption::new("b1", "Board A")]);

    session.set_board("b1");
    assert!(wizard::drain_fetches(&mut session, &gateway).await.is_empty());
    assert_eq!(session.columns().len(), 3);

    session.set_column_mapping(MetricRole::Views, "c1");
    session.set_column_mapping(MetricRole::Likes, "c2");
    session.set_column_mapping(MetricRole::Comments, "c3");

    assert!(session.can_submit());
    let request = session.submit().expect("complete configuration submits");

    assert_eq!(request.company_id, 7);
    assert_eq!(request.api_token, "tok123");
    assert_eq!(request.workspace_id, "w1");
    assert_eq!(request.board_id, "b1");
    assert_eq!(request.views_column_name, "Views");
    assert_eq!(request.likes_column_name, "Likes");
    assert_eq!(request.comments_column_name, "Comments");

    let response = gateway.connect(&request).await.expect("connect succeeds");
    assert_eq!(response.message.as_deref(), Some("Successfully connected to Monday.com"));
}

#[tokio::test]
async fn test_clearing_credential_resets_configured_wizard() {
    let gateway = ScriptedGateway::default();
    let mut session = WizardSession::open(&company());

    session.set_credential("tok123");
    wizard::drain_fetches(&mut session, &gateway).await;
    session.set_workspace("w1");
    wizard::drain_fetches(&mut session, &gateway).await;
    session.set_board("b1");
    wizard::drain_fetches(&mut session, &gateway).await;
    session.set_column_mapping(MetricRole::Views, "c1");
    session.set_column_mapping(MetricRole::Likes, "c2");
    session.set_column_mapping(MetricRole::Comments, "c3");
    assert!(session.can_submit());
    let calls_before = gateway.call_count();

    session.set_credential("");

    assert!(!session.can_submit());
    assert!(session.workspace_id().is_none());
    assert!(session.board_id().is_none());
    assert!(session.workspaces().is_empty());
    assert!(session.boards().is_empty());
    assert!(session.columns().is_empty());

    // No lookup may be issued for an empty credential.
    wizard::drain_fetches(&mut session, &gateway).await;
    assert_eq!(gateway.call_count(), calls_before);
}

#[tokio::test]
async fn test_board_fetch_failure_is_reported_and_recovered() {
    let gateway = ScriptedGateway {
        fail_boards: true,
        ..Default::default()
    };
    let mut session = WizardSession::open(&company());

    session.set_credential("tok123");
    wizard::drain_fetches(&mut session, &gateway).await;
    session.set_workspace("w1");

    let errors = wizard::drain_fetches(&mut session, &gateway).await;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].level, "boards");

    // The wizard stays usable: the upstream selection survives and a
    // fresh workspace selection retries the lookup.
    assert_eq!(session.workspace_id(), Some("w1"));
    assert!(session.boards().is_empty());
    assert!(!session.is_fetch_in_flight());
    assert!(!session.can_submit());
}
