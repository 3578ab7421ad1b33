// ABOUTME: Tests for the wizard controller, focusing on cascading
// invalidation, fetch sequencing, and stale-response discarding

#[cfg(test)]
mod tests {
    use crate::api::{ColumnOption, FetchError, RemoteOption};
    use crate::models::Company;
    use crate::wizard::controller::{
        ApplyResult, FetchLevel, FetchRequest, FetchedOptions, MetricRole, WizardError,
        WizardSession,
    };
    use pretty_assertions::assert_eq;

    fn company() -> Company {
        Company {
            id: 42,
            name: "Acme Media".to_string(),
            created_at: None,
            monday_connected: false,
        }
    }

    fn workspaces() -> Vec<RemoteOption> {
        vec![RemoteOption::new("w1", "Main")]
    }

    fn boards() -> Vec<RemoteOption> {
        vec![RemoteOption::new("b1", "Board A"), RemoteOption::new("b2", "Board B")]
    }

    fn columns() -> Vec<ColumnOption> {
        vec![
            ColumnOption::new("c1", "Views", "numeric"),
            ColumnOption::new("c2", "Likes", "numeric"),
            ColumnOption::new("c3", "Comments", "numeric"),
        ]
    }

    /// Drive a fresh session to a fully configured, quiescent state.
    fn configured_session() -> WizardSession {
        let mut session = WizardSession::open(&company());
        session.set_credential("tok123");
        resolve_next(&mut session, FetchLevel::Workspaces, Ok(FetchedOptions::Workspaces(workspaces())));
        session.set_workspace("w1");
        resolve_next(&mut session, FetchLevel::Boards, Ok(FetchedOptions::Boards(boards())));
        session.set_board("b1");
        resolve_next(&mut session, FetchLevel::Columns, Ok(FetchedOptions::Columns(columns())));
        session.set_column_mapping(MetricRole::Views, "c1");
        session.set_column_mapping(MetricRole::Likes, "c2");
        session.set_column_mapping(MetricRole::Comments, "c3");
        session
    }

    /// Pop the single pending request for `level` and apply `outcome` to it.
    fn resolve_next(
        session: &mut WizardSession,
        level: FetchLevel,
        outcome: Result<FetchedOptions, FetchError>,
    ) -> ApplyResult {
        let requests: Vec<FetchRequest> = session
            .take_pending_requests()
            .into_iter()
            .filter(|r| r.level == level)
            .collect();
        assert_eq!(requests.len(), 1, "expected exactly one {} lookup", level.name());
        session.apply_fetch(&requests[0], outcome)
    }

    #[test]
    fn test_open_starts_empty() {
        let session = WizardSession::open(&company());
        assert_eq!(session.company_id(), 42);
        assert_eq!(session.company_name(), "Acme Media");
        assert_eq!(session.api_token(), "");
        assert!(session.workspace_id().is_none());
        assert!(session.board_id().is_none());
        assert!(session.workspaces().is_empty());
        assert!(!session.is_fetch_in_flight());
        assert!(!session.can_submit());
    }

    #[test]
    fn test_non_empty_credential_queues_workspace_lookup() {
        let mut session = WizardSession::open(&company());
        session.set_credential("tok123");

        assert!(session.level_in_flight(FetchLevel::Workspaces));
        let requests = session.take_pending_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].level, FetchLevel::Workspaces);
        assert_eq!(requests[0].api_token, "tok123");
        assert!(requests[0].parent_id.is_none());
    }

    #[test]
    fn test_empty_credential_clears_everything_without_fetching() {
        let mut session = configured_session();
        assert!(session.can_submit(), "sanity: fully configured session submits");

        session.set_credential("");

        assert_eq!(session.api_token(), "");
        assert!(session.workspace_id().is_none());
        assert!(session.board_id().is_none());
        assert!(session.workspaces().is_empty());
        assert!(session.boards().is_empty());
        assert!(session.columns().is_empty());
        assert!(!session.mapping().is_complete());
        assert!(
            session.take_pending_requests().is_empty(),
            "clearing the credential must not queue any lookup"
        );
        assert!(!session.can_submit());
    }

    #[test]
    fn test_set_workspace_clears_downstream_before_boards_resolve() {
        let mut session = WizardSession::open(&company());
        session.set_credential("tok123");
        resolve_next(&mut session, FetchLevel::Workspaces, Ok(FetchedOptions::Workspaces(workspaces())));

        session.set_workspace("w1");
        resolve_next(&mut session, FetchLevel::Boards, Ok(FetchedOptions::Boards(boards())));
        session.set_board("b1");
        resolve_next(&mut session, FetchLevel::Columns, Ok(FetchedOptions::Columns(columns())));
        session.set_column_mapping(MetricRole::Views, "c1");

        // Re-selecting the workspace must clear board/column state
        // synchronously, while the new board lookup is still unresolved.
        session.set_workspace("w1");
        assert!(session.board_id().is_none(), "board selection must be cleared");
        assert!(session.boards().is_empty(), "board options must be cleared");
        assert!(session.columns().is_empty(), "column options must be cleared");
        assert_eq!(session.mapping().get(MetricRole::Views), None, "mapping must be cleared");
        assert!(session.level_in_flight(FetchLevel::Boards), "board lookup must be queued");
    }

    #[test]
    fn test_set_workspace_without_credential_does_not_fetch() {
        let mut session = WizardSession::open(&company());
        session.set_workspace("w1");
        assert_eq!(session.workspace_id(), Some("w1"));
        assert!(session.take_pending_requests().is_empty());
        assert!(!session.is_fetch_in_flight());
    }

    #[test]
    fn test_empty_board_clears_columns_without_fetching() {
        let mut session = configured_session();

        session.set_board("");

        assert!(session.board_id().is_none());
        assert!(session.columns().is_empty());
        assert!(!session.mapping().is_complete());
        assert!(
            session.take_pending_requests().is_empty(),
            "clearing the board must not queue a column lookup"
        );
    }

    #[test]
    fn test_late_response_for_superseded_board_is_discarded() {
        let mut session = WizardSession::open(&company());
        session.set_credential("tok123");
        resolve_next(&mut session, FetchLevel::Workspaces, Ok(FetchedOptions::Workspaces(workspaces())));
        session.set_workspace("w1");
        resolve_next(&mut session, FetchLevel::Boards, Ok(FetchedOptions::Boards(boards())));

        // Select board A, then board B before A's column lookup resolves.
        session.set_board("b1");
        let request_a = session.take_pending_requests().pop().unwrap();
        session.set_board("b2");
        let request_b = session.take_pending_requests().pop().unwrap();

        let columns_b = vec![ColumnOption::new("b2-views", "Views B", "numeric")];
        let applied_b = session.apply_fetch(&request_b, Ok(FetchedOptions::Columns(columns_b.clone())));
        assert_eq!(applied_b, ApplyResult::Applied);

        // A's response arrives after B's and must be ignored.
        let applied_a = session.apply_fetch(&request_a, Ok(FetchedOptions::Columns(columns())));
        assert_eq!(applied_a, ApplyResult::Stale);
        assert_eq!(session.columns(), columns_b, "column options must reflect board B, never A");
    }

    #[test]
    fn test_submit_rejected_while_lookup_in_flight() {
        let mut session = configured_session();
        assert!(session.can_submit());

        // Re-selecting the board puts a column lookup in flight.
        session.set_board("b1");
        session.set_column_mapping(MetricRole::Views, "c1");
        session.set_column_mapping(MetricRole::Likes, "c2");
        session.set_column_mapping(MetricRole::Comments, "c3");

        assert!(session.is_fetch_in_flight());
        assert!(!session.can_submit(), "submission must be blocked while a lookup is pending");
        assert_eq!(session.submit(), Err(WizardError::Incomplete));
    }

    #[test]
    fn test_submit_builds_connect_payload_with_resolved_titles() {
        let session = configured_session();

        let request = session.submit().expect("configured session submits");
        assert_eq!(request.company_id, 42);
        assert_eq!(request.api_token, "tok123");
        assert_eq!(request.workspace_id, "w1");
        assert_eq!(request.board_id, "b1");
        assert_eq!(request.views_column_id, "c1");
        assert_eq!(request.views_column_name, "Views");
        assert_eq!(request.likes_column_name, "Likes");
        assert_eq!(request.comments_column_name, "Comments");
    }

    #[test]
    fn test_submit_resolves_stale_mapping_to_empty_title() {
        let mut session = configured_session();

        // Mapping an id that is not in the current column list is tolerated;
        // the resolved title is empty rather than an error.
        session.set_column_mapping(MetricRole::Views, "gone");

        let request = session.submit().expect("stale mapping must not block submission");
        assert_eq!(request.views_column_id, "gone");
        assert_eq!(request.views_column_name, "");
        assert_eq!(request.likes_column_name, "Likes");
    }

    #[test]
    fn test_failed_board_lookup_clears_level_and_below() {
        let mut session = configured_session();

        session.set_workspace("w1");
        let result = resolve_next(
            &mut session,
            FetchLevel::Boards,
            Err(FetchError::new("boards", "backend returned 502: bad gateway")),
        );

        assert!(matches!(result, ApplyResult::Failed(_)));
        assert_eq!(session.workspace_id(), Some("w1"), "upstream selection survives");
        assert!(session.boards().is_empty());
        assert!(session.board_id().is_none());
        assert!(session.columns().is_empty());
        assert!(!session.mapping().is_complete());
        assert!(!session.is_fetch_in_flight(), "a failed lookup is no longer in flight");
    }

    #[test]
    fn test_credential_change_supersedes_inflight_workspace_lookup() {
        let mut session = WizardSession::open(&company());
        session.set_credential("old-token");
        let stale_request = session.take_pending_requests().pop().unwrap();

        session.set_credential("new-token");

        let result = session.apply_fetch(&stale_request, Ok(FetchedOptions::Workspaces(workspaces())));
        assert_eq!(result, ApplyResult::Stale);
        assert!(session.workspaces().is_empty(), "old token's workspaces must not appear");

        let requests = session.take_pending_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].api_token, "new-token");
    }

    #[test]
    fn test_mapping_roles_are_independent() {
        let mut session = configured_session();
        session.set_column_mapping(MetricRole::Likes, "");

        assert_eq!(session.mapping().get(MetricRole::Views), Some("c1"));
        assert_eq!(session.mapping().get(MetricRole::Likes), None);
        assert_eq!(session.mapping().get(MetricRole::Comments), Some("c3"));
        assert!(!session.can_submit(), "an unmapped metric blocks submission");
    }
}
