// ABOUTME: Submission gate - pure completeness predicate and column-title
// resolution for the connection wizard, testable without any network

use crate::api::ColumnOption;
use crate::wizard::controller::WizardSession;

/// True iff the API token, workspace, board, and all three column mappings
/// are present and no lookup is in flight.
pub fn can_submit(session: &WizardSession) -> bool {
    !session.api_token().is_empty()
        && session.workspace_id().is_some()
        && session.board_id().is_some()
        && session.mapping().is_complete()
        && !session.is_fetch_in_flight()
}

/// Resolve a mapped column id to its human-readable title.
///
/// An id absent from the list resolves to an empty string. That fallback is
/// load-bearing: a stale mapping must not block submission.
pub fn resolve_column_title(columns: &[ColumnOption], id: &str) -> String {
    columns
        .iter()
        .find(|column| column.id == id)
        .map(|column| column.title.clone())
        .unwrap_or_default()
}
