// ABOUTME: Monday.com connection wizard - controller state machine,
// submission gate, and the executor that runs queued lookups

pub mod controller;
pub mod gate;

pub use controller::{
    ApplyResult, ColumnMapping, FetchLevel, FetchRequest, FetchedOptions, MetricRole, WizardError,
    WizardSession,
};

use crate::api::{FetchError, IntegrationGateway};
use tracing::debug;

/// Run a single queued lookup against the gateway.
async fn execute(
    gateway: &dyn IntegrationGateway,
    request: &FetchRequest,
) -> Result<FetchedOptions, FetchError> {
    let parent = request.parent_id.as_deref().unwrap_or_default();
    match request.level {
        FetchLevel::Workspaces => gateway
            .fetch_workspaces(&request.api_token)
            .await
            .map(FetchedOptions::Workspaces),
        FetchLevel::Boards => gateway
            .fetch_boards(&request.api_token, parent)
            .await
            .map(FetchedOptions::Boards),
        FetchLevel::Columns => gateway
            .fetch_columns(&request.api_token, parent)
            .await
            .map(FetchedOptions::Columns),
    }
}

/// Execute every lookup the session has queued and apply the results.
///
/// Requests that were superseded before execution are skipped outright; the
/// sequence check in `apply_fetch` still guards the ones that raced. Fetch
/// failures are returned so the caller can surface them to the user.
pub async fn drain_fetches(
    session: &mut WizardSession,
    gateway: &dyn IntegrationGateway,
) -> Vec<FetchError> {
    let mut errors = Vec::new();
    for request in session.take_pending_requests() {
        if !session.is_current(&request) {
            debug!("Skipping superseded {} lookup", request.level.name());
            continue;
        }
        let outcome = execute(gateway, &request).await;
        if let ApplyResult::Failed(err) = session.apply_fetch(&request, outcome) {
            errors.push(err);
        }
    }
    errors
}
