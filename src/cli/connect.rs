// ABOUTME: CLI connect command - headless Monday.com connection driving the
// same wizard state machine as the TUI modal

use super::{ConnectArgs, OutputFormat};
use crate::api::{ColumnOption, DashboardApiClient, IntegrationGateway, RemoteOption};
use crate::models::Company;
use crate::wizard::{self, MetricRole, WizardSession};
use anyhow::{bail, Context, Result};
use tracing::info;

/// Environment fallback for the Monday.com API token.
const MONDAY_TOKEN_ENV: &str = "MONDAY_API_TOKEN";

/// Execute the connect command
pub async fn execute(args: ConnectArgs, format: OutputFormat) -> Result<()> {
    let client = super::build_client()?;

    let api_token = args
        .token
        .clone()
        .or_else(|| std::env::var(MONDAY_TOKEN_ENV).ok().filter(|t| !t.is_empty()))
        .with_context(|| {
            format!("No Monday.com API token. Pass --token or set {MONDAY_TOKEN_ENV}")
        })?;

    let company = find_company(&client, args.company).await?;
    info!("Connecting company '{}' to Monday.com", company.name);

    // The headless flow walks the exact same controller as the TUI modal:
    // each selection clears downstream state and queues the next lookup.
    let mut session = WizardSession::open(&company);

    session.set_credential(api_token);
    run_lookups(&mut session, &client).await?;
    let workspace = resolve_option("workspace", session.workspaces(), &args.workspace)?;
    let workspace_id = workspace.id.clone();

    session.set_workspace(&workspace_id);
    run_lookups(&mut session, &client).await?;
    let board = resolve_option("board", session.boards(), &args.board)?;
    let board_id = board.id.clone();

    session.set_board(&board_id);
    run_lookups(&mut session, &client).await?;
    for (role, wanted) in [
        (MetricRole::Views, &args.views),
        (MetricRole::Likes, &args.likes),
        (MetricRole::Comments, &args.comments),
    ] {
        let column = resolve_column(session.columns(), wanted)?;
        let column_id = column.id.clone();
        session.set_column_mapping(role, &column_id);
    }

    let request = session.submit()?;
    let response = client.connect(&request).await?;
    let message = response
        .message
        .unwrap_or_else(|| "Monday.com connected successfully".to_string());

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "company_id": request.company_id,
                "workspace_id": request.workspace_id,
                "board_id": request.board_id,
                "message": message,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            println!("✓ {message}");
            println!("  company:   {}", company.name);
            println!("  workspace: {}", option_label(&request.workspace_id, session.workspaces()));
            println!("  board:     {}", option_label(&request.board_id, session.boards()));
        }
    }

    Ok(())
}

async fn find_company(client: &DashboardApiClient, id: i64) -> Result<Company> {
    let companies = client
        .list_companies()
        .await
        .context("Failed to load companies from the backend")?;
    companies
        .into_iter()
        .find(|c| c.id == id)
        .with_context(|| format!("Company {id} not found"))
}

/// Run every lookup the session queued; the first fetch failure aborts the
/// command (unlike the TUI, there is no open modal to recover in).
async fn run_lookups(session: &mut WizardSession, client: &DashboardApiClient) -> Result<()> {
    let errors = wizard::drain_fetches(session, client).await;
    match errors.into_iter().next() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Match a workspace/board by id first, then by case-insensitive name.
fn resolve_option<'a>(
    kind: &str,
    options: &'a [RemoteOption],
    wanted: &str,
) -> Result<&'a RemoteOption> {
    if options.is_empty() {
        bail!("No {kind}s available for this token");
    }
    options
        .iter()
        .find(|o| o.id == wanted)
        .or_else(|| options.iter().find(|o| o.name.eq_ignore_ascii_case(wanted)))
        .with_context(|| {
            let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
            format!("{kind} '{wanted}' not found. Available: {}", names.join(", "))
        })
}

/// Match a column by id first, then by case-insensitive title.
fn resolve_column<'a>(columns: &'a [ColumnOption], wanted: &str) -> Result<&'a ColumnOption> {
    if columns.is_empty() {
        bail!("The selected board has no numeric columns to map");
    }
    columns
        .iter()
        .find(|c| c.id == wanted)
        .or_else(|| columns.iter().find(|c| c.title.eq_ignore_ascii_case(wanted)))
        .with_context(|| {
            let titles: Vec<&str> = columns.iter().map(|c| c.title.as_str()).collect();
            format!("column '{wanted}' not found. Available: {}", titles.join(", "))
        })
}

fn option_label(id: &str, options: &[RemoteOption]) -> String {
    options
        .iter()
        .find(|o| o.id == id)
        .map_or_else(|| id.to_string(), |o| o.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<RemoteOption> {
        vec![
            RemoteOption::new("w1", "Main Workspace"),
            RemoteOption::new("w2", "Side Workspace"),
        ]
    }

    #[test]
    fn test_resolve_option_by_id() {
        let opts = options();
        assert_eq!(resolve_option("workspace", &opts, "w2").unwrap().name, "Side Workspace");
    }

    #[test]
    fn test_resolve_option_by_name_case_insensitive() {
        let opts = options();
        assert_eq!(resolve_option("workspace", &opts, "main workspace").unwrap().id, "w1");
    }

    #[test]
    fn test_resolve_option_unknown_lists_alternatives() {
        let opts = options();
        let err = resolve_option("workspace", &opts, "nope").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Main Workspace"));
        assert!(message.contains("Side Workspace"));
    }

    #[test]
    fn test_resolve_column_by_title() {
        let columns = vec![
            ColumnOption::new("c1", "Views", "numeric"),
            ColumnOption::new("c2", "Likes", "numeric"),
        ];
        assert_eq!(resolve_column(&columns, "likes").unwrap().id, "c2");
    }

    #[test]
    fn test_resolve_column_on_empty_board_fails() {
        assert!(resolve_column(&[], "Views").is_err());
    }
}
