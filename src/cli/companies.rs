// ABOUTME: CLI companies command - list the company roster with
// Monday.com connection status

use super::{CompaniesArgs, OutputFormat};
use crate::models::Company;
use anyhow::Result;

/// Execute the companies command
pub async fn execute(args: CompaniesArgs, format: OutputFormat) -> Result<()> {
    let client = super::build_client()?;
    let mut companies = client.list_companies().await?;

    if args.disconnected {
        companies.retain(|c| !c.monday_connected);
    }

    match format {
        OutputFormat::Json => output_json(&companies)?,
        OutputFormat::Text => output_text(&companies),
    }

    Ok(())
}

/// Output companies as JSON
fn output_json(companies: &[Company]) -> Result<()> {
    let json = serde_json::to_string_pretty(companies)?;
    println!("{json}");
    Ok(())
}

/// Output companies as a text table
fn output_text(companies: &[Company]) {
    if companies.is_empty() {
        println!("No companies found.");
        return;
    }

    println!("{:<6} {:<30} {:<12} MONDAY.COM", "ID", "NAME", "CREATED");
    let separator = "-".repeat(64);
    println!("{separator}");

    for company in companies {
        let name = truncate(&company.name, 30);
        println!(
            "{:<6} {:<30} {:<12} {}",
            company.id,
            name,
            company.created_label(),
            company.monday_status_label()
        );
    }
}

/// Truncate a string to fit in the given width (character-aware for UTF-8)
fn truncate(s: &str, max_len: usize) -> String {
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
