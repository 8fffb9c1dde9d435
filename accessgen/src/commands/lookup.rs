// accessgen/src/commands/lookup.rs
//
// USE CASE: Check website access against the historical table.

use std::path::PathBuf;

use accessgen_core::application::AccessLookup;
use accessgen_core::domain::access::LookupOutcome;
use anyhow::Context;
use comfy_table::{Table, presets::UTF8_FULL};

use crate::cli::OutputFormat;

const HEADINGS: [&str; 6] = [
    "User ID",
    "Name",
    "Email",
    "Department",
    "Reporting Manager",
    "Request Status",
];

pub fn execute(query: String, input: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    let lookup = AccessLookup::open(&input)
        .with_context(|| format!("Failed to load access table from {:?}", input))?;

    let outcome = lookup.check(&query)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        OutputFormat::Table => {
            let icon = if outcome.can_approve() { "✅" } else { "⛔" };
            println!("{} {}", icon, outcome.message);
            if !outcome.rows.is_empty() {
                println!("{}", render_table(&outcome));
            }
        }
    }
    Ok(())
}

fn render_table(outcome: &LookupOutcome) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(HEADINGS.to_vec());
    for r in &outcome.rows {
        table.add_row(vec![
            r.user_id.clone(),
            r.name.clone(),
            r.email.clone(),
            r.department.to_string(),
            r.reporting_manager.clone(),
            r.request_status.to_string(),
        ]);
    }
    table
}
