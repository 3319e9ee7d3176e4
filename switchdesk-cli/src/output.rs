///! Terminal rendering of switch listings and command results
///!
///! A listing is one page of the filtered view. Table output carries the "#" ordinal column
///! and a page footer; JSON and YAML carry only the rows.

use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use serde::Serialize;
use switchdesk_common::{SwitchId, SwitchRecord, TableRow, TableView};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl From<&str> for OutputFormat {
    /// Unknown names fall back to a table
    fn from(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            _ => OutputFormat::Table,
        }
    }
}

/// One listing row; timestamps are shown in local time
#[derive(Debug, Tabled, Serialize)]
pub struct SwitchRow {
    #[tabled(rename = "#")]
    pub ordinal: usize,
    pub id: String,
    pub wifi_name: String,
    pub location: String,
    pub name: String,
    pub port: String,
    pub ip_address: String,
    pub created_at: String,
    pub updated_at: String,
}

fn local_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

impl From<TableRow<'_>> for SwitchRow {
    fn from(row: TableRow<'_>) -> Self {
        let record = row.record;
        Self {
            ordinal: row.ordinal,
            id: record.id.to_string(),
            wifi_name: record.wifi_name.clone(),
            location: record.switch_location.clone(),
            name: record.switch_name.clone(),
            port: record.port().to_string(),
            ip_address: record.switch_ip_address.clone(),
            created_at: local_time(&record.created_at),
            updated_at: local_time(&record.updated_at),
        }
    }
}

/// `None` in "all" mode
fn page_footer(view: &TableView<'_>) -> Option<String> {
    view.page_count.map(|count| {
        format!("Page {} of {} ({} matching)", view.page, count, view.matched)
    })
}

/// Plain-text table for one page, footer included
pub fn render_table(view: &TableView<'_>) -> String {
    let mut out = if view.rows.is_empty() {
        "No switches found".to_string()
    } else {
        let rows: Vec<SwitchRow> = view.rows.iter().copied().map(SwitchRow::from).collect();
        Table::new(rows).to_string()
    };

    if let Some(footer) = page_footer(view) {
        out.push('\n');
        out.push_str(&footer);
    }
    out
}

pub fn print_page(view: &TableView<'_>, format: OutputFormat) -> anyhow::Result<()> {
    let rows = || -> Vec<SwitchRow> { view.rows.iter().copied().map(SwitchRow::from).collect() };

    match format {
        OutputFormat::Table => println!("{}", render_table(view)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows())?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&rows())?),
    }
    Ok(())
}

pub fn print_created(record: &SwitchRecord) {
    println!(
        "{} Switch '{}' created (ID: {})",
        "✓".green().bold(),
        record.switch_name.green().bold(),
        record.id.as_str().dimmed()
    );
}

pub fn print_updated(record: &SwitchRecord) {
    println!(
        "{} Switch '{}' updated (ID: {})",
        "✓".green().bold(),
        record.switch_name.green().bold(),
        record.id.as_str().dimmed()
    );
}

pub fn print_deleted(id: &SwitchId) {
    println!("{} Switch {} deleted", "✓".green().bold(), id.as_str().bold());
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

/// Goes to stderr so piped JSON/YAML stays clean
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}
