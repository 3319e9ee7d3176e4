///! Switch inventory commands
///!
///! Each command drives the same `InventoryState` transitions the web UI uses: load the
///! collection, apply the user's actions, then send and reconcile any mutation.

use crate::api::ApiClient;
use crate::output::{self, OutputFormat};
use anyhow::{bail, Result};
use clap::Subcommand;
use switchdesk_common::{
    Action, DraftField, InventoryState, Mutation, PageSize, SwitchDraft, SwitchId, SwitchRecord,
};
use tracing::{info, warn};

#[derive(Subcommand, Debug)]
pub enum SwitchCommands {
    /// List switches, one page at a time
    List {
        /// Only show switches with a field containing this text (case-insensitive)
        #[arg(short = 'q', long)]
        search: Option<String>,
        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Rows per page (10, 20, 50, 100 or all)
        #[arg(long, default_value = "10")]
        page_size: PageSize,
    },
    /// Add a new switch
    Add {
        /// WiFi network name
        #[arg(long)]
        wifi_name: String,
        /// Where the switch is installed
        #[arg(long)]
        location: String,
        /// Switch name
        #[arg(long)]
        name: String,
        /// Connected port
        #[arg(long)]
        port: Option<String>,
        /// Switch IP address
        #[arg(long)]
        ip: String,
    },
    /// Update fields of an existing switch
    Update {
        /// Switch ID
        id: String,
        #[arg(long)]
        wifi_name: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        port: Option<String>,
        #[arg(long)]
        ip: Option<String>,
    },
    /// Delete a switch
    Delete {
        /// Switch ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Fail with the recorded request error, if any
fn ensure_ok(state: &InventoryState) -> Result<()> {
    match state.failure() {
        Some(err) => Err(err.clone().into()),
        None => Ok(()),
    }
}

fn find<'a>(state: &'a InventoryState, id: &SwitchId) -> Result<&'a SwitchRecord> {
    match state.records().iter().find(|r| &r.id == id) {
        Some(record) => Ok(record),
        None => bail!("Switch '{}' not found", id),
    }
}

async fn load(api: &ApiClient) -> Result<InventoryState> {
    let state = InventoryState::default().reduce(Action::Loaded(api.list_switches().await));
    ensure_ok(&state)?;
    info!(count = state.records().len(), "loaded switches");
    Ok(state)
}

/// Apply `(field, value)` edits to the form draft
fn apply_fields<I>(state: InventoryState, fields: I) -> InventoryState
where
    I: IntoIterator<Item = (DraftField, String)>,
{
    fields.into_iter().fold(state, |state, (field, value)| {
        state.reduce(Action::FieldChanged(field, value))
    })
}

async fn send(
    api: &ApiClient,
    state: InventoryState,
    mutation: Mutation,
    message: &str,
) -> Result<InventoryState> {
    use indicatif::{ProgressBar, ProgressStyle};
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let outcome = api.perform(&mutation.request).await;
    spinner.finish_and_clear();

    let completion = mutation.complete(outcome);
    if state.is_stale(&completion.ticket) {
        warn!(seq = completion.ticket.seq, "request finished after the form moved on");
    }

    let state = state.reconcile(completion);
    ensure_ok(&state)?;
    Ok(state)
}

pub async fn handle_switch_command(
    command: SwitchCommands,
    api: &ApiClient,
    output_format: &str,
) -> Result<()> {
    match command {
        SwitchCommands::List {
            search,
            page,
            page_size,
        } => {
            let mut state = load(api).await?;
            if let Some(query) = search {
                state = state.reduce(Action::SearchChanged(query));
            }
            let state = state
                .reduce(Action::PageSizeChanged(page_size))
                .reduce(Action::PageChanged(page));

            output::print_page(&state.view(), OutputFormat::from(output_format))?;
        }

        SwitchCommands::Add {
            wifi_name,
            location,
            name,
            port,
            ip,
        } => {
            let draft = SwitchDraft {
                wifi_name,
                switch_location: location,
                switch_name: name,
                switch_port: port.unwrap_or_default(),
                switch_ip_address: ip,
            };

            let state = load(api).await?;
            let state = apply_fields(
                state,
                DraftField::ALL.map(|field| (field, draft.get(field).to_string())),
            );
            let (state, mutation) = state.submit();
            let state = send(api, state, mutation, &format!("Adding switch '{}'...", draft.switch_name)).await?;

            if let Some(created) = state.records().last() {
                output::print_created(created);
            }
        }

        SwitchCommands::Update {
            id,
            wifi_name,
            location,
            name,
            port,
            ip,
        } => {
            let id = SwitchId::from(id);
            let state = load(api).await?;
            find(&state, &id)?;
            let state = state.reduce(Action::EditRequested(id.clone()));

            let changes: Vec<(DraftField, String)> = [
                (DraftField::WifiName, wifi_name),
                (DraftField::SwitchLocation, location),
                (DraftField::SwitchName, name),
                (DraftField::SwitchPort, port),
                (DraftField::SwitchIpAddress, ip),
            ]
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v)))
            .collect();

            if changes.is_empty() {
                output::print_warning("No fields given; re-sending the current values");
            }

            let (state, mutation) = apply_fields(state, changes).submit();
            let state = send(api, state, mutation, &format!("Updating switch {}...", id)).await?;
            output::print_updated(find(&state, &id)?);
        }

        SwitchCommands::Delete { id, yes } => {
            use dialoguer::Confirm;

            let id = SwitchId::from(id);
            let state = load(api).await?;
            let name = find(&state, &id)?.switch_name.clone();

            if !yes {
                let confirm = Confirm::new()
                    .with_prompt(format!("Are you sure you want to delete switch '{}' ({})?", name, id))
                    .default(false)
                    .interact()?;

                if !confirm {
                    output::print_warning("Delete cancelled");
                    return Ok(());
                }
            }

            let (state, mutation) = state.delete(id.clone());
            send(api, state, mutation, &format!("Deleting switch {}...", id)).await?;
            output::print_deleted(&id);
        }
    }

    Ok(())
}
