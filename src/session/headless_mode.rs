//! Headless commands
//!
//! Storage and history maintenance without the terminal UI. Values go to stdout so
//! they can be piped; status lines go through `cli_messages`.

use super::SessionData;
use crate::consts::cli_consts::{DISPLAY_DECIMALS, NEWEST_CORRELATIONS_LIMIT};
use crate::math::number_to_max_decimals;
use crate::services::AnalyticsHistoryService;
use crate::storage::{LocalStorage, parse_json_from_local_storage, write_json};
use crate::{print_cmd_info, print_cmd_success};
use chrono::Utc;
use clap::Subcommand;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Subcommand, Debug)]
pub enum StorageCommand {
    /// Print the JSON value stored under a key, or null
    Get {
        key: String,
    },
    /// Store a JSON value under a key
    Set {
        key: String,
        /// JSON text, e.g. '{"a": 1}' or '"text"'
        value: String,
    },
    /// Remove a key
    Remove {
        key: String,
    },
    /// Delete the storage file
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// Record an analytics run from a JSON object of correlation key to coefficient
    Record {
        file: PathBuf,
    },
    /// List the newest significant correlations
    List {
        #[arg(long, default_value_t = NEWEST_CORRELATIONS_LIMIT)]
        limit: usize,
        /// Decimals shown for each coefficient
        #[arg(long, default_value_t = DISPLAY_DECIMALS)]
        decimals: usize,
    },
    /// Forget all recorded correlations
    Clear,
}

pub fn run_storage_command(
    session: &SessionData,
    command: StorageCommand,
) -> Result<(), Box<dyn Error>> {
    let storage = session.storage.as_ref();
    match command {
        StorageCommand::Get { key } => {
            let value: Option<serde_json::Value> = parse_json_from_local_storage(storage, &key);
            let value = value.unwrap_or(serde_json::Value::Null);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        StorageCommand::Set { key, value } => {
            let parsed: serde_json::Value = serde_json::from_str(&value)
                .map_err(|e| format!("Value for '{}' is not valid JSON: {}", key, e))?;
            write_json(storage, &key, &parsed)?;
            print_cmd_success!("Stored", "{}", key);
        }
        StorageCommand::Remove { key } => {
            storage.remove_item(&key)?;
            print_cmd_success!("Removed", "{}", key);
        }
        StorageCommand::Clear => {
            session.storage.delete()?;
            print_cmd_success!("Cleared", "{}", session.storage.path().display());
        }
    }
    Ok(())
}

pub fn run_history_command(
    session: &SessionData,
    command: HistoryCommand,
) -> Result<(), Box<dyn Error>> {
    let storage: Rc<dyn LocalStorage> = session.storage.clone();
    let mut history = AnalyticsHistoryService::new(
        storage,
        session.config.correlation_confidence_threshold,
        session.config.correlation_change_threshold,
    );
    history.load();

    match command {
        HistoryCommand::Record { file } => {
            let text = fs::read_to_string(&file)
                .map_err(|e| format!("Could not read {}: {}", file.display(), e))?;
            let correlations: BTreeMap<String, f64> = serde_json::from_str(&text)
                .map_err(|e| format!("{} is not a JSON object of numbers: {}", file.display(), e))?;
            let reported = correlations.len();
            history.process_result(correlations, Utc::now())?;
            print_cmd_success!(
                "Recorded",
                "{} of {} correlations are significant",
                history.all_history().len(),
                reported
            );
        }
        HistoryCommand::List { limit, decimals } => {
            let entries = history.newest_correlations(limit, Utc::now().timestamp_millis());
            if entries.is_empty() {
                print_cmd_info!("History", "no significant correlations");
            }
            for entry in entries {
                println!(
                    "{}\t{}",
                    number_to_max_decimals(entry.coefficient, decimals),
                    entry.key
                );
            }
        }
        HistoryCommand::Clear => {
            history.clear()?;
            print_cmd_success!("Cleared", "correlation history");
        }
    }
    Ok(())
}
