use crate::{CliError, Commands, Result, input};

use tb_bulk::{BulkOrchestrator, LinkOptions};
use tb_config::Config;
use tb_core::{CriticalityInput, IssueTracker, LinkRequest, translate};

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde_json::{Value, json};

/// Search size used by `rank --query` when `--top` is not given
pub const DEFAULT_RANK_TOP: usize = 50;

/// What a command produced: the JSON to print and whether any item failed
#[derive(Debug)]
pub struct Outcome {
    pub value: Value,
    pub has_failures: bool,
}

impl Outcome {
    fn success(value: Value) -> Self {
        Self {
            value,
            has_failures: false,
        }
    }
}

/// Commands that never touch the tracker
pub fn run_offline(command: &Commands) -> Option<Result<Outcome>> {
    match command {
        Commands::Translate {
            update,
            update_file,
        } => Some(run_translate(update.as_deref(), update_file.as_deref())),
        _ => None,
    }
}

fn run_translate(update: Option<&str>, update_file: Option<&Path>) -> Result<Outcome> {
    let update: Value = input::read_json(update, update_file)?;
    let translation = translate(&update);
    let has_patch = translation.has_patch();

    Ok(Outcome::success(json!({
        "patchPayload": translation.patch_payload,
        "hasPatch": has_patch,
        "commands": translation.commands,
        "expectations": translation.expectations,
    })))
}

/// Run a command against `tracker`
pub async fn run(
    command: Commands,
    config: &Config,
    tracker: Arc<dyn IssueTracker>,
) -> Result<Outcome> {
    let orchestrator = BulkOrchestrator::new(tracker)
        .with_default_link_command(config.bulk.default_link_command.as_str());

    match command {
        Commands::BulkUpdate {
            issues,
            update,
            update_file,
        } => {
            let update: Value = input::read_json(update.as_deref(), update_file.as_deref())?;
            let result = orchestrator.bulk_update(&issues, &update).await?;

            Ok(Outcome {
                has_failures: result.summary.has_failures(),
                value: to_value(&result)?,
            })
        }

        Commands::BulkLink {
            links,
            links_file,
            no_verify,
        } => {
            let requests: Vec<LinkRequest> = match links_file {
                Some(path) => input::read_json_file(&path)?,
                None => links
                    .iter()
                    .map(|spec| input::parse_link_spec(spec))
                    .collect::<Result<_>>()?,
            };
            let options = LinkOptions {
                verify: config.bulk.verify_links && !no_verify,
            };

            let result = orchestrator.bulk_link(&requests, options).await?;

            Ok(Outcome {
                has_failures: result.summary.has_failures(),
                value: to_value(&result)?,
            })
        }

        Commands::Rank {
            query,
            input: input_file,
            top,
        } => {
            let now = Utc::now();

            let value = match (query, input_file) {
                (Some(query), _) => {
                    let ranked = orchestrator
                        .rank_search(&query, top.unwrap_or(DEFAULT_RANK_TOP), now)
                        .await?;
                    to_value(&ranked)?
                }
                (None, Some(path)) => {
                    let items: Vec<CriticalityInput> = input::read_json_file(&path)?;
                    let mut ranked = orchestrator.rank_by_criticality(items, now);
                    if let Some(top) = top {
                        ranked.truncate(top);
                    }
                    to_value(&ranked)?
                }
                (None, None) => {
                    return Err(CliError::input("rank needs --query or --input"));
                }
            };

            Ok(Outcome::success(value))
        }

        Commands::Translate {
            update,
            update_file,
        } => run_translate(update.as_deref(), update_file.as_deref()),
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| CliError::Json {
        origin: "result".to_string(),
        source: e,
    })
}
