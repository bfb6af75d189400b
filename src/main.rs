// Copyright (c) 2024 ADmyBRAND. All rights reserved.

mod config;
mod consts;
mod data;
mod events;
mod logging;
mod pretty;
mod refresh;
mod session;
mod table;
mod ui;
mod utils;

use crate::config::{Config, get_config_path};
use crate::pretty::{print_cmd_error, print_cmd_info};
use crate::session::{SessionOverrides, run_headless_mode, run_tui_mode, setup_session};
use crate::table::{CampaignTable, SortDirection, SortField, export_csv, write_export};
use chrono::Utc;
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Marketing analytics dashboard for the terminal
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the live dashboard
    Start {
        /// Seconds between metric refreshes (overrides the config file).
        #[arg(long, value_name = "SECONDS")]
        refresh_secs: Option<u64>,

        /// Print refreshed metrics to stdout instead of opening the dashboard.
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Paint a dark background behind the dashboard.
        #[arg(long, default_value_t = false)]
        with_background: bool,

        /// Directory CSV exports are written to.
        #[arg(long, value_name = "DIR")]
        export_dir: Option<PathBuf>,
    },
    /// Export the campaign table as CSV
    Export {
        /// Only include campaigns whose name contains this text (case-insensitive).
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,

        /// Column to sort by.
        #[arg(long, value_enum, default_value_t = SortField::Name)]
        sort: SortField,

        /// Sort in descending order.
        #[arg(long, default_value_t = false)]
        descending: bool,

        /// Directory to write the CSV file to (overrides the config file).
        #[arg(long, value_name = "DIR", conflicts_with = "stdout")]
        output_dir: Option<PathBuf>,

        /// Write the CSV to stdout instead of a file.
        #[arg(long, default_value_t = false)]
        stdout: bool,
    },
    /// Print one randomized snapshot of the headline metrics
    Snapshot,
    /// Write the config file with every setting filled in
    InitConfig {
        /// Rewrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config_path = get_config_path()?;
    let config = Config::load_or_default(&config_path).map_err(|e| {
        print_cmd_error!(
            "Failed to load config",
            "{}: {}",
            config_path.display(),
            e
        );
        e
    })?;

    match args.command {
        Command::Start {
            refresh_secs,
            headless,
            with_background,
            export_dir,
        } => {
            let session = setup_session(
                &config,
                SessionOverrides {
                    refresh_secs,
                    export_dir,
                    with_background,
                },
            );
            if headless {
                logging::init_console_logger();
                run_headless_mode(session).await
            } else {
                run_tui_mode(session).await
            }
        }
        Command::Export {
            search,
            sort,
            descending,
            output_dir,
            stdout,
        } => {
            logging::init_console_logger();
            let table = build_table(search, sort, descending);
            let rows = table.derive();
            debug!("Exporting {} of {} campaigns", rows.len(), table.records().len());

            if stdout {
                // byte-for-byte the same content as the exported file
                let mut out = std::io::stdout().lock();
                out.write_all(export_csv(&rows).as_bytes())?;
                out.flush()?;
                return Ok(());
            }

            let dir = output_dir.unwrap_or_else(|| config.export_dir());
            match write_export(&dir, &rows, Utc::now().date_naive()) {
                Ok(path) => {
                    info!("Wrote {}", path.display());
                    print_cmd_info!(
                        "Export complete",
                        "{} campaigns written to {}",
                        rows.len(),
                        path.display()
                    );
                    Ok(())
                }
                Err(e) => {
                    print_cmd_error!("Export failed", "{}", e);
                    Err(e.into())
                }
            }
        }
        Command::Snapshot => {
            for metric in data::generate_snapshot() {
                println!("{}", metric);
            }
            Ok(())
        }
        Command::InitConfig { force } => {
            if config_path.exists() && !force {
                print_cmd_info!(
                    "Config already exists",
                    "{} (use --force to rewrite it)",
                    config_path.display()
                );
                return Ok(());
            }
            config.save(&config_path).map_err(|e| {
                print_cmd_error!("Failed to write config", "{}: {}", config_path.display(), e);
                e
            })?;
            print_cmd_info!("Config written", "{}", config_path.display());
            Ok(())
        }
    }
}

/// Builds a table controller in the requested search and sort state.
fn build_table(search: Option<String>, sort: SortField, descending: bool) -> CampaignTable {
    let mut table = CampaignTable::default();
    if let Some(text) = search {
        table.set_search_text(text);
    }
    table.toggle_sort(sort);
    // toggle_sort flips when `sort` was already active; settle on the requested direction
    let wanted = if descending {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    if table.sort_direction() != wanted {
        table.toggle_sort(sort);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_table_honours_direction() {
        for field in [SortField::Name, SortField::Spend] {
            for descending in [false, true] {
                let table = build_table(None, field, descending);
                assert_eq!(table.sort_field(), field);
                assert_eq!(
                    table.sort_direction() == SortDirection::Descending,
                    descending
                );
            }
        }
    }

    #[test]
    fn test_build_table_applies_search() {
        let table = build_table(Some("campaign".to_string()), SortField::Name, false);
        let ids: Vec<&str> = table.derive().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["camp_004"]);
    }
}
