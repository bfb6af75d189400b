//! Line-oriented session: one block of metrics per refresh on stdout.

use super::SessionData;
use super::messages::{SessionMode, print_session_finished, print_session_starting};
use crate::data::{MetricSnapshot, baseline_metrics};
use crate::refresh::RefreshTimer;
use chrono::Local;
use log::{debug, info};
use std::error::Error;

/// Text block for one snapshot: a timestamped heading, then one metric per line.
fn snapshot_block(heading: &str, snapshot: &[MetricSnapshot]) -> String {
    let mut block = format!("[{}] {}", Local::now().format("%H:%M:%S"), heading);
    for metric in snapshot {
        block.push_str("\n  ");
        block.push_str(&metric.to_string());
    }
    block
}

/// Prints the baseline, then every refreshed snapshot until Ctrl+C.
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting(SessionMode::Headless, session.refresh_interval);
    println!("{}", snapshot_block("baseline", &baseline_metrics()));

    let mut refresh = RefreshTimer::start(session.refresh_interval);
    let mut refreshes = 0;

    loop {
        tokio::select! {
            next = refresh.next() => match next {
                Some(snapshot) => {
                    refreshes += 1;
                    info!("Applied metrics refresh #{}", refreshes);
                    println!("{}", snapshot_block("refresh", &snapshot));
                }
                None => break,
            },
            signal = tokio::signal::ctrl_c() => {
                debug!("Stopping headless session: {:?}", signal);
                break;
            }
        }
    }

    refresh.stop().await;
    print_session_finished(SessionMode::Headless, refreshes);
    Ok(())
}
