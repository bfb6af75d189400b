//! Randomized headline-metric snapshots for the periodic refresh.

use super::mock::baseline_metrics;
use super::models::{MetricSnapshot, MetricTitle};
use crate::consts::cli_consts::snapshot_ranges;
use crate::utils::format::{format_currency, format_thousands};
use rand::Rng;

/// Produce a fresh snapshot of all four headline metrics using the thread RNG.
pub fn generate_snapshot() -> Vec<MetricSnapshot> {
    generate_snapshot_with(&mut rand::thread_rng())
}

/// Produce a fresh snapshot drawing from `rng`.
///
/// Only the value is redrawn; the change text and direction stay at their
/// baseline values.
pub fn generate_snapshot_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<MetricSnapshot> {
    baseline_metrics()
        .into_iter()
        .map(|metric| MetricSnapshot {
            value: draw_value(metric.title, rng),
            ..metric
        })
        .collect()
}

fn draw_value<R: Rng + ?Sized>(title: MetricTitle, rng: &mut R) -> String {
    match title {
        MetricTitle::TotalRevenue => {
            format_currency(draw_rounded(rng, snapshot_ranges::REVENUE))
        }
        MetricTitle::ActiveUsers => format_thousands(draw_rounded(rng, snapshot_ranges::USERS)),
        MetricTitle::Conversions => {
            format_thousands(draw_rounded(rng, snapshot_ranges::CONVERSIONS))
        }
        MetricTitle::GrowthRate => {
            let (low, high) = snapshot_ranges::GROWTH_RATE;
            format!("{:.1}%", rng.gen_range(low..high))
        }
    }
}

fn draw_rounded<R: Rng + ?Sized>(rng: &mut R, (low, high): (f64, f64)) -> u64 {
    rng.gen_range(low..high).round() as u64
}
