//! Domain types shared by the data source, table controller and widgets.

use std::fmt::{Display, Formatter};
use strum::{Display as StrumDisplay, EnumIter};

/// The four headline metrics shown as cards at the top of the dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
pub enum MetricTitle {
    #[strum(to_string = "Total Revenue")]
    TotalRevenue,
    #[strum(to_string = "Active Users")]
    ActiveUsers,
    #[strum(to_string = "Conversions")]
    Conversions,
    #[strum(to_string = "Growth Rate")]
    GrowthRate,
}

/// Qualitative direction of a metric's change since the last period.
#[derive(Debug, Copy, Clone, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum ChangeType {
    Positive,
    Negative,
    Neutral,
}

/// One headline metric card as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub title: MetricTitle,
    /// Display-formatted value, e.g. `$124,592` or `15.8%`.
    pub value: String,
    /// Display-formatted change, e.g. `+12.5% from last month`.
    pub change: String,
    pub change_type: ChangeType,
}

impl MetricSnapshot {
    pub fn new(
        title: MetricTitle,
        value: impl Into<String>,
        change: impl Into<String>,
        change_type: ChangeType,
    ) -> Self {
        Self {
            title,
            value: value.into(),
            change: change.into(),
            change_type,
        }
    }
}

impl Display for MetricSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.title, self.value, self.change)
    }
}

/// A labelled value used by all chart widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
}

impl ChartPoint {
    pub const fn new(label: &'static str, value: f64) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, StrumDisplay, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    /// Lower-case name, as shown in exports and compared when sorting.
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }

    /// Capitalized label used for the status badge.
    pub fn badge_label(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Completed => "Completed",
        }
    }
}

/// A single row of the campaign performance table.
///
/// `ctr` and `cpc` are supplied alongside the counters rather than derived
/// from them; nothing checks that they agree.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub status: CampaignStatus,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: u64,
    /// Click-through rate, in percent.
    pub ctr: f64,
    /// Cost per click, in dollars.
    pub cpc: f64,
}
