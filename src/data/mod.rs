//! Static dashboard data and the randomized metrics generator

pub mod mock;
pub mod models;
pub mod snapshot;

pub use mock::{ACQUISITION_DATA, CAMPAIGNS, REVENUE_DATA, TRAFFIC_SOURCES, baseline_metrics};
pub use models::{
    CampaignRecord, CampaignStatus, ChangeType, ChartPoint, MetricSnapshot, MetricTitle,
};
pub use snapshot::{generate_snapshot, generate_snapshot_with};
