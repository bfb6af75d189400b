//! Static baseline data set loaded at startup.

use super::models::{
    CampaignRecord, CampaignStatus, ChangeType, ChartPoint, MetricSnapshot, MetricTitle,
};

/// Monthly revenue for the trend chart.
pub const REVENUE_DATA: [ChartPoint; 6] = [
    ChartPoint::new("Jan", 85_000.0),
    ChartPoint::new("Feb", 92_000.0),
    ChartPoint::new("Mar", 89_000.0),
    ChartPoint::new("Apr", 105_000.0),
    ChartPoint::new("May", 118_000.0),
    ChartPoint::new("Jun", 124_592.0),
];

/// Users by acquisition channel.
pub const ACQUISITION_DATA: [ChartPoint; 6] = [
    ChartPoint::new("Organic Search", 3_420.0),
    ChartPoint::new("Paid Search", 2_890.0),
    ChartPoint::new("Social Media", 1_850.0),
    ChartPoint::new("Email", 1_240.0),
    ChartPoint::new("Direct", 980.0),
    ChartPoint::new("Referral", 562.0),
];

/// Share of traffic per source, in percent.
pub const TRAFFIC_SOURCES: [ChartPoint; 5] = [
    ChartPoint::new("Organic", 45.0),
    ChartPoint::new("Paid Ads", 25.0),
    ChartPoint::new("Social", 15.0),
    ChartPoint::new("Email", 10.0),
    ChartPoint::new("Direct", 5.0),
];

pub const CAMPAIGNS: [CampaignRecord; 5] = [
    CampaignRecord {
        id: "camp_001",
        name: "Summer Sale 2024",
        status: CampaignStatus::Active,
        impressions: 125_000,
        clicks: 4_250,
        conversions: 128,
        spend: 5_420,
        ctr: 3.4,
        cpc: 1.28,
    },
    CampaignRecord {
        id: "camp_002",
        name: "Brand Awareness Q2",
        status: CampaignStatus::Active,
        impressions: 98_000,
        clicks: 2_940,
        conversions: 89,
        spend: 3_780,
        ctr: 3.0,
        cpc: 1.29,
    },
    CampaignRecord {
        id: "camp_003",
        name: "Product Launch",
        status: CampaignStatus::Completed,
        impressions: 156_000,
        clicks: 6_240,
        conversions: 245,
        spend: 8_950,
        ctr: 4.0,
        cpc: 1.43,
    },
    CampaignRecord {
        id: "camp_004",
        name: "Retargeting Campaign",
        status: CampaignStatus::Active,
        impressions: 87_000,
        clicks: 3_480,
        conversions: 156,
        spend: 4_250,
        ctr: 4.0,
        cpc: 1.22,
    },
    CampaignRecord {
        id: "camp_005",
        name: "Holiday Promotion",
        status: CampaignStatus::Paused,
        impressions: 203_000,
        clicks: 7_890,
        conversions: 298,
        spend: 12_400,
        ctr: 3.9,
        cpc: 1.57,
    },
];

/// Headline metrics as shown before the first refresh.
pub fn baseline_metrics() -> Vec<MetricSnapshot> {
    vec![
        MetricSnapshot::new(
            MetricTitle::TotalRevenue,
            "$124,592",
            "+12.5% from last month",
            ChangeType::Positive,
        ),
        MetricSnapshot::new(
            MetricTitle::ActiveUsers,
            "8,942",
            "+3.2% from last month",
            ChangeType::Positive,
        ),
        MetricSnapshot::new(
            MetricTitle::Conversions,
            "1,429",
            "+8.1% from last month",
            ChangeType::Positive,
        ),
        MetricSnapshot::new(
            MetricTitle::GrowthRate,
            "15.8%",
            "-2.1% from last month",
            ChangeType::Negative,
        ),
    ]
}
