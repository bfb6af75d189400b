//! Sort keys for the campaign table.
//!
//! Comparison behaviour is chosen from [`SortField::kind`] before any values
//! are looked at, so a field always compares the same way.

use crate::data::CampaignRecord;
use std::cmp::Ordering;
use strum::{Display, EnumIter};

/// Column the campaign table can be ordered by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumIter, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum SortField {
    Id,
    Name,
    Status,
    Impressions,
    Clicks,
    Conversions,
    Spend,
    Ctr,
    Cpc,
}

/// How values of a field are compared.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldKind {
    Text,
    Numeric,
}

/// The value a record contributes to an ordering on one field.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SortKey {
    Text(&'static str),
    Numeric(f64),
}

impl SortKey {
    pub fn kind(&self) -> FieldKind {
        match self {
            SortKey::Text(_) => FieldKind::Text,
            SortKey::Numeric(_) => FieldKind::Numeric,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Display)]
pub enum SortDirection {
    #[default]
    #[strum(to_string = "asc")]
    Ascending,
    #[strum(to_string = "desc")]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow glyph shown next to the active column header.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

impl SortField {
    pub fn kind(self) -> FieldKind {
        match self {
            SortField::Id | SortField::Name | SortField::Status => FieldKind::Text,
            SortField::Impressions
            | SortField::Clicks
            | SortField::Conversions
            | SortField::Spend
            | SortField::Ctr
            | SortField::Cpc => FieldKind::Numeric,
        }
    }

    /// The record's value on this field. Its variant always matches [`SortField::kind`].
    pub fn key(self, record: &CampaignRecord) -> SortKey {
        match self {
            SortField::Id => SortKey::Text(record.id),
            SortField::Name => SortKey::Text(record.name),
            SortField::Status => SortKey::Text(record.status.as_str()),
            SortField::Impressions => SortKey::Numeric(record.impressions as f64),
            SortField::Clicks => SortKey::Numeric(record.clicks as f64),
            SortField::Conversions => SortKey::Numeric(record.conversions as f64),
            SortField::Spend => SortKey::Numeric(record.spend as f64),
            SortField::Ctr => SortKey::Numeric(record.ctr),
            SortField::Cpc => SortKey::Numeric(record.cpc),
        }
    }

    /// Ascending comparison of two records on this field.
    pub fn compare(self, a: &CampaignRecord, b: &CampaignRecord) -> Ordering {
        match (self.key(a), self.key(b)) {
            (SortKey::Text(x), SortKey::Text(y)) => locale_compare(x, y),
            (SortKey::Numeric(x), SortKey::Numeric(y)) => x.total_cmp(&y),
            // unreachable while key() agrees with kind(); still a total order
            (x, y) => x.kind().cmp(&y.kind()),
        }
    }
}

/// Case-insensitive comparison with a case tie-break, lower-case first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}
