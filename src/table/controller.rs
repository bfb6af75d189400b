//! Campaign table controller
//!
//! Owns the search text and sort state and derives the displayed rows from
//! the immutable record list on every call.

use super::sort::{SortDirection, SortField};
use crate::data::{CAMPAIGNS, CampaignRecord};

#[derive(Debug, Clone)]
pub struct CampaignTable {
    records: Vec<CampaignRecord>,
    search_text: String,
    sort_field: SortField,
    sort_direction: SortDirection,
}

impl Default for CampaignTable {
    fn default() -> Self {
        Self::new(CAMPAIGNS.to_vec())
    }
}

impl CampaignTable {
    /// Creates a controller over `records`, sorted by name ascending with no search.
    pub fn new(records: Vec<CampaignRecord>) -> Self {
        Self {
            records,
            search_text: String::new(),
            sort_field: SortField::Name,
            sort_direction: SortDirection::Ascending,
        }
    }

    pub fn records(&self) -> &[CampaignRecord] {
        &self.records
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Replaces the search text as given; no trimming.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_text.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search_text.pop();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    /// Flips the direction when `field` is already active, otherwise sorts
    /// ascending by `field`.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Filters by case-insensitive name match and stable-sorts by the active field.
    pub fn derive(&self) -> Vec<&CampaignRecord> {
        let needle = self.search_text.to_lowercase();
        let mut rows: Vec<&CampaignRecord> = self
            .records
            .iter()
            .filter(|record| record.name.to_lowercase().contains(&needle))
            .collect();

        let field = self.sort_field;
        match self.sort_direction {
            SortDirection::Ascending => rows.sort_by(|a, b| field.compare(a, b)),
            SortDirection::Descending => rows.sort_by(|a, b| field.compare(b, a)),
        }
        rows
    }
}
