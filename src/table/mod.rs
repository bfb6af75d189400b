//! Campaign table: search, sort and CSV export

pub mod controller;
pub mod export;
pub mod sort;

pub use controller::CampaignTable;
pub use export::{ExportError, export_csv, write_export};
pub use sort::{SortDirection, SortField};
