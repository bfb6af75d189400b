//! CSV export of the derived campaign view.

use crate::consts::cli_consts::export::{FILE_PREFIX, HEADERS};
use crate::data::CampaignRecord;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders `rows` as CSV text: a header line then one line per record.
///
/// Every field is wrapped in double quotes as-is. Quotes or newlines inside a
/// field are not escaped, so such values produce malformed CSV; existing
/// exports depend on this exact output.
pub fn export_csv(rows: &[&CampaignRecord]) -> String {
    let header = HEADERS.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    std::iter::once(header)
        .chain(rows.iter().map(|record| record_fields(record)))
        .map(|fields| {
            fields
                .iter()
                .map(|field| format!("\"{}\"", field))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn record_fields(record: &CampaignRecord) -> Vec<String> {
    vec![
        record.name.to_string(),
        record.status.to_string(),
        record.impressions.to_string(),
        record.clicks.to_string(),
        record.conversions.to_string(),
        record.ctr.to_string(),
        record.cpc.to_string(),
        record.spend.to_string(),
    ]
}

/// File name for an export made on `date`, e.g. `campaign-performance-2024-06-30.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}{}.csv", FILE_PREFIX, date.format("%Y-%m-%d"))
}

/// Writes the CSV for `rows` into `dir`, creating it if needed.
///
/// Returns the path of the written file. An existing file of the same name is
/// overwritten.
pub fn write_export(
    dir: &Path,
    rows: &[&CampaignRecord],
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(export_file_name(date));
    fs::write(&path, export_csv(rows)).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
