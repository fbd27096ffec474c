//! # Remote Spreadsheet Module
//!
//! The inbound half of the importer: the narrow contract for the remote
//! tabular-data service, the document metadata it returns, and thin fetch
//! wrappers that normalize raw cell rows for the transforms in
//! [`crate::dataset`].

pub mod link;
pub mod range;

use crate::dataset::column::cell_text;
use crate::dataset::table::rectangularize;
use crate::error::ImporterError;
use crate::sheets::range::{format_range, header_row_of};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Range requested when probing the header row of a whole-sheet import.
const FIRST_ROW: &str = "1:1";

/// Failures surfaced by the remote values/metadata service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service could not parse the requested range string
    #[error("Range rejected by the spreadsheet service")]
    InvalidRange,

    /// The document or range does not exist or is not public
    #[error("Spreadsheet or range not found")]
    NotFound,

    /// Any other remote failure
    #[error("Spreadsheet service error: {0}")]
    Api(#[from] anyhow::Error),
}

/// Document metadata returned by the remote service.
/// Field names mirror the service's JSON.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Spreadsheet {
    pub spreadsheet_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub spreadsheet_url: Option<String>,
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

/// A single sheet tab inside a document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Sheet {
    pub title: String,
}

impl Spreadsheet {
    /// Title of the first sheet tab, the default selection after opening.
    pub fn first_sheet(&self) -> Option<&str> {
        self.sheets.first().map(|sheet| sheet.title.as_str())
    }
}

/// Contract for the remote tabular-data service. Implementations own
/// transport, authentication and retries; everything above this seam stays
/// synchronous and free of I/O.
pub trait SheetsClient {
    /// Fetches document metadata by id.
    fn spreadsheet(&self, id: &str) -> Result<Spreadsheet, ApiError>;

    /// Fetches the cell values of a range. Rows may be jagged: the service
    /// drops trailing empty cells.
    fn values(&self, id: &str, range: &str) -> Result<Vec<Vec<Value>>, ApiError>;
}

/// Fetches a range and squares off the jagged rows the service returns.
pub fn data_from_sheet(
    client: &impl SheetsClient,
    id: &str,
    range: &str,
) -> Result<Vec<Vec<Value>>, ApiError> {
    let table = client.values(id, range)?;
    log::debug!("fetched {} rows for range '{range}'", table.len());
    Ok(rectangularize(table))
}

/// Probes only the header row of an upcoming import and returns its cells as
/// strings. A custom range is narrowed to its derived header subrange first,
/// so the probe never fetches the full range. An empty probe result yields
/// no names.
pub fn column_names_from_sheet(
    client: &impl SheetsClient,
    id: &str,
    sheet_name: &str,
    custom_range: Option<&str>,
) -> Result<Vec<String>, ImporterError> {
    let first_row = match custom_range {
        Some(range) => header_row_of(range)?,
        None => FIRST_ROW.to_owned(),
    };
    let range = format_range(sheet_name, Some(first_row.as_str()));
    let table = data_from_sheet(client, id, &range)?;
    Ok(table
        .first()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default())
}
