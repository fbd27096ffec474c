//! # Importer Module
//!
//! Orchestrates one import end to end: resolve the link to a document,
//! compose the wire range from the user's selections, normalize the fetched
//! rows, project them through the column selection, and hand the finished
//! table to the host.

pub mod config;

use crate::dataset::column::{header_names, positional_names, select_columns};
use crate::dataset::{build_dataset, Dataset};
use crate::error::ImporterError;
use crate::helpers::naming::unique_name;
use crate::importer::config::{ColumnChoice, ImportConfig};
use crate::sheets::link::spreadsheet_id_from_link;
use crate::sheets::range::format_range;
use crate::sheets::{column_names_from_sheet, data_from_sheet, SheetsClient, Spreadsheet};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display title used when the source document has no title of its own.
const UNTITLED: &str = "Untitled Sheet";

/// Semantic failures of the import flow itself, as opposed to malformed
/// inputs or remote errors.
#[derive(Error, Debug)]
pub enum ImportError {
    /// A custom-range import was requested with a blank range expression
    #[error("No range expression provided")]
    MissingRange,

    /// The fetched range contains no rows
    #[error("Range contains no values")]
    EmptyRange,

    /// The column selection matched no header column
    #[error("No columns selected")]
    NoColumns,
}

/// Failure reported by the host while creating a table.
#[derive(Error, Debug)]
#[error("Table creation failed: {0}")]
pub struct HostError(#[from] anyhow::Error);

/// Opaque provenance details attached to a created table. The host stores
/// them verbatim.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ImportMetadata {
    /// Link to the source document
    pub source: Option<String>,
    /// RFC 3339 timestamp of the import
    pub import_date: String,
}

/// The finished artifact handed to the host: the dataset plus its display
/// title and provenance metadata.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TableRequest {
    pub dataset: Dataset,
    pub title: String,
    pub metadata: ImportMetadata,
}

/// Contract for the host application that displays created tables.
pub trait TableHost {
    fn create_table(&self, table: &TableRequest) -> Result<(), HostError>;
}

/// Drives the import flow against an injected remote client.
pub struct Importer<C> {
    client: C,
}

impl<C: SheetsClient> Importer<C> {
    pub fn new(client: C) -> Self {
        Importer { client }
    }

    /// Resolves a user-supplied document link to the document's metadata.
    /// The configuration's sheet should default to [`Spreadsheet::first_sheet`].
    pub fn open(&self, link: &str) -> Result<Spreadsheet, ImporterError> {
        let id = spreadsheet_id_from_link(link)?;
        let spreadsheet = self.client.spreadsheet(&id)?;
        log::debug!(
            "opened spreadsheet '{id}' with {} sheets",
            spreadsheet.sheets.len()
        );
        Ok(spreadsheet)
    }

    /// Header-row names for a column selector, honoring the configured
    /// custom range.
    pub fn column_names(
        &self,
        spreadsheet: &Spreadsheet,
        config: &ImportConfig,
    ) -> Result<Vec<String>, ImporterError> {
        column_names_from_sheet(
            &self.client,
            &spreadsheet.spreadsheet_id,
            &config.sheet,
            config.range.as_deref(),
        )
    }

    /// Runs one import to completion and returns the table to hand to the
    /// host. `existing_titles` are the host's current table names; the new
    /// title is made unique against them.
    pub fn import(
        &self,
        spreadsheet: &Spreadsheet,
        config: &ImportConfig,
        existing_titles: &[String],
    ) -> Result<TableRequest, ImporterError> {
        let custom_range = match &config.range {
            Some(range) if range.is_empty() => return Err(ImportError::MissingRange.into()),
            other => other.as_deref(),
        };
        let range = format_range(&config.sheet, custom_range);
        let table = data_from_sheet(&self.client, &spreadsheet.spreadsheet_id, &range)?;
        if table.is_empty() {
            return Err(ImportError::EmptyRange.into());
        }

        let (names, rows) = if config.use_header {
            (header_names(&table[0]), &table[1..])
        } else {
            (positional_names(table[0].len()), &table[..])
        };
        let chosen = match &config.columns {
            ColumnChoice::All => None,
            ColumnChoice::Selected(chosen) => Some(chosen.as_slice()),
        };
        let columns = select_columns(&names, chosen);
        if let Some(chosen) = chosen {
            if columns.is_empty() {
                return Err(ImportError::NoColumns.into());
            }
            if columns.len() < chosen.len() {
                log::warn!("{} chosen columns match no header column", chosen.len() - columns.len());
            }
        }

        let dataset = build_dataset(&columns, rows);
        let title = unique_name(&display_title(spreadsheet, &config.sheet), existing_titles);
        Ok(TableRequest {
            dataset,
            title,
            metadata: ImportMetadata {
                source: spreadsheet.spreadsheet_url.to_owned(),
                import_date: Utc::now().to_rfc3339(),
            },
        })
    }

    /// Runs one import and hands the result to the host.
    pub fn import_into(
        &self,
        host: &impl TableHost,
        spreadsheet: &Spreadsheet,
        config: &ImportConfig,
        existing_titles: &[String],
    ) -> Result<TableRequest, ImporterError> {
        let table = self.import(spreadsheet, config, existing_titles)?;
        host.create_table(&table)?;
        Ok(table)
    }
}

/// Display title for an imported table: document title and sheet title.
fn display_title(spreadsheet: &Spreadsheet, sheet: &str) -> String {
    match &spreadsheet.title {
        Some(title) => format!("{title}/{sheet}"),
        None => UNTITLED.to_owned(),
    }
}
