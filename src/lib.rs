//! # Google Sheets Importer
//!
//! A library for importing a public Google Sheets document as a tabular
//! dataset ready for a host data-analysis application to display. The user
//! supplies a document link, picks a sheet tab, optionally restricts the
//! import to a cell range, and optionally selects a subset of the header
//! columns; the importer fetches the cell values and produces a normalized,
//! name-keyed dataset.
//!
//! ## Features
//!
//! - **Link resolution**: Extract the document id from any shared link
//! - **Range scoping**: Import a whole sheet or an A1-style sub-rectangle
//! - **Header probing**: Fetch only the header row to populate a column
//!   selector before the full import runs
//! - **Column selection**: Import every column, or a chosen subset in
//!   header order, with positional names for headerless sheets
//! - **Row normalization**: Square off the jagged rows the values API
//!   returns before any positional indexing
//! - **Injected collaborators**: Transport and host embedding stay behind
//!   the [`SheetsClient`] and [`TableHost`] traits, so the transforms are
//!   pure and the whole flow is testable offline
//!
//! ## Usage
//!
//! Implement [`SheetsClient`] over your transport, then drive an
//! [`Importer`]: `open` a link, offer `column_names` for selection, and
//! `import` (or `import_into` a [`TableHost`]) once the user commits.

mod dataset;
mod error;
mod helpers;
mod importer;
mod sheets;

pub use crate::dataset::column::Column;
pub use crate::dataset::table::rectangularize;
pub use crate::dataset::{build_dataset, Attribute, Collection, Dataset};
pub use crate::error::ImporterError;
pub use crate::importer::config::{ColumnChoice, ImportConfig};
pub use crate::importer::{
    HostError, ImportError, ImportMetadata, Importer, TableHost, TableRequest,
};
pub use crate::sheets::link::{spreadsheet_id_from_link, LinkError};
pub use crate::sheets::range::{format_range, header_row_of, parse_range, RangeError};
pub use crate::sheets::{
    column_names_from_sheet, data_from_sheet, ApiError, Sheet, SheetsClient, Spreadsheet,
};
