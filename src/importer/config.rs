use serde::{Deserialize, Serialize};

/// Which columns of the header row end up in the dataset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ColumnChoice {
    /// Import every column
    #[default]
    All,
    /// Import only the named columns; output order still follows the header
    Selected(Vec<String>),
}

/// One import's worth of user selections, independent of any widget types.
/// `ImportConfig::default()` is the reset state: first row as names, whole
/// sheet, every column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Title of the sheet tab to read
    pub sheet: String,
    /// Whether the first row carries the column names
    pub use_header: bool,
    /// Cell range to restrict the import to, None for the whole sheet
    pub range: Option<String>,
    /// Column subset to import
    pub columns: ColumnChoice,
}

impl Default for ImportConfig {
    fn default() -> Self {
        ImportConfig {
            sheet: String::new(),
            use_header: true,
            range: None,
            columns: ColumnChoice::All,
        }
    }
}

impl ImportConfig {
    /// Reverts every selection to its default.
    pub fn reset(&mut self) {
        *self = ImportConfig::default();
    }
}
