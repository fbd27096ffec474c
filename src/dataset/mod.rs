//! # Dataset Module
//!
//! The host-facing half of the importer: the name-keyed tabular structure
//! handed over for display, and the transforms that square off raw sheet
//! rows and project them through a column selection.

pub mod column;
pub mod table;

use crate::dataset::column::Column;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Collection name used for every import.
const COLLECTION_NAME: &str = "Cases";

/// An attribute (column) definition in the output dataset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Attribute {
    pub name: String,
}

/// A group of attribute definitions. Imports always produce a single
/// collection named "Cases".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    pub name: String,
    pub labels: Map<String, Value>,
    pub attrs: Vec<Attribute>,
}

/// The tabular structure handed to the host: attribute definitions plus one
/// name-keyed record per data row.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub collections: Vec<Collection>,
    pub records: Vec<Map<String, Value>>,
}

/// Builds the output dataset by projecting every row through the column
/// selection: each record maps a selected column's name to the cell at that
/// column's original index. Cells outside the selection are dropped, and an
/// index beyond the end of a row maps to null. Attribute order follows the
/// selection; an empty selection yields empty attributes and empty records.
pub fn build_dataset(columns: &[Column], rows: &[Vec<Value>]) -> Dataset {
    let attributes = columns
        .iter()
        .map(|column| Attribute {
            name: column.name.to_owned(),
        })
        .collect();
    let records = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| {
                    let value = row.get(column.index).cloned().unwrap_or(Value::Null);
                    (column.name.to_owned(), value)
                })
                .collect()
        })
        .collect();
    Dataset {
        collections: vec![Collection {
            name: COLLECTION_NAME.to_owned(),
            labels: Map::new(),
            attrs: attributes,
        }],
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn column(index: usize, name: &str) -> Column {
        Column {
            index,
            name: name.to_owned(),
        }
    }

    fn record(entries: &[(&str, Value)]) -> Map<String, Value> {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_owned()))
            .collect()
    }

    #[test]
    fn projects_rows_through_column_indexes() {
        let columns = vec![column(0, "Name"), column(2, "Age")];
        let rows = vec![
            vec![json!("Alice"), json!(30), json!("x")],
            vec![json!("Bob"), json!(25), json!("y")],
        ];
        let dataset = build_dataset(&columns, &rows);

        assert_eq!(dataset.collections.len(), 1);
        assert_eq!(dataset.collections[0].name, "Cases");
        assert_eq!(
            dataset.collections[0].attrs,
            vec![
                Attribute { name: "Name".to_owned() },
                Attribute { name: "Age".to_owned() },
            ]
        );
        assert_eq!(
            dataset.records,
            vec![
                record(&[("Name", json!("Alice")), ("Age", json!("x"))]),
                record(&[("Name", json!("Bob")), ("Age", json!("y"))]),
            ]
        );
    }

    #[test]
    fn attribute_order_follows_selection() {
        let columns = vec![column(1, "b"), column(0, "a")];
        let dataset = build_dataset(&columns, &[]);
        assert_eq!(
            dataset.collections[0].attrs,
            vec![
                Attribute { name: "b".to_owned() },
                Attribute { name: "a".to_owned() },
            ]
        );
    }

    #[test]
    fn index_beyond_row_maps_to_null() {
        let columns = vec![column(5, "missing")];
        let rows = vec![vec![json!("only")]];
        let dataset = build_dataset(&columns, &rows);
        assert_eq!(dataset.records, vec![record(&[("missing", json!(null))])]);
    }

    #[test]
    fn empty_selection_yields_empty_records() {
        let rows = vec![vec![json!("a")], vec![json!("b")]];
        let dataset = build_dataset(&[], &rows);
        assert!(dataset.collections[0].attrs.is_empty());
        assert_eq!(dataset.records, vec![Map::new(), Map::new()]);
    }
}
