use serde_json::Value;

/// A column chosen for import: its position in the source rows paired with
/// the attribute name it maps to.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// 0-based index into the source row
    pub index: usize,
    /// Attribute name in the output dataset
    pub name: String,
}

/// Converts a header-row cell to an attribute name.
/// Non-string cells keep their JSON rendering, so a numeric header of 30
/// names the column "30".
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.to_owned(),
        other => other.to_string(),
    }
}

/// Attribute names taken from the header row of a table.
pub fn header_names(row: &[Value]) -> Vec<String> {
    row.iter().map(cell_text).collect()
}

/// Synthesized attribute names for a headerless table: Column 1, Column 2, ...
pub fn positional_names(width: usize) -> Vec<String> {
    (1..=width).map(|number| format!("Column {number}")).collect()
}

/// Pairs attribute names with their original positions, keeping only the
/// chosen subset when one is given. The result stays in header order no
/// matter how the chosen names are ordered; names matching no header column
/// are dropped.
pub fn select_columns(names: &[String], chosen: Option<&[String]>) -> Vec<Column> {
    names
        .iter()
        .enumerate()
        .filter(|&(_, name)| chosen.map_or(true, |subset| subset.contains(name)))
        .map(|(index, name)| Column {
            index,
            name: name.to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn header_names_stringify_mixed_cells() {
        let row = vec![json!("Name"), json!(30), json!(true), json!(null)];
        assert_eq!(header_names(&row), names(&["Name", "30", "true", "null"]));
    }

    #[test]
    fn positional_names_count_from_one() {
        assert_eq!(positional_names(3), names(&["Column 1", "Column 2", "Column 3"]));
    }

    #[test]
    fn all_columns_keep_their_positions() {
        let columns = select_columns(&names(&["a", "b"]), None);
        assert_eq!(
            columns,
            vec![
                Column { index: 0, name: "a".to_owned() },
                Column { index: 1, name: "b".to_owned() },
            ]
        );
    }

    #[test]
    fn subset_keeps_header_order() {
        let header = names(&["a", "b", "c"]);
        let chosen = names(&["c", "a"]);
        let columns = select_columns(&header, Some(&chosen));
        assert_eq!(
            columns,
            vec![
                Column { index: 0, name: "a".to_owned() },
                Column { index: 2, name: "c".to_owned() },
            ]
        );
    }

    #[test]
    fn unknown_chosen_names_are_dropped() {
        let header = names(&["a", "b"]);
        let chosen = names(&["b", "z"]);
        let columns = select_columns(&header, Some(&chosen));
        assert_eq!(columns, vec![Column { index: 1, name: "b".to_owned() }]);
    }
}
