use serde_json::Value;

/// Pads a jagged table so every row has the longest row's length.
///
/// The values API omits trailing empty cells per row, so positional indexing
/// into a row is only safe after short rows are extended with empty strings.
/// Rows already at full length pass through unchanged, as does an empty
/// table.
pub fn rectangularize(table: Vec<Vec<Value>>) -> Vec<Vec<Value>> {
    let longest = table.iter().map(Vec::len).max().unwrap_or(0);
    table
        .into_iter()
        .map(|mut row| {
            row.resize(longest, Value::String(String::new()));
            row
        })
        .collect()
}
