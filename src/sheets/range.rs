use regex::Regex;
use thiserror::Error;

/// Errors related to A1-style range expressions.
#[derive(Error, Debug)]
pub enum RangeError {
    #[error("Invalid range format '{0}'")]
    MalformedRange(String),
}

/// Composes the wire-format range for a values request.
///
/// The bare sheet name selects the whole sheet; with a custom range the
/// result is `sheet!A1:C6`.
pub fn format_range(sheet_name: &str, custom_range: Option<&str>) -> String {
    match custom_range {
        Some(range) => format!("{sheet_name}!{range}"),
        None => sheet_name.to_owned(),
    }
}

/// Splits a range expression into its start and end cell references.
/// Anything other than exactly two colon-separated components is malformed.
pub fn parse_range(range: &str) -> Result<(&str, &str), RangeError> {
    let mut parts = range.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => Ok((start, end)),
        _ => Err(RangeError::MalformedRange(range.to_owned())),
    }
}

/// Derives the single-row range a header probe should request: the row
/// number comes from the start cell, the column letters from the end cell,
/// so `A1:C6` narrows to `C1:C1`. Probing this subrange populates a column
/// selector without fetching the full range.
pub fn header_row_of(range: &str) -> Result<String, RangeError> {
    let (start, end) = parse_range(range)?;
    let start = start.to_ascii_uppercase();
    let end = end.to_ascii_uppercase();
    let letters = Regex::new(r"[A-Z]").expect("Hardcode regex pattern");
    let digits = Regex::new(r"[0-9]").expect("Hardcode regex pattern");
    let row = letters.replace_all(&start, "");
    let column = digits.replace_all(&end, "");
    Ok(format!("{column}{row}:{column}{row}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_whole_sheet() {
        assert_eq!(format_range("Sheet1", None), "Sheet1");
    }

    #[test]
    fn format_with_custom_range() {
        assert_eq!(format_range("Sheet1", Some("A1:B2")), "Sheet1!A1:B2");
    }

    #[test]
    fn parse_splits_on_single_colon() {
        assert_eq!(parse_range("A1:C6").unwrap(), ("A1", "C6"));
    }

    #[test]
    fn parse_rejects_missing_colon() {
        assert!(matches!(
            parse_range("A1"),
            Err(RangeError::MalformedRange(_))
        ));
    }

    #[test]
    fn parse_rejects_extra_colon() {
        assert!(matches!(
            parse_range("A1:B2:C3"),
            Err(RangeError::MalformedRange(_))
        ));
    }

    #[test]
    fn header_row_takes_start_row_and_end_column() {
        assert_eq!(header_row_of("A1:C6").unwrap(), "C1:C1");
    }

    #[test]
    fn header_row_keeps_multi_letter_columns() {
        assert_eq!(header_row_of("B12:AD30").unwrap(), "AD12:AD12");
    }

    #[test]
    fn header_row_normalizes_case() {
        assert_eq!(header_row_of("a1:c6").unwrap(), "C1:C1");
    }

    #[test]
    fn header_row_rejects_malformed_range() {
        assert!(matches!(
            header_row_of("A1"),
            Err(RangeError::MalformedRange(_))
        ));
    }
}
