use thiserror::Error;

/// Errors related to spreadsheet link parsing.
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("No spreadsheet id in link '{0}'")]
    MalformedLink(String),
}

/// Extracts the spreadsheet id from a shared document link.
///
/// The id is the path segment following the first `/d/` marker, running to
/// the next `/` or to the end of the link. No character set or length checks
/// are applied; a bad id is left for the remote service to reject.
pub fn spreadsheet_id_from_link(link: &str) -> Result<String, LinkError> {
    let start = link
        .find("/d/")
        .map(|index| index + "/d/".len())
        .ok_or_else(|| LinkError::MalformedLink(link.to_owned()))?;
    let id = match link[start..].find('/') {
        Some(end) => &link[start..start + end],
        None => &link[start..],
    };
    Ok(id.to_owned())
}
