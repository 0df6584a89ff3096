//! Title extraction
//!
//! This is a plain text search, not an HTML parser: the title is whatever sits
//! between the first literal `<title>` and the next `</title>`. Attribute-bearing
//! tags, other casings and entities are not recognized.

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

const OPEN_TAG: &str = "<title>";
const CLOSE_TAG: &str = "</title>";

/// Why a title could not be extracted
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read response body: {0}")]
    Read(#[from] std::io::Error),

    #[error("no <title> tag found")]
    MissingOpenTag,

    #[error("no </title> tag found")]
    MissingCloseTag,
}

/// Finds the first title in `html`
///
/// Returns the text strictly between the markers, verbatim: no trimming and
/// no entity decoding. `<title></title>` yields an empty string.
///
/// # Example
///
/// ```
/// use title_scout::crawler::find_title;
///
/// assert_eq!(find_title("<head><title>Home</title></head>").unwrap(), "Home");
/// assert!(find_title("<title>Unclosed").is_err());
/// ```
pub fn find_title(html: &str) -> Result<&str, ExtractError> {
    let start = html.find(OPEN_TAG).ok_or(ExtractError::MissingOpenTag)? + OPEN_TAG.len();
    let len = html[start..]
        .find(CLOSE_TAG)
        .ok_or(ExtractError::MissingCloseTag)?;
    Ok(&html[start..start + len])
}

/// Reads `body` to the end and extracts its title
///
/// Invalid UTF-8 is replaced rather than rejected, so a page in another
/// encoding still yields its ASCII-compatible markers.
pub async fn extract_title<R>(mut body: R) -> Result<String, ExtractError>
where
    R: AsyncRead + Unpin,
{
    let mut data = Vec::new();
    body.read_to_end(&mut data).await?;
    let html = String::from_utf8_lossy(&data);
    find_title(&html).map(str::to_owned)
}
