//! Error type for URL building.

use super::unescape::UnescapeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// Base URL could not be parsed as an absolute URL.
    #[error("invalid base URL {url:?}")]
    UrlParse {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Entry at `index` (0-based) has an empty question identifier.
    #[error("entry {index}: question_id must not be empty")]
    Validation { index: usize },
    /// The encoded query could not be unescaped for display.
    #[error("failed to decode query for display")]
    Decode(#[from] UnescapeError),
}
