//! Prefilled URL construction.
//!
//! Turns a form share link plus a list of answers into the `usp=pp_url`
//! link that opens the form with those answers filled in. Two renderings
//! are produced: the encoded URL to distribute and a decoded copy that is
//! easier for a person to check.

mod error;
mod query;
mod unescape;

use crate::form::{Entry, FormSpec};
use chrono::NaiveDate;
use url::{Position, Url};

pub use error::BuildError;
pub use query::QueryParams;
pub use unescape::{unescape_query, UnescapeError};

/// Answer value replaced with the build date.
pub const TODAY_TOKEN: &str = "{today}";
/// `strftime` format used for [`TODAY_TOKEN`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const USP_PARAM: &str = "usp";
const USP_SHARE_LINK: &str = "sf_link";
const USP_PREFILLED: &str = "pp_url";

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefilledUrl {
    /// Percent-encoded URL, safe to send.
    pub encoded: String,
    /// Same URL with the query unescaped; for display only, may not re-parse.
    pub decoded: String,
}

/// Builds the prefilled URLs for `form`.
pub fn build_form(form: &FormSpec, today: NaiveDate) -> Result<PrefilledUrl, BuildError> {
    build(&form.base_url, &form.entries, today)
}

/// Builds the prefilled URLs from `base_url` and `entries`.
///
/// `usp` ends up as `pp_url` whatever it was before. Each entry sets
/// `entry.<question_id>`; a later entry with the same id overwrites an
/// earlier one. Parameters are emitted sorted by name so the same input
/// always gives the same bytes.
pub fn build(
    base_url: &str,
    entries: &[Entry],
    today: NaiveDate,
) -> Result<PrefilledUrl, BuildError> {
    let mut url = Url::parse(base_url).map_err(|source| BuildError::UrlParse {
        url: base_url.to_string(),
        source,
    })?;

    let mut params = QueryParams::from_url(&url);
    if params.get(USP_PARAM) == Some(USP_SHARE_LINK) {
        params.remove(USP_PARAM);
    }
    params.set(USP_PARAM, USP_PREFILLED);

    let today = today.format(DATE_FORMAT).to_string();
    for (index, entry) in entries.iter().enumerate() {
        if entry.question_id.is_empty() {
            return Err(BuildError::Validation { index });
        }
        params.set(entry.param_name(), effective_answer(&entry.answer, &today));
    }
    tracing::debug!(?params, "query parameters");

    let query = params.encode();
    url.set_query(if query.is_empty() { None } else { Some(query.as_str()) });

    let decoded = decode_for_display(&url)?;
    Ok(PrefilledUrl {
        encoded: url.into(),
        decoded,
    })
}

fn effective_answer<'a>(answer: &'a str, today: &'a str) -> &'a str {
    if answer == TODAY_TOKEN {
        today
    } else {
        answer
    }
}

fn decode_for_display(url: &Url) -> Result<String, BuildError> {
    let mut out = String::from(&url[..Position::AfterPath]);
    if let Some(query) = url.query() {
        out.push('?');
        out.push_str(&unescape_query(query)?);
    }
    if let Some(fragment) = url.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    Ok(out)
}
