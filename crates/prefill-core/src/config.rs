//! Form config loading (TOML).

use crate::form::FormSpec;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Conventional config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "prefill.toml";

/// Sample config written by `prefill --init`.
const TEMPLATE: &str = r#"# Share link of the form ("Send" > link icon in the form editor).
base_url = "https://docs.google.com/forms/d/e/FORM_ID/viewform?usp=sf_link"

# One [[entries]] block per question, applied in order.
# question_id is the number after "entry." in the form's prefilled link.
# answer "{today}" is replaced with the current date (YYYY-MM-DD).

[[entries]]
question_id = "917226918"
answer = "Tokyo"
comment = "Office"

[[entries]]
question_id = "59099188"
answer = "{today}"
comment = "Date (YYYY-MM-DD)"

[[entries]]
question_id = "646785265"
answer = "1234567890"
comment = "Employee number"

[[entries]]
question_id = "1446251705"
answer = "Taro Yamada"
comment = "Name"

[[entries]]
question_id = "237993201"
answer = "__other_option__"
comment = "Radio button: select the \"Other\" option"

[[entries]]
question_id = "237993201.other_option_response"
answer = "Text"
comment = "Radio button: text for the \"Other\" option"
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config{}", describe_path(.path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },
    #[error("config is missing a non-empty `base_url`")]
    MissingBaseUrl,
    #[error("refusing to overwrite existing file {}", .path.display())]
    AlreadyExists { path: PathBuf },
    #[error("cannot write config {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Parses a form config from TOML text.
pub fn parse(text: &str) -> Result<FormSpec, ConfigError> {
    let form: FormSpec =
        toml::from_str(text).map_err(|source| ConfigError::Parse { path: None, source })?;
    check(form)
}

/// Reads and parses the form config at `path`.
pub fn load(path: &Path) -> Result<FormSpec, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let form: FormSpec = toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: Some(path.to_path_buf()),
        source,
    })?;
    let form = check(form)?;
    tracing::debug!(
        "loaded {} entries from {}",
        form.entries.len(),
        path.display()
    );
    Ok(form)
}

/// Writes the sample config to `path`; fails if the file already exists.
pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    fs::write(path, TEMPLATE).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("wrote config template to {}", path.display());
    Ok(())
}

fn describe_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

fn check(form: FormSpec) -> Result<FormSpec, ConfigError> {
    if form.base_url.trim().is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }
    Ok(form)
}
