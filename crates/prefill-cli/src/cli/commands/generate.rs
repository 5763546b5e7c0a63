//! Default command: load the config, build both URLs, format them for stdout.

use anyhow::Result;
use chrono::NaiveDate;
use prefill_core::{build_form, config, PrefilledUrl};
use std::path::Path;

/// Loads `path` and returns the text to print. Nothing is printed on error.
pub fn run_generate(path: &Path, today: NaiveDate) -> Result<String> {
    let form = config::load(path)?;
    tracing::info!(
        "building prefilled URL for {} entries (today={})",
        form.entries.len(),
        today
    );
    let url = build_form(&form, today)?;
    Ok(render(&url))
}

fn render(url: &PrefilledUrl) -> String {
    format!(
        "=== Prefilled URL ===\nDecoded URL:\n{}\n\nEncoded URL:\n{}\n",
        url.decoded, url.encoded
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn render_layout() {
        let url = PrefilledUrl {
            encoded: "https://e.example/f?entry.1=a+b&usp=pp_url".to_string(),
            decoded: "https://e.example/f?entry.1=a b&usp=pp_url".to_string(),
        };
        assert_eq!(
            render(&url),
            "=== Prefilled URL ===\n\
             Decoded URL:\nhttps://e.example/f?entry.1=a b&usp=pp_url\n\n\
             Encoded URL:\nhttps://e.example/f?entry.1=a+b&usp=pp_url\n"
        );
    }

    #[test]
    fn generate_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(
            b"base_url = \"https://docs.google.com/forms/d/e/X/viewform?usp=sf_link\"\n\
              [[entries]]\nquestion_id = \"2\"\nanswer = \"{today}\"\n",
        )
        .unwrap();
        f.flush().unwrap();
        let out = run_generate(f.path(), day()).unwrap();
        assert!(out.contains(
            "Encoded URL:\nhttps://docs.google.com/forms/d/e/X/viewform?entry.2=2024-01-15&usp=pp_url\n"
        ));
    }

    #[test]
    fn generate_missing_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_generate(&dir.path().join("missing.toml"), day()).unwrap_err();
        assert!(format!("{err:#}").contains("cannot read config"));
    }

    #[test]
    fn generate_reports_empty_question_id() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(
            b"base_url = \"https://example.com/f\"\n[[entries]]\nquestion_id = \"\"\nanswer = \"x\"\n",
        )
        .unwrap();
        f.flush().unwrap();
        let err = run_generate(f.path(), day()).unwrap_err();
        assert_eq!(err.to_string(), "entry 0: question_id must not be empty");
    }
}
