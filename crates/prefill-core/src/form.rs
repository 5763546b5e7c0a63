//! Form description: the base URL plus the answers to prefill.

use serde::{Deserialize, Serialize};

/// A form to prefill, as read from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSpec {
    /// Share link of the form (e.g. `.../viewform?usp=sf_link`).
    #[serde(default)]
    pub base_url: String,
    /// Answers in the order they are applied.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Question identifier as it appears after `entry.` in the form HTML.
    pub question_id: String,
    /// Answer text. The literal `{today}` is replaced with the current date.
    #[serde(default)]
    pub answer: String,
    /// Free-form note for the operator; ignored when building the URL.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Entry {
    pub fn new(question_id: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            answer: answer.into(),
            comment: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Name of the query parameter this entry fills.
    pub fn param_name(&self) -> String {
        format!("entry.{}", self.question_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_name_keeps_dotted_suffix() {
        let e = Entry::new("237993201.other_option_response", "text");
        assert_eq!(e.param_name(), "entry.237993201.other_option_response");
    }

    #[test]
    fn with_comment_sets_note() {
        let e = Entry::new("1", "Tokyo").with_comment("office");
        assert_eq!(e.question_id, "1");
        assert_eq!(e.answer, "Tokyo");
        assert_eq!(e.comment, "office");
    }
}
