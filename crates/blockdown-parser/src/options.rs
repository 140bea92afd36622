//! Conversion options.
//!
//! This module contains the `ConvertOptions` struct which holds the few
//! knobs the converter exposes.

use serde::{Deserialize, Serialize};

/// Options controlling block conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Language tag applied to code blocks. Single-line code has no place
    /// to carry a language, so every code block gets this tag.
    /// Default: "plain text"
    #[serde(default = "default_code_language")]
    pub code_language: String,

    /// Emit video blocks for image-syntax lines whose URL has a known
    /// video file extension.
    /// Default: true
    #[serde(default = "default_true")]
    pub detect_video: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            code_language: default_code_language(),
            detect_video: true,
        }
    }
}

fn default_code_language() -> String {
    "plain text".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let options = ConvertOptions::default();
        assert_eq!(options.code_language, "plain text");
        assert!(options.detect_video);
    }

    #[test]
    fn test_serde_partial() {
        let options: ConvertOptions =
            serde_json::from_str(r#"{ "codeLanguage": "rust" }"#).unwrap();
        assert_eq!(options.code_language, "rust");
        assert!(options.detect_video);
    }

    #[test]
    fn test_serde_empty_uses_defaults() {
        let options: ConvertOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.code_language, "plain text");
        assert!(options.detect_video);
    }
}
