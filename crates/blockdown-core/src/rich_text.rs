//! Styled text runs.
//!
//! A block's rich text is an ordered sequence of [`StyledRun`]s, each a
//! contiguous span of text sharing one set of style annotations. Runs are
//! produced by the inline tokenizer and never modified afterwards.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Color tag carried by every run. The supported markdown subset has no
/// color syntax.
pub const DEFAULT_COLOR: &str = "default";

/// A single inline style recognized by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Bold: `**text**`
    Bold,
    /// Italic: `_text_`
    Italic,
    /// Underline: `__text__`
    Underline,
    /// Strikethrough: `~~text~~`
    Strikethrough,
    /// Inline code: `` `text` ``
    Code,
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Style::Bold => write!(f, "bold"),
            Style::Italic => write!(f, "italic"),
            Style::Underline => write!(f, "underline"),
            Style::Strikethrough => write!(f, "strikethrough"),
            Style::Code => write!(f, "code"),
        }
    }
}

/// One contiguous span of text sharing identical style annotations.
///
/// At most one style flag is ever set: the tokenizer does not nest styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// Text content of the span
    pub text: String,
    /// Bold annotation
    pub bold: bool,
    /// Italic annotation
    pub italic: bool,
    /// Underline annotation
    pub underline: bool,
    /// Strikethrough annotation
    pub strikethrough: bool,
    /// Inline code annotation
    pub code: bool,
    /// Color annotation, always [`DEFAULT_COLOR`]
    pub color: String,
}

impl Default for StyledRun {
    fn default() -> Self {
        Self::plain("")
    }
}

impl StyledRun {
    /// Create an unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            code: false,
            color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Create a run with exactly one style flag set.
    ///
    /// # Example
    ///
    /// ```
    /// use blockdown_core::{Style, StyledRun};
    /// let run = StyledRun::styled("hi", Style::Bold);
    /// assert!(run.bold);
    /// assert!(!run.italic);
    /// ```
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        let mut run = Self::plain(text);
        match style {
            Style::Bold => run.bold = true,
            Style::Italic => run.italic = true,
            Style::Underline => run.underline = true,
            Style::Strikethrough => run.strikethrough = true,
            Style::Code => run.code = true,
        }
        run
    }

    /// Check whether no style flag is set.
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.underline || self.strikethrough || self.code)
    }
}

/// `text` object of the wire rich-text entry.
#[derive(Serialize)]
struct TextContent<'a> {
    content: &'a str,
}

/// `annotations` object of the wire rich-text entry.
#[derive(Serialize)]
struct Annotations<'a> {
    bold: bool,
    italic: bool,
    strikethrough: bool,
    underline: bool,
    code: bool,
    color: &'a str,
}

impl Serialize for StyledRun {
    /// Serialize to the wire rich-text entry:
    /// `{ "type": "text", "text": { "content" }, "annotations": { .. } }`.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", "text")?;
        map.serialize_entry("text", &TextContent { content: &self.text })?;
        map.serialize_entry(
            "annotations",
            &Annotations {
                bold: self.bold,
                italic: self.italic,
                strikethrough: self.strikethrough,
                underline: self.underline,
                code: self.code,
                color: &self.color,
            },
        )?;
        map.end()
    }
}
