//! Output block variants.
//!
//! [`Block`] is a closed union over the block kinds the target document API
//! accepts. A converted document is a flat ordered sequence of blocks; no
//! block references another block.

use crate::rich_text::StyledRun;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One structured unit of converter output.
///
/// Each variant carries only the fields its kind needs. Serialization
/// produces the kind-keyed wire shape
/// `{ "object": "block", "type": <tag>, <tag>: payload }`.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// `# ` heading
    Heading1 { rich_text: Vec<StyledRun> },
    /// `## ` heading
    Heading2 { rich_text: Vec<StyledRun> },
    /// `### ` heading
    Heading3 { rich_text: Vec<StyledRun> },
    /// Plain text line
    Paragraph { rich_text: Vec<StyledRun> },
    /// One item of a `*`/`-` list
    BulletItem { rich_text: Vec<StyledRun> },
    /// One item of a `1.`-style list
    NumberedItem { rich_text: Vec<StyledRun> },
    /// External image reference
    Image { url: String },
    /// External video reference
    Video { url: String },
    /// Link line with raw url and optional caption
    Bookmark { url: String, caption: Vec<StyledRun> },
    /// Single-line code, stored raw and never tokenized
    Code { content: String, language: String },
    /// `> ` quote line
    Quote { rich_text: Vec<StyledRun> },
    /// Horizontal divider, no content
    Divider,
}

impl Block {
    /// Wire tag for this block kind, used both as the `type` field and as
    /// the payload key.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading1 { .. } => "heading_1",
            Block::Heading2 { .. } => "heading_2",
            Block::Heading3 { .. } => "heading_3",
            Block::Paragraph { .. } => "paragraph",
            Block::BulletItem { .. } => "bulleted_list_item",
            Block::NumberedItem { .. } => "numbered_list_item",
            Block::Image { .. } => "image",
            Block::Video { .. } => "video",
            Block::Bookmark { .. } => "bookmark",
            Block::Code { .. } => "code",
            Block::Quote { .. } => "quote",
            Block::Divider => "divider",
        }
    }

    /// Rich text carried by this block, if its kind has any.
    ///
    /// For bookmarks this is the caption. Code content is raw text, not
    /// rich text, and returns `None` here.
    pub fn rich_text(&self) -> Option<&[StyledRun]> {
        match self {
            Block::Heading1 { rich_text }
            | Block::Heading2 { rich_text }
            | Block::Heading3 { rich_text }
            | Block::Paragraph { rich_text }
            | Block::BulletItem { rich_text }
            | Block::NumberedItem { rich_text }
            | Block::Quote { rich_text } => Some(rich_text),
            Block::Bookmark { caption, .. } => Some(caption),
            Block::Image { .. } | Block::Video { .. } | Block::Code { .. } | Block::Divider => None,
        }
    }

    /// Concatenated plain text of this block's rich text, styling ignored.
    pub fn plain_text(&self) -> String {
        self.rich_text()
            .map(|runs| runs.iter().map(|run| run.text.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Payload for the rich-text block kinds.
#[derive(Serialize)]
struct RichTextPayload<'a> {
    rich_text: &'a [StyledRun],
}

/// `external` object of a file payload.
#[derive(Serialize)]
struct ExternalFile<'a> {
    url: &'a str,
}

/// Payload for image and video blocks.
#[derive(Serialize)]
struct ExternalPayload<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    external: ExternalFile<'a>,
}

/// Payload for bookmark blocks.
#[derive(Serialize)]
struct BookmarkPayload<'a> {
    url: &'a str,
    caption: &'a [StyledRun],
}

/// Payload for code blocks: one plain run plus a language tag.
#[derive(Serialize)]
struct CodePayload<'a> {
    rich_text: [StyledRun; 1],
    language: &'a str,
}

/// Payload for divider blocks.
#[derive(Serialize)]
struct EmptyPayload {}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", self.kind())?;
        match self {
            Block::Heading1 { rich_text }
            | Block::Heading2 { rich_text }
            | Block::Heading3 { rich_text }
            | Block::Paragraph { rich_text }
            | Block::BulletItem { rich_text }
            | Block::NumberedItem { rich_text }
            | Block::Quote { rich_text } => {
                map.serialize_entry(self.kind(), &RichTextPayload { rich_text })?;
            }
            Block::Image { url } | Block::Video { url } => {
                map.serialize_entry(
                    self.kind(),
                    &ExternalPayload {
                        kind: "external",
                        external: ExternalFile { url },
                    },
                )?;
            }
            Block::Bookmark { url, caption } => {
                map.serialize_entry(self.kind(), &BookmarkPayload { url, caption })?;
            }
            Block::Code { content, language } => {
                map.serialize_entry(
                    self.kind(),
                    &CodePayload {
                        rich_text: [StyledRun::plain(content.as_str())],
                        language,
                    },
                )?;
            }
            Block::Divider => {
                map.serialize_entry(self.kind(), &EmptyPayload {})?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rich_text::Style;
    use serde_json::json;

    #[test]
    fn test_kind_tags() {
        assert_eq!(
            Block::Heading1 { rich_text: vec![] }.kind(),
            "heading_1"
        );
        assert_eq!(
            Block::BulletItem { rich_text: vec![] }.kind(),
            "bulleted_list_item"
        );
        assert_eq!(
            Block::NumberedItem { rich_text: vec![] }.kind(),
            "numbered_list_item"
        );
        assert_eq!(Block::Divider.kind(), "divider");
    }

    #[test]
    fn test_plain_text_concatenation() {
        let block = Block::Paragraph {
            rich_text: vec![
                StyledRun::plain("a "),
                StyledRun::styled("b", Style::Bold),
                StyledRun::plain(" c"),
            ],
        };
        assert_eq!(block.plain_text(), "a b c");
    }

    #[test]
    fn test_plain_text_of_url_blocks_is_empty() {
        let block = Block::Image {
            url: "http://x/y.png".to_string(),
        };
        assert!(block.rich_text().is_none());
        assert_eq!(block.plain_text(), "");
    }

    #[test]
    fn test_paragraph_wire_shape() {
        let block = Block::Paragraph {
            rich_text: vec![StyledRun::plain("hi")],
        };
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["object"], "block");
        assert_eq!(value["type"], "paragraph");
        assert_eq!(value["paragraph"]["rich_text"][0]["text"]["content"], "hi");
    }

    #[test]
    fn test_image_wire_shape() {
        let block = Block::Image {
            url: "http://x/y.png".to_string(),
        };
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({
                "object": "block",
                "type": "image",
                "image": {
                    "type": "external",
                    "external": { "url": "http://x/y.png" }
                }
            })
        );
    }

    #[test]
    fn test_bookmark_wire_shape() {
        let block = Block::Bookmark {
            url: "http://x".to_string(),
            caption: vec![],
        };
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["bookmark"]["url"], "http://x");
        assert_eq!(value["bookmark"]["caption"], json!([]));
    }

    #[test]
    fn test_code_wire_shape() {
        let block = Block::Code {
            content: "let x = 1;".to_string(),
            language: "plain text".to_string(),
        };
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["code"]["language"], "plain text");
        assert_eq!(
            value["code"]["rich_text"][0]["text"]["content"],
            "let x = 1;"
        );
        assert_eq!(value["code"]["rich_text"][0]["annotations"]["code"], false);
    }

    #[test]
    fn test_divider_wire_shape() {
        let value = serde_json::to_value(Block::Divider).unwrap();
        assert_eq!(
            value,
            json!({ "object": "block", "type": "divider", "divider": {} })
        );
    }
}
