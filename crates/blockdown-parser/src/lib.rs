//! Blockdown Parser
//!
//! Line classifier and block assembler for blockdown. The converter scans
//! a markdown document line by line, classifies each non-empty line with a
//! first-match-wins rule chain, groups consecutive same-kind list lines,
//! and emits a flat ordered sequence of [`Block`]s. Inline text is handed
//! to the [`tokenize`] function in [`tokenizer`].
//!
//! There is no AST: no nested lists, no tables, no multi-line code fences,
//! no escaping. Each invocation is independent and stateless.
//!
//! # Example
//!
//! ```
//! use blockdown_parser::markdown_to_blocks;
//! use blockdown_core::Block;
//!
//! let blocks = markdown_to_blocks("# Title\n\nSome text");
//! assert_eq!(blocks.len(), 2);
//! assert!(matches!(blocks[0], Block::Heading1 { .. }));
//! assert!(matches!(blocks[1], Block::Paragraph { .. }));
//! ```

pub mod options;
pub mod tokenizer;

pub use options::ConvertOptions;
pub use tokenizer::tokenize;

use blockdown_core::{Block, ListKind, ListState};
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// Regex patterns
// =============================================================================

/// Regex for numbered list items: `1. text`
static NUMBERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Regex for link lines: `[caption](url)`
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

/// Regex for the first parenthesized group of an image line
static PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((.*?)\)").unwrap());

/// Regex for runs of blank lines between newlines
static BLANK_LINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Regex for divider lines: three or more dashes
static DIVIDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-{3,}$").unwrap());

/// URL extensions emitted as video blocks instead of image blocks.
const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".mov", ".webm", ".ogg"];

// =============================================================================
// Converter
// =============================================================================

/// Line classifier and block assembler.
///
/// Holds the conversion options and the transient [`ListState`]
/// accumulator. Consumed by [`BlockConverter::convert`]; one converter
/// handles one document.
#[derive(Debug, Default)]
pub struct BlockConverter {
    options: ConvertOptions,
    list: ListState,
    blocks: Vec<Block>,
}

impl BlockConverter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with specific options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            options,
            list: ListState::new(),
            blocks: Vec::new(),
        }
    }

    /// Convert a markdown document into an ordered block sequence.
    ///
    /// Line terminators are normalized to `\n`, blank lines are removed
    /// entirely (they are not paragraph breaks), and every line is trimmed
    /// before classification. Output order equals source line order.
    pub fn convert(mut self, markdown: &str) -> Vec<Block> {
        let normalized = markdown.replace("\r\n", "\n");
        let collapsed = BLANK_LINES_RE.replace_all(&normalized, "\n");
        let document = collapsed.trim();

        for line in document.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            self.classify(line);
        }

        // End of input closes any open list run
        self.flush_list();
        self.blocks
    }

    /// Classify one trimmed, non-empty line.
    ///
    /// Rule order is significant: the first matching rule wins. Every
    /// non-list rule flushes the open list run before emitting.
    fn classify(&mut self, line: &str) {
        trace!("classifying line: {line:?}");

        if let Some(rest) = line.strip_prefix("# ") {
            self.flush_list();
            self.blocks.push(Block::Heading1 {
                rich_text: tokenize(rest),
            });
        } else if let Some(rest) = line.strip_prefix("## ") {
            self.flush_list();
            self.blocks.push(Block::Heading2 {
                rich_text: tokenize(rest),
            });
        } else if let Some(rest) = line.strip_prefix("### ") {
            self.flush_list();
            self.blocks.push(Block::Heading3 {
                rich_text: tokenize(rest),
            });
        } else if let Some(rest) = line
            .strip_prefix("* ")
            .or_else(|| line.strip_prefix("- "))
        {
            self.push_item(ListKind::Bullet, rest);
        } else if let Some(m) = NUMBERED_ITEM_RE.find(line) {
            self.push_item(ListKind::Numbered, &line[m.end()..]);
        } else if line.starts_with('`') {
            self.flush_list();
            // Strip the surrounding backticks; the content stays raw
            let mut inner = line.chars();
            inner.next();
            inner.next_back();
            self.blocks.push(Block::Code {
                content: inner.as_str().to_string(),
                language: self.options.code_language.clone(),
            });
        } else if let Some(rest) = line.strip_prefix("> ") {
            self.flush_list();
            self.blocks.push(Block::Quote {
                rich_text: tokenize(rest),
            });
        } else if line.starts_with("![") && line.contains("](") && line.ends_with(')') {
            self.flush_list();
            // The url is the inside of the first parenthesis pair, which
            // for well-formed lines is the one after the alt text
            match PAREN_RE.captures(line) {
                Some(caps) => {
                    let url = caps[1].to_string();
                    if self.options.detect_video && is_video_url(&url) {
                        self.blocks.push(Block::Video { url });
                    } else {
                        self.blocks.push(Block::Image { url });
                    }
                }
                None => debug!("dropping malformed image line: {line:?}"),
            }
        } else if line.starts_with('[') && line.contains("](") && line.ends_with(')') {
            self.flush_list();
            match LINK_RE.captures(line) {
                Some(caps) => {
                    let caption = &caps[1];
                    let caption = if caption.is_empty() {
                        Vec::new()
                    } else {
                        tokenize(caption)
                    };
                    self.blocks.push(Block::Bookmark {
                        url: caps[2].to_string(),
                        caption,
                    });
                }
                None => debug!("dropping malformed link line: {line:?}"),
            }
        } else if DIVIDER_RE.is_match(line) {
            self.flush_list();
            self.blocks.push(Block::Divider);
        } else {
            self.flush_list();
            self.blocks.push(Block::Paragraph {
                rich_text: tokenize(line),
            });
        }
    }

    /// Route a list line into the accumulator. A kind switch flushes the
    /// old run before the new item is recorded.
    fn push_item(&mut self, kind: ListKind, item: &str) {
        if let Some((kind, items)) = self.list.push(kind, item.to_string()) {
            self.emit_list(kind, items);
        }
    }

    /// Close the open list run and emit its blocks.
    fn flush_list(&mut self) {
        if let Some((kind, items)) = self.list.flush() {
            self.emit_list(kind, items);
        }
    }

    /// One sibling block per accumulated item, each tokenized
    /// independently.
    fn emit_list(&mut self, kind: ListKind, items: Vec<String>) {
        trace!("flushing {} {} list item(s)", items.len(), kind);
        for item in items {
            let rich_text = tokenize(&item);
            self.blocks.push(match kind {
                ListKind::Bullet => Block::BulletItem { rich_text },
                ListKind::Numbered => Block::NumberedItem { rich_text },
            });
        }
    }
}

/// Check a URL for a known video file extension.
fn is_video_url(url: &str) -> bool {
    let url = url.to_ascii_lowercase();
    VIDEO_EXTENSIONS.iter().any(|ext| url.ends_with(ext))
}

/// Convert a markdown document with default options.
pub fn markdown_to_blocks(markdown: &str) -> Vec<Block> {
    BlockConverter::new().convert(markdown)
}
