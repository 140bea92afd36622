//! Blockdown
//!
//! Converts a constrained subset of Markdown into an ordered sequence of
//! block objects matching a third-party document API's schema: headings,
//! paragraphs, lists, images, quotes, code, bookmarks, and dividers.
//!
//! # Overview
//!
//! The work is split across two internal crates, re-exported here:
//! - `blockdown-core` - [`Block`], [`StyledRun`], error types
//! - `blockdown-parser` - [`tokenize`] and the [`BlockConverter`] line
//!   classifier
//!
//! The [`handler`] module wraps the converter in a request/response
//! adapter for function hosts.
//!
//! # Example
//!
//! ```
//! use blockdown::{markdown_to_blocks, Block};
//!
//! let blocks = markdown_to_blocks("# Title\n\n- one\n- two");
//! assert_eq!(blocks.len(), 3);
//! assert!(matches!(blocks[0], Block::Heading1 { .. }));
//! ```

pub mod handler;

pub use blockdown_core::{Block, BlockdownError, ListKind, ListState, Result, Style, StyledRun};
pub use blockdown_parser::{markdown_to_blocks, tokenize, BlockConverter, ConvertOptions};
pub use handler::{handle, handle_json, Request, Response};
