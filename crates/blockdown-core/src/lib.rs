//! Blockdown Core
//!
//! This crate provides the core types and error definitions
//! for the blockdown markdown-to-block converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Block`] - The closed union of output block kinds
//! - [`StyledRun`], [`Style`] - Styled text spans forming a block's rich text
//! - [`ListState`], [`ListKind`] - The transient list accumulator
//! - [`BlockdownError`] - Error types

pub mod block;
pub mod error;
pub mod rich_text;
pub mod state;

pub use block::Block;
pub use error::{BlockdownError, Result};
pub use rich_text::{Style, StyledRun};
pub use state::{ListKind, ListState};
