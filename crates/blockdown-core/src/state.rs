//! List accumulation state for the block assembler.
//!
//! Consecutive list lines of the same kind are grouped into one run before
//! being flattened into sibling blocks. [`ListState`] is the explicit state
//! machine for that grouping; it exists only for the duration of a single
//! conversion.

use serde::{Deserialize, Serialize};

/// Kind of list being accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    /// Unordered list with bullets (*, -)
    Bullet,
    /// Ordered list with numbers (1., 2., etc.)
    Numbered,
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Bullet => write!(f, "bullet"),
            ListKind::Numbered => write!(f, "numbered"),
        }
    }
}

/// Transient accumulator for consecutive same-kind list lines.
///
/// Holds raw item strings, not blocks: items are tokenized only when the
/// run is flushed. A flushed run is discarded; a later list of the same
/// kind starts a fresh accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    /// Not inside a list run
    #[default]
    Idle,
    /// Collecting items of a bullet list
    AccumulatingBullets(Vec<String>),
    /// Collecting items of a numbered list
    AccumulatingNumbers(Vec<String>),
}

impl ListState {
    /// Create a new idle accumulator.
    pub fn new() -> Self {
        ListState::Idle
    }

    /// Kind of the open run, if any.
    pub fn kind(&self) -> Option<ListKind> {
        match self {
            ListState::Idle => None,
            ListState::AccumulatingBullets(_) => Some(ListKind::Bullet),
            ListState::AccumulatingNumbers(_) => Some(ListKind::Numbered),
        }
    }

    /// Check whether no run is open.
    pub fn is_idle(&self) -> bool {
        matches!(self, ListState::Idle)
    }

    /// Number of items in the open run.
    pub fn len(&self) -> usize {
        match self {
            ListState::Idle => 0,
            ListState::AccumulatingBullets(items) | ListState::AccumulatingNumbers(items) => {
                items.len()
            }
        }
    }

    /// Check whether the open run has no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append one raw item of the given kind.
    ///
    /// A kind switch closes the open run first and returns it, so the
    /// caller can emit its blocks before the new run begins. Appending to
    /// a same-kind run returns `None`.
    pub fn push(&mut self, kind: ListKind, item: String) -> Option<(ListKind, Vec<String>)> {
        let flushed = if self.kind() == Some(kind) {
            None
        } else {
            self.flush()
        };

        match self {
            ListState::AccumulatingBullets(items) | ListState::AccumulatingNumbers(items) => {
                items.push(item);
            }
            ListState::Idle => {
                *self = match kind {
                    ListKind::Bullet => ListState::AccumulatingBullets(vec![item]),
                    ListKind::Numbered => ListState::AccumulatingNumbers(vec![item]),
                };
            }
        }

        flushed
    }

    /// Close the open run, returning its kind and items in accumulation
    /// order. Idle afterwards.
    pub fn flush(&mut self) -> Option<(ListKind, Vec<String>)> {
        match std::mem::take(self) {
            ListState::Idle => None,
            ListState::AccumulatingBullets(items) => Some((ListKind::Bullet, items)),
            ListState::AccumulatingNumbers(items) => Some((ListKind::Numbered, items)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_kind_display() {
        assert_eq!(ListKind::Bullet.to_string(), "bullet");
        assert_eq!(ListKind::Numbered.to_string(), "numbered");
    }

    #[test]
    fn test_starts_idle() {
        let state = ListState::new();
        assert!(state.is_idle());
        assert!(state.kind().is_none());
        assert_eq!(state.len(), 0);
    }

    #[test]
    fn test_same_kind_accumulates() {
        let mut state = ListState::new();
        assert!(state.push(ListKind::Bullet, "one".into()).is_none());
        assert!(state.push(ListKind::Bullet, "two".into()).is_none());

        assert_eq!(state.kind(), Some(ListKind::Bullet));
        assert_eq!(state.len(), 2);

        let (kind, items) = state.flush().unwrap();
        assert_eq!(kind, ListKind::Bullet);
        assert_eq!(items, vec!["one".to_string(), "two".to_string()]);
        assert!(state.is_idle());
    }

    #[test]
    fn test_kind_switch_flushes() {
        let mut state = ListState::new();
        state.push(ListKind::Bullet, "a".into());
        state.push(ListKind::Bullet, "b".into());

        let flushed = state.push(ListKind::Numbered, "1".into());
        let (kind, items) = flushed.unwrap();
        assert_eq!(kind, ListKind::Bullet);
        assert_eq!(items.len(), 2);

        // The switching item opens the new run
        assert_eq!(state.kind(), Some(ListKind::Numbered));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_flush_when_idle() {
        let mut state = ListState::new();
        assert!(state.flush().is_none());
    }

    #[test]
    fn test_no_merging_across_flushes() {
        let mut state = ListState::new();
        state.push(ListKind::Numbered, "first".into());
        state.flush();

        // Same kind again starts fresh
        state.push(ListKind::Numbered, "second".into());
        let (_, items) = state.flush().unwrap();
        assert_eq!(items, vec!["second".to_string()]);
    }
}
