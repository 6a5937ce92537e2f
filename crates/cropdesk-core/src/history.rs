//! Linear undo/redo history.
//!
//! Two stacks, bottom = oldest. Every value that enters or leaves the history
//! is cloned, so callers never hold a reference into a stack entry.
//!
//! The undo stack holds committed states including the current one: its top
//! is the state on screen. Undoing therefore reveals the entry below the top,
//! and undoing the last remaining entry leaves nothing to show.

/// Result of a successful undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Undone<T> {
    /// The state that is current again after the undo.
    Previous(T),
    /// The sole entry was undone; there is no current state.
    Exhausted,
}

/// Undo/redo stacks with copy-on-push semantics.
#[derive(Debug, Clone)]
pub struct History<T> {
    undo: Vec<T>,
    redo: Vec<T>,
    limit: Option<usize>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            limit: None,
        }
    }
}

impl<T: Clone> History<T> {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `limit` undo entries.
    ///
    /// A limit of zero is treated as one.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit: limit.map(|l| l.max(1)),
            ..Self::default()
        }
    }

    /// Discard everything and start over from `state`.
    pub fn reset_to(&mut self, state: &T) {
        self.undo.clear();
        self.redo.clear();
        self.undo.push(state.clone());
    }

    /// Record a new current state. Invalidates the redo stack.
    pub fn commit(&mut self, state: &T) {
        self.undo.push(state.clone());
        self.redo.clear();

        if let Some(limit) = self.limit {
            if self.undo.len() > limit {
                let excess = self.undo.len() - limit;
                self.undo.drain(..excess);
            }
        }
    }

    /// Move the current state onto the redo stack.
    ///
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Undone<T>> {
        let top = self.undo.pop()?;
        self.redo.push(top);

        Some(match self.undo.last() {
            Some(previous) => Undone::Previous(previous.clone()),
            None => Undone::Exhausted,
        })
    }

    /// Reinstate the most recently undone state.
    ///
    /// Returns `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<T> {
        let next = self.redo.pop()?;
        let current = next.clone();
        self.undo.push(next);
        Some(current)
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl<T> History<T> {
    /// The most recent committed state.
    pub fn undo_top(&self) -> Option<&T> {
        self.undo.last()
    }

    /// The state a redo would reinstate.
    pub fn redo_top(&self) -> Option<&T> {
        self.redo.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Commit(u8),
        Undo,
        Redo,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u8>().prop_map(Op::Commit),
            Just(Op::Undo),
            Just(Op::Redo),
        ]
    }

    proptest! {
        /// Property: Total entries only grow by commits; undo/redo move them.
        #[test]
        fn prop_undo_redo_conserve_entries(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut history = History::new();
            history.reset_to(&0u8);

            for op in ops {
                let before = history.undo_len() + history.redo_len();
                match op {
                    Op::Commit(v) => {
                        let undo_before = history.undo_len();
                        history.commit(&v);
                        prop_assert_eq!(history.redo_len(), 0);
                        prop_assert_eq!(history.undo_len(), undo_before + 1);
                        prop_assert_eq!(history.undo_top(), Some(&v));
                    }
                    Op::Undo => {
                        let top = history.undo_top().copied();
                        history.undo();
                        prop_assert_eq!(history.undo_len() + history.redo_len(), before);
                        if let Some(top) = top {
                            prop_assert_eq!(history.redo_top(), Some(&top));
                        }
                    }
                    Op::Redo => {
                        let next = history.redo_top().copied();
                        let redone = history.redo();
                        prop_assert_eq!(redone, next);
                        prop_assert_eq!(history.undo_len() + history.redo_len(), before);
                    }
                }
            }
        }

        /// Property: Undoing everything then redoing everything is a no-op.
        #[test]
        fn prop_full_undo_redo_roundtrip(values in prop::collection::vec(any::<u8>(), 1..20)) {
            let mut history = History::new();
            history.reset_to(&values[0]);
            for v in &values[1..] {
                history.commit(v);
            }

            while history.undo().is_some() {}
            prop_assert_eq!(history.redo_len(), values.len());

            let mut redone = Vec::new();
            while let Some(v) = history.redo() {
                redone.push(v);
            }
            prop_assert_eq!(redone, values);
        }
    }
}
