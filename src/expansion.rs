use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which feature cards currently show their detail panel.
///
/// Holds the positional indices of expanded cards. Each card's status is
/// independent of every other card's, so any subset of the catalog may be
/// expanded at once. Created empty when the landing view mounts and dropped
/// with it; never persisted.
///
/// Serializes as the sorted list of expanded indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionState {
    expanded: BTreeSet<usize>,
}

impl ExpansionState {
    /// Empty state: every card collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the card at `index` currently showing its detail panel?
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Flip the card at `index` between collapsed and expanded.
    ///
    /// The sole mutator. Collapses the card if it is expanded, expands it
    /// otherwise; no other index is affected.
    pub fn toggle(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_collapsed() {
        let state = ExpansionState::new();
        for i in 0..5 {
            assert!(!state.is_expanded(i));
        }
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut state = ExpansionState::new();
        state.toggle(2);
        assert!(state.is_expanded(2));
        state.toggle(2);
        assert!(!state.is_expanded(2));
    }

    #[test]
    fn toggle_leaves_other_indices_alone() {
        let mut state = ExpansionState::new();
        state.toggle(0);
        state.toggle(2);
        assert!(state.is_expanded(0));
        assert!(!state.is_expanded(1));
        assert!(state.is_expanded(2));

        state.toggle(0);
        assert!(!state.is_expanded(0));
        assert!(state.is_expanded(2));
    }

    #[test]
    fn toggle_sequence_over_five_cards() {
        let mut state = ExpansionState::new();

        state.toggle(1);
        assert!(state.is_expanded(1));

        state.toggle(1);
        assert_eq!(state, ExpansionState::new());

        state.toggle(3);
        state.toggle(4);
        assert!(state.is_expanded(3));
        assert!(state.is_expanded(4));
        assert!(!state.is_expanded(0));
    }

    #[test]
    fn serializes_as_sorted_index_list() {
        let mut state = ExpansionState::new();
        state.toggle(4);
        state.toggle(0);
        state.toggle(2);

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"expanded":[0,2,4]}"#);
    }

    #[test]
    fn round_trips_through_serde() {
        let mut state = ExpansionState::new();
        state.toggle(1);
        state.toggle(3);

        let json = serde_json::to_string(&state).unwrap();
        let restored: ExpansionState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);

        let empty = ExpansionState::new();
        let json = serde_json::to_string(&empty).unwrap();
        let restored: ExpansionState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, empty);
    }
}
