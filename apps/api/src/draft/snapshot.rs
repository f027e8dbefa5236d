#![allow(dead_code)]

//! The persistence port for the draft working copy.
//!
//! Mutations call `save` synchronously; the backing medium (browser-local
//! storage in the web client, memory in tests) is behind the trait so the
//! container stays testable without a browser-like environment.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::portfolio::models::PortfolioData;

/// What gets persisted: the working copy plus the theme selection.
/// UI-only state (current step, modals, export flags) is not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSnapshot {
    pub portfolio_data: PortfolioData,
    pub selected_theme: String,
    pub theme_variant: String,
}

pub trait SnapshotStore {
    fn load(&self) -> Option<DraftSnapshot>;
    fn save(&self, snapshot: &DraftSnapshot);
}

/// Keeps the latest snapshot in memory. Cloning shares the slot, so a
/// test can hand one clone to a draft and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    slot: Arc<Mutex<Option<DraftSnapshot>>>,
}

impl InMemorySnapshotStore {
    pub fn last(&self) -> Option<DraftSnapshot> {
        self.slot.lock().expect("snapshot slot poisoned").clone()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Option<DraftSnapshot> {
        self.last()
    }

    fn save(&self, snapshot: &DraftSnapshot) {
        *self.slot.lock().expect("snapshot slot poisoned") = Some(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_store_round_trip() {
        let store = InMemorySnapshotStore::default();
        assert!(store.load().is_none());

        let snapshot = DraftSnapshot {
            portfolio_data: PortfolioData::default(),
            selected_theme: "modern".to_string(),
            theme_variant: "default".to_string(),
        };
        store.save(&snapshot);
        assert_eq!(store.load(), Some(snapshot));
    }

    #[test]
    fn test_clones_share_the_slot() {
        let store = InMemorySnapshotStore::default();
        let other = store.clone();
        store.save(&DraftSnapshot {
            portfolio_data: PortfolioData::default(),
            selected_theme: "minimal".to_string(),
            theme_variant: "dark".to_string(),
        });
        assert_eq!(other.load().unwrap().selected_theme, "minimal");
    }

    #[test]
    fn test_snapshot_serializes_with_camel_case_keys() {
        let snapshot = DraftSnapshot {
            portfolio_data: PortfolioData::default(),
            selected_theme: "modern".to_string(),
            theme_variant: "default".to_string(),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("portfolioData").is_some());
        assert!(json.get("selectedTheme").is_some());
    }
}
