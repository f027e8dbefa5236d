#![allow(dead_code)]

//! The client working copy as an explicit state container.
//!
//! `PortfolioDraft` owns the editable `PortfolioData` plus the theme
//! selection and writes a snapshot through its injected [`SnapshotStore`]
//! after every mutation — a synchronous crash-recovery cache, not a sync
//! source of truth. Collection items are addressed by [`EditId`]s the
//! draft allocates; loading server data through `import_data` replaces the
//! whole working copy (overwrite semantics, no per-field merge).

pub mod snapshot;

use crate::portfolio::completion::{completion_score, contact_completion};
use crate::portfolio::mapping::to_server_shape;
use crate::portfolio::models::{
    Achievement, Contact, EditId, Education, Experience, Personal, PortfolioData, Project,
    ServerPortfolio, Skills, ThemeSelection,
};
use self::snapshot::{DraftSnapshot, SnapshotStore};

pub struct PortfolioDraft<S: SnapshotStore> {
    data: PortfolioData,
    theme: ThemeSelection,
    store: S,
}

impl<S: SnapshotStore> PortfolioDraft<S> {
    /// Restores the last snapshot from the store, or starts empty.
    pub fn with_store(store: S) -> Self {
        let snapshot = store.load();
        match snapshot {
            Some(s) => PortfolioDraft {
                data: s.portfolio_data,
                theme: ThemeSelection {
                    selected_theme: s.selected_theme,
                    theme_variant: s.theme_variant,
                },
                store,
            },
            None => PortfolioDraft {
                data: PortfolioData::default(),
                theme: ThemeSelection::default(),
                store,
            },
        }
    }

    pub fn data(&self) -> &PortfolioData {
        &self.data
    }

    pub fn theme(&self) -> &ThemeSelection {
        &self.theme
    }

    // ── Theme ────────────────────────────────────────────────────────────

    pub fn set_theme(&mut self, theme: &str) {
        self.theme.selected_theme = theme.to_string();
        self.persist();
    }

    pub fn set_theme_variant(&mut self, variant: &str) {
        self.theme.theme_variant = variant.to_string();
        self.persist();
    }

    // ── Singleton sections ───────────────────────────────────────────────

    pub fn update_personal(&mut self, apply: impl FnOnce(&mut Personal)) {
        apply(&mut self.data.personal);
        self.persist();
    }

    pub fn update_skills(&mut self, apply: impl FnOnce(&mut Skills)) {
        apply(&mut self.data.skills);
        self.persist();
    }

    pub fn update_contact(&mut self, apply: impl FnOnce(&mut Contact)) {
        apply(&mut self.data.contact);
        self.persist();
    }

    // ── Education ────────────────────────────────────────────────────────

    pub fn add_education(&mut self, mut entry: Education) -> EditId {
        entry.id = next_id(self.data.education.iter().map(|e| e.id));
        let id = entry.id;
        self.data.education.push(entry);
        self.persist();
        id
    }

    pub fn update_education(&mut self, id: EditId, apply: impl FnOnce(&mut Education)) {
        if let Some(entry) = self.data.education.iter_mut().find(|e| e.id == id) {
            apply(entry);
        }
        self.persist();
    }

    pub fn remove_education(&mut self, id: EditId) {
        self.data.education.retain(|e| e.id != id);
        self.persist();
    }

    // ── Experience ───────────────────────────────────────────────────────

    pub fn add_experience(&mut self, mut entry: Experience) -> EditId {
        entry.id = next_id(self.data.experience.iter().map(|e| e.id));
        let id = entry.id;
        self.data.experience.push(entry);
        self.persist();
        id
    }

    pub fn update_experience(&mut self, id: EditId, apply: impl FnOnce(&mut Experience)) {
        if let Some(entry) = self.data.experience.iter_mut().find(|e| e.id == id) {
            apply(entry);
        }
        self.persist();
    }

    pub fn remove_experience(&mut self, id: EditId) {
        self.data.experience.retain(|e| e.id != id);
        self.persist();
    }

    // ── Projects ─────────────────────────────────────────────────────────

    pub fn add_project(&mut self, mut entry: Project) -> EditId {
        entry.id = next_id(self.data.projects.iter().map(|p| p.id));
        let id = entry.id;
        self.data.projects.push(entry);
        self.persist();
        id
    }

    pub fn update_project(&mut self, id: EditId, apply: impl FnOnce(&mut Project)) {
        if let Some(entry) = self.data.projects.iter_mut().find(|p| p.id == id) {
            apply(entry);
        }
        self.persist();
    }

    pub fn remove_project(&mut self, id: EditId) {
        self.data.projects.retain(|p| p.id != id);
        self.persist();
    }

    // ── Achievements ─────────────────────────────────────────────────────

    pub fn add_achievement(&mut self, mut entry: Achievement) -> EditId {
        entry.id = next_id(self.data.achievements.iter().map(|a| a.id));
        let id = entry.id;
        self.data.achievements.push(entry);
        self.persist();
        id
    }

    pub fn update_achievement(&mut self, id: EditId, apply: impl FnOnce(&mut Achievement)) {
        if let Some(entry) = self.data.achievements.iter_mut().find(|a| a.id == id) {
            apply(entry);
        }
        self.persist();
    }

    pub fn remove_achievement(&mut self, id: EditId) {
        self.data.achievements.retain(|a| a.id != id);
        self.persist();
    }

    // ── Wholesale operations ─────────────────────────────────────────────

    /// Replaces the entire working copy (AI-import merge and
    /// load-from-server both use this; neither merges per field).
    pub fn import_data(&mut self, data: PortfolioData) {
        self.data = data;
        self.persist();
    }

    pub fn reset(&mut self) {
        self.data = PortfolioData::default();
        self.persist();
    }

    // ── Derived values ───────────────────────────────────────────────────

    pub fn completion_score(&self) -> u32 {
        completion_score(&self.data)
    }

    pub fn contact_completion(&self) -> u32 {
        contact_completion(&self.data)
    }

    /// The payload a save sends to the server.
    pub fn to_payload(&self) -> ServerPortfolio {
        to_server_shape(&self.data, &self.theme)
    }

    fn persist(&self) {
        self.store.save(&DraftSnapshot {
            portfolio_data: self.data.clone(),
            selected_theme: self.theme.selected_theme.clone(),
            theme_variant: self.theme.theme_variant.clone(),
        });
    }
}

/// Next collection-local id: one past the highest id currently in use.
fn next_id(ids: impl Iterator<Item = EditId>) -> EditId {
    EditId(ids.map(|id| id.0).max().unwrap_or(0) + 1)
}
