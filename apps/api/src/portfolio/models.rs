#![allow(dead_code)]

//! The two portfolio document shapes and the identifier types that keep
//! their item ids from being confused with each other.
//!
//! `PortfolioData` is the client working copy: the shape the form wizard
//! edits and the AI-import normalizer produces. `ServerPortfolio` is the
//! persisted document shape stored in the JSONB `data` column. The two use
//! different field names and carry different field sets; the converters in
//! `mapping` are the only sanctioned bridge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::portfolio::PortfolioRow;

// ────────────────────────────────────────────────────────────────────────────
// Identifier types
// ────────────────────────────────────────────────────────────────────────────

/// Identifier for a collection item inside one edit session.
///
/// Unique within its collection only, assigned by the client, and never a
/// stable cross-system key: reloading a portfolio from the server produces
/// fresh ids. Address items with it during edit/delete, nothing else.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EditId(pub u32);

/// 1-based position of an item in a persisted document's collection.
///
/// Persisted collections carry no ids at all; on load each item is
/// re-identified by where it sits in the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistedIndex(pub usize);

impl PersistedIndex {
    /// Builds the 1-based position for a 0-based array offset.
    pub fn of_offset(offset: usize) -> Self {
        PersistedIndex(offset + 1)
    }
}

impl From<PersistedIndex> for EditId {
    fn from(position: PersistedIndex) -> Self {
        EditId(position.0 as u32)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client working copy
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Personal {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
    pub summary: String,
    /// Opaque embedded image (data URI). Never produced by the AI import.
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: EditId,
    pub degree: String,
    pub school: String,
    pub location: String,
    pub start_year: String,
    pub end_year: String,
    pub gpa: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: EditId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub skills: Vec<String>,
}

/// Four string sets, insertion-ordered. Order is display-significant;
/// duplicates are not rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub languages: Vec<String>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Planned,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: EditId,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub demo_url: String,
    pub github_url: String,
    pub image: Option<String>,
    pub featured: bool,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Award,
    Certification,
    Publication,
    #[default]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub id: EditId,
    pub title: String,
    pub organization: String,
    pub date: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: AchievementKind,
}

/// Presentation preferences. Distinct from the contact fields on
/// `Personal`; the overlap is a known duplication in the data model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub preferred_contact: String,
    pub availability: String,
    pub timezone: String,
    pub hourly_rate: String,
    pub response_time: String,
}

impl Default for Contact {
    fn default() -> Self {
        Contact {
            preferred_contact: "email".to_string(),
            availability: "Available for hire".to_string(),
            timezone: "UTC".to_string(),
            hourly_rate: String::new(),
            response_time: "24 hours".to_string(),
        }
    }
}

/// The client working copy: one mutable aggregate with six sub-collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioData {
    pub personal: Personal,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub contact: Contact,
}

// ────────────────────────────────────────────────────────────────────────────
// Persisted document shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub avatar: String,
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationRecord {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceRecord {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

/// Persisted skill sets. No `certifications` — the server never stored them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillGroups {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub image: String,
    pub featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementRecord {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    pub url: String,
}

/// Flat persisted contact block. Only the preferred channel's value is ever
/// written here; the preference itself is not stored and cannot be
/// recovered on reload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeSelection {
    pub selected_theme: String,
    pub theme_variant: String,
}

impl Default for ThemeSelection {
    fn default() -> Self {
        ThemeSelection {
            selected_theme: "modern".to_string(),
            theme_variant: "default".to_string(),
        }
    }
}

/// The canonical persisted document shape (the JSONB `data` column).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerPortfolio {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationRecord>,
    pub experience: Vec<ExperienceRecord>,
    pub skills: SkillGroups,
    pub projects: Vec<ProjectRecord>,
    pub achievements: Vec<AchievementRecord>,
    pub contact: ContactDetails,
    pub theme: ThemeSelection,
}

// ────────────────────────────────────────────────────────────────────────────
// API representation
// ────────────────────────────────────────────────────────────────────────────

/// A portfolio as returned by the API: the stored document flattened
/// together with its row-level metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDto {
    pub id: Uuid,
    pub user: Uuid,
    #[serde(flatten)]
    pub document: ServerPortfolio,
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioDto {
    pub fn from_row(row: PortfolioRow) -> Result<Self, AppError> {
        let document: ServerPortfolio = serde_json::from_value(row.data)
            .map_err(|e| anyhow::anyhow!("Corrupt portfolio document {}: {e}", row.id))?;
        Ok(PortfolioDto {
            id: row.id,
            user: row.user_id,
            document,
            is_public: row.is_public,
            slug: row.slug,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_id_from_persisted_index_is_one_based() {
        assert_eq!(EditId::from(PersistedIndex::of_offset(0)), EditId(1));
        assert_eq!(EditId::from(PersistedIndex::of_offset(4)), EditId(5));
    }

    #[test]
    fn test_client_shape_wire_names() {
        let mut data = PortfolioData::default();
        data.personal.full_name = "Ada".to_string();
        data.projects.push(Project {
            id: EditId(1),
            demo_url: "https://demo".to_string(),
            ..Default::default()
        });
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["personal"]["fullName"], "Ada");
        assert!(json["personal"]["profileImage"].is_null());
        assert_eq!(json["projects"][0]["demoUrl"], "https://demo");
        assert_eq!(json["projects"][0]["status"], "completed");
        assert_eq!(json["contact"]["preferredContact"], "email");
    }

    #[test]
    fn test_achievement_kind_wire_names() {
        let ach = Achievement {
            kind: AchievementKind::Publication,
            ..Default::default()
        };
        let json = serde_json::to_value(&ach).unwrap();
        assert_eq!(json["type"], "publication");
    }

    #[test]
    fn test_project_status_round_trip() {
        let json = serde_json::json!("in-progress");
        let status: ProjectStatus = serde_json::from_value(json).unwrap();
        assert_eq!(status, ProjectStatus::InProgress);
    }

    #[test]
    fn test_server_shape_parses_partial_document() {
        let doc: ServerPortfolio =
            serde_json::from_value(serde_json::json!({"personalInfo": {"fullName": "Ada"}}))
                .unwrap();
        assert_eq!(doc.personal_info.full_name, "Ada");
        assert!(doc.education.is_empty());
        assert_eq!(doc.theme.selected_theme, "modern");
    }
}
