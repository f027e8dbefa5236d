//! Defensive normalization of AI-parsed resume output.
//!
//! The model is asked for a specific JSON shape but gets no benefit of the
//! doubt: every string field that is missing or not a string becomes `""`,
//! every missing array becomes `[]`, booleans default to `false`, and
//! collection ids are reassigned sequentially from 1 no matter what came
//! back. `profileImage` and project images are always `None` — the text
//! model never extracts images.
//!
//! Only a root value that is not an object at all is rejected; any partial
//! structure is defaulted field by field, never wholesale.

use serde_json::Value;

use crate::errors::AppError;
use crate::portfolio::models::{
    Achievement, AchievementKind, Contact, EditId, Education, Experience, Personal, PortfolioData,
    Project, ProjectStatus, Skills,
};

pub fn normalize_parsed_resume(raw: &Value) -> Result<PortfolioData, AppError> {
    let root = raw.as_object().ok_or_else(|| {
        AppError::Llm("Failed to parse resume: the model returned an unexpected structure".into())
    })?;

    let personal = root.get("personal").cloned().unwrap_or(Value::Null);
    let skills = root.get("skills").cloned().unwrap_or(Value::Null);
    let contact = root.get("contact").cloned().unwrap_or(Value::Null);

    Ok(PortfolioData {
        personal: Personal {
            full_name: str_field(&personal, "fullName"),
            title: str_field(&personal, "title"),
            email: str_field(&personal, "email"),
            phone: str_field(&personal, "phone"),
            location: str_field(&personal, "location"),
            website: str_field(&personal, "website"),
            linkedin: str_field(&personal, "linkedin"),
            github: str_field(&personal, "github"),
            twitter: str_field(&personal, "twitter"),
            summary: str_field(&personal, "summary"),
            profile_image: None,
        },
        education: items_of(root.get("education"))
            .enumerate()
            .map(|(offset, edu)| Education {
                id: EditId(offset as u32 + 1),
                degree: str_field(edu, "degree"),
                school: str_field(edu, "school"),
                location: str_field(edu, "location"),
                start_year: str_field(edu, "startYear"),
                end_year: str_field(edu, "endYear"),
                gpa: str_field(edu, "gpa"),
                description: str_field(edu, "description"),
            })
            .collect(),
        experience: items_of(root.get("experience"))
            .enumerate()
            .map(|(offset, exp)| Experience {
                id: EditId(offset as u32 + 1),
                title: str_field(exp, "title"),
                company: str_field(exp, "company"),
                location: str_field(exp, "location"),
                start_date: str_field(exp, "startDate"),
                end_date: str_field(exp, "endDate"),
                current: bool_field(exp, "current"),
                description: str_field(exp, "description"),
                skills: str_list(exp, "skills"),
            })
            .collect(),
        skills: Skills {
            technical: str_list(&skills, "technical"),
            soft: str_list(&skills, "soft"),
            languages: str_list(&skills, "languages"),
            certifications: str_list(&skills, "certifications"),
        },
        projects: items_of(root.get("projects"))
            .enumerate()
            .map(|(offset, proj)| Project {
                id: EditId(offset as u32 + 1),
                title: str_field(proj, "title"),
                description: str_field(proj, "description"),
                technologies: str_list(proj, "technologies"),
                demo_url: str_field(proj, "demoUrl"),
                github_url: str_field(proj, "githubUrl"),
                image: None,
                featured: bool_field(proj, "featured"),
                status: project_status(proj),
            })
            .collect(),
        achievements: items_of(root.get("achievements"))
            .enumerate()
            .map(|(offset, ach)| Achievement {
                id: EditId(offset as u32 + 1),
                title: str_field(ach, "title"),
                organization: str_field(ach, "organization"),
                date: str_field(ach, "date"),
                description: str_field(ach, "description"),
                kind: achievement_kind(ach),
            })
            .collect(),
        contact: Contact {
            preferred_contact: str_field_or(&contact, "preferredContact", "email"),
            availability: str_field_or(&contact, "availability", "Available for hire"),
            timezone: str_field_or(&contact, "timezone", "UTC"),
            hourly_rate: str_field(&contact, "hourlyRate"),
            response_time: str_field_or(&contact, "responseTime", "24 hours"),
        },
    })
}

fn items_of(value: Option<&Value>) -> impl Iterator<Item = &Value> {
    value
        .and_then(Value::as_array)
        .map(|a| a.as_slice())
        .unwrap_or(&[])
        .iter()
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// Like `str_field`, but an empty string also falls back to the default.
fn str_field_or(value: &Value, key: &str, default: &str) -> String {
    let s = str_field(value, key);
    if s.is_empty() {
        default.to_string()
    } else {
        s
    }
}

fn str_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn bool_field(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn project_status(value: &Value) -> ProjectStatus {
    match value.get("status").and_then(Value::as_str) {
        Some("in-progress") => ProjectStatus::InProgress,
        Some("planned") => ProjectStatus::Planned,
        _ => ProjectStatus::Completed,
    }
}

fn achievement_kind(value: &Value) -> AchievementKind {
    match value.get("type").and_then(Value::as_str) {
        Some("award") => AchievementKind::Award,
        Some("certification") => AchievementKind::Certification,
        Some("publication") => AchievementKind::Publication,
        _ => AchievementKind::Other,
    }
}
