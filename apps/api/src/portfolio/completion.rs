#![allow(dead_code)]

//! The two completion percentages shown in the builder UI.
//!
//! They intentionally disagree: the builder progress bar uses a weighted
//! sum, the contact step uses a flat checklist. Keep them as separate
//! functions — unifying them changes observable behavior. Both are UI
//! encouragement only and gate nothing.

use crate::portfolio::models::PortfolioData;

/// Weighted builder progress score, capped at 100.
///
/// +15 for a name, +10 per education entry, +15 per experience entry,
/// +2 per technical skill, +20 per project.
pub fn completion_score(data: &PortfolioData) -> u32 {
    let mut score = 0u32;
    if !data.personal.full_name.is_empty() {
        score += 15;
    }
    score += data.education.len() as u32 * 10;
    score += data.experience.len() as u32 * 15;
    score += data.skills.technical.len() as u32 * 2;
    score += data.projects.len() as u32 * 20;
    score.min(100)
}

/// Flat 7-item checklist percentage shown on the contact step.
pub fn contact_completion(data: &PortfolioData) -> u32 {
    const TOTAL: u32 = 7;
    let mut completed = 0u32;

    if !data.personal.full_name.is_empty() {
        completed += 1;
    }
    if !data.personal.title.is_empty() {
        completed += 1;
    }
    if !data.personal.email.is_empty() {
        completed += 1;
    }
    if !data.education.is_empty() {
        completed += 1;
    }
    if !data.experience.is_empty() {
        completed += 1;
    }
    if !data.skills.technical.is_empty() || !data.skills.soft.is_empty() {
        completed += 1;
    }
    if !data.projects.is_empty() {
        completed += 1;
    }

    ((completed * 100) as f64 / TOTAL as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::models::{Education, Experience, Project};

    #[test]
    fn test_empty_data_scores_zero() {
        let data = PortfolioData::default();
        assert_eq!(completion_score(&data), 0);
        assert_eq!(contact_completion(&data), 0);
    }

    #[test]
    fn test_name_alone_is_fifteen() {
        let mut data = PortfolioData::default();
        data.personal.full_name = "Jane".to_string();
        assert_eq!(completion_score(&data), 15);
    }

    #[test]
    fn test_weighted_sum() {
        let mut data = PortfolioData::default();
        data.personal.full_name = "Jane".to_string();
        data.education.push(Education::default());
        data.experience.push(Experience::default());
        data.skills.technical.push("Rust".to_string());
        // 15 + 10 + 15 + 2
        assert_eq!(completion_score(&data), 42);
    }

    #[test]
    fn test_score_caps_at_one_hundred() {
        let mut data = PortfolioData::default();
        for _ in 0..20 {
            data.projects.push(Project::default());
        }
        assert_eq!(completion_score(&data), 100);
    }

    #[test]
    fn test_score_is_monotonic_under_single_additions() {
        let mut data = PortfolioData::default();
        let mut last = completion_score(&data);

        data.personal.full_name = "Jane".to_string();
        let next = completion_score(&data);
        assert!(next >= last);
        last = next;

        data.education.push(Education::default());
        let next = completion_score(&data);
        assert!(next >= last);
        last = next;

        data.skills.technical.push("Rust".to_string());
        let next = completion_score(&data);
        assert!(next >= last);
        last = next;

        for _ in 0..10 {
            data.projects.push(Project::default());
            let next = completion_score(&data);
            assert!(next >= last);
            last = next;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_contact_completion_rounds() {
        let mut data = PortfolioData::default();
        data.personal.full_name = "Jane".to_string();
        // 1/7 = 14.28... rounds to 14
        assert_eq!(contact_completion(&data), 14);
        data.personal.title = "Engineer".to_string();
        data.personal.email = "jane@example.com".to_string();
        // 3/7 = 42.85... rounds to 43
        assert_eq!(contact_completion(&data), 43);
    }

    #[test]
    fn test_contact_completion_counts_soft_skills() {
        let mut data = PortfolioData::default();
        data.skills.soft.push("Communication".to_string());
        assert_eq!(contact_completion(&data), 14);
    }

    #[test]
    fn test_contact_completion_full_checklist() {
        let mut data = PortfolioData::default();
        data.personal.full_name = "Jane".to_string();
        data.personal.title = "Engineer".to_string();
        data.personal.email = "jane@example.com".to_string();
        data.education.push(Education::default());
        data.experience.push(Experience::default());
        data.skills.technical.push("Rust".to_string());
        data.projects.push(Project::default());
        assert_eq!(contact_completion(&data), 100);
    }

    #[test]
    fn test_the_two_scores_disagree_by_design() {
        let mut data = PortfolioData::default();
        data.personal.full_name = "Jane".to_string();
        data.personal.title = "Engineer".to_string();
        data.personal.email = "jane@example.com".to_string();
        assert_eq!(completion_score(&data), 15);
        assert_eq!(contact_completion(&data), 43);
    }
}
