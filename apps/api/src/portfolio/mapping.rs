#![allow(dead_code)]

//! Bidirectional converters between the client working copy and the
//! persisted document shape.
//!
//! Both directions are pure and total: every field is defaultable and no
//! input can fail. The round trip is intentionally lossy — fields with no
//! counterpart on the other side are dropped going out and refilled with
//! fixed defaults coming back. Do not "fix" the losses here; they are part
//! of the wire contract.

use crate::portfolio::models::{
    Achievement, AchievementKind, AchievementRecord, Contact, ContactDetails, EditId, Education,
    EducationRecord, Experience, ExperienceRecord, PersistedIndex, Personal, PersonalInfo,
    PortfolioData, Project, ProjectRecord, ProjectStatus, ServerPortfolio, SkillGroups, Skills,
    SocialLinks, ThemeSelection,
};

/// Maps the client working copy to the persisted document shape.
///
/// Dropped on the way out: education `location`/`gpa`, experience `skills`,
/// skill `certifications`, project `status`, achievement `kind`, and every
/// contact preference except `availability`. Education `description` is
/// written into BOTH `field` and `description` — intentional duplication.
pub fn to_server_shape(data: &PortfolioData, theme: &ThemeSelection) -> ServerPortfolio {
    ServerPortfolio {
        personal_info: PersonalInfo {
            full_name: data.personal.full_name.clone(),
            title: data.personal.title.clone(),
            email: data.personal.email.clone(),
            phone: data.personal.phone.clone(),
            location: data.personal.location.clone(),
            bio: data.personal.summary.clone(),
            avatar: data.personal.profile_image.clone().unwrap_or_default(),
            social_links: SocialLinks {
                github: data.personal.github.clone(),
                linkedin: data.personal.linkedin.clone(),
                twitter: data.personal.twitter.clone(),
                website: data.personal.website.clone(),
            },
        },
        education: data
            .education
            .iter()
            .map(|edu| EducationRecord {
                institution: edu.school.clone(),
                degree: edu.degree.clone(),
                field: edu.description.clone(),
                start_date: edu.start_year.clone(),
                end_date: edu.end_year.clone(),
                description: edu.description.clone(),
            })
            .collect(),
        experience: data
            .experience
            .iter()
            .map(|exp| ExperienceRecord {
                company: exp.company.clone(),
                position: exp.title.clone(),
                location: exp.location.clone(),
                start_date: exp.start_date.clone(),
                end_date: exp.end_date.clone(),
                current: exp.current,
                description: exp.description.clone(),
            })
            .collect(),
        skills: SkillGroups {
            technical: data.skills.technical.clone(),
            soft: data.skills.soft.clone(),
            languages: data.skills.languages.clone(),
        },
        projects: data
            .projects
            .iter()
            .map(|proj| ProjectRecord {
                title: proj.title.clone(),
                description: proj.description.clone(),
                technologies: proj.technologies.clone(),
                live_url: proj.demo_url.clone(),
                github_url: proj.github_url.clone(),
                image: proj.image.clone().unwrap_or_default(),
                featured: proj.featured,
            })
            .collect(),
        achievements: data
            .achievements
            .iter()
            .map(|ach| AchievementRecord {
                title: ach.title.clone(),
                issuer: ach.organization.clone(),
                date: ach.date.clone(),
                description: ach.description.clone(),
                // no client-side counterpart
                url: String::new(),
            })
            .collect(),
        contact: ContactDetails {
            email: if data.contact.preferred_contact == "email" {
                data.personal.email.clone()
            } else {
                String::new()
            },
            phone: if data.contact.preferred_contact == "phone" {
                data.personal.phone.clone()
            } else {
                String::new()
            },
            address: String::new(),
            availability: data.contact.availability.clone(),
        },
        theme: theme.clone(),
    }
}

/// Maps a persisted document back to the client working copy.
///
/// Collection item ids are regenerated from array position — per-load
/// identifiers, never stable keys. Fields the server does not store come
/// back as documented defaults; the contact preference is unrecoverable and
/// lands on the fixed fallback.
pub fn to_client_shape(doc: &ServerPortfolio) -> (PortfolioData, ThemeSelection) {
    let data = PortfolioData {
        personal: Personal {
            full_name: doc.personal_info.full_name.clone(),
            title: doc.personal_info.title.clone(),
            email: doc.personal_info.email.clone(),
            phone: doc.personal_info.phone.clone(),
            location: doc.personal_info.location.clone(),
            website: doc.personal_info.social_links.website.clone(),
            linkedin: doc.personal_info.social_links.linkedin.clone(),
            github: doc.personal_info.social_links.github.clone(),
            twitter: doc.personal_info.social_links.twitter.clone(),
            summary: doc.personal_info.bio.clone(),
            profile_image: non_empty(&doc.personal_info.avatar),
        },
        education: doc
            .education
            .iter()
            .enumerate()
            .map(|(offset, edu)| Education {
                id: EditId::from(PersistedIndex::of_offset(offset)),
                degree: edu.degree.clone(),
                school: edu.institution.clone(),
                location: String::new(),
                start_year: edu.start_date.clone(),
                end_year: edu.end_date.clone(),
                gpa: String::new(),
                description: edu.description.clone(),
            })
            .collect(),
        experience: doc
            .experience
            .iter()
            .enumerate()
            .map(|(offset, exp)| Experience {
                id: EditId::from(PersistedIndex::of_offset(offset)),
                title: exp.position.clone(),
                company: exp.company.clone(),
                location: exp.location.clone(),
                start_date: exp.start_date.clone(),
                end_date: exp.end_date.clone(),
                current: exp.current,
                description: exp.description.clone(),
                skills: Vec::new(),
            })
            .collect(),
        skills: Skills {
            technical: doc.skills.technical.clone(),
            soft: doc.skills.soft.clone(),
            languages: doc.skills.languages.clone(),
            certifications: Vec::new(),
        },
        projects: doc
            .projects
            .iter()
            .enumerate()
            .map(|(offset, proj)| Project {
                id: EditId::from(PersistedIndex::of_offset(offset)),
                title: proj.title.clone(),
                description: proj.description.clone(),
                technologies: proj.technologies.clone(),
                demo_url: proj.live_url.clone(),
                github_url: proj.github_url.clone(),
                image: non_empty(&proj.image),
                featured: proj.featured,
                status: ProjectStatus::Completed,
            })
            .collect(),
        achievements: doc
            .achievements
            .iter()
            .enumerate()
            .map(|(offset, ach)| Achievement {
                id: EditId::from(PersistedIndex::of_offset(offset)),
                title: ach.title.clone(),
                organization: ach.issuer.clone(),
                date: ach.date.clone(),
                description: ach.description.clone(),
                kind: AchievementKind::Award,
            })
            .collect(),
        contact: Contact {
            // The original preference is not stored server-side; the flat
            // contact.email/phone values cannot tell us which channel the
            // user picked. Fixed fallback, information loss preserved.
            preferred_contact: "email".to_string(),
            availability: doc.contact.availability.clone(),
            timezone: "UTC".to_string(),
            hourly_rate: String::new(),
            response_time: "24 hours".to_string(),
        },
    };

    (data, doc.theme.clone())
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> PortfolioData {
        PortfolioData {
            personal: Personal {
                full_name: "Ada Lovelace".to_string(),
                title: "Engineer".to_string(),
                email: "ada@example.com".to_string(),
                phone: "+44 1234".to_string(),
                location: "London".to_string(),
                website: "https://ada.dev".to_string(),
                linkedin: "https://linkedin.com/in/ada".to_string(),
                github: "https://github.com/ada".to_string(),
                twitter: "https://twitter.com/ada".to_string(),
                summary: "First programmer.".to_string(),
                profile_image: Some("data:image/png;base64,xyz".to_string()),
            },
            education: vec![Education {
                id: EditId(7),
                degree: "BSc Mathematics".to_string(),
                school: "University of London".to_string(),
                location: "London".to_string(),
                start_year: "1833".to_string(),
                end_year: "1837".to_string(),
                gpa: "4.0".to_string(),
                description: "Analytical engines".to_string(),
            }],
            experience: vec![Experience {
                id: EditId(3),
                title: "Analyst".to_string(),
                company: "Babbage & Co".to_string(),
                location: "London".to_string(),
                start_date: "1842".to_string(),
                end_date: "1843".to_string(),
                current: false,
                description: "Notes on the engine".to_string(),
                skills: vec!["mathematics".to_string()],
            }],
            skills: Skills {
                technical: vec!["Rust".to_string(), "SQL".to_string()],
                soft: vec!["Writing".to_string()],
                languages: vec!["English".to_string()],
                certifications: vec!["Cert A".to_string()],
            },
            projects: vec![Project {
                id: EditId(9),
                title: "Engine Notes".to_string(),
                description: "Translation and notes".to_string(),
                technologies: vec!["pen".to_string()],
                demo_url: "https://demo.example".to_string(),
                github_url: "https://github.com/ada/notes".to_string(),
                image: None,
                featured: true,
                status: ProjectStatus::InProgress,
            }],
            achievements: vec![Achievement {
                id: EditId(2),
                title: "First Program".to_string(),
                organization: "History".to_string(),
                date: "1843".to_string(),
                description: "Bernoulli numbers".to_string(),
                kind: AchievementKind::Publication,
            }],
            contact: Contact {
                preferred_contact: "phone".to_string(),
                availability: "Open to opportunities".to_string(),
                timezone: "Europe/London".to_string(),
                hourly_rate: "100".to_string(),
                response_time: "1 hour".to_string(),
            },
        }
    }

    #[test]
    fn test_field_renames_out() {
        let doc = to_server_shape(&sample_data(), &ThemeSelection::default());
        assert_eq!(doc.personal_info.full_name, "Ada Lovelace");
        assert_eq!(doc.personal_info.bio, "First programmer.");
        assert_eq!(doc.personal_info.avatar, "data:image/png;base64,xyz");
        assert_eq!(doc.personal_info.social_links.website, "https://ada.dev");
        assert_eq!(doc.education[0].institution, "University of London");
        assert_eq!(doc.education[0].start_date, "1833");
        assert_eq!(doc.experience[0].position, "Analyst");
        assert_eq!(doc.projects[0].live_url, "https://demo.example");
        assert_eq!(doc.achievements[0].issuer, "History");
    }

    #[test]
    fn test_education_description_copied_into_field_and_description() {
        let doc = to_server_shape(&sample_data(), &ThemeSelection::default());
        assert_eq!(doc.education[0].field, "Analytical engines");
        assert_eq!(doc.education[0].description, "Analytical engines");
    }

    #[test]
    fn test_achievement_url_is_always_empty() {
        let doc = to_server_shape(&sample_data(), &ThemeSelection::default());
        assert_eq!(doc.achievements[0].url, "");
    }

    #[test]
    fn test_null_avatar_becomes_empty_string() {
        let mut data = sample_data();
        data.personal.profile_image = None;
        let doc = to_server_shape(&data, &ThemeSelection::default());
        assert_eq!(doc.personal_info.avatar, "");
    }

    #[test]
    fn test_only_preferred_contact_channel_survives() {
        let mut data = sample_data();

        data.contact.preferred_contact = "email".to_string();
        let doc = to_server_shape(&data, &ThemeSelection::default());
        assert_eq!(doc.contact.email, "ada@example.com");
        assert_eq!(doc.contact.phone, "");

        data.contact.preferred_contact = "phone".to_string();
        let doc = to_server_shape(&data, &ThemeSelection::default());
        assert_eq!(doc.contact.email, "");
        assert_eq!(doc.contact.phone, "+44 1234");
    }

    #[test]
    fn test_round_trip_preserves_direct_counterparts() {
        let data = sample_data();
        let theme = ThemeSelection::default();
        let doc = to_server_shape(&data, &theme);
        let (back, theme_back) = to_client_shape(&doc);

        assert_eq!(back.personal.full_name, data.personal.full_name);
        assert_eq!(back.personal.title, data.personal.title);
        assert_eq!(back.personal.summary, data.personal.summary);
        assert_eq!(back.personal.website, data.personal.website);
        assert_eq!(back.education[0].degree, data.education[0].degree);
        assert_eq!(back.education[0].school, data.education[0].school);
        assert_eq!(back.education[0].start_year, data.education[0].start_year);
        assert_eq!(back.education[0].end_year, data.education[0].end_year);
        assert_eq!(back.experience[0].title, data.experience[0].title);
        assert_eq!(back.experience[0].company, data.experience[0].company);
        assert_eq!(back.projects[0].title, data.projects[0].title);
        assert_eq!(back.projects[0].demo_url, data.projects[0].demo_url);
        assert_eq!(back.achievements[0].title, data.achievements[0].title);
        assert_eq!(theme_back, theme);
    }

    #[test]
    fn test_round_trip_fills_documented_defaults_for_lossy_fields() {
        let data = sample_data();
        let doc = to_server_shape(&data, &ThemeSelection::default());
        let (back, _) = to_client_shape(&doc);

        assert_eq!(back.education[0].location, "");
        assert_eq!(back.education[0].gpa, "");
        assert!(back.experience[0].skills.is_empty());
        assert!(back.skills.certifications.is_empty());
        assert_eq!(back.projects[0].status, ProjectStatus::Completed);
        assert_eq!(back.achievements[0].kind, AchievementKind::Award);
        assert_eq!(back.contact.preferred_contact, "email");
        assert_eq!(back.contact.timezone, "UTC");
        assert_eq!(back.contact.response_time, "24 hours");
        assert_eq!(back.contact.availability, "Open to opportunities");
    }

    #[test]
    fn test_reload_regenerates_ids_from_position() {
        let mut data = sample_data();
        data.education.push(Education {
            id: EditId(42),
            ..Default::default()
        });
        let doc = to_server_shape(&data, &ThemeSelection::default());
        let (back, _) = to_client_shape(&doc);
        assert_eq!(back.education[0].id, EditId(1));
        assert_eq!(back.education[1].id, EditId(2));
    }

    #[test]
    fn test_empty_avatar_comes_back_as_none() {
        let mut data = sample_data();
        data.personal.profile_image = None;
        let doc = to_server_shape(&data, &ThemeSelection::default());
        let (back, _) = to_client_shape(&doc);
        assert_eq!(back.personal.profile_image, None);
    }

    #[test]
    fn test_empty_input_maps_to_empty_document() {
        let doc = to_server_shape(&PortfolioData::default(), &ThemeSelection::default());
        assert!(doc.education.is_empty());
        assert!(doc.experience.is_empty());
        assert!(doc.projects.is_empty());
        assert!(doc.achievements.is_empty());
        assert_eq!(doc.personal_info.full_name, "");
    }
}
