//! Portfolio profile types.
//!
//! The profile is the only knowledge the assistant is given about its
//! owner; it is rendered into the system instruction by [`crate::prompt`].

use serde::{Deserialize, Serialize};

/// Skill grouping shown on the page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    #[default]
    Backend,
    Tools,
    Design,
}

/// One skill with a proficiency level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    pub name: String,
    /// Proficiency (valid range: 0-100).
    pub level: u32,
    pub category: SkillCategory,
}

impl Default for SkillEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: 50,
            category: SkillCategory::default(),
        }
    }
}

/// A showcased project.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: String,
    pub github_url: String,
    pub live_url: String,
}

/// A profile link (GitHub, LinkedIn, mail, ...).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

/// The portfolio owner's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub owner: String,
    pub job_title: String,
    pub tagline: String,
    pub bio: Vec<String>,
    pub education: String,
    pub experience: String,
    pub previous_experience: String,
    pub research_areas: Vec<String>,
    pub contact_email: String,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
    pub socials: Vec<SocialLink>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            owner: "Jordan Avery".into(),
            job_title: "Software Engineer".into(),
            tagline: "Building dependable systems, one well-tested module at a time.".into(),
            bio: vec![
                "I am a software engineer focused on backend services and developer tooling."
                    .into(),
                "I enjoy turning research prototypes into production systems that scale.".into(),
            ],
            education: String::new(),
            experience: "Software Engineer".into(),
            previous_experience: String::new(),
            research_areas: Vec::new(),
            contact_email: String::new(),
            skills: vec![
                SkillEntry {
                    name: "Rust".into(),
                    level: 90,
                    category: SkillCategory::Backend,
                },
                SkillEntry {
                    name: "TypeScript".into(),
                    level: 80,
                    category: SkillCategory::Frontend,
                },
                SkillEntry {
                    name: "PostgreSQL".into(),
                    level: 75,
                    category: SkillCategory::Tools,
                },
            ],
            projects: vec![ProjectEntry {
                title: "Portfolio Assistant".into(),
                description: "A chat assistant that answers questions about my work.".into(),
                technologies: vec!["Rust".into(), "Gemini".into()],
                ..ProjectEntry::default()
            }],
            socials: Vec::new(),
        }
    }
}
