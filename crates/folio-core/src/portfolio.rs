//! Portfolio content: profile, experience, skills and projects.
//!
//! The built-in content is available from [`Portfolio::sample`]. A portfolio
//! can also be read from a JSON file with the same shape as the serialized
//! struct.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::experience::ExperienceRecord;

/// The whole page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Owner profile shown in the side panel.
    pub profile: Profile,

    /// Heading above the timeline.
    #[serde(default = "default_experience_heading")]
    pub experience_heading: String,

    /// Timeline entries, in display order.
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,

    /// Flat skill list.
    #[serde(default)]
    pub skills: Vec<String>,

    /// Featured projects.
    #[serde(default)]
    pub projects: Vec<Project>,
}

fn default_experience_heading() -> String {
    "Experience".into()
}

/// Portfolio owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,

    /// Role line under the name (e.g. "Full Stack Developer").
    pub headline: String,

    /// Profile picture URL. Terminals can't show it; kept for the JSON dump.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub links: Vec<ContactLink>,
}

impl Profile {
    /// The first email address among the links, without the `mailto:` prefix.
    pub fn contact_email(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.kind == LinkKind::Email)
            .map(ContactLink::display_target)
    }
}

/// Kind of contact link, used to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    #[serde(rename = "github")]
    GitHub,
    #[serde(rename = "linkedin")]
    LinkedIn,
    Email,
    Website,
}

impl LinkKind {
    /// Human label for the link kind.
    pub fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Email => "Email",
            Self::Website => "Website",
        }
    }
}

/// An external link on the profile panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub url: String,
}

impl ContactLink {
    pub fn new(kind: LinkKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
        }
    }

    /// The URL without scheme, `mailto:` or trailing slash.
    pub fn display_target(&self) -> &str {
        let url = self.url.as_str();
        let url = url
            .strip_prefix("mailto:")
            .or_else(|| url.strip_prefix("https://"))
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url);
        url.trim_end_matches('/')
    }
}

/// A featured project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default, alias = "tech_stack", alias = "techStack")]
    pub tags: Vec<String>,
}

impl Project {
    pub fn new<I, S>(title: impl Into<String>, description: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            description: description.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl Portfolio {
    /// Built-in content.
    #[allow(clippy::too_many_lines)]
    pub fn sample() -> Self {
        Self {
            profile: Profile {
                name: "John Doe".into(),
                headline: "Full Stack Developer".into(),
                avatar_url: Some(
                    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&h=400&q=80"
                        .into(),
                ),
                links: vec![
                    ContactLink::new(LinkKind::GitHub, "https://github.com"),
                    ContactLink::new(LinkKind::LinkedIn, "https://linkedin.com"),
                    ContactLink::new(LinkKind::Email, "mailto:john@example.com"),
                ],
            },
            experience_heading: "Open Source Experience".into(),
            experience: vec![
                ExperienceRecord::new(
                    "Open Source Contributor",
                    "Inspektor Gadget",
                    "2023",
                    "Contributed to the Inspektor Gadget project, focusing on improving test coverage and functionality.",
                )
                .with_details([
                    "Wrote comprehensive unit tests for various functions",
                    "Successfully merged 5+ pull requests",
                    "Raised 10+ pull requests with improvements",
                    "Collaborated with the core team on feature implementations",
                ])
                .with_tags(["Golang", "Git"]),
                ExperienceRecord::new(
                    "Open Source Contributor",
                    "GirlScript Summer of Code",
                    "2022",
                    "Active contributor to multiple organizations and projects during the program.",
                )
                .with_details([
                    "Successfully merged 10+ pull requests across various projects",
                    "Implemented new features and UI improvements",
                    "Collaborated with multiple project maintainers",
                    "Fixed critical bugs and improved user experience",
                ])
                .with_tags(["React.js", "HTML", "CSS", "Bootstrap"]),
                ExperienceRecord::new(
                    "Open Source Contributor",
                    "CircuitVerse",
                    "2022",
                    "Contributed to the CircuitVerse organization's digital logic simulator project.",
                )
                .with_details([
                    "Successfully merged 7+ pull requests",
                    "Implemented new circuit components",
                    "Enhanced user interface and experience",
                    "Fixed bugs and improved platform stability",
                ])
                .with_tags([
                    "Vue.js",
                    "JavaScript",
                    "Bootstrap",
                    "Ruby on Rails",
                    "HTML",
                    "CSS",
                ]),
            ],
            skills: [
                "React",
                "Next.js",
                "TypeScript",
                "Node.js",
                "Python",
                "PostgreSQL",
                "AWS",
                "Docker",
                "Git",
                "REST APIs",
                "GraphQL",
                "Tailwind CSS",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            projects: vec![
                Project::new(
                    "E-commerce Platform",
                    "A full-stack e-commerce solution built with Next.js, Stripe, and PostgreSQL.",
                    ["Next.js", "Stripe", "PostgreSQL"],
                ),
                Project::new(
                    "Task Management App",
                    "A real-time collaborative task management application using React and WebSocket.",
                    ["React", "WebSocket", "Node.js"],
                ),
            ],
        }
    }

    /// Load a portfolio from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(ContentError::Io)?;
        let portfolio = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            entries = portfolio.experience.len(),
            "Loaded portfolio content"
        );
        Ok(portfolio)
    }

    /// Parse a portfolio from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        serde_json::from_str(json).map_err(ContentError::Parse)
    }

    /// Serialize the portfolio as pretty JSON.
    pub fn to_json(&self) -> Result<String, ContentError> {
        serde_json::to_string_pretty(self).map_err(ContentError::Serialize)
    }
}

/// Errors that can occur when reading portfolio content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// I/O error reading the content file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing content JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing content to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sample_content() {
        let portfolio = Portfolio::sample();
        assert_eq!(portfolio.profile.name, "John Doe");
        assert_eq!(portfolio.experience.len(), 3);
        assert_eq!(portfolio.skills.len(), 12);
        assert_eq!(portfolio.projects.len(), 2);
        assert_eq!(portfolio.experience[2].organization, "CircuitVerse");
        assert!(portfolio.experience.iter().all(|e| e.tags.is_some()));
    }

    #[test]
    fn test_contact_email() {
        let portfolio = Portfolio::sample();
        assert_eq!(portfolio.profile.contact_email(), Some("john@example.com"));
    }

    #[test]
    fn test_display_target() {
        let link = ContactLink::new(LinkKind::GitHub, "https://github.com/johndoe/");
        assert_eq!(link.display_target(), "github.com/johndoe");

        let link = ContactLink::new(LinkKind::Website, "example.org");
        assert_eq!(link.display_target(), "example.org");
    }

    #[test]
    fn test_json_round_trip() {
        let portfolio = Portfolio::sample();
        let json = portfolio.to_json().unwrap();
        let parsed = Portfolio::from_json(&json).unwrap();
        assert_eq!(parsed, portfolio);
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let json = r#"{"profile": {"name": "Ada", "headline": "Engineer"}}"#;
        let portfolio = Portfolio::from_json(json).unwrap();
        assert_eq!(portfolio.experience_heading, "Experience");
        assert!(portfolio.experience.is_empty());
        assert!(portfolio.profile.links.is_empty());
    }

    #[test]
    fn test_link_kind_names() {
        let json = r#"{"kind": "github", "url": "https://github.com"}"#;
        let link: ContactLink = serde_json::from_str(json).unwrap();
        assert_eq!(link.kind, LinkKind::GitHub);

        let json = r#"{"kind": "linkedin", "url": "https://linkedin.com"}"#;
        let link: ContactLink = serde_json::from_str(json).unwrap();
        assert_eq!(link.kind, LinkKind::LinkedIn);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, Portfolio::sample().to_json().unwrap()).unwrap();

        let loaded = Portfolio::load(&path).unwrap();
        assert_eq!(loaded.profile.headline, "Full Stack Developer");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = Portfolio::load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(ContentError::Io(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = Portfolio::load(&path);
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }
}
