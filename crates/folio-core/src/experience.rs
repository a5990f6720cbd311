//! Experience records shown on the timeline.
//!
//! A record is immutable once built. Its identity is its position in the
//! portfolio's experience list; there is no id field.

use serde::{Deserialize, Serialize};

/// One entry of work history or open-source contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    /// Display name of the role.
    pub title: String,

    /// Company, project or program the role belongs to.
    #[serde(alias = "company")]
    pub organization: String,

    /// Free-form date label, never parsed.
    #[serde(alias = "date")]
    pub period: String,

    /// One-paragraph summary, always visible.
    #[serde(alias = "description")]
    pub summary: String,

    /// Bullet points shown when the entry is expanded, in display order.
    #[serde(default)]
    pub details: Vec<String>,

    /// Technologies shown when the entry is expanded, in display order.
    ///
    /// `None` means "no tag block at all", which is not the same as an
    /// empty list.
    #[serde(
        default,
        alias = "tech_stack",
        alias = "techStack",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<String>>,
}

impl ExperienceRecord {
    /// Create a record with no details and no tags.
    pub fn new(
        title: impl Into<String>,
        organization: impl Into<String>,
        period: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            organization: organization.into(),
            period: period.into(),
            summary: summary.into(),
            details: Vec::new(),
            tags: None,
        }
    }

    /// Set the detail bullets.
    #[must_use]
    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details = details.into_iter().map(Into::into).collect();
        self
    }

    /// Set the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Tags as a slice, if the record has a tag list.
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let record = ExperienceRecord::new("Engineer", "Acme", "2021", "Built things")
            .with_details(["a", "b", "c"])
            .with_tags(["X", "Y"]);

        assert_eq!(record.details, vec!["a", "b", "c"]);
        assert_eq!(record.tags(), Some(&["X".to_string(), "Y".to_string()][..]));
    }

    #[test]
    fn test_new_has_no_tags() {
        let record = ExperienceRecord::new("Engineer", "Acme", "2021", "Built things");
        assert!(record.details.is_empty());
        assert!(record.tags().is_none());
    }

    #[test]
    fn test_deserialize_with_aliases() {
        let json = r#"{
            "title": "Open Source Contributor",
            "company": "CircuitVerse",
            "date": "2022",
            "description": "Digital logic simulator.",
            "details": ["Merged 7+ pull requests"],
            "techStack": ["Vue.js", "Ruby on Rails"]
        }"#;

        let record: ExperienceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.organization, "CircuitVerse");
        assert_eq!(record.period, "2022");
        assert_eq!(record.summary, "Digital logic simulator.");
        assert_eq!(record.tags().map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_missing_details_and_tags_default() {
        let json = r#"{
            "title": "Intern",
            "organization": "Acme",
            "period": "Summer 2020",
            "summary": "Fetched coffee."
        }"#;

        let record: ExperienceRecord = serde_json::from_str(json).unwrap();
        assert!(record.details.is_empty());
        assert!(record.tags.is_none());
    }

    #[test]
    fn test_empty_tags_distinct_from_absent() {
        let json = r#"{
            "title": "Intern",
            "organization": "Acme",
            "period": "2020",
            "summary": "s",
            "tags": []
        }"#;

        let record: ExperienceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tags(), Some(&[][..]));
    }

    #[test]
    fn test_absent_tags_not_serialized() {
        let record = ExperienceRecord::new("Engineer", "Acme", "2021", "Built things");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("tags"));
    }
}
