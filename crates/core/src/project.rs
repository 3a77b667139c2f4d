use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DESCRIPTION_PREVIEW_CHARS, MAX_CARD_TAGS};
use crate::user::{non_empty, UserSummary};

/// Display tag attached to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Tag {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

/// Read-only snapshot of a project as returned by one listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Unique, immutable identifier used in every project URL
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub creator: Option<UserSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supporters_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ProjectSummary {
    #[must_use]
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self { slug: slug.into(), title: title.into(), ..Self::default() }
    }

    /// Text shown on a card: the short description, else a preview of the
    /// full description cut at [`DESCRIPTION_PREVIEW_CHARS`] characters.
    #[must_use]
    pub fn card_description(&self) -> String {
        if let Some(short) = non_empty(self.short_description.as_deref()) {
            return short.to_owned();
        }
        let full = self.description.as_deref().unwrap_or_default();
        match full.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
            Some((cut, _)) => format!("{}...", &full[..cut]),
            None => full.to_owned(),
        }
    }

    /// Tags shown on a card, capped at [`MAX_CARD_TAGS`].
    pub fn card_tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter().take(MAX_CARD_TAGS)
    }

    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        non_empty(self.cover_image.as_deref())
    }

    /// Detail page, also the target of the join action.
    #[must_use]
    pub fn detail_path(&self) -> String {
        project_path(&self.slug)
    }
}

#[must_use]
pub fn project_path(slug: &str) -> String {
    format!("/projects/{slug}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_description_wins() {
        let project = ProjectSummary {
            short_description: Some("Short".to_owned()),
            description: Some("Long".repeat(50)),
            ..ProjectSummary::new("p", "P")
        };
        assert_eq!(project.card_description(), "Short");
    }

    #[test]
    fn long_description_is_cut_at_char_boundary() {
        let project = ProjectSummary {
            description: Some("é".repeat(150)),
            ..ProjectSummary::new("p", "P")
        };
        let text = project.card_description();
        assert_eq!(text.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
        assert!(text.ends_with("..."));
    }

    #[test]
    fn short_full_description_is_not_suffixed() {
        let project = ProjectSummary {
            short_description: Some("   ".to_owned()),
            description: Some("Tiny".to_owned()),
            ..ProjectSummary::new("p", "P")
        };
        assert_eq!(project.card_description(), "Tiny");
        assert_eq!(ProjectSummary::new("p", "P").card_description(), "");
    }

    #[test]
    fn card_tags_are_capped() {
        let project = ProjectSummary {
            tags: ["rust", "web", "ai", "iot"].into_iter().map(Tag::new).collect(),
            ..ProjectSummary::new("p", "P")
        };
        let names: Vec<_> = project.card_tags().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["rust", "web", "ai"]);
    }

    #[test]
    fn deserializes_list_serializer_payload() {
        let json = r#"{
            "id": 9, "title": "Solar Kiosk", "slug": "solar-kiosk",
            "short_description": "", "project_type": "idea", "stage": "mvp",
            "status": "open", "cover_image": null,
            "creator": {"username": "ana", "profile_image": null},
            "tags": [{"id": 1, "name": "energy", "slug": "energy"}],
            "supporters_count": 4, "members_count": 2, "views_count": 10,
            "created_at": "2024-01-02T03:04:05Z"
        }"#;
        let project: ProjectSummary = serde_json::from_str(json).unwrap();
        assert_eq!(project.slug, "solar-kiosk");
        assert_eq!(project.cover_image(), None);
        assert_eq!(project.tags.len(), 1);
        assert_eq!(project.creator.as_ref().map(|c| c.username.as_str()), Some("ana"));
        assert_eq!(project.detail_path(), "/projects/solar-kiosk/");
    }
}
