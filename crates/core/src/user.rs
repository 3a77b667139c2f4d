use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public profile snapshot as returned by the users listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Unique handle, used in profile and messaging URLs
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Category label (founder, professional, student, enthusiast)
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserSummary {
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into(), ..Self::default() }
    }

    /// First name (or username) followed by the last name, if any.
    #[must_use]
    pub fn display_name(&self) -> String {
        let first = non_empty(self.first_name.as_deref()).unwrap_or(&self.username);
        match non_empty(self.last_name.as_deref()) {
            Some(last) => format!("{first} {last}"),
            None => first.to_owned(),
        }
    }

    /// Headline shown under the name: title, then bio, then "Member".
    #[must_use]
    pub fn tagline(&self) -> &str {
        non_empty(self.title.as_deref())
            .or_else(|| non_empty(self.bio.as_deref()))
            .unwrap_or("Member")
    }

    /// Uppercased first letter of the username, used when there is no picture.
    #[must_use]
    pub fn initial(&self) -> String {
        self.username.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }

    #[must_use]
    pub fn profile_image(&self) -> Option<&str> {
        non_empty(self.profile_image.as_deref())
    }

    #[must_use]
    pub fn user_type(&self) -> &str {
        self.user_type.as_deref().unwrap_or_default()
    }
}

/// Public profile page.
#[must_use]
pub fn user_path(username: &str) -> String {
    format!("/users/{username}/")
}

/// Compose-message page addressed to `username`.
#[must_use]
pub fn message_path(username: &str) -> String {
    format!("/messages/send/{username}/")
}

/// Treats blank strings the same as missing values.
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_username() {
        let user = UserSummary::new("ada");
        assert_eq!(user.display_name(), "ada");

        let user = UserSummary {
            first_name: Some(String::new()),
            last_name: Some("Lovelace".to_owned()),
            ..UserSummary::new("ada")
        };
        assert_eq!(user.display_name(), "ada Lovelace");

        let user = UserSummary {
            first_name: Some("Ada".to_owned()),
            last_name: Some("Lovelace".to_owned()),
            ..UserSummary::new("ada")
        };
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn tagline_prefers_title_then_bio() {
        let mut user = UserSummary::new("grace");
        assert_eq!(user.tagline(), "Member");
        user.bio = Some("Compilers".to_owned());
        assert_eq!(user.tagline(), "Compilers");
        user.title = Some("Rear Admiral".to_owned());
        assert_eq!(user.tagline(), "Rear Admiral");
    }

    #[test]
    fn profile_and_message_paths() {
        assert_eq!(user_path("ana"), "/users/ana/");
        assert_eq!(message_path("ana"), "/messages/send/ana/");
    }

    #[test]
    fn initial_is_uppercased() {
        assert_eq!(UserSummary::new("linus").initial(), "L");
        assert_eq!(UserSummary::new("ßtraße").initial(), "SS");
        assert_eq!(UserSummary::new("").initial(), "");
    }

    #[test]
    fn deserializes_drf_payload_with_nulls() {
        let json = r#"{
            "id": 3, "username": "kim", "email": "kim@example.com",
            "first_name": "", "last_name": "", "user_type": "founder",
            "bio": "", "title": "CTO", "profile_image": null,
            "profile_completeness": 40, "location": "",
            "created_at": "2024-05-01T10:00:00Z"
        }"#;
        let user: UserSummary = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "kim");
        assert_eq!(user.profile_image(), None);
        assert_eq!(user.user_type(), "founder");
        assert_eq!(user.tagline(), "CTO");
        assert!(user.created_at.is_some());
    }
}
