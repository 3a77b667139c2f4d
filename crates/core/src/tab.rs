use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{PROJECTS_ENDPOINT, USERS_ENDPOINT};

/// Result tab on the explore page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Every project type
    #[default]
    Projects,
    /// Projects of type `idea`
    Ideas,
    /// Member directory
    People,
}

impl Tab {
    /// Maps a `data-tab` name to a tab. Unknown names show all projects.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "ideas" => Self::Ideas,
            "people" => Self::People,
            _ => Self::Projects,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Projects => "projects",
            Self::Ideas => "ideas",
            Self::People => "people",
        }
    }

    /// Collection endpoint backing this tab.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match *self {
            Self::Projects | Self::Ideas => PROJECTS_ENDPOINT,
            Self::People => USERS_ENDPOINT,
        }
    }

    /// Query parameters that select this tab's content.
    #[must_use]
    pub const fn params(&self) -> &'static [(&'static str, &'static str)] {
        match *self {
            Self::Ideas => &[("project_type", "idea")],
            Self::Projects | Self::People => &[],
        }
    }

    #[must_use]
    pub const fn lists_people(&self) -> bool {
        matches!(self, Self::People)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_projects() {
        assert_eq!(Tab::from_name("ideas"), Tab::Ideas);
        assert_eq!(Tab::from_name("People"), Tab::People);
        assert_eq!(Tab::from_name("trending"), Tab::Projects);
        assert_eq!(Tab::from_name(""), Tab::Projects);
    }

    #[test]
    fn endpoints_per_tab() {
        assert_eq!(Tab::Projects.endpoint(), "/api/projects/");
        assert_eq!(Tab::Ideas.endpoint(), "/api/projects/");
        assert_eq!(Tab::Ideas.params(), [("project_type", "idea")]);
        assert_eq!(Tab::People.endpoint(), "/api/users/");
        assert!(Tab::People.params().is_empty());
    }
}
