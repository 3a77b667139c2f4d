use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Filter group on the explore page. Variant order is the order groups are
/// serialized into a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    Stage,
    Collaboration,
    Status,
}

impl FilterCategory {
    pub const ALL: &'static [FilterCategory] =
        &[FilterCategory::Stage, FilterCategory::Collaboration, FilterCategory::Status];

    /// Query parameter and input `name` attribute for this group.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Stage => "stage",
            Self::Collaboration => "collaboration",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stage" => Ok(Self::Stage),
            "collaboration" => Ok(Self::Collaboration),
            "status" => Ok(Self::Status),
            other => Err(CoreError::UnknownFilterCategory(other.to_owned())),
        }
    }
}

/// One filter input on the explore page: a checkbox or a filter button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterControl {
    /// `name` attribute of a checkbox, `data-filter` of a button
    pub name: String,
    pub value: String,
    /// Checked checkbox or button carrying the `active` class
    pub active: bool,
}

impl FilterControl {
    #[must_use]
    pub fn checkbox(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        Self { name: name.into(), value: value.into(), active: checked }
    }

    #[must_use]
    pub fn button(filter: impl Into<String>, value: impl Into<String>, active: bool) -> Self {
        Self { name: filter.into(), value: value.into(), active }
    }
}

/// Multi-valued selection per filter group.
///
/// Built transiently from the page controls when filters are applied; values
/// keep the order they were selected in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    groups: BTreeMap<FilterCategory, Vec<String>>,
}

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the active controls. Controls whose name is not a filter
    /// group are skipped.
    #[must_use]
    pub fn from_controls<'a, I>(controls: I) -> Self
    where
        I: IntoIterator<Item = &'a FilterControl>,
    {
        let mut selection = Self::new();
        for control in controls.into_iter().filter(|c| c.active) {
            match control.name.parse::<FilterCategory>() {
                Ok(category) => selection.select(category, control.value.clone()),
                Err(e) => {
                    tracing::debug!(name = %control.name, error = %e, "ignoring filter control");
                },
            }
        }
        selection
    }

    /// Adds a value to a group. Blank and repeated values are ignored.
    pub fn select(&mut self, category: FilterCategory, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            return;
        }
        let values = self.groups.entry(category).or_default();
        if !values.contains(&value) {
            values.push(value);
        }
    }

    #[must_use]
    pub fn with(mut self, category: FilterCategory, value: impl Into<String>) -> Self {
        self.select(category, value);
        self
    }

    #[must_use]
    pub fn values(&self, category: FilterCategory) -> &[String] {
        self.groups.get(&category).map_or(&[], Vec::as_slice)
    }

    /// `(name, value)` pairs, groups in declaration order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups.iter().flat_map(|(category, values)| {
            values.iter().map(|value| (category.as_str(), value.as_str()))
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }
}
