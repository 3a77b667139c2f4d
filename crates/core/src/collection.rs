//! Listing responses arrive either as a bare JSON array or as a page object
//! `{count, next, previous, results}`. [`Collection`] accepts both and
//! [`Page`] is the normalized form everything downstream works with.

use serde::{Deserialize, Serialize};

/// Raw listing body, in whichever shape the backend chose.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Collection<T> {
    Paged {
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        next: Option<String>,
    },
    Bare(Vec<T>),
}

/// Normalized listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of records, when the backend reports it
    pub count: Option<u64>,
    /// Absolute URL of the following page, when the backend reports it
    pub next: Option<String>,
    /// Whether the body was a page object rather than a bare array
    pub paginated: bool,
}

impl<T> Page<T> {
    /// Whether asking for the following page can yield more records.
    ///
    /// A bare array is a complete collection. A page object that reports a
    /// total is authoritative through `next`; one that does not keeps going
    /// until a page comes back empty.
    #[must_use]
    pub fn has_more(&self) -> bool {
        if !self.paginated {
            return false;
        }
        if self.count.is_some() {
            return self.next.is_some();
        }
        !self.items.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> From<Collection<T>> for Page<T> {
    fn from(collection: Collection<T>) -> Self {
        match collection {
            Collection::Paged { results, count, next } => {
                Self { items: results, count, next, paginated: true }
            },
            Collection::Bare(items) => Self { items, count: None, next: None, paginated: false },
        }
    }
}

impl<T> Collection<T> {
    #[must_use]
    pub fn into_page(self) -> Page<T> {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProjectSummary;

    #[test]
    fn bare_and_paged_shapes_normalize_to_same_items() {
        let bare: Collection<ProjectSummary> =
            serde_json::from_str(r#"[{"slug": "a", "title": "A", "tags": []}]"#).unwrap();
        let paged: Collection<ProjectSummary> =
            serde_json::from_str(r#"{"results": [{"slug": "a", "title": "A", "tags": []}]}"#)
                .unwrap();

        let bare = bare.into_page();
        let paged = paged.into_page();
        assert_eq!(bare.items, paged.items);
        assert!(!bare.paginated);
        assert!(paged.paginated);
    }

    #[test]
    fn has_more_follows_next_when_count_reported() {
        let page: Page<u32> = Collection::Paged {
            results: vec![1, 2],
            count: Some(14),
            next: Some("http://hub/api/projects/?page=2".to_owned()),
        }
        .into();
        assert!(page.has_more());

        let last: Page<u32> =
            Collection::Paged { results: vec![3], count: Some(14), next: None }.into();
        assert!(!last.has_more());
    }

    #[test]
    fn has_more_without_count_stops_on_empty_page() {
        let page: Page<u32> =
            Collection::Paged { results: vec![1], count: None, next: None }.into();
        assert!(page.has_more());
        let empty: Page<u32> =
            Collection::Paged { results: vec![], count: None, next: None }.into();
        assert!(!empty.has_more());
    }

    #[test]
    fn bare_array_is_complete() {
        let page: Page<u32> = Collection::Bare(vec![1, 2, 3]).into();
        assert!(!page.has_more());
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn rejects_unexpected_shape() {
        let parsed = serde_json::from_str::<Collection<u32>>(r#"{"detail": "Not found."}"#);
        assert!(parsed.is_err());
    }
}
