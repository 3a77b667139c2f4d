//! Seams between the pipeline and whatever displays its results.
//!
//! A browser binds these to DOM nodes; the CLI and the tests use the
//! in-memory implementations below.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use workstation_render::Toast;

/// The single node that listing cards are rendered into.
pub trait ResultsContainer {
    /// Replaces the whole content.
    fn replace(&mut self, markup: &str);
    /// Adds markup after the current content.
    fn append(&mut self, markup: &str);
}

/// Full-page navigation.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &str);
}

/// Toast display.
pub trait Notifier: Send + Sync {
    fn show_toast(&self, toast: Toast);
}

/// Unread-notification badge in the page header.
pub trait NotificationBadge: Send + Sync {
    /// Whether the badge element exists (i.e. a user is signed in).
    fn is_present(&self) -> bool;
    fn show(&self, count: u64);
    fn hide(&self);
}

/// Container backed by a string buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlContainer {
    html: String,
}

impl HtmlContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    #[must_use]
    pub fn into_html(self) -> String {
        self.html
    }
}

impl ResultsContainer for HtmlContainer {
    fn replace(&mut self, markup: &str) {
        markup.clone_into(&mut self.html);
    }

    fn append(&mut self, markup: &str) {
        self.html.push_str(markup);
    }
}

/// Navigator that records targets instead of leaving the page.
#[derive(Debug, Default)]
pub struct NavigationLog {
    targets: Mutex<Vec<String>>,
}

impl NavigationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.targets.lock().unwrap_or_else(PoisonError::into_inner).last().cloned()
    }
}

impl Navigator for NavigationLog {
    fn navigate(&self, target: &str) {
        tracing::debug!(to = target, "navigation recorded");
        self.targets.lock().unwrap_or_else(PoisonError::into_inner).push(target.to_owned());
    }
}

/// Notifier that keeps every toast it was asked to show.
#[derive(Debug, Default)]
pub struct ToastLog {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.toasts().into_iter().map(|t| t.message).collect()
    }
}

impl Notifier for ToastLog {
    fn show_toast(&self, toast: Toast) {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner).push(toast);
    }
}

/// Badge state held in atomics.
#[derive(Debug)]
pub struct BadgeState {
    present: AtomicBool,
    visible: AtomicBool,
    count: AtomicU64,
}

impl BadgeState {
    #[must_use]
    pub fn new(present: bool) -> Self {
        Self {
            present: AtomicBool::new(present),
            visible: AtomicBool::new(false),
            count: AtomicU64::new(0),
        }
    }

    /// Removes the badge from the page, which stops polling.
    pub fn remove(&self) {
        self.present.store(false, Ordering::SeqCst);
    }

    /// Count currently displayed, `None` when hidden.
    #[must_use]
    pub fn displayed(&self) -> Option<u64> {
        self.visible.load(Ordering::SeqCst).then(|| self.count.load(Ordering::SeqCst))
    }
}

impl NotificationBadge for BadgeState {
    fn is_present(&self) -> bool {
        self.present.load(Ordering::SeqCst)
    }

    fn show(&self, count: u64) {
        self.count.store(count, Ordering::SeqCst);
        self.visible.store(true, Ordering::SeqCst);
    }

    fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }
}
