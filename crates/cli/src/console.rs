//! Terminal bindings for the pipeline ports.

use workstation_pipeline::{Navigator, NotificationBadge, Notifier};
use workstation_render::{render_toast, Toast};

/// Prints navigation targets instead of following them.
pub(crate) struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, target: &str) {
        println!("{target}");
    }
}

/// Prints toasts as `[kind] message`, or as toast markup with `html`.
pub(crate) struct ConsoleNotifier {
    pub(crate) html: bool,
}

impl Notifier for ConsoleNotifier {
    fn show_toast(&self, toast: Toast) {
        if self.html {
            println!("{}", render_toast(&toast));
        } else {
            println!("[{}] {}", toast.kind.as_str(), toast.message);
        }
    }
}

/// Badge that is always on the page and prints every change.
pub(crate) struct ConsoleBadge;

impl NotificationBadge for ConsoleBadge {
    fn is_present(&self) -> bool {
        true
    }

    fn show(&self, count: u64) {
        println!("{}", serde_json::json!({ "unread_count": count }));
    }

    fn hide(&self) {
        println!("{}", serde_json::json!({ "unread_count": 0 }));
    }
}
