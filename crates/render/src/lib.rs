//! HTML rendering for Workstation Hub listings
//!
//! Pure functions from domain records to markup fragments. Every interpolated
//! field is HTML-escaped.

mod avatar;
mod escape;
mod person;
mod placeholders;
mod project;
mod toast;

pub use avatar::{render_avatar, render_avatars, AvatarSize};
pub use escape::escape_html;
pub use person::{render_person_card, render_person_cards, render_person_list};
pub use placeholders::{render_empty_state, LOADING_PLACEHOLDER, LOAD_FAILED_PLACEHOLDER};
pub use project::{render_project_card, render_project_cards, render_project_list, BookmarkIcon};
pub use toast::{render_toast, Toast, ToastKind};
