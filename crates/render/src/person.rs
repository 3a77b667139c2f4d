use std::fmt::Write as _;

use workstation_core::{message_path, user_path, UserSummary};

use crate::avatar::{render_avatar, AvatarSize};
use crate::escape::escape_html;
use crate::placeholders::render_empty_state;

/// Cards for one page of people, or the empty state.
#[must_use]
pub fn render_person_list(users: &[UserSummary]) -> String {
    if users.is_empty() {
        return render_empty_state("No people found", "Try adjusting your search criteria");
    }
    render_person_cards(users)
}

#[must_use]
pub fn render_person_cards(users: &[UserSummary]) -> String {
    users.iter().map(render_person_card).collect()
}

#[must_use]
pub fn render_person_card(user: &UserSummary) -> String {
    let mut output = format!(
        r#"<div class="project-card person-card" data-username="{}"><div class="project-content">"#,
        escape_html(&user.username)
    );
    #[expect(clippy::let_underscore_must_use, reason = "String::write is infallible")]
    let _ = write!(
        output,
        r#"<div class="person-avatar">{avatar}</div><h3 class="project-title"><a href="{profile}">{name}</a></h3><p class="project-description">{tagline}</p><div class="project-tags"><span class="tag">{user_type}</span></div><div class="project-footer"><a class="btn btn-outline btn-full" href="{message}"><i class="fas fa-envelope"></i> Message</a></div>"#,
        avatar = render_avatar(user, AvatarSize::Large),
        profile = escape_html(&user_path(&user.username)),
        name = escape_html(&user.display_name()),
        tagline = escape_html(user.tagline()),
        user_type = escape_html(user.user_type()),
        message = escape_html(&message_path(&user.username)),
    );
    output.push_str("</div></div>");
    output
}
