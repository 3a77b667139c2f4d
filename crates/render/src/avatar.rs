use std::fmt::Write as _;

use workstation_core::UserSummary;

use crate::escape::escape_html;

/// Avatar size variant; selects the wrapper and placeholder classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarSize {
    Small,
    Large,
}

impl AvatarSize {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

/// Profile picture when the user has one, otherwise their initial.
#[must_use]
pub fn render_avatar(user: &UserSummary, size: AvatarSize) -> String {
    let suffix = size.suffix();
    let mut output = format!(r#"<div class="avatar-{suffix}">"#);
    #[expect(clippy::let_underscore_must_use, reason = "String::write is infallible")]
    let _ = match user.profile_image() {
        Some(src) => write!(
            output,
            r#"<img src="{}" alt="{}">"#,
            escape_html(src),
            escape_html(&user.username)
        ),
        None => write!(
            output,
            r#"<div class="avatar-placeholder-{suffix}">{}</div>"#,
            escape_html(&user.initial())
        ),
    };
    output.push_str("</div>");
    output
}

/// Avatar strip for a card footer; nothing when the creator is unknown.
#[must_use]
pub fn render_avatars(creator: Option<&UserSummary>) -> String {
    creator.map(|user| render_avatar(user, AvatarSize::Small)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_when_present() {
        let user = UserSummary {
            profile_image: Some("/media/profiles/ana.png".to_owned()),
            ..UserSummary::new("ana")
        };
        assert_eq!(
            render_avatar(&user, AvatarSize::Small),
            r#"<div class="avatar-small"><img src="/media/profiles/ana.png" alt="ana"></div>"#
        );
    }

    #[test]
    fn initial_placeholder_otherwise() {
        let user = UserSummary { profile_image: Some(String::new()), ..UserSummary::new("bob") };
        assert_eq!(
            render_avatar(&user, AvatarSize::Large),
            r#"<div class="avatar-large"><div class="avatar-placeholder-large">B</div></div>"#
        );
    }

    #[test]
    fn missing_creator_renders_nothing() {
        assert_eq!(render_avatars(None), "");
    }
}
