use std::fmt::Write as _;

use workstation_core::ProjectSummary;

use crate::avatar::render_avatars;
use crate::escape::escape_html;
use crate::placeholders::render_empty_state;

/// Bookmark icon state on a project card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookmarkIcon {
    /// Not bookmarked (`far`)
    #[default]
    Outline,
    /// Bookmarked (`fas`)
    Filled,
}

impl BookmarkIcon {
    #[must_use]
    pub const fn from_supported(supported: bool) -> Self {
        if supported { Self::Filled } else { Self::Outline }
    }

    /// Font Awesome style class.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match *self {
            Self::Outline => "far",
            Self::Filled => "fas",
        }
    }
}

/// Cards for one page of projects, or the empty state.
#[must_use]
pub fn render_project_list(projects: &[ProjectSummary]) -> String {
    if projects.is_empty() {
        return render_empty_state(
            "No projects found",
            "Try adjusting your filters or search criteria",
        );
    }
    render_project_cards(projects)
}

/// Cards without the empty-state fallback; used when appending a page.
#[must_use]
pub fn render_project_cards(projects: &[ProjectSummary]) -> String {
    projects.iter().map(render_project_card).collect()
}

/// The one card template shared by the first render and every appended page.
#[must_use]
pub fn render_project_card(project: &ProjectSummary) -> String {
    let slug = escape_html(&project.slug);
    let title = escape_html(&project.title);

    let mut output = format!(r#"<div class="project-card" data-slug="{slug}">"#);
    output.push_str(r#"<div class="project-image">"#);
    #[expect(clippy::let_underscore_must_use, reason = "String::write is infallible")]
    let _ = match project.cover_image() {
        Some(src) => write!(output, r#"<img src="{}" alt="{title}">"#, escape_html(src)),
        None => write!(
            output,
            r#"<div class="project-placeholder"><i class="fas fa-code"></i></div>"#
        ),
    };
    #[expect(clippy::let_underscore_must_use, reason = "String::write is infallible")]
    let _ = write!(
        output,
        r#"<button class="bookmark-btn" data-action="bookmark" data-slug="{slug}"><i class="{} fa-bookmark"></i></button>"#,
        BookmarkIcon::Outline.css_class()
    );
    output.push_str("</div>");

    output.push_str(r#"<div class="project-content">"#);
    #[expect(clippy::let_underscore_must_use, reason = "String::write is infallible")]
    let _ = write!(
        output,
        r#"<h3 class="project-title"><a href="{href}">{title}</a></h3><p class="project-description">{description}</p>"#,
        href = escape_html(&project.detail_path()),
        description = escape_html(&project.card_description()),
    );

    output.push_str(r#"<div class="project-tags">"#);
    for tag in project.card_tags() {
        #[expect(clippy::let_underscore_must_use, reason = "String::write is infallible")]
        let _ = write!(output, r#"<span class="tag">{}</span>"#, escape_html(&tag.name));
    }
    output.push_str("</div>");

    #[expect(clippy::let_underscore_must_use, reason = "String::write is infallible")]
    let _ = write!(
        output,
        r#"<div class="project-footer"><div class="project-avatars">{avatars}</div><div class="project-actions"><button class="action-btn" data-action="join" data-slug="{slug}"><i class="fas fa-user-plus"></i> Join</button><button class="action-btn" data-action="support" data-slug="{slug}"><i class="fas fa-heart"></i> Support</button><button class="action-btn" data-action="chat" data-slug="{slug}"><i class="fas fa-comment"></i> Chat</button></div></div>"#,
        avatars = render_avatars(project.creator.as_ref()),
    );
    output.push_str("</div></div>");
    output
}
