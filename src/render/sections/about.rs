//! About Section
//!
//! Paragraphs, contact line and call to action from `about_config`, plus the
//! expandable About-item list (see [`about_items`](super::about_items)).
//!
//! The three paragraphs are authored rich text and are the only fields
//! inserted without escaping.

use crate::model::{non_empty, AboutConfig, CvData};
use crate::render::html::escape_html;
use crate::render::sections::about_items;
use crate::render::types::{Handle, ItemKind, Rendered};

/// Element id of the About-item list.
pub const ITEMS_LIST: &str = "about-items";

const CTA_LINKS: [(&str, &str); 2] = [
    ("featured projects", "#featured"),
    ("complete CV", "#complete-cv"),
];

pub fn current(config: &AboutConfig) -> Option<Rendered> {
    non_empty(&config.current_paragraph).map(|p| Rendered::new(p.to_string()))
}

pub fn previous(config: &AboutConfig) -> Option<Rendered> {
    non_empty(&config.previous_paragraph).map(|p| Rendered::new(p.to_string()))
}

pub fn research_goal(config: &AboutConfig) -> Option<Rendered> {
    non_empty(&config.research_goal_paragraph).map(|p| Rendered::new(p.to_string()))
}

pub fn contact(config: &AboutConfig) -> Option<Rendered> {
    let email = escape_html(non_empty(&config.email)?);
    Some(Rendered::new(format!(
        r#"Always happy to chat, collaborate, or mentor → <a href="mailto:{0}"><strong>{0}</strong></a>"#,
        email
    )))
}

/// Escaped call to action with the first occurrence of each anchor phrase
/// turned into an in-page link.
pub fn cta(config: &AboutConfig) -> Option<Rendered> {
    let mut html = escape_html(non_empty(&config.cta)?);
    for (phrase, target) in CTA_LINKS {
        html = html.replacen(phrase, &format!(r##"<a href="{}">{}</a>"##, target, phrase), 1);
    }
    Some(Rendered::new(html))
}

/// The About-item list. Unresolved pointers are skipped.
pub fn items(data: &CvData, config: &AboutConfig) -> Option<Rendered> {
    let entries: Vec<about_items::AboutEntry> = config
        .items
        .iter()
        .flat_map(|item| about_items::render_item(data, item))
        .collect();
    if entries.is_empty() {
        return None;
    }

    let mut handles = Vec::with_capacity(entries.len());
    let mut html = String::new();
    for (idx, entry) in entries.iter().enumerate() {
        let id = format!("about-{}", idx);
        html.push_str(&format!(
            r#"
        <li class="expandable-about-item" data-id="{}">
            <span class="about-item-title">{}</span>
            <div class="about-item-details" style="display: none;">
                {}
            </div>
        </li>
    "#,
            id, entry.title, entry.details
        ));
        handles.push(Handle::Item {
            list: ITEMS_LIST.to_string(),
            id,
            kind: ItemKind::About,
        });
    }

    Some(Rendered::with_handles(html, handles))
}
