//! Publications, one expandable list per sub-collection.

use crate::model::{non_empty, CvData, Publication, PublicationKind};
use crate::page::Mount;
use crate::render::html::{escape_html, format_authors, item_link};
use crate::render::sections::featured::venue_line;
use crate::render::sections::pagination::{batch_count, batch_of, item_attrs, show_more_control};
use crate::render::types::{Handle, ItemKind, RenderOptions, Rendered};

/// Mount point of a sub-collection's list.
pub fn mount(kind: PublicationKind) -> Mount {
    match kind {
        PublicationKind::Conference => Mount::Conferences,
        PublicationKind::Workshop => Mount::Workshops,
    }
}

pub fn generate(data: &CvData, kind: PublicationKind, options: &RenderOptions) -> Option<Rendered> {
    let pubs = data.publications.get(kind);
    if pubs.is_empty() {
        return None;
    }

    let mut handles = Vec::with_capacity(pubs.len() + 1);
    let mut html = String::new();
    for (idx, publication) in pubs.iter().enumerate() {
        html.push_str(&render_item(publication, batch_of(idx, options), options));
        handles.push(Handle::Item {
            list: mount(kind).name().to_string(),
            id: publication.id.clone(),
            kind: ItemKind::Cv,
        });
    }

    if let Some((control, pager)) = show_more_control(mount(kind).name(), batch_count(pubs.len(), options)) {
        html.push_str(&control);
        handles.push(pager);
    }

    Some(Rendered::with_handles(html, handles))
}

fn render_item(publication: &Publication, batch: u32, options: &RenderOptions) -> String {
    let (extra_class, extra_attrs) = item_attrs(batch);
    let title = escape_html(&publication.title);
    let title_html = match non_empty(&publication.link) {
        Some(link) => item_link(link, &title),
        None => title,
    };

    format!(
        r#"
        <li class="expandable-item{extra_class}" data-id="{id}"{extra_attrs}>
            <div class="item-header">
                <div class="item-main">
                    <div class="pub-title-row">
                        {title}
                        <span class="meta">{venue_line}</span>
                    </div>
                    <p class="item-summary">{summary}</p>
                </div>
                <button class="toggle-btn" aria-label="Expand">
                    <i class="fas fa-chevron-down"></i>
                </button>
            </div>
            <div class="item-details" style="display: none;">
                <p class="detail-line"><strong>Authors:</strong> {authors}</p>
            </div>
        </li>
    "#,
        extra_class = extra_class,
        id = escape_html(&publication.id),
        extra_attrs = extra_attrs,
        title = title_html,
        venue_line = venue_line(publication),
        summary = non_empty(&publication.summary).map(escape_html).unwrap_or_default(),
        authors = format_authors(&publication.authors, &options.highlight_authors),
    )
}
