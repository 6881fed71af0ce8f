//! Featured Publications
//!
//! Cards for every publication flagged `featured`, drawn from all
//! sub-collections and ordered newest first. Equal years keep source order
//! (conferences before workshops).

use crate::model::{non_empty, CvData, Publication, PublicationKind};
use crate::render::html::{escape_html, format_authors};
use crate::render::types::{Handle, RenderOptions, Rendered};

/// Featured publications in display order.
pub fn featured_publications(data: &CvData) -> Vec<&Publication> {
    featured_entries(data).into_iter().map(|(_, p)| p).collect()
}

fn featured_entries(data: &CvData) -> Vec<(PublicationKind, &Publication)> {
    let mut featured: Vec<_> = data.publications.iter_kinds().filter(|(_, p)| p.featured).collect();
    // sort_by is stable
    featured.sort_by(|(_, a), (_, b)| b.year.cmp(&a.year));
    featured
}

/// Card key: ids are unique per sub-collection, so the kind qualifies them.
fn card_key(kind: PublicationKind, p: &Publication) -> String {
    format!("{}-{}", kind.key(), p.id)
}

pub fn generate(data: &CvData, options: &RenderOptions) -> Option<Rendered> {
    let featured = featured_entries(data);
    if featured.is_empty() {
        return None;
    }

    let mut handles = Vec::new();
    let html = featured
        .iter()
        .map(|&(kind, p)| {
            let key = card_key(kind, p);
            if non_empty(&p.abstract_text).is_some() {
                handles.push(Handle::Abstract { id: key.clone() });
            }
            render_card(&key, p, options)
        })
        .collect::<String>();

    Some(Rendered::with_handles(html, handles))
}

fn render_card(key: &str, p: &Publication, options: &RenderOptions) -> String {
    let id = escape_html(key);
    let abstract_text = non_empty(&p.abstract_text);

    let image_html = match non_empty(&p.image) {
        Some(src) => format!(
            r#"<div class="paper-image"><img src="{}" alt="{}" loading="lazy"></div>"#,
            escape_html(src),
            escape_html(&p.title)
        ),
        None => String::new(),
    };

    let abstract_button = match abstract_text {
        Some(_) => format!(
            r#"<button class="paper-btn secondary-btn abstract-toggle" data-abstract="{id}">
                        <span class="abstract-btn-text" id="abstract-btn-{id}">Show Abstract</span>
                    </button>"#,
            id = id
        ),
        None => String::new(),
    };

    let view_button = match non_empty(&p.link) {
        Some(link) => format!(
            r#"<a href="{}" target="_blank" class="paper-btn primary-btn" data-no-toggle>
                        View Paper →
                    </a>"#,
            escape_html(link)
        ),
        None => String::new(),
    };

    let abstract_panel = match abstract_text {
        Some(text) => format!(
            r#"<div class="paper-abstract" id="abstract-{}" style="display: none;">
                    <p>{}</p>
                </div>"#,
            id,
            escape_html(text)
        ),
        None => String::new(),
    };

    format!(
        r#"
        <li class="featured-paper" data-id="featured-{id}">
            {image}
            <div class="paper-main-card">
                <div class="paper-header-row">
                    <h3 class="paper-title">{title}</h3>
                    <span class="paper-venue">{venue_line}</span>
                </div>
                <p class="paper-authors">{authors}</p>
                <p class="paper-description">{summary}</p>
                <div class="paper-actions">
                    {abstract_button}
                    {view_button}
                </div>
                {abstract_panel}
            </div>
        </li>
        "#,
        id = id,
        image = image_html,
        title = escape_html(&p.title),
        venue_line = venue_line(p),
        authors = format_authors(&p.authors, &options.highlight_authors),
        summary = non_empty(&p.summary).map(escape_html).unwrap_or_default(),
        abstract_button = abstract_button,
        view_button = view_button,
        abstract_panel = abstract_panel,
    )
}

/// "Venue Year" with " · Award" appended when the paper won one.
pub(crate) fn venue_line(p: &Publication) -> String {
    let mut line = format!("{} {}", escape_html(&p.venue), p.year);
    if let Some(award) = non_empty(&p.award) {
        line.push_str(" · ");
        line.push_str(&escape_html(award));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(id: &str, year: i32, featured: bool) -> Publication {
        Publication {
            id: id.to_string(),
            title: format!("Title {}", id),
            venue: "ICML".to_string(),
            year,
            featured,
            authors: vec!["Jane Doe".to_string(), "Bob Roe".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_featured_filter_and_order() {
        let mut data = CvData::default();
        data.publications.conferences = vec![
            paper("c-2021", 2021, true),
            paper("c-2023", 2023, true),
            paper("c-hidden", 2024, false),
            paper("c-2021b", 2021, true),
        ];
        data.publications.workshops = vec![paper("w-2023", 2023, true), paper("w-hidden", 2022, false)];

        let ids: Vec<&str> = featured_publications(&data).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c-2023", "w-2023", "c-2021", "c-2021b"]);
    }

    #[test]
    fn test_no_featured_renders_nothing() {
        let mut data = CvData::default();
        data.publications.conferences = vec![paper("c", 2020, false)];
        assert!(generate(&data, &RenderOptions::default()).is_none());
    }

    #[test]
    fn test_optional_blocks() {
        let mut bare = paper("bare", 2022, true);
        bare.link = None;
        let mut rich = paper("rich", 2021, true);
        rich.abstract_text = Some("We study <things>.".to_string());
        rich.image = Some("img/rich.png".to_string());
        rich.award = Some("Oral".to_string());
        rich.link = Some("https://arxiv.org/abs/1".to_string());

        let mut data = CvData::default();
        data.publications.conferences = vec![bare, rich];

        let options = RenderOptions {
            highlight_authors: vec!["Jane Doe".to_string()],
            ..Default::default()
        };
        let rendered = generate(&data, &options).unwrap();
        let (bare_html, rich_html) =
            rendered.html.split_at(rendered.html.find("featured-conferences-rich").unwrap());

        assert!(!bare_html.contains("paper-image"));
        assert!(!bare_html.contains("abstract-conferences-bare"));
        assert!(!bare_html.contains("View Paper"));

        assert!(rich_html.contains(r#"<img src="img/rich.png""#));
        assert!(rich_html.contains(r#"id="abstract-conferences-rich" style="display: none;""#));
        assert!(rich_html.contains(r#"target="_blank" class="paper-btn primary-btn" data-no-toggle>"#));
        assert!(rich_html.contains("We study &lt;things&gt;."));
        assert!(rich_html.contains("ICML 2021 · Oral"));
        assert!(rich_html.contains(r#"<strong class="author-self">Jane Doe</strong>"#));

        assert_eq!(
            rendered.handles,
            vec![Handle::Abstract { id: "conferences-rich".to_string() }]
        );
    }

    #[test]
    fn test_shared_id_gets_distinct_abstract_panels() {
        let mut conference = paper("p", 2023, true);
        conference.abstract_text = Some("Conference version.".to_string());
        let mut workshop = paper("p", 2022, true);
        workshop.abstract_text = Some("Workshop version.".to_string());

        let mut data = CvData::default();
        data.publications.conferences = vec![conference];
        data.publications.workshops = vec![workshop];

        let rendered = generate(&data, &RenderOptions::default()).unwrap();
        assert!(rendered.html.contains(r#"id="abstract-conferences-p""#));
        assert!(rendered.html.contains(r#"id="abstract-workshops-p""#));
        assert_eq!(
            rendered.handles,
            vec![
                Handle::Abstract { id: "conferences-p".to_string() },
                Handle::Abstract { id: "workshops-p".to_string() },
            ]
        );
    }
}
