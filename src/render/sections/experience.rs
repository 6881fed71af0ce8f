//! Research and industry experience lists.
//!
//! Research positions list their mentors in the details panel; industry
//! positions do not.

use crate::model::{non_empty, CvData, Experience};
use crate::page::Mount;
use crate::render::dates::format_date_range;
use crate::render::html::{escape_html, external_link, text_or_item_link};
use crate::render::sections::pagination::{batch_count, batch_of, item_attrs, show_more_control};
use crate::render::types::{Handle, ItemKind, RenderOptions, Rendered};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceKind {
    Research,
    Industry,
}

impl ExperienceKind {
    pub fn mount(&self) -> Mount {
        match self {
            ExperienceKind::Research => Mount::ResearchExperience,
            ExperienceKind::Industry => Mount::IndustryExperience,
        }
    }

    fn entries<'a>(&self, data: &'a CvData) -> &'a [Experience] {
        match self {
            ExperienceKind::Research => &data.research_experience,
            ExperienceKind::Industry => &data.industry_experience,
        }
    }
}

pub fn generate(data: &CvData, kind: ExperienceKind, options: &RenderOptions) -> Option<Rendered> {
    let entries = kind.entries(data);
    if entries.is_empty() {
        return None;
    }

    let mut handles = Vec::with_capacity(entries.len() + 1);
    let mut html = String::new();
    for (idx, exp) in entries.iter().enumerate() {
        html.push_str(&render_item(exp, kind, batch_of(idx, options)));
        handles.push(Handle::Item {
            list: kind.mount().name().to_string(),
            id: exp.id.clone(),
            kind: ItemKind::Cv,
        });
    }

    if let Some((control, pager)) = show_more_control(kind.mount().name(), batch_count(entries.len(), options)) {
        html.push_str(&control);
        handles.push(pager);
    }

    Some(Rendered::with_handles(html, handles))
}

fn render_item(exp: &Experience, kind: ExperienceKind, batch: u32) -> String {
    let (extra_class, extra_attrs) = item_attrs(batch);
    let date_str = format_date_range(exp.start_date.as_deref(), exp.end_date.as_deref());

    let company_html = text_or_item_link(non_empty(&exp.company_url), &exp.company);

    let mut details = Vec::new();
    if let Some(text) = non_empty(&exp.details) {
        details.push(format!(r#"<p class="detail-line">{}</p>"#, escape_html(text)));
    }
    if kind == ExperienceKind::Research && !exp.mentors.is_empty() {
        details.push(format!(
            r#"<p class="detail-line"><strong>Mentors:</strong> {}</p>"#,
            format_mentors(exp)
        ));
    }
    if let Some(tech) = exp.technologies.as_ref().filter(|t| !t.is_empty()) {
        let joined = tech.iter().map(|t| escape_html(t)).collect::<Vec<_>>().join(", ");
        details.push(format!(
            r#"<p class="detail-line"><strong>Technologies:</strong> {}</p>"#,
            joined
        ));
    }

    format!(
        r#"
            <li class="expandable-item{extra_class}" data-id="{id}"{extra_attrs}>
                <div class="item-header">
                    <div class="item-main">
                        <div class="exp-header">
                            <span class="exp-company">{company}</span>
                            <span class="meta">{dates}</span>
                        </div>
                        <p class="exp-role">{position}</p>
                        <p class="item-summary">{summary}</p>
                    </div>
                    <button class="toggle-btn" aria-label="Expand">
                        <i class="fas fa-chevron-down"></i>
                    </button>
                </div>
                <div class="item-details" style="display: none;">
                    {details}
                </div>
            </li>
        "#,
        extra_class = extra_class,
        id = escape_html(&exp.id),
        extra_attrs = extra_attrs,
        company = company_html,
        dates = escape_html(&date_str),
        position = escape_html(&exp.position),
        summary = non_empty(&exp.summary).map(escape_html).unwrap_or_default(),
        details = details.join("\n                    "),
    )
}

/// Mentor names in order, each linked when a link exists.
pub fn format_mentors(exp: &Experience) -> String {
    exp.mentors
        .iter()
        .map(|mentor| {
            let span = format!(r#"<span class="mentor">{}</span>"#, escape_html(mentor));
            match exp.mentor_link(mentor) {
                Some(url) => external_link(url, &span),
                None => span,
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
