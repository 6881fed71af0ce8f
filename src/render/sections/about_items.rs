//! About-item templates.
//!
//! Each About-item is a pointer into another collection (or a list of
//! topics) and expands to one or more title/details pairs. Pointers that do
//! not resolve, or that resolve to the wrong kind of entity, produce nothing.

use crate::lookup::{find_entity, find_publication, EntityRef};
use crate::model::{
    non_empty, AboutItem, Award, AwardTemplate, CvData, DegreeKind, Education, Experience,
    Publication, ServiceItem, Topic,
};
use crate::render::dates::{format_date_range, year_span};
use crate::render::html::{bullet_lines, escape_html, item_link, text_or_item_link};
use crate::render::sections::teaching::year_or_span;

/// Title and details markup of one About bullet.
#[derive(Debug, Clone, PartialEq)]
pub struct AboutEntry {
    pub title: String,
    pub details: String,
}

pub fn render_item(data: &CvData, item: &AboutItem) -> Vec<AboutEntry> {
    let entity = item
        .reference()
        .and_then(|(kind, id)| find_entity(Some(data), kind, id));

    let entry = match (item, entity) {
        (AboutItem::Position { .. }, Some(EntityRef::Experience(exp))) => Some(position(exp)),
        (AboutItem::Award { .. }, Some(EntityRef::Award(award))) => Some(award_entry(award)),
        (AboutItem::Education { .. }, Some(EntityRef::Education(edu))) => Some(education(data, edu)),
        (AboutItem::Service { .. }, Some(EntityRef::Service(svc))) => Some(service(svc)),
        (AboutItem::ResearchInterests { interests }, _) => {
            return topics(data, "Research", interests);
        }
        (AboutItem::PastWorkAreas { areas }, _) => {
            return topics(data, "Past work", areas);
        }
        _ => {
            tracing::debug!("Skipping unresolved about item {:?}", item.reference());
            None
        }
    };

    entry.into_iter().collect()
}

fn position(exp: &Experience) -> AboutEntry {
    let company = text_or_item_link(exp.company_url.as_deref(), &exp.company);
    let context = non_empty(&exp.context)
        .map(|c| format!(" ({})", escape_html(c)))
        .unwrap_or_default();

    let mentors = exp
        .mentors
        .iter()
        .map(|m| text_or_item_link(exp.mentor_link(m), m))
        .collect::<Vec<_>>()
        .join(", ");

    let mut details = join_dot([
        format_date_range(exp.start_date.as_deref(), exp.end_date.as_deref()),
        non_empty(&exp.summary).unwrap_or_default().to_string(),
    ]);
    if !mentors.is_empty() {
        details.push_str("<br>Mentored by ");
        details.push_str(&mentors);
    }

    AboutEntry {
        title: format!("{} at {}{}", escape_html(&exp.position), company, context),
        details,
    }
}

fn award_entry(award: &Award) -> AboutEntry {
    let link = non_empty(&award.link);
    let (title, context) = match &award.about_template {
        AwardTemplate::Standard => (text_or_item_link(link, &award.title), None),
        AwardTemplate::LinkedPhrase { prefix, text, context } => {
            let mut title = non_empty(prefix)
                .map(|p| format!("{} ", escape_html(p)))
                .unwrap_or_default();
            title.push_str(&text_or_item_link(link, text));
            (title, non_empty(context))
        }
        AwardTemplate::Plain { text, context } => (escape_html(text), non_empty(context)),
    };

    let title = match context {
        Some(ctx) => format!("{} {}", title, escape_html(ctx)),
        None => title,
    };

    AboutEntry {
        title,
        details: join_dot([
            award.year.clone(),
            non_empty(&award.description).unwrap_or_default().to_string(),
            non_empty(&award.amount).unwrap_or_default().to_string(),
        ]),
    }
}

fn education(data: &CvData, edu: &Education) -> AboutEntry {
    match edu.kind() {
        DegreeKind::Phd => phd(data, edu),
        DegreeKind::Bachelor => bachelor(edu),
    }
}

fn phd(data: &CvData, edu: &Education) -> AboutEntry {
    let institutions = if edu.affiliations.is_empty() {
        text_or_item_link(edu.institution_url.as_deref(), &edu.institution)
    } else {
        edu.affiliations
            .iter()
            .map(|a| text_or_item_link(a.url.as_deref(), &a.name))
            .collect::<Vec<_>>()
            .join("/")
    };

    let supervisors = edu
        .supervisors
        .iter()
        .map(|s| text_or_item_link(edu.supervisor_link(s), s))
        .collect::<Vec<_>>()
        .join(" &amp; ");

    let mut title = format!("PhD at {}", institutions);
    if !supervisors.is_empty() {
        title.push_str(" with ");
        title.push_str(&supervisors);
    }

    let years = year_span(edu.start_date.as_deref(), edu.end_date.as_deref());
    let dates = if years.is_empty() {
        "(expected)".to_string()
    } else {
        format!("{} (expected)", years)
    };

    let mut details = join_dot([
        dates,
        non_empty(&edu.thesis_topic).unwrap_or_default().to_string(),
    ]);
    if !edu.awards.is_empty() {
        details.push_str("<br><br><strong>Funding:</strong><br>");
        details.push_str(&bullet_lines(edu.awards.iter().map(|a| escape_html(a))));
    }

    let papers = paper_bullets(data, &edu.key_papers);
    if !papers.is_empty() {
        details.push_str("<br><br><strong>Key papers:</strong><br>");
        details.push_str(&papers);
    }

    AboutEntry { title, details }
}

fn bachelor(edu: &Education) -> AboutEntry {
    let gpa = non_empty(&edu.gpa).map(|g| format!("GPA: {}", g));
    let mut details = join_dot([
        year_span(edu.start_date.as_deref(), edu.end_date.as_deref()),
        edu.degree.clone(),
        gpa.unwrap_or_default(),
    ]);

    for block in [non_empty(&edu.notes), non_empty(&edu.undergrad_research)]
        .into_iter()
        .flatten()
    {
        details.push_str("<br><br>");
        details.push_str(&escape_html(block));
    }

    if !edu.clubs.is_empty() {
        details.push_str("<br><br><strong>Activities:</strong><br>");
        details.push_str(&bullet_lines(edu.clubs.iter().map(|c| escape_html(c))));
    }

    AboutEntry {
        title: format!(
            "BSc from {}",
            text_or_item_link(edu.institution_url.as_deref(), &edu.institution)
        ),
        details,
    }
}

fn service(svc: &ServiceItem) -> AboutEntry {
    AboutEntry {
        title: format!(
            "{} at {}",
            escape_html(&svc.role),
            text_or_item_link(svc.organization_url.as_deref(), &svc.organization)
        ),
        details: escape_html(&year_or_span(&svc.year, &svc.start_date, &svc.end_date, " – ")),
    }
}

fn topics(data: &CvData, label: &str, topics: &[Topic]) -> Vec<AboutEntry> {
    topics
        .iter()
        .map(|topic| AboutEntry {
            title: format!("{}: {}", label, escape_html(&topic.name)),
            details: paper_bullets(data, &topic.papers),
        })
        .collect()
}

/// "• <a>Title</a> (Venue Year)" lines for the ids that resolve.
fn paper_bullets(data: &CvData, ids: &[String]) -> String {
    let lines: Vec<String> = ids
        .iter()
        .filter_map(|id| find_publication(Some(data), id))
        .map(paper_line)
        .collect();
    bullet_lines(lines)
}

fn paper_line(p: &Publication) -> String {
    let title = text_or_item_link(non_empty(&p.link), &p.title);
    format!("{} ({} {})", title, escape_html(&p.venue), p.year)
}

/// Escape each non-empty part and join with " · ".
fn join_dot<const N: usize>(parts: [String; N]) -> String {
    parts
        .iter()
        .filter(|p| !p.trim().is_empty())
        .map(|p| escape_html(p))
        .collect::<Vec<_>>()
        .join(" · ")
}
