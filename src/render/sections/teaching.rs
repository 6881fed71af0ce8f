use crate::model::{non_empty, CvData, TeachingItem};
use crate::render::html::{escape_html, text_or_link};
use crate::render::types::Rendered;

pub fn generate(data: &CvData) -> Option<Rendered> {
    if data.teaching.is_empty() {
        return None;
    }
    Some(Rendered::new(data.teaching.iter().map(render_item).collect()))
}

/// `year` when set, otherwise "start–end" (either side may be missing).
pub(crate) fn year_or_span(year: &Option<String>, start: &Option<String>, end: &Option<String>, sep: &str) -> String {
    if let Some(year) = non_empty(year) {
        return year.to_string();
    }
    match (non_empty(start), non_empty(end)) {
        (Some(s), Some(e)) => format!("{}{}{}", s, sep, e),
        (Some(s), None) => s.to_string(),
        (None, Some(e)) => e.to_string(),
        (None, None) => String::new(),
    }
}

fn render_item(t: &TeachingItem) -> String {
    let date_str = year_or_span(&t.year, &t.start_date, &t.end_date, "–");

    format!(
        r#"
            <li class="teaching-item">
                <div class="teaching-header">
                    <span class="teaching-course">{} - {}</span>
                    <span class="meta">{}</span>
                </div>
                <p class="teaching-inst">{}</p>
            </li>
        "#,
        escape_html(&t.role),
        escape_html(&t.course),
        escape_html(&date_str),
        text_or_link(t.institution_url.as_deref(), &t.institution)
    )
}
