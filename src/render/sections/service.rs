use crate::model::{CvData, ServiceItem};
use crate::render::html::{escape_html, text_or_link};
use crate::render::sections::teaching::year_or_span;
use crate::render::types::Rendered;

pub fn generate(data: &CvData) -> Option<Rendered> {
    if data.service.is_empty() {
        return None;
    }
    Some(Rendered::new(data.service.iter().map(render_item).collect()))
}

fn render_item(s: &ServiceItem) -> String {
    format!(
        r#"
            <li class="service-item">
                <div class="service-header">
                    <span class="service-role">{}</span>
                    <span class="meta">{}</span>
                </div>
                <p class="service-org">{}</p>
            </li>
        "#,
        escape_html(&s.role),
        escape_html(&year_or_span(&s.year, &s.start_date, &s.end_date, "–")),
        text_or_link(s.organization_url.as_deref(), &s.organization)
    )
}
