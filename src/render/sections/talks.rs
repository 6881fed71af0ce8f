use crate::model::{CvData, Talk};
use crate::render::html::{escape_html, text_or_link};
use crate::render::types::Rendered;

pub fn generate(data: &CvData) -> Option<Rendered> {
    if data.invited_talks.is_empty() {
        return None;
    }
    Some(Rendered::new(data.invited_talks.iter().map(render_item).collect()))
}

fn render_item(t: &Talk) -> String {
    format!(
        r#"
            <li class="talk-item">
                <span class="talk-event">{}</span>
                <span class="meta">{}</span>
            </li>
        "#,
        text_or_link(t.link.as_deref(), &t.event),
        escape_html(&t.year)
    )
}
