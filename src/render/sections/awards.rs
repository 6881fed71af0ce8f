use crate::model::{non_empty, Award, CvData};
use crate::render::html::{escape_html, text_or_link};
use crate::render::types::Rendered;

pub fn generate(data: &CvData) -> Option<Rendered> {
    if data.awards.is_empty() {
        return None;
    }
    Some(Rendered::new(data.awards.iter().map(render_item).collect()))
}

fn render_item(award: &Award) -> String {
    let amount = non_empty(&award.amount)
        .map(|a| format!(" - {}", escape_html(a)))
        .unwrap_or_default();
    let description = non_empty(&award.description)
        .map(|d| format!(" - {}", escape_html(d)))
        .unwrap_or_default();

    let details = if amount.is_empty() && description.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="award-details">{}{}</p>"#, amount, description)
    };

    format!(
        r#"
            <li class="award-item">
                <div class="award-header">
                    <span class="award-title">{}</span>
                    <span class="meta">{}</span>
                </div>
                {}
            </li>
        "#,
        text_or_link(award.link.as_deref(), &award.title),
        escape_html(&award.year),
        details
    )
}
