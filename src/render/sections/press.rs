use crate::model::{non_empty, CvData, PressItem};
use crate::render::dates::format_long_date;
use crate::render::html::{escape_html, text_or_link};
use crate::render::types::Rendered;

pub fn generate(data: &CvData) -> Option<Rendered> {
    if data.press.is_empty() {
        return None;
    }
    Some(Rendered::new(data.press.iter().map(render_item).collect()))
}

fn render_item(p: &PressItem) -> String {
    // "Outlet - Author - March 5, 2024", skipping missing parts
    let meta = [
        non_empty(&p.outlet).map(escape_html),
        non_empty(&p.author).map(escape_html),
        non_empty(&p.date).map(|d| escape_html(&format_long_date(d))),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" - ");

    let title = match non_empty(&p.link) {
        Some(link) => format!(
            r#"<a href="{}" target="_blank" class="press-title">{}</a>"#,
            escape_html(link),
            escape_html(&p.title)
        ),
        None => format!(r#"<span class="press-title">{}</span>"#, escape_html(&p.title)),
    };

    format!(
        r#"
            <li class="press-item">
                {}
                <p class="press-meta">{}</p>
                <p class="press-summary">{}</p>
            </li>
        "#,
        title,
        meta,
        non_empty(&p.summary).map(escape_html).unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_item() {
        let mut data = CvData::default();
        data.press = vec![PressItem {
            title: "AI that plans".to_string(),
            outlet: Some("Quanta".to_string()),
            author: Some("A. Writer".to_string()),
            date: Some("2024-03-05".to_string()),
            summary: Some("Coverage of planning work.".to_string()),
            link: Some("https://quanta.example/ai".to_string()),
        }];

        let html = generate(&data).unwrap().html;
        assert!(html.contains("Quanta - A. Writer - March 5, 2024"));
        assert!(html.contains(r#"class="press-title">AI that plans</a>"#));
    }

    #[test]
    fn test_press_item_without_optionals() {
        let mut data = CvData::default();
        data.press = vec![PressItem {
            title: "Interview".to_string(),
            ..Default::default()
        }];

        let html = generate(&data).unwrap().html;
        assert!(html.contains(r#"<span class="press-title">Interview</span>"#));
        assert!(html.contains(r#"<p class="press-meta"></p>"#));
    }
}
