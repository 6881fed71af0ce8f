//! HTML building helpers.
//!
//! Every data-sourced string goes through [`escape_html`] before it is placed
//! in markup, attribute values (URLs included) as well as text. URLs are not
//! validated. The only trusted rich-text fields are the About paragraphs.

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `<a href=url target="_blank">label</a>`; `label_html` must already be markup.
pub fn external_link(url: &str, label_html: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\">{}</a>",
        escape_html(url),
        label_html
    )
}

/// Escaped `text`, wrapped in a link when `url` is present.
pub fn text_or_link(url: Option<&str>, text: &str) -> String {
    match url.filter(|u| !u.trim().is_empty()) {
        Some(url) => external_link(url, &escape_html(text)),
        None => escape_html(text),
    }
}

/// Link inside an expandable item. `data-no-toggle` tells the item's click
/// handler to follow the link instead of toggling.
pub fn item_link(url: &str, label_html: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" data-no-toggle>{}</a>",
        escape_html(url),
        label_html
    )
}

/// [`text_or_link`] for text inside an expandable item.
pub fn text_or_item_link(url: Option<&str>, text: &str) -> String {
    match url.filter(|u| !u.trim().is_empty()) {
        Some(url) => item_link(url, &escape_html(text)),
        None => escape_html(text),
    }
}

/// Author list joined with ", ". Any author containing one of the
/// `highlight` spellings is emphasized.
pub fn format_authors(authors: &[String], highlight: &[String]) -> String {
    authors
        .iter()
        .map(|author| {
            let escaped = escape_html(author);
            if highlight.iter().any(|name| !name.is_empty() && author.contains(name.as_str())) {
                format!("<strong class=\"author-self\">{}</strong>", escaped)
            } else {
                escaped
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Bullet list used in About details: "• a<br>• b".
pub fn bullet_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| format!("• {}", line.as_ref()))
        .collect::<Vec<_>>()
        .join("<br>")
}
