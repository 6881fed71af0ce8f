//! Shared types for section renderers.

use std::borrow::Cow;

use serde::Serialize;

use crate::model::CvData;

/// Rendering knobs taken from [`crate::config::SiteConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Author spellings emphasized in author lists (substring match).
    pub highlight_authors: Vec<String>,
    /// Items visible before the first "Show more".
    pub page_size: usize,
    /// Items revealed per "Show more".
    pub batch_size: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            highlight_authors: Vec::new(),
            page_size: crate::config::DEFAULT_PAGE_SIZE,
            batch_size: crate::config::DEFAULT_BATCH_SIZE,
        }
    }
}

impl RenderOptions {
    /// These options plus the author spellings the document itself carries
    /// in `about_config.highlight_authors`.
    pub fn for_document(&self, data: &CvData) -> Cow<'_, Self> {
        let extra: Vec<&String> = data
            .about_config
            .iter()
            .flat_map(|about| &about.highlight_authors)
            .filter(|name| !name.trim().is_empty() && !self.highlight_authors.contains(name))
            .collect();
        if extra.is_empty() {
            return Cow::Borrowed(self);
        }
        let mut merged = self.clone();
        merged.highlight_authors.extend(extra.into_iter().cloned());
        Cow::Owned(merged)
    }
}

/// Which markup contract an expandable item follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// `li.expandable-item[data-id]` with `.item-details` and a chevron icon.
    Cv,
    /// `li.expandable-about-item[data-id]` with `.about-item-details`.
    About,
}

/// Interactive element produced by a renderer, registered with the
/// interaction controller once rendering completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "handle", rename_all = "snake_case")]
pub enum Handle {
    /// Expandable item `id` inside the list element `#list`.
    Item { list: String, id: String, kind: ItemKind },
    Abstract { id: String },
    Pager { list: String, batches: u32 },
}

/// Markup for one mount point plus the interactive handles inside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    pub html: String,
    pub handles: Vec<Handle>,
}

impl Rendered {
    pub fn new(html: String) -> Self {
        Self { html, handles: Vec::new() }
    }

    pub fn with_handles(html: String, handles: Vec<Handle>) -> Self {
        Self { html, handles }
    }
}
