// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::api_server::ServerState;
use crate::page::{marker, Mount, Page};

const INDEX_CACHE_KEY: &str = "page:index";

// ============================================================================
// Index Page
// ============================================================================

/// Rendered fragments, one field per mount point. Empty when the section
/// had nothing to render.
#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub featured: String,
    pub conferences: String,
    pub workshops: String,
    pub research_experience: String,
    pub industry_experience: String,
    pub awards: String,
    pub teaching: String,
    pub service: String,
    pub press: String,
    pub talks: String,
    pub about_current: String,
    pub about_previous: String,
    pub about_research_goal: String,
    pub about_contact: String,
    pub hero_cta: String,
    pub about_items: String,
    pub ui_patches: String,
}

impl IndexTemplate {
    pub fn from_page(title: &str, page: &Page) -> Self {
        Self::fill(title, |mount| match (mount, page.content(mount)) {
            (_, Some(html)) => html.to_string(),
            (Mount::UiPatches, None) => "[]".to_string(),
            (_, None) => String::new(),
        })
    }

    /// The page with a mount marker in every slot. This is the marker
    /// template `build_site` reads (`data/index.template.html`).
    pub fn with_markers(title: &str) -> Self {
        Self::fill(title, marker)
    }

    fn fill(title: &str, get: impl Fn(Mount) -> String) -> Self {
        Self {
            title: title.to_string(),
            featured: get(Mount::Featured),
            conferences: get(Mount::Conferences),
            workshops: get(Mount::Workshops),
            research_experience: get(Mount::ResearchExperience),
            industry_experience: get(Mount::IndustryExperience),
            awards: get(Mount::Awards),
            teaching: get(Mount::Teaching),
            service: get(Mount::Service),
            press: get(Mount::Press),
            talks: get(Mount::Talks),
            about_current: get(Mount::AboutCurrent),
            about_previous: get(Mount::AboutPrevious),
            about_research_goal: get(Mount::AboutResearchGoal),
            about_contact: get(Mount::AboutContact),
            hero_cta: get(Mount::HeroCta),
            about_items: get(Mount::AboutItems),
            ui_patches: get(Mount::UiPatches),
        }
    }
}

pub async fn index_page(State(state): State<ServerState>) -> impl IntoResponse {
    if let Some(cached) = state.cache.get(INDEX_CACHE_KEY).await {
        return Html(cached);
    }

    let mut app = state.app.clone();
    let mut page = Page::full();
    app.render_page(&mut page);

    let template = IndexTemplate::from_page("Portfolio", &page);
    let html = template.render().unwrap_or_else(|e| {
        format!("Template error: {}", e)
    });
    state.cache.insert(INDEX_CACHE_KEY.to_string(), html.clone()).await;
    Html(html)
}
