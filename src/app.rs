//! Application root.
//!
//! Owns the loaded document, the render options and the interaction
//! controller, and sequences load → render → initial collapse.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::data::DataStore;
use crate::interaction::patch::to_script_json;
use crate::interaction::{DomPatch, InteractionController};
use crate::model::CvData;
use crate::page::{Mount, Page};
use crate::render::{PageGenerator, RenderOptions};

/// Everything the page lifecycle needs, passed explicitly.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Loaded once at boot; `None` when the load failed.
    pub store: Option<Arc<CvData>>,
    pub options: RenderOptions,
    pub controller: InteractionController,
}

#[derive(Debug, Clone, Default)]
pub struct App {
    state: AppState,
}

impl App {
    /// Load the document named by `config`. A failed load is logged and
    /// leaves the store absent; the app still boots.
    pub async fn boot(config: &SiteConfig) -> Self {
        let store = match DataStore::load(&config.data_path).await {
            Ok(data) => Some(Arc::new(data)),
            Err(e) => {
                tracing::error!("Error loading CV data from {}: {}", config.data_path.display(), e);
                None
            }
        };
        Self::with_store(store, config.render_options())
    }

    pub fn from_data(data: CvData, options: RenderOptions) -> Self {
        Self::with_store(Some(Arc::new(data)), options)
    }

    fn with_store(store: Option<Arc<CvData>>, options: RenderOptions) -> Self {
        Self {
            state: AppState {
                store,
                options,
                controller: InteractionController::new(),
            },
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> Option<&CvData> {
        self.state.store.as_deref()
    }

    pub fn controller_mut(&mut self) -> &mut InteractionController {
        &mut self.state.controller
    }

    /// Render every section into `page`, then run the initial collapse pass.
    ///
    /// The resulting patches are also written into the `ui-patches` mount as
    /// JSON when the page has one.
    pub fn render_page(&mut self, page: &mut Page) -> Vec<DomPatch> {
        let generator = PageGenerator::new(self.state.options.clone());
        let done = generator.render_all(self.state.store.as_deref(), page);
        let patches = self.state.controller.initialize(&done);

        if page.has_mount(Mount::UiPatches) {
            match to_script_json(&patches) {
                Ok(json) => {
                    page.write(Mount::UiPatches, json);
                }
                Err(e) => tracing::error!("Failed to serialize initial UI patches: {}", e),
            }
        }
        patches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{ClickTarget, ToggleState};
    use crate::model::Experience;
    use tempfile::TempDir;

    fn data() -> CvData {
        let mut data = CvData::default();
        data.research_experience = vec![Experience {
            id: "mila".to_string(),
            company: "Mila".to_string(),
            position: "Research Intern".to_string(),
            start_date: Some("2023-05-01".to_string()),
            ..Default::default()
        }];
        data
    }

    #[tokio::test]
    async fn test_boot_with_missing_file_leaves_store_absent() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig {
            data_path: dir.path().join("missing.json"),
            ..Default::default()
        };
        let mut app = App::boot(&config).await;
        assert!(app.store().is_none());

        let mut page = Page::from_template("<ul><!-- mount:research-exp-list --></ul>");
        let patches = app.render_page(&mut page);
        assert!(page.content(Mount::ResearchExperience).is_none());
        // Sections on the page are still collapsed.
        assert!(!patches.is_empty());
    }

    #[tokio::test]
    async fn test_boot_loads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cv.json");
        std::fs::write(&path, r#"{"invited_talks": [{"event": "Seminar", "year": 2024}]}"#).unwrap();
        let config = SiteConfig {
            data_path: path,
            ..Default::default()
        };
        let app = App::boot(&config).await;
        assert_eq!(app.store().map(|d| d.invited_talks.len()), Some(1));
    }

    #[test]
    fn test_render_page_writes_ui_patches() {
        let mut app = App::from_data(data(), RenderOptions::default());
        let mut page = Page::with_mounts([Mount::ResearchExperience, Mount::UiPatches]);
        let patches = app.render_page(&mut page);

        let json = page.content(Mount::UiPatches).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(patches.len()));

        let list = Mount::ResearchExperience.name();
        app.controller_mut().click_item(list, "mila", ClickTarget::Region);
        assert_eq!(
            app.state().controller.item_state(list, "mila"),
            Some(ToggleState::Expanded)
        );
    }
}
