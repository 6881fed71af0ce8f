//! Site configuration from environment variables.
//!
//! Defaults target local development from the repository root:
//! - `DATA_PATH`: data/cv-data.json
//! - `TEMPLATE_PATH`: data/index.template.html
//! - `OUTPUT_PATH`: dist/index.html
//! - `PORT`: 3000
//! - `CV_HIGHLIGHT_AUTHORS`: comma-separated author spellings to emphasize,
//!   added to the document's `about_config.highlight_authors`
//! - `CV_PAGE_SIZE` / `CV_BATCH_SIZE`: pagination of long lists

use std::path::PathBuf;

use crate::render::RenderOptions;

pub const DEFAULT_DATA_PATH: &str = "data/cv-data.json";
pub const DEFAULT_TEMPLATE_PATH: &str = "data/index.template.html";
pub const DEFAULT_OUTPUT_PATH: &str = "dist/index.html";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_BATCH_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub data_path: PathBuf,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub port: u16,
    pub highlight_authors: Vec<String>,
    pub page_size: usize,
    pub batch_size: usize,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (environment, test map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path_or = |key: &str, default: &str| {
            PathBuf::from(lookup(key).unwrap_or_else(|| default.to_string()))
        };

        // Zero would make every list item paginated or every batch empty
        let positive = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(default)
        };

        let highlight_authors = lookup("CV_HIGHLIGHT_AUTHORS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            data_path: path_or("DATA_PATH", DEFAULT_DATA_PATH),
            template_path: path_or("TEMPLATE_PATH", DEFAULT_TEMPLATE_PATH),
            output_path: path_or("OUTPUT_PATH", DEFAULT_OUTPUT_PATH),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            highlight_authors,
            page_size: positive("CV_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            batch_size: positive("CV_BATCH_SIZE", DEFAULT_BATCH_SIZE),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            highlight_authors: self.highlight_authors.clone(),
            page_size: self.page_size,
            batch_size: self.batch_size,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
