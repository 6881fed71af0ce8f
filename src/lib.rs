//! Portfolio CV
//!
//! Data-driven academic CV / portfolio renderer.
//!
//! One JSON document is loaded once and rendered into the named mount points
//! of a page:
//! - `model/`: typed CV document
//! - `data`: loading, normalization and validation
//! - `lookup`: cross-reference resolution for the About section
//! - `render/`: one renderer per CV section plus the page generator
//! - `page`: mount points and template substitution
//! - `interaction/`: expand/collapse and pagination state machines
//! - `app`: load → render → initial collapse
//!
//! With the `api` feature the page is also served over HTTP (axum).

pub mod error;
pub mod config;
pub mod model;
pub mod data;
pub mod lookup;
pub mod render;
pub mod page;
pub mod interaction;
pub mod app;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use app::{App, AppState};
pub use config::SiteConfig;
pub use data::DataStore;
pub use error::{CvError, CvResult};
pub use interaction::{ClickTarget, DomPatch, InteractionController, ToggleState};
pub use model::CvData;
pub use page::{Mount, Page};
pub use render::{PageGenerator, RenderComplete, RenderOptions};

#[cfg(feature = "api")]
pub use api_server::{create_router, ServerState};
