//! Page Renderer Module
//!
//! Renders the portfolio sections from the CV document into HTML fragments.
//!
//! ## Sections
//! 1. Featured publications - cards, newest first
//! 2. Publications - conferences and workshops, paginated
//! 3. Research / industry experience - expandable, paginated
//! 4. Awards, teaching, service, press, invited talks - flat lists
//! 5. About - paragraphs, contact, call to action, About-items

pub mod html;
pub mod dates;
pub mod types;
pub mod sections;
pub mod generator;

pub use generator::{PageGenerator, RenderComplete};
pub use html::escape_html;
pub use types::{Handle, ItemKind, RenderOptions, Rendered};
