//! Page Generator
//!
//! Runs every section renderer in a fixed order and writes each result into
//! its mount point. A renderer only runs when its mount point is present on
//! the page and the store is loaded.
//!
//! Public API (consumed by app.rs, api_server.rs and build_site.rs):
//! - PageGenerator::new(options) -> Self
//! - PageGenerator::render_mount(data, mount) -> Option<Rendered>
//! - PageGenerator::render_all(data, page) -> RenderComplete

use crate::model::{CvData, PublicationKind};
use crate::page::{Mount, Page, Region};
use crate::render::sections::{
    about, awards, experience, featured, press, publications, service, talks, teaching,
    ExperienceKind,
};
use crate::render::types::{Handle, RenderOptions, Rendered};

/// Render order. `UiPatches` is written by the application after the
/// initial collapse pass.
const RENDER_ORDER: [Mount; 16] = [
    Mount::Featured,
    Mount::Conferences,
    Mount::Workshops,
    Mount::ResearchExperience,
    Mount::IndustryExperience,
    Mount::Awards,
    Mount::Teaching,
    Mount::Service,
    Mount::Press,
    Mount::Talks,
    Mount::AboutCurrent,
    Mount::AboutPrevious,
    Mount::AboutResearchGoal,
    Mount::AboutContact,
    Mount::HeroCta,
    Mount::AboutItems,
];

/// Proof that a render pass over a page has finished.
///
/// Only [`PageGenerator::render_all`] constructs one; the interaction
/// controller's initial pass requires it.
#[derive(Debug, Clone)]
pub struct RenderComplete {
    written: Vec<Mount>,
    handles: Vec<Handle>,
    sections: Vec<&'static str>,
    subsections: Vec<&'static str>,
}

impl RenderComplete {
    /// Mounts that received content, in render order.
    pub fn written(&self) -> &[Mount] {
        &self.written
    }

    /// Interactive handles emitted by the renderers.
    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    /// Collapsible sections present on the page.
    pub fn sections(&self) -> &[&'static str] {
        &self.sections
    }

    /// Collapsible subsections present on the page.
    pub fn subsections(&self) -> &[&'static str] {
        &self.subsections
    }
}

/// Stateless apart from its options.
#[derive(Debug, Clone, Default)]
pub struct PageGenerator {
    options: RenderOptions,
}

impl PageGenerator {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the fragment for one mount point. `None` when there is nothing
    /// to render.
    pub fn render_mount(&self, data: &CvData, mount: Mount) -> Option<Rendered> {
        let opts = self.options.for_document(data);
        let opts = opts.as_ref();
        match mount {
            Mount::Featured => featured::generate(data, opts),
            Mount::Conferences => publications::generate(data, PublicationKind::Conference, opts),
            Mount::Workshops => publications::generate(data, PublicationKind::Workshop, opts),
            Mount::ResearchExperience => experience::generate(data, ExperienceKind::Research, opts),
            Mount::IndustryExperience => experience::generate(data, ExperienceKind::Industry, opts),
            Mount::Awards => awards::generate(data),
            Mount::Teaching => teaching::generate(data),
            Mount::Service => service::generate(data),
            Mount::Press => press::generate(data),
            Mount::Talks => talks::generate(data),
            Mount::AboutCurrent => about::current(data.about_config.as_ref()?),
            Mount::AboutPrevious => about::previous(data.about_config.as_ref()?),
            Mount::AboutResearchGoal => about::research_goal(data.about_config.as_ref()?),
            Mount::AboutContact => about::contact(data.about_config.as_ref()?),
            Mount::HeroCta => about::cta(data.about_config.as_ref()?),
            Mount::AboutItems => {
                let config = data.about_config.as_ref()?;
                about::items(data, config)
            }
            Mount::UiPatches => None,
        }
    }

    /// Render every section into `page`.
    ///
    /// With no store loaded nothing is written, but the token still lists the
    /// collapsible regions present on the page.
    pub fn render_all(&self, data: Option<&CvData>, page: &mut Page) -> RenderComplete {
        let mut written = Vec::new();
        let mut handles = Vec::new();

        match data {
            Some(data) => {
                for mount in RENDER_ORDER {
                    if !page.has_mount(mount) {
                        tracing::debug!("Mount point '{}' absent, skipping", mount.name());
                        continue;
                    }
                    let Some(rendered) = self.render_mount(data, mount) else {
                        tracing::debug!("No data for '{}'", mount.name());
                        continue;
                    };
                    if page.write(mount, rendered.html) {
                        written.push(mount);
                        handles.extend(rendered.handles);
                    }
                }
            }
            None => tracing::warn!("CV data not loaded, page left empty"),
        }

        let mut sections = Vec::new();
        let mut subsections = Vec::new();
        for mount in page.mounts() {
            for region in mount.regions() {
                match *region {
                    Region::Section(id) if !sections.contains(&id) => sections.push(id),
                    Region::Subsection(id) if !subsections.contains(&id) => subsections.push(id),
                    _ => {}
                }
            }
        }

        tracing::info!(
            "Rendered {} mount point(s), {} interactive handle(s)",
            written.len(),
            handles.len()
        );

        RenderComplete {
            written,
            handles,
            sections,
            subsections,
        }
    }
}
