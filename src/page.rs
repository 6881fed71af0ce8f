//! Page and mount points.
//!
//! A page is an HTML document with `<!-- mount:NAME -->` markers. The markers
//! present in the document are the page's mount points; renderers may only
//! write into those. Markers nobody wrote to are left in place.

use rustc_hash::FxHashMap;

const MARKER_OPEN: &str = "<!-- mount:";
const MARKER_CLOSE: &str = "-->";

/// Every named sink a renderer can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mount {
    Featured,
    Conferences,
    Workshops,
    ResearchExperience,
    IndustryExperience,
    Awards,
    Teaching,
    Service,
    Press,
    Talks,
    AboutCurrent,
    AboutPrevious,
    AboutResearchGoal,
    AboutContact,
    HeroCta,
    AboutItems,
    UiPatches,
}

/// Collapsible region a list mount lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Section(&'static str),
    Subsection(&'static str),
}

impl Mount {
    pub const ALL: [Mount; 17] = [
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
        Mount::UiPatches,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mount::Featured => "featured-container",
            Mount::Conferences => "conferences-list",
            Mount::Workshops => "workshops-list",
            Mount::ResearchExperience => "research-exp-list",
            Mount::IndustryExperience => "industry-exp-list",
            Mount::Awards => "awards-list",
            Mount::Teaching => "teaching-list",
            Mount::Service => "service-list",
            Mount::Press => "press-list",
            Mount::Talks => "talks-list",
            Mount::AboutCurrent => "about-current",
            Mount::AboutPrevious => "about-previous",
            Mount::AboutResearchGoal => "about-research-goal",
            Mount::AboutContact => "about-contact",
            Mount::HeroCta => "hero-cta",
            Mount::AboutItems => "about-items",
            Mount::UiPatches => "ui-patches",
        }
    }

    pub fn from_name(name: &str) -> Option<Mount> {
        Mount::ALL.into_iter().find(|m| m.name() == name)
    }

    /// The collapsible regions enclosing this mount, outermost first.
    ///
    /// Conferences and workshops sit in their own subsection inside the
    /// publications section.
    pub fn regions(self) -> &'static [Region] {
        match self {
            Mount::Conferences => &[Region::Section("publications"), Region::Subsection("conferences")],
            Mount::Workshops => &[Region::Section("publications"), Region::Subsection("workshops")],
            Mount::ResearchExperience => &[Region::Section("research-experience")],
            Mount::IndustryExperience => &[Region::Section("industry-experience")],
            Mount::Awards => &[Region::Section("awards")],
            Mount::Teaching => &[Region::Section("teaching")],
            Mount::Service => &[Region::Section("service")],
            Mount::Press => &[Region::Section("press")],
            Mount::Talks => &[Region::Section("talks")],
            _ => &[],
        }
    }
}

/// A document with mount points.
#[derive(Debug, Clone, Default)]
pub struct Page {
    template: String,
    mounts: Vec<Mount>,
    content: FxHashMap<Mount, String>,
}

impl Page {
    /// Scan `template` for mount markers. Unknown names are ignored.
    pub fn from_template(template: impl Into<String>) -> Self {
        let template = template.into();
        let mut mounts = Vec::new();
        let mut rest = template.as_str();
        while let Some(start) = rest.find(MARKER_OPEN) {
            let after = &rest[start + MARKER_OPEN.len()..];
            let Some(end) = after.find(MARKER_CLOSE) else { break };
            let name = after[..end].trim();
            match Mount::from_name(name) {
                Some(mount) if !mounts.contains(&mount) => mounts.push(mount),
                Some(_) => {}
                None => tracing::debug!("Ignoring unknown mount marker '{}'", name),
            }
            rest = &after[end + MARKER_CLOSE.len()..];
        }
        Self {
            template,
            mounts,
            content: FxHashMap::default(),
        }
    }

    /// A page with the given mounts and no surrounding document.
    pub fn with_mounts(mounts: impl IntoIterator<Item = Mount>) -> Self {
        let mut page = Self::default();
        for mount in mounts {
            if !page.mounts.contains(&mount) {
                page.template.push_str(&marker(mount));
                page.mounts.push(mount);
            }
        }
        page
    }

    /// A page carrying every mount point.
    pub fn full() -> Self {
        Self::with_mounts(Mount::ALL)
    }

    pub fn mounts(&self) -> &[Mount] {
        &self.mounts
    }

    pub fn has_mount(&self, mount: Mount) -> bool {
        self.mounts.contains(&mount)
    }

    /// Replace the content of `mount`. Returns false (and writes nothing)
    /// when the page has no such mount.
    pub fn write(&mut self, mount: Mount, html: String) -> bool {
        if !self.has_mount(mount) {
            tracing::debug!("Mount point '{}' absent, skipping", mount.name());
            return false;
        }
        self.content.insert(mount, html);
        true
    }

    pub fn content(&self, mount: Mount) -> Option<&str> {
        self.content.get(&mount).map(String::as_str)
    }

    /// The document with every written mount substituted.
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();
        while let Some(start) = rest.find(MARKER_OPEN) {
            let after = &rest[start + MARKER_OPEN.len()..];
            let Some(end) = after.find(MARKER_CLOSE) else { break };
            let marker_end = start + MARKER_OPEN.len() + end + MARKER_CLOSE.len();
            html.push_str(&rest[..start]);
            match Mount::from_name(after[..end].trim()).and_then(|m| self.content.get(&m)) {
                Some(content) => html.push_str(content),
                None => html.push_str(&rest[start..marker_end]),
            }
            rest = &rest[marker_end..];
        }
        html.push_str(rest);
        html
    }

    pub fn into_html(self) -> String {
        self.render()
    }
}

/// The `<!-- mount:NAME -->` comment a template carries for `mount`.
pub fn marker(mount: Mount) -> String {
    format!("{}{} {}", MARKER_OPEN, mount.name(), MARKER_CLOSE)
}
