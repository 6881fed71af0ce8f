//! CV Data Model
//!
//! Typed view of the single JSON document the site is rendered from.
//! Every top-level key is optional; an absent collection behaves like an
//! empty one.
//!
//! ## Collections
//! - `publications.{conferences,workshops}` - papers, partitioned by venue type
//! - `research_experience` / `industry_experience` - positions
//! - `education`, `awards`, `service`, `teaching`, `press`, `invited_talks`
//! - `about_config` - singleton driving the About section

pub mod de;
pub mod publication;
pub mod experience;
pub mod education;
pub mod award;
pub mod entries;
pub mod about;

use serde::{Deserialize, Serialize};

pub use publication::{Publication, PublicationKind, Publications};
pub use experience::Experience;
pub use education::{Affiliation, DegreeKind, Education};
pub use award::{Award, AwardTemplate};
pub use entries::{PressItem, ServiceItem, Talk, TeachingItem};
pub use about::{AboutConfig, AboutItem, EntityKind, Topic};

/// Root of the CV document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CvData {
    #[serde(default)]
    pub about_config: Option<AboutConfig>,
    #[serde(default)]
    pub publications: Publications,
    #[serde(default)]
    pub research_experience: Vec<Experience>,
    #[serde(default)]
    pub industry_experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub service: Vec<ServiceItem>,
    #[serde(default)]
    pub teaching: Vec<TeachingItem>,
    #[serde(default)]
    pub press: Vec<PressItem>,
    #[serde(default)]
    pub invited_talks: Vec<Talk>,
}

/// Returns `Some(s)` only for non-blank strings.
///
/// Optional text fields are treated as absent when empty so templates never
/// emit a dangling separator.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
