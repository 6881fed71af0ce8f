use serde::{Deserialize, Serialize};

/// Collections an About-item may point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    ResearchExperience,
    Awards,
    Education,
    Service,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::ResearchExperience => "research_experience",
            EntityKind::Awards => "awards",
            EntityKind::Education => "education",
            EntityKind::Service => "service",
        }
    }
}

/// A named research topic with the papers that illustrate it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    #[serde(default)]
    pub papers: Vec<String>, // publication ids
}

/// One bullet of the About section.
///
/// Pointer variants resolve through the lookup layer; an unresolved pointer
/// renders nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AboutItem {
    Position { ref_type: EntityKind, ref_id: String },
    Award { ref_type: EntityKind, ref_id: String },
    Education { ref_type: EntityKind, ref_id: String },
    Service { ref_type: EntityKind, ref_id: String },
    ResearchInterests { interests: Vec<Topic> },
    PastWorkAreas { areas: Vec<Topic> },
}

impl AboutItem {
    /// The (collection, id) pair for pointer variants.
    pub fn reference(&self) -> Option<(EntityKind, &str)> {
        match self {
            AboutItem::Position { ref_type, ref_id }
            | AboutItem::Award { ref_type, ref_id }
            | AboutItem::Education { ref_type, ref_id }
            | AboutItem::Service { ref_type, ref_id } => Some((*ref_type, ref_id.as_str())),
            AboutItem::ResearchInterests { .. } | AboutItem::PastWorkAreas { .. } => None,
        }
    }

    /// Topic lists for interest/area variants.
    pub fn topics(&self) -> &[Topic] {
        match self {
            AboutItem::ResearchInterests { interests } => interests,
            AboutItem::PastWorkAreas { areas } => areas,
            _ => &[],
        }
    }
}

/// Singleton configuration for the About section.
///
/// The three paragraphs are trusted rich text and are inserted verbatim;
/// everything else is escaped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutConfig {
    #[serde(default)]
    pub current_paragraph: Option<String>,
    #[serde(default)]
    pub previous_paragraph: Option<String>,
    #[serde(default)]
    pub research_goal_paragraph: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Call to action; "featured projects" and "complete CV" become anchors.
    #[serde(default)]
    pub cta: Option<String>,
    #[serde(default)]
    pub items: Vec<AboutItem>,
    /// The owner's name as it appears in author lists. Merged with any
    /// spellings configured through the environment.
    #[serde(default)]
    pub highlight_authors: Vec<String>,
}
