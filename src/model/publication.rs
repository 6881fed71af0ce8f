use serde::{Deserialize, Serialize};

/// A paper. `featured` is a cross-cutting filter, not a separate collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub venue: String,
    pub year: i32,
    #[serde(default)]
    pub authors: Vec<String>, // display order
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub award: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image: Option<String>,
}

/// Publication sub-collections, in lookup precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicationKind {
    Conference,
    Workshop,
}

impl PublicationKind {
    pub const ALL: [PublicationKind; 2] = [PublicationKind::Conference, PublicationKind::Workshop];

    /// Subsection id used by the page (`conferences`, `workshops`).
    pub fn key(&self) -> &'static str {
        match self {
            PublicationKind::Conference => "conferences",
            PublicationKind::Workshop => "workshops",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publications {
    #[serde(default)]
    pub conferences: Vec<Publication>,
    #[serde(default)]
    pub workshops: Vec<Publication>,
}

impl Publications {
    pub fn get(&self, kind: PublicationKind) -> &[Publication] {
        match kind {
            PublicationKind::Conference => &self.conferences,
            PublicationKind::Workshop => &self.workshops,
        }
    }

    /// All publications, conferences first, each in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Publication> {
        self.iter_kinds().map(|(_, p)| p)
    }

    /// Like [`Publications::iter`], paired with the sub-collection.
    pub fn iter_kinds(&self) -> impl Iterator<Item = (PublicationKind, &Publication)> {
        PublicationKind::ALL
            .into_iter()
            .flat_map(move |kind| self.get(kind).iter().map(move |p| (kind, p)))
    }
}
