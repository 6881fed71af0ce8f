//! Lookup Layer
//!
//! Resolves cross-references between entities by id. Collections are small
//! and human-curated, so every lookup is a linear scan with no index.

use crate::model::{Award, CvData, Education, EntityKind, Experience, Publication, ServiceItem};

/// A resolved reference into one of the id-bearing collections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityRef<'a> {
    Experience(&'a Experience),
    Award(&'a Award),
    Education(&'a Education),
    Service(&'a ServiceItem),
}

impl<'a> EntityRef<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            EntityRef::Experience(e) => &e.id,
            EntityRef::Award(a) => &a.id,
            EntityRef::Education(e) => &e.id,
            EntityRef::Service(s) => &s.id,
        }
    }
}

/// Find an entity by collection and id. Returns `None` when the store is
/// absent or nothing matches.
pub fn find_entity<'a>(data: Option<&'a CvData>, kind: EntityKind, id: &str) -> Option<EntityRef<'a>> {
    let data = data?;
    match kind {
        EntityKind::ResearchExperience => data
            .research_experience
            .iter()
            .find(|e| e.id == id)
            .map(EntityRef::Experience),
        EntityKind::Awards => data.awards.iter().find(|a| a.id == id).map(EntityRef::Award),
        EntityKind::Education => data
            .education
            .iter()
            .find(|e| e.id == id)
            .map(EntityRef::Education),
        EntityKind::Service => data.service.iter().find(|s| s.id == id).map(EntityRef::Service),
    }
}

/// Find a publication by id: conferences first, then workshops.
pub fn find_publication<'a>(data: Option<&'a CvData>, id: &str) -> Option<&'a Publication> {
    let data = data?;
    data.publications
        .conferences
        .iter()
        .find(|p| p.id == id)
        .or_else(|| data.publications.workshops.iter().find(|p| p.id == id))
}
