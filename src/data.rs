//! Data Store
//!
//! Loads the CV document once at startup. The document is read-only after
//! loading and never refreshed.
//!
//! Load-time policy:
//! - Any type mismatch, in required or optional fields, fails the load (serde).
//! - Empty or duplicate ids inside one collection fail the load.
//! - Dangling references (About-items, key papers, topic papers) are logged as
//!   warnings; renderers omit them.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{CvError, CvResult};
use crate::lookup::{find_entity, find_publication, EntityRef};
use crate::model::{AboutItem, CvData, DegreeKind, PublicationKind};

/// Outcome of validating a parsed document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Validation {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Validation {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct DataStore;

impl DataStore {
    /// Read, parse, normalize and validate the document at `path`.
    pub async fn load(path: impl AsRef<Path>) -> CvResult<CvData> {
        let path = path.as_ref();
        tracing::info!("Loading CV data from {}", path.display());

        let bytes = tokio::fs::read(path).await.map_err(|source| CvError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> CvResult<CvData> {
        let mut data: CvData = serde_json::from_slice(bytes)?;
        normalize(&mut data);

        let validation = validate(&data);
        for warning in &validation.warnings {
            tracing::warn!("CV data: {}", warning);
        }
        if !validation.is_ok() {
            return Err(CvError::Validation(validation.errors));
        }

        tracing::info!(
            "Loaded CV data: {} conference papers, {} workshop papers, {} positions, {} awards",
            data.publications.conferences.len(),
            data.publications.workshops.len(),
            data.research_experience.len() + data.industry_experience.len(),
            data.awards.len(),
        );
        Ok(data)
    }
}

/// Fill derived fields so renderers only branch on explicit values.
pub fn normalize(data: &mut CvData) {
    for edu in &mut data.education {
        if edu.degree_kind.is_none() {
            edu.degree_kind = Some(DegreeKind::infer(&edu.degree));
        }
    }
}

pub fn validate(data: &CvData) -> Validation {
    let mut validation = Validation::default();

    for kind in PublicationKind::ALL {
        let ids = data.publications.get(kind).iter().map(|p| p.id.as_str());
        check_ids(kind.key(), ids, &mut validation.errors);
    }
    check_ids(
        "research_experience",
        data.research_experience.iter().map(|e| e.id.as_str()),
        &mut validation.errors,
    );
    check_ids(
        "industry_experience",
        data.industry_experience.iter().map(|e| e.id.as_str()),
        &mut validation.errors,
    );
    check_ids("education", data.education.iter().map(|e| e.id.as_str()), &mut validation.errors);
    check_ids("awards", data.awards.iter().map(|a| a.id.as_str()), &mut validation.errors);
    check_ids("service", data.service.iter().map(|s| s.id.as_str()), &mut validation.errors);

    for edu in &data.education {
        for paper_id in &edu.key_papers {
            if find_publication(Some(data), paper_id).is_none() {
                validation.warnings.push(format!(
                    "education `{}` references unknown paper `{}`",
                    edu.id, paper_id
                ));
            }
        }
    }

    if let Some(about) = &data.about_config {
        for item in &about.items {
            check_about_item(data, item, &mut validation.warnings);
        }
    }

    validation
}

fn check_ids<'a>(collection: &str, ids: impl Iterator<Item = &'a str>, errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for (idx, id) in ids.enumerate() {
        if id.trim().is_empty() {
            errors.push(format!("{}[{}] has an empty id", collection, idx));
        } else if !is_selector_safe(id) {
            errors.push(format!(
                "{}[{}] id `{}` may only contain ASCII letters, digits, `-` and `_`",
                collection, idx, id
            ));
        } else if !seen.insert(id) {
            errors.push(format!("{} contains duplicate id `{}`", collection, id));
        }
    }
}

/// Ids end up inside CSS selectors (`#abstract-{id}`, `[data-id="{id}"]`).
fn is_selector_safe(id: &str) -> bool {
    id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn check_about_item(data: &CvData, item: &AboutItem, warnings: &mut Vec<String>) {
    if let Some((kind, id)) = item.reference() {
        match find_entity(Some(data), kind, id) {
            None => warnings.push(format!(
                "about item references unknown {} `{}`",
                kind.as_str(),
                id
            )),
            Some(entity) if !item_accepts(item, &entity) => warnings.push(format!(
                "about item `{}` points at a {} entry it cannot render",
                id,
                kind.as_str()
            )),
            Some(_) => {}
        }
    }

    for topic in item.topics() {
        for paper_id in &topic.papers {
            if find_publication(Some(data), paper_id).is_none() {
                warnings.push(format!(
                    "topic `{}` references unknown paper `{}`",
                    topic.name, paper_id
                ));
            }
        }
    }
}

fn item_accepts(item: &AboutItem, entity: &EntityRef<'_>) -> bool {
    matches!(
        (item, entity),
        (AboutItem::Position { .. }, EntityRef::Experience(_))
            | (AboutItem::Award { .. }, EntityRef::Award(_))
            | (AboutItem::Education { .. }, EntityRef::Education(_))
            | (AboutItem::Service { .. }, EntityRef::Service(_))
    )
}
