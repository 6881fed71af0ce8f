use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::de::opt_display_string;

/// Which About template an education entry uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeKind {
    Phd,
    Bachelor,
}

impl DegreeKind {
    /// Fallback for documents authored without `degree_kind`.
    /// Applied once by the data store at load time.
    pub fn infer(degree: &str) -> Self {
        if degree.contains("PhD") {
            DegreeKind::Phd
        } else {
            DegreeKind::Bachelor
        }
    }
}

/// A named, linked institution (lab, institute) shown next to a degree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Affiliation {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub degree: String,
    #[serde(default)]
    pub degree_kind: Option<DegreeKind>,
    pub institution: String,
    #[serde(default)]
    pub institution_url: Option<String>,
    #[serde(default)]
    pub affiliations: Vec<Affiliation>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub supervisors: Vec<String>,
    #[serde(default)]
    pub supervisor_links: HashMap<String, String>,
    #[serde(default)]
    pub thesis_topic: Option<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub key_papers: Vec<String>, // publication ids
    #[serde(default, deserialize_with = "opt_display_string")]
    pub gpa: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub undergrad_research: Option<String>,
    #[serde(default)]
    pub clubs: Vec<String>,
}

impl Education {
    pub fn kind(&self) -> DegreeKind {
        self.degree_kind
            .unwrap_or_else(|| DegreeKind::infer(&self.degree))
    }

    pub fn supervisor_link(&self, supervisor: &str) -> Option<&str> {
        self.supervisor_links
            .get(supervisor)
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }
}
