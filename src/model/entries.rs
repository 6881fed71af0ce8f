//! Flat list entries: service, teaching, press, invited talks.

use serde::{Deserialize, Serialize};

use crate::model::de::{display_string, opt_display_string};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: String,
    pub role: String,
    pub organization: String,
    #[serde(default)]
    pub organization_url: Option<String>,
    #[serde(default, deserialize_with = "opt_display_string")]
    pub year: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeachingItem {
    pub role: String,
    pub course: String,
    pub institution: String,
    #[serde(default)]
    pub institution_url: Option<String>,
    #[serde(default, deserialize_with = "opt_display_string")]
    pub year: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PressItem {
    pub title: String,
    #[serde(default)]
    pub outlet: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Talk {
    pub event: String,
    #[serde(deserialize_with = "display_string")]
    pub year: String,
    #[serde(default)]
    pub link: Option<String>,
}
