use serde::{Deserialize, Serialize};

use crate::model::de::{display_string, opt_display_string};

/// How an award's title is phrased in the About section.
///
/// Chosen when the data is authored instead of keying on award ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AwardTemplate {
    /// Award title, linked when the award has a link.
    #[default]
    Standard,
    /// `prefix` followed by `text` linked to the award link,
    /// e.g. "Invited to <a>Heidelberg Laureate Forum</a>".
    LinkedPhrase {
        #[serde(default)]
        prefix: Option<String>,
        text: String,
        #[serde(default)]
        context: Option<String>,
    },
    /// Replacement title without a link, e.g. "Winner of Project X".
    Plain {
        text: String,
        #[serde(default)]
        context: Option<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub id: String,
    pub title: String,
    #[serde(deserialize_with = "display_string")]
    pub year: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "opt_display_string")]
    pub amount: Option<String>,
    #[serde(default)]
    pub about_template: AwardTemplate,
}
