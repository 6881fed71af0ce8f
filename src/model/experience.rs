use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A research or industry position.
///
/// `end_date` absent or equal to "Present" (any case) means ongoing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    #[serde(default)]
    pub company_url: Option<String>,
    pub position: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    /// Short research-area label shown after the title in the About section.
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub mentors: Vec<String>,
    #[serde(default)]
    pub mentor_links: HashMap<String, String>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
}

impl Experience {
    pub fn mentor_link(&self, mentor: &str) -> Option<&str> {
        self.mentor_links
            .get(mentor)
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentor_link_skips_blank() {
        let mut exp = Experience::default();
        exp.mentor_links.insert("A".to_string(), "https://a.example".to_string());
        exp.mentor_links.insert("B".to_string(), String::new());
        assert_eq!(exp.mentor_link("A"), Some("https://a.example"));
        assert_eq!(exp.mentor_link("B"), None);
        assert_eq!(exp.mentor_link("C"), None);
    }
}
