//! DOM effects emitted by the controller.
//!
//! The controller never touches a document; it returns patches that a thin
//! client (or a test) applies in order, honoring `delay_ms`.

use serde::Serialize;

/// Delay before an expanded region releases its explicit height.
pub const EXPAND_RELEASE_MS: u32 = 300;
/// Delay before a collapsing region drops to zero height.
pub const COLLAPSE_SETTLE_MS: u32 = 10;

pub const COLLAPSED_CLASS: &str = "collapsed";
pub const EXPANDED_CLASS: &str = "expanded";
pub const CHEVRON_DOWN: &str = "fa-chevron-down";
pub const CHEVRON_UP: &str = "fa-chevron-up";

/// `max-height` values used by the height transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaxHeight {
    /// The element's natural content height, measured by the client.
    #[serde(rename = "natural")]
    Natural,
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "none")]
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DomPatch {
    SetDisplay { selector: String, visible: bool },
    AddClass { selector: String, class: String },
    RemoveClass { selector: String, class: String },
    SetMaxHeight { selector: String, value: MaxHeight, delay_ms: u32 },
    SetText { selector: String, text: String },
}

impl DomPatch {
    pub fn display(selector: impl Into<String>, visible: bool) -> Self {
        DomPatch::SetDisplay { selector: selector.into(), visible }
    }

    pub fn add_class(selector: impl Into<String>, class: &str) -> Self {
        DomPatch::AddClass { selector: selector.into(), class: class.to_string() }
    }

    pub fn remove_class(selector: impl Into<String>, class: &str) -> Self {
        DomPatch::RemoveClass { selector: selector.into(), class: class.to_string() }
    }

    pub fn max_height(selector: impl Into<String>, value: MaxHeight, delay_ms: u32) -> Self {
        DomPatch::SetMaxHeight { selector: selector.into(), value, delay_ms }
    }

    pub fn text(selector: impl Into<String>, text: &str) -> Self {
        DomPatch::SetText { selector: selector.into(), text: text.to_string() }
    }

    pub fn selector(&self) -> &str {
        match self {
            DomPatch::SetDisplay { selector, .. }
            | DomPatch::AddClass { selector, .. }
            | DomPatch::RemoveClass { selector, .. }
            | DomPatch::SetMaxHeight { selector, .. }
            | DomPatch::SetText { selector, .. } => selector,
        }
    }
}

/// Swap a chevron icon to point down (collapsed) or up (expanded).
pub fn chevron(selector: &str, expanded: bool) -> [DomPatch; 2] {
    let (from, to) = if expanded {
        (CHEVRON_DOWN, CHEVRON_UP)
    } else {
        (CHEVRON_UP, CHEVRON_DOWN)
    };
    [DomPatch::remove_class(selector, from), DomPatch::add_class(selector, to)]
}

/// Serialize patches for embedding inside a `<script>` element.
pub fn to_script_json(patches: &[DomPatch]) -> serde_json::Result<String> {
    Ok(serde_json::to_string(patches)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_json_shape() {
        let patch = DomPatch::max_height("#awards .section-content", MaxHeight::Zero, 10);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["op"], "set_max_height");
        assert_eq!(json["value"], "0");
        assert_eq!(json["delay_ms"], 10);
    }

    #[test]
    fn test_script_json_escapes_closing_tags() {
        let json = to_script_json(&[DomPatch::text("#x", "</script>")]).unwrap();
        assert!(!json.contains("</script>"));
        assert!(json.contains("<\\/script>"));
    }

    #[test]
    fn test_chevron() {
        let [remove, add] = chevron("#talks i", true);
        assert_eq!(remove, DomPatch::remove_class("#talks i", CHEVRON_DOWN));
        assert_eq!(add, DomPatch::add_class("#talks i", CHEVRON_UP));
    }
}
