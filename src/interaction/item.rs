//! Per-item expand/collapse and abstract toggles.

use crate::interaction::patch::{chevron, DomPatch, EXPANDED_CLASS};
use crate::render::ItemKind;

pub const SHOW_ABSTRACT_LABEL: &str = "Show Abstract";
pub const HIDE_ABSTRACT_LABEL: &str = "Hide Abstract";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Collapsed,
    Expanded,
}

impl ToggleState {
    pub fn flipped(self) -> Self {
        match self {
            ToggleState::Collapsed => ToggleState::Expanded,
            ToggleState::Expanded => ToggleState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == ToggleState::Expanded
    }
}

/// What the user clicked inside an item's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The header region itself (or a non-link descendant).
    Region,
    /// A hyperlink inside the header; follows the link, never toggles.
    Hyperlink,
}

/// Patches that bring item `id` of list `#list` into `state`.
///
/// Selectors are scoped by list: the same id may appear in several lists.
pub fn item_patches(list: &str, id: &str, kind: ItemKind, state: ToggleState) -> Vec<DomPatch> {
    let root = format!("#{} [data-id=\"{}\"]", list, id);
    let expanded = state.is_expanded();
    match kind {
        ItemKind::Cv => {
            let mut patches = vec![DomPatch::display(format!("{} .item-details", root), expanded)];
            patches.extend(chevron(&format!("{} .toggle-btn i", root), expanded));
            patches
        }
        ItemKind::About => vec![
            DomPatch::display(format!("{} .about-item-details", root), expanded),
            if expanded {
                DomPatch::add_class(root, EXPANDED_CLASS)
            } else {
                DomPatch::remove_class(root, EXPANDED_CLASS)
            },
        ],
    }
}

/// Patches that show or hide the abstract panel of publication `id`.
pub fn abstract_patches(id: &str, state: ToggleState) -> Vec<DomPatch> {
    let expanded = state.is_expanded();
    vec![
        DomPatch::display(format!("#abstract-{}", id), expanded),
        DomPatch::text(
            format!("#abstract-btn-{}", id),
            if expanded { HIDE_ABSTRACT_LABEL } else { SHOW_ABSTRACT_LABEL },
        ),
    ]
}
