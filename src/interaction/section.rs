//! Section and subsection collapse with a height transition.
//!
//! Expanding sets `max-height` to the natural content height and releases it
//! to `none` after [`EXPAND_RELEASE_MS`]. Collapsing pins the natural height
//! first so the CSS transition has a concrete start value, then drops to zero
//! after [`COLLAPSE_SETTLE_MS`].

use crate::interaction::item::ToggleState;
use crate::interaction::patch::{
    chevron, DomPatch, MaxHeight, COLLAPSED_CLASS, COLLAPSE_SETTLE_MS, EXPAND_RELEASE_MS,
};

/// Which collapsible container family a region belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Section,
    Subsection,
}

impl RegionKind {
    pub fn content_selector(self, id: &str) -> String {
        match self {
            RegionKind::Section => format!("#{} .section-content", id),
            RegionKind::Subsection => format!("#{}-content", id),
        }
    }

    pub fn icon_selector(self, id: &str) -> String {
        match self {
            RegionKind::Section => format!("#{} .section-toggle-btn i", id),
            RegionKind::Subsection => format!("#{}-subsection .subsection-toggle-btn i", id),
        }
    }
}

/// Animated transition into `state`.
pub fn transition(kind: RegionKind, id: &str, state: ToggleState) -> Vec<DomPatch> {
    let content = kind.content_selector(id);
    let mut patches = match state {
        ToggleState::Expanded => vec![
            DomPatch::remove_class(content.clone(), COLLAPSED_CLASS),
            DomPatch::max_height(content.clone(), MaxHeight::Natural, 0),
            DomPatch::max_height(content, MaxHeight::None, EXPAND_RELEASE_MS),
        ],
        ToggleState::Collapsed => vec![
            DomPatch::max_height(content.clone(), MaxHeight::Natural, 0),
            DomPatch::max_height(content.clone(), MaxHeight::Zero, COLLAPSE_SETTLE_MS),
            // Applied together with the zero height.
            DomPatch::add_class(content, COLLAPSED_CLASS),
        ],
    };
    patches.extend(chevron(&kind.icon_selector(id), state.is_expanded()));
    patches
}

/// Immediate collapse with no transition, used for the initial pass.
pub fn collapse_now(kind: RegionKind, id: &str) -> Vec<DomPatch> {
    let content = kind.content_selector(id);
    let mut patches = vec![
        DomPatch::add_class(content.clone(), COLLAPSED_CLASS),
        DomPatch::max_height(content, MaxHeight::Zero, 0),
    ];
    patches.extend(chevron(&kind.icon_selector(id), false));
    patches
}
