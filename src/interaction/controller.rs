//! Interaction Controller
//!
//! Holds the visibility state of every interactive element on a rendered
//! page and turns user events into [`DomPatch`] lists.
//!
//! Public API:
//! - InteractionController::initialize(&RenderComplete) -> Vec<DomPatch>
//! - click_item / toggle_abstract / toggle_section / toggle_subsection / show_more

use rustc_hash::FxHashMap;

use crate::interaction::item::{abstract_patches, item_patches, ClickTarget, ToggleState};
use crate::interaction::paginator::Paginator;
use crate::interaction::patch::DomPatch;
use crate::interaction::section::{collapse_now, transition, RegionKind};
use crate::render::{Handle, ItemKind, RenderComplete};

/// Items are keyed by (list, id); ids are only unique within one list.
type ItemKey = (String, String);

#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    items: FxHashMap<ItemKey, (ItemKind, ToggleState)>,
    abstracts: FxHashMap<String, ToggleState>,
    sections: FxHashMap<String, ToggleState>,
    subsections: FxHashMap<String, ToggleState>,
    pagers: FxHashMap<String, Paginator>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register everything a render pass produced and collapse the CV
    /// sections and subsections present on the page.
    ///
    /// Replaces any state from an earlier pass.
    pub fn initialize(&mut self, done: &RenderComplete) -> Vec<DomPatch> {
        *self = Self::default();

        for handle in done.handles() {
            match handle {
                Handle::Item { list, id, kind } => {
                    self.items
                        .insert((list.clone(), id.clone()), (*kind, ToggleState::Collapsed));
                }
                Handle::Abstract { id } => {
                    self.abstracts.insert(id.clone(), ToggleState::Collapsed);
                }
                Handle::Pager { list, batches } => {
                    self.pagers.insert(list.clone(), Paginator::new(list.clone(), *batches));
                }
            }
        }

        let mut patches = Vec::new();
        for id in done.sections() {
            self.sections.insert(id.to_string(), ToggleState::Collapsed);
            patches.extend(collapse_now(RegionKind::Section, id));
        }
        for id in done.subsections() {
            self.subsections.insert(id.to_string(), ToggleState::Collapsed);
            patches.extend(collapse_now(RegionKind::Subsection, id));
        }

        tracing::debug!(
            "Controller initialized: {} items, {} abstracts, {} lists, {} sections, {} subsections",
            self.items.len(),
            self.abstracts.len(),
            self.pagers.len(),
            self.sections.len(),
            self.subsections.len()
        );
        patches
    }

    /// Click on the header region of item `id` in list `list`. Hyperlink
    /// clicks and unknown items produce no patches.
    pub fn click_item(&mut self, list: &str, id: &str, target: ClickTarget) -> Vec<DomPatch> {
        if target == ClickTarget::Hyperlink {
            return Vec::new();
        }
        let key = (list.to_string(), id.to_string());
        let Some((kind, state)) = self.items.get_mut(&key) else {
            tracing::debug!("Click on unknown item '{}' in '{}'", id, list);
            return Vec::new();
        };
        *state = state.flipped();
        item_patches(list, id, *kind, *state)
    }

    pub fn toggle_abstract(&mut self, id: &str) -> Vec<DomPatch> {
        let Some(state) = self.abstracts.get_mut(id) else {
            tracing::debug!("No abstract registered for '{}'", id);
            return Vec::new();
        };
        *state = state.flipped();
        abstract_patches(id, *state)
    }

    pub fn toggle_section(&mut self, id: &str) -> Vec<DomPatch> {
        Self::toggle_region(&mut self.sections, RegionKind::Section, id)
    }

    pub fn toggle_subsection(&mut self, id: &str) -> Vec<DomPatch> {
        Self::toggle_region(&mut self.subsections, RegionKind::Subsection, id)
    }

    /// Click on a list's "Show more" / "Show less" control.
    pub fn show_more(&mut self, list: &str) -> Vec<DomPatch> {
        match self.pagers.get_mut(list) {
            Some(pager) => pager.click(),
            None => {
                tracing::debug!("No paginated list '{}'", list);
                Vec::new()
            }
        }
    }

    pub fn item_state(&self, list: &str, id: &str) -> Option<ToggleState> {
        self.items
            .get(&(list.to_string(), id.to_string()))
            .map(|(_, state)| *state)
    }

    pub fn abstract_state(&self, id: &str) -> Option<ToggleState> {
        self.abstracts.get(id).copied()
    }

    pub fn section_state(&self, id: &str) -> Option<ToggleState> {
        self.sections.get(id).copied()
    }

    pub fn subsection_state(&self, id: &str) -> Option<ToggleState> {
        self.subsections.get(id).copied()
    }

    pub fn pager(&self, list: &str) -> Option<&Paginator> {
        self.pagers.get(list)
    }

    fn toggle_region(
        regions: &mut FxHashMap<String, ToggleState>,
        kind: RegionKind,
        id: &str,
    ) -> Vec<DomPatch> {
        let Some(state) = regions.get_mut(id) else {
            tracing::debug!("Unknown collapsible region '{}'", id);
            return Vec::new();
        };
        *state = state.flipped();
        transition(kind, id, *state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CvData, Publication};
    use crate::page::{Mount, Page};
    use crate::render::{PageGenerator, RenderOptions};

    const LIST: &str = "conferences-list";

    fn publication(id: &str, featured: bool) -> Publication {
        Publication {
            id: id.to_string(),
            title: id.to_uppercase(),
            venue: "ICML".to_string(),
            year: 2022,
            featured,
            abstract_text: featured.then(|| "We study things.".to_string()),
            ..Default::default()
        }
    }

    fn rendered_controller() -> (InteractionController, Vec<DomPatch>) {
        let mut data = CvData::default();
        data.publications.conferences = (0..4).map(|i| publication(&format!("c{}", i), i == 0)).collect();
        let generator = PageGenerator::new(RenderOptions {
            page_size: 2,
            batch_size: 1,
            ..Default::default()
        });
        let mut page = Page::with_mounts([Mount::Featured, Mount::Conferences]);
        let done = generator.render_all(Some(&data), &mut page);
        let mut controller = InteractionController::new();
        let patches = controller.initialize(&done);
        (controller, patches)
    }

    #[test]
    fn test_initialize_collapses_present_regions() {
        let (controller, patches) = rendered_controller();
        assert_eq!(controller.section_state("publications"), Some(ToggleState::Collapsed));
        assert_eq!(controller.subsection_state("conferences"), Some(ToggleState::Collapsed));
        assert_eq!(controller.section_state("awards"), None);
        assert!(patches
            .iter()
            .any(|p| p.selector() == "#publications .section-content"));
        assert!(patches.iter().any(|p| p.selector() == "#conferences-content"));
    }

    #[test]
    fn test_double_toggle_restores_item() {
        let (mut controller, _) = rendered_controller();
        let first = controller.click_item(LIST, "c1", ClickTarget::Region);
        assert_eq!(controller.item_state(LIST, "c1"), Some(ToggleState::Expanded));
        assert!(first.contains(&DomPatch::display(
            "#conferences-list [data-id=\"c1\"] .item-details",
            true
        )));

        let second = controller.click_item(LIST, "c1", ClickTarget::Region);
        assert_eq!(controller.item_state(LIST, "c1"), Some(ToggleState::Collapsed));
        assert!(second.contains(&DomPatch::display(
            "#conferences-list [data-id=\"c1\"] .item-details",
            false
        )));
    }

    #[test]
    fn test_shared_id_across_lists_toggles_independently() {
        let mut data = CvData::default();
        data.publications.conferences = vec![publication("p", false)];
        data.publications.workshops = vec![publication("p", false)];
        let mut page = Page::with_mounts([Mount::Conferences, Mount::Workshops]);
        let done = PageGenerator::default().render_all(Some(&data), &mut page);
        let mut controller = InteractionController::new();
        controller.initialize(&done);

        let patches = controller.click_item("conferences-list", "p", ClickTarget::Region);
        assert_eq!(controller.item_state("conferences-list", "p"), Some(ToggleState::Expanded));
        assert_eq!(controller.item_state("workshops-list", "p"), Some(ToggleState::Collapsed));
        assert!(!patches.is_empty());
        assert!(patches
            .iter()
            .all(|p| p.selector().starts_with("#conferences-list [data-id=\"p\"]")));
    }

    #[test]
    fn test_hyperlink_click_does_not_toggle() {
        let (mut controller, _) = rendered_controller();
        assert!(controller.click_item(LIST, "c1", ClickTarget::Hyperlink).is_empty());
        assert_eq!(controller.item_state(LIST, "c1"), Some(ToggleState::Collapsed));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let (mut controller, _) = rendered_controller();
        assert!(controller.click_item(LIST, "missing", ClickTarget::Region).is_empty());
        assert!(controller.click_item("workshops-list", "c1", ClickTarget::Region).is_empty());
        assert!(controller.toggle_section("missing").is_empty());
        assert!(controller.show_more("missing").is_empty());
    }

    #[test]
    fn test_abstract_toggle() {
        let (mut controller, _) = rendered_controller();
        assert_eq!(controller.abstract_state("conferences-c0"), Some(ToggleState::Collapsed));
        let patches = controller.toggle_abstract("conferences-c0");
        assert!(patches.contains(&DomPatch::text("#abstract-btn-conferences-c0", "Hide Abstract")));
        assert_eq!(controller.abstract_state("c0"), None);
        assert_eq!(controller.abstract_state("conferences-c1"), None);
    }

    #[test]
    fn test_section_round_trip() {
        let (mut controller, _) = rendered_controller();
        controller.toggle_section("publications");
        assert_eq!(controller.section_state("publications"), Some(ToggleState::Expanded));
        controller.toggle_section("publications");
        assert_eq!(controller.section_state("publications"), Some(ToggleState::Collapsed));
    }

    #[test]
    fn test_show_more_until_exhausted() {
        let (mut controller, _) = rendered_controller();
        assert_eq!(controller.pager("conferences-list").map(Paginator::total), Some(2));

        controller.show_more("conferences-list");
        let last = controller.show_more("conferences-list");
        assert!(last.contains(&DomPatch::text("#conferences-list .show-more-btn", "Show less")));

        let reset = controller.show_more("conferences-list");
        assert!(reset.contains(&DomPatch::display("#conferences-list [data-batch]", false)));
        assert!(reset.contains(&DomPatch::text("#conferences-list .show-more-btn", "Show more")));
        assert_eq!(controller.pager("conferences-list").map(Paginator::batch), Some(0));
    }
}
