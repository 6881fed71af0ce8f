//! "Show more" / "Show less" state per paginated list.

use crate::interaction::patch::DomPatch;
use crate::render::sections::pagination::{SHOW_LESS_LABEL, SHOW_MORE_LABEL};

/// Batch 0 is always visible; batches `1..=total` start hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    list: String,
    batch: u32,
    total: u32,
}

impl Paginator {
    pub fn new(list: impl Into<String>, total: u32) -> Self {
        Self {
            list: list.into(),
            batch: 0,
            total,
        }
    }

    pub fn batch(&self) -> u32 {
        self.batch
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// True once every batch is revealed and the control reads "Show less".
    pub fn is_expanded(&self) -> bool {
        self.total > 0 && self.batch == self.total
    }

    /// Handle one click on the list's control.
    pub fn click(&mut self) -> Vec<DomPatch> {
        if self.total == 0 {
            return Vec::new();
        }
        if self.is_expanded() {
            self.batch = 0;
            return vec![
                DomPatch::display(format!("#{} [data-batch]", self.list), false),
                DomPatch::text(self.button(), SHOW_MORE_LABEL),
            ];
        }

        self.batch += 1;
        let mut patches = vec![DomPatch::display(
            format!("#{} [data-batch=\"{}\"]", self.list, self.batch),
            true,
        )];
        if self.is_expanded() {
            patches.push(DomPatch::text(self.button(), SHOW_LESS_LABEL));
        }
        patches
    }

    fn button(&self) -> String {
        format!("#{} .show-more-btn", self.list)
    }
}
