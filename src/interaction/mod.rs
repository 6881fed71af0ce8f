//! Interaction Controller Module
//!
//! Expand/collapse state for items, abstracts, sections and subsections, plus
//! the per-list paginator. Every transition returns the [`DomPatch`] effects
//! a client applies to the rendered page.

pub mod patch;
pub mod item;
pub mod section;
pub mod paginator;
pub mod controller;

pub use controller::InteractionController;
pub use item::{ClickTarget, ToggleState};
pub use paginator::Paginator;
pub use patch::{DomPatch, MaxHeight};
pub use section::RegionKind;
