//! Section Renderers
//!
//! Each module turns its slice of the CV document into markup for one (or a
//! family of) mount points. A renderer returns `None` when its data is absent
//! or empty, which leaves the mount point untouched.

pub mod pagination;
pub mod featured;
pub mod publications;
pub mod experience;
pub mod awards;
pub mod teaching;
pub mod service;
pub mod press;
pub mod talks;
pub mod about;
pub mod about_items;

pub use experience::ExperienceKind;
