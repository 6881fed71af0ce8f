//! HTML surface for the `api` feature.

pub mod handlers;
