//! Dialog overlays

pub mod confirm;
