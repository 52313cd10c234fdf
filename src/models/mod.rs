//! Data models for the Marquee event catalog.
//!
//! The Event record matches the layout of the backing JSON file exactly, so
//! existing data files load without migration.

mod event;
mod vocab;

pub use event::*;
pub use vocab::*;
