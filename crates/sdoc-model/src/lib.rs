//! Entity data model for the sdoc classification engine.
//!
//! This crate provides:
//! - [`Item`] and [`ItemContext`]: documented source entities as produced by
//!   an external documentation parser
//! - [`GroupRegistry`]: the insertion-ordered slug-to-title registry shared
//!   across one classification run
//!
//! Entities arrive pre-parsed; this crate never reads documentation comments
//! itself, only the structured corpus (a JSON array of items).

pub(crate) mod item;
pub(crate) mod registry;

pub use item::{Item, ItemContext, items_from_json};
pub use registry::GroupRegistry;
