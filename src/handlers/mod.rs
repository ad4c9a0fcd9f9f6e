//! HTTP handlers for entity CRUD and relationship lookups.

pub mod entity;
pub mod relationship;
pub use relationship::*;
