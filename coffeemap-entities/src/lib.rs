#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # coffeemap-entities
//!
//! Reusable, agnostic domain entities for coffeemap.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod location;
pub mod shop;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
