//! Linden - an in-memory catalog of Chicago public school locations.
//!
//! Loads a CSV of schools once, then answers proximity, grade-containment,
//! and network queries over the immutable catalog with linear scans.

pub mod catalog;
pub mod error;
pub mod maps;
pub mod models;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use models::{Coordinate, School};
