//! Core data models for the school catalog.

pub mod coordinate;
pub mod school;

pub use coordinate::{Coordinate, EARTH_RADIUS_MILES};
pub use school::{School, SchoolFields};
