//! CLI command implementations.

pub mod common;
pub mod compile;
pub mod dataset;
pub mod floorplan;
pub mod version;
