//! Spatial data structures
//!
//! This module contains:
//! - The tri-state working grid the engine mutates
//! - Plate shapes, footprints and placement records

/// Working grid preparation and cell state
pub mod grid;
/// Plate shapes, footprints and placements
pub mod tiles;

pub use grid::WorkingGrid;
