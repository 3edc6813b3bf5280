//! Coverage checks over a finished placement list
//!
//! The engine never reports incomplete coverage itself. Callers that care
//! re-derive it here from the placements alone, without the working grid.

use ndarray::Array2;

use crate::spatial::tiles::Placement;

/// Per-cell placement counts and derived coverage facts
#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// Number of placements covering each cell
    pub counts: Array2<u32>,
    /// Cells covered by no placement, row-major
    pub uncovered: Vec<(usize, usize)>,
    /// Cells covered by more than one placement, row-major
    pub overlapping: Vec<(usize, usize)>,
    /// Indices of placements that extend past the grid edge
    pub out_of_bounds: Vec<usize>,
}

impl CoverageReport {
    /// Count how often each cell of an N x N grid is covered
    pub fn from_placements(placements: &[Placement], side: usize) -> Self {
        let mut counts = Array2::<u32>::zeros((side, side));
        let mut out_of_bounds = Vec::new();

        for (index, placement) in placements.iter().enumerate() {
            let footprint = placement.footprint();
            if !footprint.fits_within(side) {
                out_of_bounds.push(index);
            }
            for (row, col) in footprint.cells() {
                if let Some(count) = counts.get_mut((row, col)) {
                    *count += 1;
                }
            }
        }

        let mut uncovered = Vec::new();
        let mut overlapping = Vec::new();
        for ((row, col), &count) in counts.indexed_iter() {
            match count {
                0 => uncovered.push((row, col)),
                1 => {}
                _ => overlapping.push((row, col)),
            }
        }

        Self {
            counts,
            uncovered,
            overlapping,
            out_of_bounds,
        }
    }

    /// Every cell covered exactly once and nothing out of bounds
    pub const fn is_complete(&self) -> bool {
        self.uncovered.is_empty() && self.is_disjoint() && self.out_of_bounds.is_empty()
    }

    /// No cell covered twice
    pub const fn is_disjoint(&self) -> bool {
        self.overlapping.is_empty()
    }

    /// Number of cells covered at least once
    pub fn covered_cells(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }
}
