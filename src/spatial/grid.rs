//! Tri-state working grid consumed by the tiling engine
//!
//! The engine never looks at the raw QR matrix. It works on a square grid
//! where every cell is either an uncovered black module, an uncovered white
//! module, or already covered by a plate. Cells only ever move from one of
//! the uncovered states to [`WorkingCell::Covered`].

use ndarray::{Array2, ArrayView2, ArrayViewMut2, Axis, Slice};

use crate::io::error::{Result, invalid_grid};
use crate::spatial::tiles::{Color, Footprint};

/// State of a single grid cell during tiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkingCell {
    /// Dark module not yet covered
    Black,
    /// Light module not yet covered
    White,
    /// Cell belongs to a placement
    Covered,
}

impl WorkingCell {
    /// Uncovered cell of the given color
    pub const fn uncovered(color: Color) -> Self {
        match color {
            Color::Black => Self::Black,
            Color::White => Self::White,
        }
    }

    /// Color still waiting to be covered, if any
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Black => Some(Color::Black),
            Self::White => Some(Color::White),
            Self::Covered => None,
        }
    }
}

/// Square grid of [`WorkingCell`]s, indexed `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingGrid {
    cells: Array2<WorkingCell>,
}

impl WorkingGrid {
    /// Prepare a working grid from rows of "dark module" flags
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidGrid`](crate::MosaicError::InvalidGrid)
    /// if the matrix is empty or any row length differs from the row count.
    pub fn from_modules<R: AsRef<[bool]>>(modules: &[R]) -> Result<Self> {
        let side = modules.len();
        if side == 0 {
            return Err(invalid_grid("matrix has no rows"));
        }

        if let Some((index, row)) = modules
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != side)
        {
            return Err(invalid_grid(format!(
                "row {index} has {} cells, expected {side}",
                row.as_ref().len()
            )));
        }

        let flat: Vec<WorkingCell> = modules
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .map(|dark| WorkingCell::uncovered(Color::from_dark(dark)))
            .collect();

        let cells = Array2::from_shape_vec((side, side), flat)
            .map_err(|e| invalid_grid(e.to_string()))?;

        Ok(Self { cells })
    }

    /// Prepare a working grid from a dense boolean array
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidGrid`](crate::MosaicError::InvalidGrid)
    /// if the array is empty or not square.
    pub fn from_array(modules: &Array2<bool>) -> Result<Self> {
        let (rows, cols) = modules.dim();
        if rows == 0 || cols == 0 {
            return Err(invalid_grid("matrix has no cells"));
        }
        if rows != cols {
            return Err(invalid_grid(format!("matrix is {rows}x{cols}, not square")));
        }

        Ok(Self {
            cells: modules.mapv(|dark| WorkingCell::uncovered(Color::from_dark(dark))),
        })
    }

    /// Side length N of the grid
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Cell state at `(row, col)`, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<WorkingCell> {
        self.cells.get([row, col]).copied()
    }

    /// Read-only view of all cells
    pub const fn cells(&self) -> &Array2<WorkingCell> {
        &self.cells
    }

    /// Check every cell of an in-bounds footprint is uncovered `color`
    ///
    /// An empty footprint vacuously fits. Footprints leaving the grid never fit.
    pub fn fits(&self, footprint: &Footprint, color: Color) -> bool {
        if !footprint.fits_within(self.side()) {
            return false;
        }
        let target = WorkingCell::uncovered(color);
        self.region(footprint).iter().all(|&cell| cell == target)
    }

    /// Mark every cell of an in-bounds footprint as covered
    pub fn cover(&mut self, footprint: &Footprint) {
        if footprint.fits_within(self.side()) {
            self.region_mut(footprint).fill(WorkingCell::Covered);
        }
    }

    // Callers check bounds first; slicing panics outside the grid
    fn region(&self, footprint: &Footprint) -> ArrayView2<'_, WorkingCell> {
        self.cells.slice_each_axis(|axis| axis_slice(axis.axis, footprint))
    }

    fn region_mut(&mut self, footprint: &Footprint) -> ArrayViewMut2<'_, WorkingCell> {
        self.cells.slice_each_axis_mut(|axis| axis_slice(axis.axis, footprint))
    }

    /// Number of cells currently in `state`
    pub fn count(&self, state: WorkingCell) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Positions of cells not covered by any placement, row-major
    pub fn uncovered_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| **cell != WorkingCell::Covered)
            .map(|((row, col), _)| (row, col))
            .collect()
    }

    /// True once no uncovered cell remains
    pub fn is_fully_covered(&self) -> bool {
        self.cells.iter().all(|&cell| cell == WorkingCell::Covered)
    }
}

fn axis_slice(axis: Axis, footprint: &Footprint) -> Slice {
    if axis == Axis(0) {
        Slice::from(footprint.rows())
    } else {
        Slice::from(footprint.cols())
    }
}
