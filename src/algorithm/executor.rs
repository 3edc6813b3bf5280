//! Greedy largest-area-first plate placement
//!
//! Shapes are tried in descending area order. For each shape every anchor is
//! visited in row-major order and both orientations are tried; a footprint is
//! accepted when all of its cells are uncovered and share one color. Accepted
//! footprints are covered immediately, so later shapes only see what is left.

use std::cmp::Reverse;

use log::{debug, trace};

use crate::io::error::Result;
use crate::spatial::grid::WorkingGrid;
use crate::spatial::tiles::{Color, Footprint, Placement, TileShape};

/// How the two color checks of a candidate footprint interact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorCheck {
    /// Each color is checked against the live grid right before it is
    /// emitted, and empty footprints never emit. A footprint yields at most
    /// one placement.
    #[default]
    Live,
    /// Both colors are checked before either placement is emitted. Empty
    /// footprints then satisfy both checks and emit a black and a white
    /// placement at every in-bounds anchor.
    Snapshot,
}

/// Engine parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct TilingConfig {
    /// Color check policy for candidate footprints
    pub color_check: ColorCheck,
}

/// Result of preparing and tiling a module matrix in one call
#[derive(Debug, Clone)]
pub struct TilingOutcome {
    /// Placements in discovery order
    pub placements: Vec<Placement>,
    /// Grid state after tiling, uncovered cells remain visible here
    pub grid: WorkingGrid,
}

/// Stepwise tiling engine
///
/// Owns the sorted catalog and borrows the grid mutably for the whole run.
/// Each call to [`TilingEngine::execute_iteration`] processes one shape.
pub struct TilingEngine<'grid> {
    grid: &'grid mut WorkingGrid,
    shapes: Vec<TileShape>,
    next_shape: usize,
    placements: Vec<Placement>,
    config: TilingConfig,
}

impl<'grid> TilingEngine<'grid> {
    /// Create an engine over `grid`, sorting `catalog` by area descending
    ///
    /// The sort is stable: shapes of equal area keep their catalog order.
    pub fn new(grid: &'grid mut WorkingGrid, catalog: &[TileShape], config: TilingConfig) -> Self {
        let mut shapes = catalog.to_vec();
        shapes.sort_by_key(|shape| Reverse(shape.area()));

        let side = grid.side();
        debug!("Tiling {side}x{side} grid with {} shapes", shapes.len());

        Self {
            grid,
            shapes,
            next_shape: 0,
            placements: Vec::new(),
            config,
        }
    }

    /// Number of shapes in the catalog
    pub const fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Shape processed by the next iteration, `None` once finished
    pub fn current_shape(&self) -> Option<&TileShape> {
        self.shapes.get(self.next_shape)
    }

    /// Shapes in the order they are tried
    pub fn sorted_shapes(&self) -> &[TileShape] {
        &self.shapes
    }

    /// Placements emitted so far
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Grid state as left by the iterations run so far
    pub const fn grid(&self) -> &WorkingGrid {
        &*self.grid
    }

    /// Place every fitting footprint of the next shape
    ///
    /// Returns whether shapes remain to be processed.
    pub fn execute_iteration(&mut self) -> bool {
        let Some(shape) = self.shapes.get(self.next_shape).cloned() else {
            return false;
        };
        self.next_shape += 1;

        let before = self.placements.len();
        let side = self.grid.side();
        for row in 0..side {
            for col in 0..side {
                for (orientation, footprint) in shape.candidates(row, col) {
                    if self.try_candidate(&shape, footprint) {
                        trace!("{} fits {orientation:?} at ({row}, {col})", shape.id);
                    }
                }
            }
        }

        let placed = self.placements.len() - before;
        let TileShape { id, width, length } = &shape;
        debug!("Shape {id} ({width}x{length}) placed {placed} times");

        self.next_shape < self.shapes.len()
    }

    /// Process all remaining shapes
    pub fn run(&mut self) {
        while self.execute_iteration() {}
    }

    /// Finish the run and hand back the placements
    pub fn into_placements(mut self) -> Vec<Placement> {
        self.run();
        self.placements
    }

    // Returns whether at least one placement was emitted
    fn try_candidate(&mut self, shape: &TileShape, footprint: Footprint) -> bool {
        if !footprint.fits_within(self.grid.side()) {
            return false;
        }

        match self.config.color_check {
            ColorCheck::Live => {
                if footprint.is_empty() {
                    return false;
                }
                let mut emitted = false;
                for color in [Color::Black, Color::White] {
                    if self.grid.fits(&footprint, color) {
                        self.emit(shape, footprint, color);
                        emitted = true;
                    }
                }
                emitted
            }
            ColorCheck::Snapshot => {
                let fits_black = self.grid.fits(&footprint, Color::Black);
                let fits_white = self.grid.fits(&footprint, Color::White);
                if fits_black {
                    self.emit(shape, footprint, Color::Black);
                }
                if fits_white {
                    self.emit(shape, footprint, Color::White);
                }
                fits_black || fits_white
            }
        }
    }

    fn emit(&mut self, shape: &TileShape, footprint: Footprint, color: Color) {
        self.placements.push(Placement::new(shape, footprint, color));
        self.grid.cover(&footprint);
    }
}

/// Tile `grid` with `catalog` using the default configuration
///
/// Cells covered by a placement are marked in `grid`; anything left
/// uncovered stays so and is not reported as an error.
pub fn tile(grid: &mut WorkingGrid, catalog: &[TileShape]) -> Vec<Placement> {
    tile_with_config(grid, catalog, TilingConfig::default())
}

/// Tile `grid` with `catalog` using an explicit configuration
pub fn tile_with_config(
    grid: &mut WorkingGrid,
    catalog: &[TileShape],
    config: TilingConfig,
) -> Vec<Placement> {
    TilingEngine::new(grid, catalog, config).into_placements()
}

/// Prepare a working grid from a module matrix and tile it
///
/// # Errors
///
/// Returns [`MosaicError::InvalidGrid`](crate::MosaicError::InvalidGrid)
/// when the matrix is empty or not square. No tiling is attempted then.
pub fn tile_matrix<R: AsRef<[bool]>>(
    modules: &[R],
    catalog: &[TileShape],
    config: TilingConfig,
) -> Result<TilingOutcome> {
    let mut grid = WorkingGrid::from_modules(modules)?;
    let placements = tile_with_config(&mut grid, catalog, config);
    Ok(TilingOutcome { placements, grid })
}
