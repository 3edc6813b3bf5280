//! Plate shapes, footprints and placement records
//!
//! A catalog is a list of [`TileShape`]s. The tiling engine anchors shapes
//! on the grid as [`Footprint`]s and records each accepted footprint as a
//! [`Placement`] tagged with the color it paints.

use serde::{Deserialize, Serialize};

/// Fill color of a placed plate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Dark QR module
    Black,
    /// Light QR module
    White,
}

impl Color {
    /// Map a QR "dark module" flag to a plate color
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Black } else { Self::White }
    }

    /// Lowercase name used in summaries and exports
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

/// Whether a shape was laid as listed or with width and length swapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Width spans rows, length spans columns
    Normal,
    /// Length spans rows, width spans columns
    Rotated,
}

/// Catalog entry describing one plate size
///
/// `width` is measured in rows and `length` in columns when the plate is
/// laid in its normal orientation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileShape {
    /// Opaque identifier, typically a vendor part number
    pub id: String,
    /// Extent in grid cells along the row axis
    pub width: usize,
    /// Extent in grid cells along the column axis
    pub length: usize,
}

impl TileShape {
    /// Create a shape from an identifier and its dimensions
    pub fn new(id: impl Into<String>, width: usize, length: usize) -> Self {
        Self {
            id: id.into(),
            width,
            length,
        }
    }

    /// Number of cells covered, used only to order the catalog
    pub const fn area(&self) -> usize {
        self.width.saturating_mul(self.length)
    }

    /// Footprints tried at an anchor, normal orientation first
    pub const fn candidates(&self, row: usize, col: usize) -> [(Orientation, Footprint); 2] {
        [
            (
                Orientation::Normal,
                Footprint::new(row, col, self.width, self.length),
            ),
            (
                Orientation::Rotated,
                Footprint::new(row, col, self.length, self.width),
            ),
        ]
    }
}

/// Rectangle of cells anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Footprint {
    /// Anchor row
    pub row: usize,
    /// Anchor column
    pub col: usize,
    /// Number of rows covered
    pub width: usize,
    /// Number of columns covered
    pub length: usize,
}

impl Footprint {
    /// Create a footprint from its anchor and extents
    pub const fn new(row: usize, col: usize, width: usize, length: usize) -> Self {
        Self {
            row,
            col,
            width,
            length,
        }
    }

    /// True when the footprint covers no cells
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.length == 0
    }

    /// Check the footprint lies entirely within a square grid of side `side`
    pub const fn fits_within(&self, side: usize) -> bool {
        match (
            self.row.checked_add(self.width),
            self.col.checked_add(self.length),
        ) {
            (Some(row_end), Some(col_end)) => row_end <= side && col_end <= side,
            _ => false,
        }
    }

    /// Row range covered (exclusive end)
    pub const fn rows(&self) -> std::ops::Range<usize> {
        self.row..self.row.saturating_add(self.width)
    }

    /// Column range covered (exclusive end)
    pub const fn cols(&self) -> std::ops::Range<usize> {
        self.col..self.col.saturating_add(self.length)
    }

    /// Iterate over every `(row, col)` inside the footprint
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let cols = self.cols();
        self.rows()
            .flat_map(move |row| cols.clone().map(move |col| (row, col)))
    }
}

/// A plate laid on the grid
///
/// `width` and `length` are the extents actually occupied, after any
/// rotation. `orientation` is a display label only and is always
/// [`Orientation::Normal`] in engine output; consumers must read the
/// footprint from the dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Identifier of the catalog shape
    pub tile_id: String,
    /// Anchor row
    pub row: usize,
    /// Anchor column
    pub col: usize,
    /// Rows occupied
    pub width: usize,
    /// Columns occupied
    pub length: usize,
    /// Orientation label
    pub orientation: Orientation,
    /// Paint color
    pub color: Color,
}

impl Placement {
    /// Record a footprint as laid by the given shape
    pub fn new(shape: &TileShape, footprint: Footprint, color: Color) -> Self {
        Self {
            tile_id: shape.id.clone(),
            row: footprint.row,
            col: footprint.col,
            width: footprint.width,
            length: footprint.length,
            orientation: Orientation::Normal,
            color,
        }
    }

    /// Cells occupied by this placement
    pub const fn footprint(&self) -> Footprint {
        Footprint::new(self.row, self.col, self.width, self.length)
    }

    /// Number of cells occupied
    pub const fn area(&self) -> usize {
        self.width.saturating_mul(self.length)
    }
}
