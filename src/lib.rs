//! Greedy brick-plate tiling of QR codes
//!
//! A QR module matrix is converted into a list of rectangular plate
//! placements, largest plates first, each painted black or white, so the
//! code can be built on a base plate. Surrounding glue encodes Wi-Fi
//! credentials, loads plate catalogs, renders the plan and tallies parts.

#![forbid(unsafe_code)]

/// Tiling engine and coverage verification
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Working grid and plate geometry
pub mod spatial;

pub use algorithm::executor::{ColorCheck, TilingConfig, TilingEngine, tile, tile_matrix};
pub use io::error::{MosaicError, Result};
pub use spatial::grid::{WorkingCell, WorkingGrid};
pub use spatial::tiles::{Color, Orientation, Placement, TileShape};
