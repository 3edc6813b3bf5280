//! Plate catalog loading
//!
//! Catalogs are JSON arrays of `{ "id", "width", "length" }` records. Any
//! other field (prices, precomputed areas) is accepted and ignored; the
//! engine derives area from the dimensions.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Deserialize;

use crate::io::configuration::DEFAULT_CATALOG_PATH;
use crate::io::error::{MosaicError, Result};
use crate::spatial::tiles::TileShape;

// Part numbers show up both quoted and bare in hand-written catalogs
#[derive(Deserialize)]
#[serde(untagged)]
enum PartId {
    Text(String),
    Number(u64),
}

#[derive(Deserialize)]
struct CatalogRecord {
    id: PartId,
    width: usize,
    length: usize,
}

impl From<CatalogRecord> for TileShape {
    fn from(record: CatalogRecord) -> Self {
        let id = match record.id {
            PartId::Text(text) => text,
            PartId::Number(number) => number.to_string(),
        };
        Self::new(id, record.width, record.length)
    }
}

/// Parse a catalog from JSON text, keeping record order
///
/// # Errors
///
/// Returns [`MosaicError::CatalogParse`] if the text is not a JSON array of
/// records with an `id`, a `width` and a `length`.
pub fn parse_catalog(json: &str) -> Result<Vec<TileShape>> {
    parse_catalog_at(json, Path::new("<inline>"))
}

fn parse_catalog_at(json: &str, path: &Path) -> Result<Vec<TileShape>> {
    let records: Vec<CatalogRecord> =
        serde_json::from_str(json).map_err(|e| MosaicError::CatalogParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let shapes: Vec<TileShape> = records.into_iter().map(TileShape::from).collect();
    for shape in shapes.iter().filter(|shape| shape.area() == 0) {
        warn!(
            "Catalog shape {} is {}x{} and covers no cells",
            shape.id, shape.width, shape.length
        );
    }
    Ok(shapes)
}

/// Load a catalog file
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] if the file cannot be read and
/// [`MosaicError::CatalogParse`] if its contents are not a valid catalog.
pub fn load_catalog(path: &Path) -> Result<Vec<TileShape>> {
    let json = std::fs::read_to_string(path).map_err(|e| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "read catalog",
        source: e,
    })?;
    let shapes = parse_catalog_at(&json, path)?;
    debug!("Loaded {} shapes from {}", shapes.len(), path.display());
    Ok(shapes)
}

/// Common plates, always including a 1x1 so any grid can be covered
pub fn default_catalog() -> Vec<TileShape> {
    [
        ("3031", 4, 4),
        ("3034", 2, 8),
        ("3460", 1, 8),
        ("3795", 2, 6),
        ("3020", 2, 4),
        ("3666", 1, 6),
        ("3021", 2, 3),
        ("3022", 2, 2),
        ("3710", 1, 4),
        ("3623", 1, 3),
        ("3023", 1, 2),
        ("3024", 1, 1),
    ]
    .into_iter()
    .map(|(id, width, length)| TileShape::new(id, width, length))
    .collect()
}

/// Pick the catalog for a run
///
/// An explicit path must load. Without one, [`DEFAULT_CATALOG_PATH`] is used
/// when it exists in the working directory, else the built-in catalog.
///
/// # Errors
///
/// Propagates [`load_catalog`] errors for whichever file is chosen.
pub fn resolve_catalog(explicit: Option<&Path>) -> Result<Vec<TileShape>> {
    if let Some(path) = explicit {
        return load_catalog(path);
    }

    let default_path = PathBuf::from(DEFAULT_CATALOG_PATH);
    if default_path.is_file() {
        load_catalog(&default_path)
    } else {
        info!("No {DEFAULT_CATALOG_PATH} found, using the built-in catalog");
        Ok(default_catalog())
    }
}
