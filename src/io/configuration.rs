//! Rendering constants and runtime configuration defaults

// Rendering geometry
/// Side of one grid cell in the rendered image, in pixels
pub const CELL_SIZE_PX: u32 = 20;

/// Blank cells kept around the code on every side (QR quiet zone)
pub const QUIET_ZONE_CELLS: usize = 3;

/// Stud radius as a fraction of the cell size
pub const STUD_RADIUS_RATIO: f64 = 2.0 / 6.0;

/// Blank cells kept below the text block
pub const FOOTER_MARGIN_CELLS: usize = 3;

/// Glyph height of the build instructions drawn under the mosaic
pub const TEXT_SCALE_PX: f32 = 20.0;

/// Vertical advance per instruction line
pub const TEXT_LINE_HEIGHT_PX: u32 = 24;

// Palette
/// Canvas background (light blue)
pub const BACKGROUND_RGB: [u8; 3] = [173, 216, 230];
/// Fill for black plates
pub const BLACK_RGB: [u8; 3] = [0, 0, 0];
/// Fill for white plates
pub const WHITE_RGB: [u8; 3] = [255, 255, 255];
/// Plate and stud outlines
pub const OUTLINE_RGB: [u8; 3] = [128, 128, 128];
/// Instruction text
pub const TEXT_RGB: [u8; 3] = [0, 0, 0];

// Inputs
/// Catalog file looked up in the working directory when none is given
pub const DEFAULT_CATALOG_PATH: &str = "plates.json";

/// Output image extensions accepted by the CLI (lowercase, no dot)
pub const VALID_IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

// Output settings
/// Suffix of the parts list written next to the image
pub const SUMMARY_SUFFIX: &str = "_parts.txt";

/// Where the parts summary suggests buying plates
pub const MARKETPLACE_URL: &str = "https://www.brickowl.com/";
