//! Mosaic rendering: plates drawn as studded rectangles on a quiet-zone canvas,
//! optionally followed by the build instructions as text

use std::path::Path;

use ab_glyph::{FontRef, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::io::configuration::{
    BACKGROUND_RGB, BLACK_RGB, CELL_SIZE_PX, FOOTER_MARGIN_CELLS, OUTLINE_RGB, QUIET_ZONE_CELLS,
    STUD_RADIUS_RATIO, TEXT_LINE_HEIGHT_PX, TEXT_RGB, TEXT_SCALE_PX, WHITE_RGB,
};
use crate::io::error::{MosaicError, Result};
use crate::spatial::tiles::{Color, Placement};

// DejaVu Sans Mono, see assets/fonts/LICENSE
static INSTRUCTION_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSansMono.ttf");

/// Canvas side in pixels for a code of side `side`
pub const fn canvas_side_px(side: usize) -> u32 {
    (side + 2 * QUIET_ZONE_CELLS) as u32 * CELL_SIZE_PX
}

const fn fill_for(color: Color) -> Rgb<u8> {
    match color {
        Color::Black => Rgb(BLACK_RGB),
        Color::White => Rgb(WHITE_RGB),
    }
}

// Writes outside the canvas are dropped
fn paint(img: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>) {
    if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
        *pixel = color;
    }
}

fn draw_rectangle(img: &mut RgbImage, origin: (u32, u32), size: (u32, u32), fill: Rgb<u8>) {
    let (x0, y0) = origin;
    let (w, h) = size;
    let outline = Rgb(OUTLINE_RGB);
    for dy in 0..h {
        for dx in 0..w {
            let on_edge = dx == 0 || dy == 0 || dx + 1 == w || dy + 1 == h;
            paint(img, x0 + dx, y0 + dy, if on_edge { outline } else { fill });
        }
    }
}

fn draw_stud(img: &mut RgbImage, center: (f64, f64), radius: f64, fill: Rgb<u8>) {
    let outline = Rgb(OUTLINE_RGB);
    let (cx, cy) = center;
    let x_start = (cx - radius).floor().max(0.0) as u32;
    let y_start = (cy - radius).floor().max(0.0) as u32;
    let x_end = (cx + radius).ceil() as u32;
    let y_end = (cy + radius).ceil() as u32;

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            let distance = (f64::from(x) + 0.5 - cx).hypot(f64::from(y) + 0.5 - cy);
            if distance <= radius - 1.0 {
                paint(img, x, y, fill);
            } else if distance <= radius {
                paint(img, x, y, outline);
            }
        }
    }
}

/// Draw every placement onto a fresh canvas
///
/// Placement `(row, col)` maps to the pixel at
/// `((col + quiet zone) * cell, (row + quiet zone) * cell)`; `length` spans
/// columns and `width` spans rows. Each covered cell gets one stud.
pub fn render_mosaic(placements: &[Placement], side: usize) -> RgbImage {
    let canvas = canvas_side_px(side);
    let mut img = RgbImage::from_pixel(canvas, canvas, Rgb(BACKGROUND_RGB));
    draw_placements(&mut img, placements);
    img
}

/// Canvas height for a code of side `side` followed by `line_count` text lines
pub const fn poster_height_px(side: usize, line_count: usize) -> u32 {
    canvas_side_px(side)
        + FOOTER_MARGIN_CELLS as u32 * CELL_SIZE_PX
        + line_count as u32 * TEXT_LINE_HEIGHT_PX
}

/// Draw the mosaic with `instructions` written underneath, one text line per row
///
/// The text starts at the bottom edge of the quiet zone, indented by the quiet
/// zone. The canvas widens when a line would not fit next to the mosaic.
///
/// # Errors
///
/// Returns [`MosaicError::FontLoad`] if the embedded font cannot be parsed
pub fn render_poster(
    placements: &[Placement],
    side: usize,
    instructions: &str,
) -> Result<RgbImage> {
    let font = FontRef::try_from_slice(INSTRUCTION_FONT)
        .map_err(|source| MosaicError::FontLoad { source })?;
    let scale = PxScale::from(TEXT_SCALE_PX);
    let indent = QUIET_ZONE_CELLS as u32 * CELL_SIZE_PX;

    let widest_line = instructions
        .lines()
        .map(|line| text_size(scale, &font, line).0)
        .max()
        .unwrap_or(0);
    let width = canvas_side_px(side).max(widest_line + 2 * indent);
    let height = poster_height_px(side, instructions.lines().count());

    let mut img = RgbImage::from_pixel(width, height, Rgb(BACKGROUND_RGB));
    draw_placements(&mut img, placements);

    let top = canvas_side_px(side);
    for (index, line) in instructions.lines().enumerate() {
        let y = top + index as u32 * TEXT_LINE_HEIGHT_PX;
        draw_text_mut(
            &mut img,
            Rgb(TEXT_RGB),
            indent as i32,
            y as i32,
            scale,
            &font,
            line,
        );
    }

    Ok(img)
}

fn draw_placements(img: &mut RgbImage, placements: &[Placement]) {
    let cell = CELL_SIZE_PX;
    let radius = f64::from(cell) * STUD_RADIUS_RATIO;
    let offset = QUIET_ZONE_CELLS as u32;

    for placement in placements {
        let fill = fill_for(placement.color);
        let x0 = (placement.col as u32 + offset) * cell;
        let y0 = (placement.row as u32 + offset) * cell;
        let size = (placement.length as u32 * cell, placement.width as u32 * cell);

        draw_rectangle(img, (x0, y0), size, fill);

        for i in 0..placement.length as u32 {
            for j in 0..placement.width as u32 {
                let center = (
                    f64::from(x0 + i * cell) + f64::from(cell) / 2.0,
                    f64::from(y0 + j * cell) + f64::from(cell) / 2.0,
                );
                draw_stud(img, center, radius, fill);
            }
        }
    }
}

/// Render the mosaic with its instructions and save it; the format follows
/// the extension
///
/// # Errors
///
/// Returns an error if:
/// - The embedded font cannot be parsed
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_mosaic(
    placements: &[Placement],
    side: usize,
    instructions: &str,
    output_path: &Path,
) -> Result<()> {
    let img = render_poster(placements, side, instructions)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| MosaicError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
