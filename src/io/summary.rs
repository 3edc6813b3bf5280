//! Parts list grouped by color and part number

use std::fmt::Write;

use crate::io::configuration::{MARKETPLACE_URL, QUIET_ZONE_CELLS};
use crate::spatial::tiles::{Color, Placement};

/// Plate counts per color, each in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    black: Vec<(String, usize)>,
    white: Vec<(String, usize)>,
}

impl ShoppingList {
    /// Tally placements by `(color, id)`
    pub fn from_placements(placements: &[Placement]) -> Self {
        let mut list = Self::default();
        for placement in placements {
            list.add(placement.color, &placement.tile_id);
        }
        list
    }

    fn add(&mut self, color: Color, id: &str) {
        let entries = match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        };
        if let Some((_, count)) = entries.iter_mut().find(|(existing, _)| existing == id) {
            *count += 1;
        } else {
            entries.push((id.to_string(), 1));
        }
    }

    /// Counts for one color as `(id, count)` pairs
    pub fn entries(&self, color: Color) -> &[(String, usize)] {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    /// Count for a single `(color, id)` pair, zero when absent
    pub fn count(&self, color: Color, id: &str) -> usize {
        self.entries(color)
            .iter()
            .find(|(existing, _)| existing == id)
            .map_or(0, |(_, count)| *count)
    }

    /// Total number of plates over both colors
    pub fn total_pieces(&self) -> usize {
        self.black
            .iter()
            .chain(&self.white)
            .map(|(_, count)| count)
            .sum()
    }

    /// Human-readable list, black parts first
    pub fn render(&self) -> String {
        let mut output = String::from("BLACK PARTS\n");
        for (id, count) in &self.black {
            let _ = writeln!(output, "Part Number: {id} x {count}");
        }
        output.push_str("\nWHITE PARTS\n");
        for (id, count) in &self.white {
            let _ = writeln!(output, "Part Number: {id} x {count}");
        }
        output.push_str("\nConsider buying using brickowl to minimise costs:\n");
        output.push_str(MARKETPLACE_URL);
        output.push('\n');
        output
    }
}

/// Minimum base plate side, in studs, for a code of side `side`
pub const fn base_plate_side(side: usize) -> usize {
    side + 2 * QUIET_ZONE_CELLS
}

/// Full build instructions: grid size, base plate size and the parts list
pub fn build_instructions(side: usize, list: &ShoppingList) -> String {
    let plate = base_plate_side(side);
    format!(
        "QR size: {side}\n\
         You need a base plate at least {plate} x {plate} studs in size.\n\
         This ensures you have a sufficient quiet area around the qr code.\n\
         \n\
         {}",
        list.render()
    )
}
