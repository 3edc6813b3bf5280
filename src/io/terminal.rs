//! Text preview of a module matrix for the terminal

const BLOCK: &str = "██";
const BLANK: &str = "  ";
const BORDER_CELLS: usize = 2;

/// Draw the matrix with full blocks, inverted for dark terminal themes
///
/// Light modules and the surrounding border are drawn as blocks, dark
/// modules as blanks, so the terminal background reads as the dark module.
pub fn render_preview<R: AsRef<[bool]>>(modules: &[R]) -> String {
    let side = modules.len();
    let border_line = BLOCK.repeat(side + 2 * BORDER_CELLS);
    let side_border = BLOCK.repeat(BORDER_CELLS);

    let mut lines = Vec::with_capacity(side + 2 * BORDER_CELLS + 2);
    lines.extend(std::iter::repeat_n(border_line.clone(), BORDER_CELLS));
    for row in modules {
        let mut line = side_border.clone();
        for &dark in row.as_ref() {
            line.push_str(if dark { BLANK } else { BLOCK });
        }
        line.push_str(&side_border);
        lines.push(line);
    }
    lines.extend(std::iter::repeat_n(border_line, BORDER_CELLS));
    lines.push(String::new());
    lines.push("If this looks janky, increase the size of your terminal!".to_string());

    lines.join("\n")
}
