//! Text rendering of the board

use hexgame_core::{Color, Grid};

/// One line per row, each shifted right one extra space to suggest the
/// board's rhombus shape. `R` and `B` mark occupied cells, `.` is empty.
pub fn render(grid: &Grid) -> String {
    let mut out = String::new();
    for (offset, row) in grid.rows().enumerate() {
        out.extend(std::iter::repeat(' ').take(offset));
        let line: Vec<&str> = row
            .iter()
            .map(|cell| match cell {
                Some(Color::Red) => "R",
                Some(Color::Blue) => "B",
                None => ".",
            })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
