//! Plain-text grid rendering for inspecting small grids.

use std::io::{self, Write};

use crate::domain::Grid;

const ALIVE: &str = " O ";
const DEAD: &str = " - ";

/// Grids larger than this many cells produce a warning when rendered
const LARGE_RENDER_CELLS: usize = 200 * 200;

/// Write one line per row, then a blank-line separator
pub fn write_grid<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    let (rows, cols) = grid.dimensions();
    if rows * cols > LARGE_RENDER_CELLS {
        log::warn!("rendering a {rows}x{cols} grid; output is only readable for small grids");
    }

    for row in 0..rows {
        for cell in grid.row(row) {
            out.write_all(if cell.is_alive() { ALIVE } else { DEAD }.as_bytes())?;
        }
        out.write_all(b"\n")?;
    }
    out.write_all(b"\n\n\n")
}

/// Render to a string
pub fn render_text(grid: &Grid) -> String {
    let mut buf = Vec::new();
    write_grid(&mut buf, grid).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn test_render_small_grid() {
        let mut grid: Grid = Grid::new(2, 3);
        grid.set(0, 1, Cell::Alive);
        grid.set(1, 2, Cell::Alive);
        assert_eq!(render_text(&grid), " -  O  - \n -  -  O \n\n\n\n");
    }

    #[test]
    fn test_render_empty_grid() {
        let grid: Grid = Grid::new(0, 0);
        assert_eq!(render_text(&grid), "\n\n\n");
    }
}
