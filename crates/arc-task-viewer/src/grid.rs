/*
[INPUT]:  Grids, cell coordinates, size strings, container dimensions
[OUTPUT]: Filled grids, parsed sizes, cell pixel sizes, palette colors
[POS]:    Utility layer - pure grid operations used by the store and the view
[UPDATE]: When adding grid tools or changing layout limits
*/

use arc_task_adapter::{Grid, SYMBOL_COUNT, Symbol};
use std::num::IntErrorKind;
use thiserror::Error;

/// Largest side accepted by `parse_grid_size`
pub const MAX_GRID_SIDE: usize = 30;
pub const MAX_CELL_SIZE: u32 = 50;
pub const MIN_CELL_SIZE: u32 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid size should have the format \"3x3\", \"5x7\", etc.")]
    Format,

    #[error("Grid size should be at least 1. Cannot have a grid with no cells.")]
    TooSmall,

    #[error("Grid size should be at most {MAX_GRID_SIDE} per side. Pick a smaller size.")]
    TooLarge,
}

impl GridError {
    pub fn is_range(&self) -> bool {
        matches!(self, GridError::TooSmall | GridError::TooLarge)
    }
}

/// Flood fill from `(row, col)` with 4-connectivity.
///
/// Every cell reachable through neighbours equal to the start cell's value
/// becomes `symbol`. Out-of-bounds starts and same-symbol fills are no-ops.
pub fn flood_fill(grid: &mut Grid, row: usize, col: usize, symbol: Symbol) {
    let Some(target) = grid.get(row, col) else {
        return;
    };
    if target == symbol {
        return;
    }

    let (height, width) = grid.dimensions();
    let mut stack = vec![(row, col)];
    while let Some((r, c)) = stack.pop() {
        if grid.get(r, c) != Some(target) {
            continue;
        }
        grid.set(r, c, symbol);

        if r > 0 {
            stack.push((r - 1, c));
        }
        if r + 1 < height {
            stack.push((r + 1, c));
        }
        if c > 0 {
            stack.push((r, c - 1));
        }
        if c + 1 < width {
            stack.push((r, c + 1));
        }
    }
}

/// Parse `"<H>x<W>"` into `(height, width)`
pub fn parse_grid_size(text: &str) -> Result<(usize, usize), GridError> {
    let parts: Vec<&str> = text.split('x').collect();
    let [height, width] = parts.as_slice() else {
        return Err(GridError::Format);
    };

    let height = parse_side(height)?;
    let width = parse_side(width)?;

    if height < 1 || width < 1 {
        return Err(GridError::TooSmall);
    }
    if height > MAX_GRID_SIDE as i64 || width > MAX_GRID_SIDE as i64 {
        return Err(GridError::TooLarge);
    }

    Ok((height as usize, width as usize))
}

/// Out-of-range digits saturate so the range checks report them
fn parse_side(text: &str) -> Result<i64, GridError> {
    match text.trim().parse::<i64>() {
        Ok(side) => Ok(side),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(GridError::Format),
        },
    }
}

/// Largest cell size that fits the grid in the container, one unit of
/// gutter per row/column, clamped to `[MIN_CELL_SIZE, MAX_CELL_SIZE]`
pub fn calculate_cell_size(
    grid_height: u32,
    grid_width: u32,
    container_height: u32,
    container_width: u32,
) -> u32 {
    let fit = |container: u32, cells: u32| -> i64 {
        if cells == 0 {
            return MAX_CELL_SIZE as i64;
        }
        (container as i64 - cells as i64).div_euclid(cells as i64)
    };

    let size = fit(container_height, grid_height)
        .min(fit(container_width, grid_width))
        .min(MAX_CELL_SIZE as i64);
    size.max(MIN_CELL_SIZE as i64) as u32
}

/// Palette entry for one symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub hex: &'static str,
    pub rgb: (u8, u8, u8),
}

pub const PALETTE: [PaletteColor; SYMBOL_COUNT as usize] = [
    PaletteColor { name: "black", hex: "#000000", rgb: (0, 0, 0) },
    PaletteColor { name: "blue", hex: "#0074D9", rgb: (0, 116, 217) },
    PaletteColor { name: "red", hex: "#FF4136", rgb: (255, 65, 54) },
    PaletteColor { name: "green", hex: "#2ECC40", rgb: (46, 204, 64) },
    PaletteColor { name: "yellow", hex: "#FFDC00", rgb: (255, 220, 0) },
    PaletteColor { name: "grey", hex: "#AAAAAA", rgb: (170, 170, 170) },
    PaletteColor { name: "fuchsia", hex: "#F012BE", rgb: (240, 18, 190) },
    PaletteColor { name: "orange", hex: "#FF851B", rgb: (255, 133, 27) },
    PaletteColor { name: "teal", hex: "#7FDBFF", rgb: (127, 219, 255) },
    PaletteColor { name: "brown", hex: "#870C25", rgb: (135, 12, 37) },
];

/// Palette color for a symbol, wrapping modulo 10
pub fn color_for_symbol(symbol: usize) -> PaletteColor {
    PALETTE[symbol % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn grid(rows: &[&[u8]]) -> Grid {
        let values: Vec<Vec<u8>> = rows.iter().map(|r| r.to_vec()).collect();
        Grid::from_values(values.len(), values[0].len(), &values)
    }

    #[test]
    fn test_flood_fill_uniform_grid() {
        let mut g = Grid::zeros(30, 30);
        flood_fill(&mut g, 15, 15, 4);
        assert!(g.rows().iter().flatten().all(|&v| v == 4));
    }

    #[test]
    fn test_flood_fill_stops_at_boundaries() {
        let mut g = grid(&[
            &[0, 0, 1, 0],
            &[0, 1, 0, 0],
            &[1, 0, 0, 0],
        ]);
        flood_fill(&mut g, 0, 0, 3);
        assert_eq!(
            g.rows(),
            &[vec![3, 3, 1, 0], vec![3, 1, 0, 0], vec![1, 0, 0, 0]]
        );
    }

    #[test]
    fn test_flood_fill_ignores_diagonals() {
        let mut g = grid(&[&[2, 0], &[0, 2]]);
        flood_fill(&mut g, 0, 0, 5);
        assert_eq!(g.rows(), &[vec![5, 0], vec![0, 2]]);
    }

    #[test]
    fn test_flood_fill_twice_changes_nothing_more() {
        let mut g = grid(&[&[1, 1, 0], &[0, 1, 0], &[0, 0, 1]]);
        flood_fill(&mut g, 0, 0, 7);
        let once = g.clone();
        flood_fill(&mut g, 0, 0, 7);
        assert_eq!(g, once);
        assert_eq!(g.get(2, 2), Some(1));
        assert_eq!(g.get(1, 0), Some(0));
    }

    #[test]
    fn test_flood_fill_same_symbol_and_out_of_bounds_are_noops() {
        let mut g = grid(&[&[1, 1], &[1, 0]]);
        let before = g.clone();
        flood_fill(&mut g, 0, 0, 1);
        flood_fill(&mut g, 5, 5, 3);
        assert_eq!(g, before);
    }

    #[rstest]
    #[case("3x3", Ok((3, 3)))]
    #[case("5x7", Ok((5, 7)))]
    #[case("30x1", Ok((30, 1)))]
    #[case("31x5", Err(GridError::TooLarge))]
    #[case("5x31", Err(GridError::TooLarge))]
    #[case("0x5", Err(GridError::TooSmall))]
    #[case("-2x5", Err(GridError::TooSmall))]
    #[case("99999999999999999999x5", Err(GridError::TooLarge))]
    #[case("5x-99999999999999999999", Err(GridError::TooSmall))]
    #[case("abcx5", Err(GridError::Format))]
    #[case("3-3", Err(GridError::Format))]
    #[case("3x3x3", Err(GridError::Format))]
    #[case("", Err(GridError::Format))]
    fn test_parse_grid_size(#[case] input: &str, #[case] expected: Result<(usize, usize), GridError>) {
        assert_eq!(parse_grid_size(input), expected);
    }

    #[test]
    fn test_parse_grid_size_error_kinds() {
        assert!(parse_grid_size("0x5").unwrap_err().is_range());
        assert!(!parse_grid_size("3-3").unwrap_err().is_range());
    }

    #[rstest]
    #[case(10, 10, 500, 500, 49)]
    #[case(3, 3, 500, 500, 50)]
    #[case(30, 30, 100, 100, 10)]
    #[case(2, 10, 500, 200, 19)]
    fn test_calculate_cell_size(
        #[case] h: u32,
        #[case] w: u32,
        #[case] ch: u32,
        #[case] cw: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(calculate_cell_size(h, w, ch, cw), expected);
    }

    #[test]
    fn test_calculate_cell_size_bounds() {
        assert!(calculate_cell_size(10, 10, 600, 600) <= MAX_CELL_SIZE);
        assert!(calculate_cell_size(30, 30, 100, 100) >= MIN_CELL_SIZE);
        assert_eq!(calculate_cell_size(10, 10, 5, 5), MIN_CELL_SIZE);
    }

    #[test]
    fn test_color_for_symbol_wraps() {
        assert_eq!(color_for_symbol(0).name, "black");
        assert_eq!(color_for_symbol(9).hex, "#870C25");
        assert_eq!(color_for_symbol(12), color_for_symbol(2));
    }
}
