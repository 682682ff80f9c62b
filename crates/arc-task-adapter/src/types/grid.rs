/*
[INPUT]:  Raw 2D integer arrays from task payloads or user edits
[OUTPUT]: Rectangular symbol grids with checked accessors
[POS]:    Data layer - grid model shared by adapter and viewer
[UPDATE]: When grid validation rules or accessors change
*/

use serde::{Deserialize, Serialize};

use crate::http::{ArcError, Result};

/// Cell value, one of the ten palette symbols
pub type Symbol = u8;

/// Number of distinct symbols (0..=9)
pub const SYMBOL_COUNT: u8 = 10;

/// Rectangular grid of symbols.
///
/// Every row has the same length. Deserialization rejects ragged rows,
/// empty grids and values outside `0..=9`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    cells: Vec<Vec<Symbol>>,
}

impl Grid {
    /// All-zero grid of the given dimensions
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            cells: vec![vec![0; width]; height],
        }
    }

    /// Grid of the given dimensions seeded from `values`.
    ///
    /// Each cell takes `values[i][j]` when it exists, otherwise 0.
    pub fn from_values(height: usize, width: usize, values: &[Vec<Symbol>]) -> Self {
        let cells = (0..height)
            .map(|i| {
                (0..width)
                    .map(|j| {
                        values
                            .get(i)
                            .and_then(|row| row.get(j))
                            .copied()
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect();
        Self { cells }
    }

    /// Validate raw rows into a grid
    pub fn try_from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(ArcError::InvalidGrid("grid has no cells".to_string())),
        };

        let mut cells = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ArcError::InvalidGrid(format!(
                    "row {i} has length {}, expected {width}",
                    row.len()
                )));
            }
            let converted = row
                .into_iter()
                .map(|value| match u8::try_from(value) {
                    Ok(symbol) if symbol < SYMBOL_COUNT => Ok(symbol),
                    _ => Err(ArcError::InvalidGrid(format!(
                        "row {i} contains {value}, expected a symbol in 0..=9"
                    ))),
                })
                .collect::<Result<Vec<_>>>()?;
            cells.push(converted);
        }

        Ok(Self { cells })
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Symbol> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set a cell, returning `false` when `(row, col)` is out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Symbol) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> &[Vec<Symbol>] {
        &self.cells
    }

    /// Zero grid of the new size with the overlapping top-left region copied over
    pub fn resized(&self, height: usize, width: usize) -> Self {
        Self::from_values(height, width, &self.cells)
    }

    /// Zero grid with the same dimensions
    pub fn zeroed(&self) -> Self {
        Self::zeros(self.height(), self.width())
    }
}

impl TryFrom<Vec<Vec<i64>>> for Grid {
    type Error = String;

    fn try_from(rows: Vec<Vec<i64>>) -> std::result::Result<Self, Self::Error> {
        Grid::try_from_rows(rows).map_err(|err| err.to_string())
    }
}

impl From<Grid> for Vec<Vec<Symbol>> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}
