use serde::Serialize;
use crate::core::{GameError, MAX_DIMENSION};

/// Row-major `height x width` board of tile values, 0 meaning empty.
/// Serialized only for log snapshots; boards are built through `from_rows`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<u32>,
}

impl Grid {
    pub fn new_empty(height: usize, width: usize) -> Result<Self, GameError> {
        check_dimensions(height, width)?;
        Ok(Grid {
            height,
            width,
            cells: vec![0; height * width],
        })
    }

    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GameError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        check_dimensions(height, width)?;
        if let Some(i) = rows.iter().position(|row| row.len() != width) {
            return Err(GameError::malformed(format!(
                "row {} has {} cells, expected {}",
                i,
                rows[i].len(),
                width
            )));
        }
        let cells: Vec<u32> = rows.into_iter().flatten().collect();
        if let Some(&bad) = cells.iter().find(|&&v| v != 0 && !v.is_power_of_two()) {
            return Err(GameError::malformed(format!("{} is not a power of two", bad)));
        }
        Ok(Grid {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn empty_positions(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(index, _)| (index / self.width, index % self.width))
            .collect()
    }

    /// Rows become columns.
    pub fn transpose(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.width {
            for row in 0..self.height {
                cells.push(self[(row, col)]);
            }
        }
        Grid {
            height: self.width,
            width: self.height,
            cells,
        }
    }

    /// Reverses every row.
    pub fn mirror(&self) -> Grid {
        let cells = self
            .rows()
            .flat_map(|row| row.iter().rev().copied())
            .collect();
        Grid {
            height: self.height,
            width: self.width,
            cells,
        }
    }

    /// Rebuilds the grid row by row; `f` must keep every row's length.
    pub(crate) fn map_rows<F>(&self, mut f: F) -> Grid
    where
        F: FnMut(&[u32]) -> Vec<u32>,
    {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in self.rows() {
            let new_row = f(row);
            debug_assert_eq!(new_row.len(), row.len());
            cells.extend(new_row);
        }
        Grid {
            height: self.height,
            width: self.width,
            cells,
        }
    }
}

fn check_dimensions(height: usize, width: usize) -> Result<(), GameError> {
    if height == 0 || width == 0 {
        return Err(GameError::malformed("grid must have at least one row and one column"));
    }
    if height > MAX_DIMENSION || width > MAX_DIMENSION {
        return Err(GameError::malformed(format!(
            "grid is {}x{}, at most {}x{} is supported",
            height, width, MAX_DIMENSION, MAX_DIMENSION
        )));
    }
    Ok(())
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = u32;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[row * self.width + col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[row * self.width + col]
    }
}
