use alloc::vec::Vec;
use core::ops::Index;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular, row-major grid of cells.
///
/// Every row has the same length, this is checked once on construction and
/// then held by the backing [`Array2`]. Zero rows, or rows with zero cells,
/// are valid degenerate shapes.
///
/// Serializes as a sequence of rows, deserializing rejects ragged rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Vec<T>>",
    into = "Vec<Vec<T>>",
    bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de>")
)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T> Grid<T> {
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let expected = check_rectangular(&rows)?;
        let shape = (rows.len(), expected);
        let data: Vec<T> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec(shape, data).expect("rows should be rectangular");
        Ok(Self { cells })
    }

    pub fn from_fn(size: Coord2, f: impl FnMut(Coord2) -> T) -> Self {
        Self {
            cells: Array2::from_shape_fn(size, f),
        }
    }

    pub fn from_array(cells: Array2<T>) -> Self {
        Self { cells }
    }

    /// Dimensions as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        self.cells.dim()
    }

    pub fn rows(&self) -> Coord {
        self.cells.nrows()
    }

    pub fn cols(&self) -> Coord {
        self.cells.ncols()
    }

    /// Whether the grid holds no cells at all, either no rows or empty rows.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        row < self.rows() && col < self.cols()
    }

    pub fn get(&self, coords: Coord2) -> Option<&T> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = ArrayView1<'_, T>> {
        (0..self.rows()).map(|row| self.cells.row(row))
    }

    /// Every cell with its coordinates, in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Coord2, &T)> {
        self.cells.indexed_iter()
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.map(f),
        }
    }

    pub fn as_array(&self) -> &Array2<T> {
        &self.cells
    }
}

impl<T: Clone> Grid<T> {
    pub fn from_elem(size: Coord2, value: T) -> Self {
        Self {
            cells: Array2::from_elem(size, value),
        }
    }

    /// Converts back into nested rows, keeping the row count of empty-row grids.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }
}

/// Returns the common row length, or the first row that deviates from it.
pub(crate) fn check_rectangular<T>(rows: &[Vec<T>]) -> Result<Coord> {
    let expected = rows.first().map_or(0, Vec::len);
    match rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        Some((row, found)) => {
            log::debug!("Rejecting ragged grid at row {}", row);
            Err(ScanError::RaggedRow {
                row,
                expected,
                found,
            })
        }
        None => Ok(expected),
    }
}

impl<T> Index<Coord2> for Grid<T> {
    type Output = T;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl<T> NeighborIterExt for Grid<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(index)
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Grid<T> {
    type Error = ScanError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl<T: Clone> From<Grid<T>> for Vec<Vec<T>> {
    fn from(grid: Grid<T>) -> Self {
        grid.into_rows()
    }
}
