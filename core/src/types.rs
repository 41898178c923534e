use ndarray::Array2;

/// Single coordinate axis, used for row/column indices and grid dimensions.
pub type Coord = usize;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0, self.1]
    }
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, self.dim())
    }
}

pub trait NeighborCellIterExt<T>: NeighborIterExt {
    fn iter_neighbor_cells_with_index(&self, index: Coord2) -> impl Iterator<Item = (Coord2, T)>;

    fn iter_neighbor_cells(&self, index: Coord2) -> impl Iterator<Item = T> {
        self.iter_neighbor_cells_with_index(index)
            .map(|(_, cell)| cell)
    }
}

impl<T: Copy> NeighborCellIterExt<T> for Array2<T> {
    fn iter_neighbor_cells_with_index(&self, index: Coord2) -> impl Iterator<Item = (Coord2, T)> {
        self.iter_neighbors(index)
            .map(|index| (index, self[index.to_nd_index()]))
    }
}

/// Relative `(row, col)` offsets of the eight surrounding cells, row-major.
pub const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Yields the in-bounds neighbors of `center`, never the center itself.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[usize::from(self.index)], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(DISPLACEMENTS.len() - usize::from(self.index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn neighbors(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        NeighborIter::new(center, bounds).collect()
    }

    #[test]
    fn corner_has_three_neighbors() {
        assert_eq!(neighbors((0, 0), (3, 3)), [(0, 1), (1, 0), (1, 1)]);
        assert_eq!(neighbors((2, 2), (3, 3)).len(), 3);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(neighbors((0, 1), (3, 3)).len(), 5);
        assert_eq!(neighbors((1, 0), (3, 3)).len(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors_in_row_major_order() {
        assert_eq!(
            neighbors((1, 1), (3, 3)),
            [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn single_cell_and_thin_grids() {
        assert!(neighbors((0, 0), (1, 1)).is_empty());
        assert_eq!(neighbors((0, 1), (1, 3)), [(0, 0), (0, 2)]);
        assert_eq!(neighbors((1, 0), (3, 1)), [(0, 0), (2, 0)]);
    }

    #[test]
    fn array_neighbor_cells() {
        let array = Array2::from_shape_fn((2, 2), |(row, col)| row * 2 + col);
        let cells: Vec<_> = array.iter_neighbor_cells((0, 0)).collect();
        assert_eq!(cells, [1, 2, 3]);
    }
}
