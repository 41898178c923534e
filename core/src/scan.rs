use alloc::vec::Vec;

use crate::*;

/// Number of mines among the in-bounds neighbors of `coords`.
///
/// The cell at `coords` itself is never counted.
pub fn adjacent_mine_count(grid: &Grid<CellInput>, coords: Coord2) -> u8 {
    grid.iter_neighbors(coords)
        .filter(|&pos| grid[pos].is_mine())
        .count()
        .try_into()
        .unwrap()
}

/// Replaces every empty cell with its adjacent mine count, echoing mines as-is.
///
/// Each output cell only depends on the input classification of its
/// neighbors, never on another output cell.
pub fn scan(grid: &Grid<CellInput>) -> Grid<CellOutput> {
    log::debug!("Scanning {:?} grid", grid.size());

    Grid::from_fn(grid.size(), |coords| match grid[coords] {
        CellInput::Mine => CellOutput::Mine,
        CellInput::Empty => {
            let count = adjacent_mine_count(grid, coords);
            log::trace!("Cell {:?} has {} adjacent mines", coords, count);
            CellOutput::Count(count)
        }
    })
}

/// Scans rows of already classified cells, rejecting ragged input.
pub fn scan_rows(rows: Vec<Vec<CellInput>>) -> Result<Grid<CellOutput>> {
    let grid = Grid::from_rows(rows)?;
    Ok(scan(&grid))
}

/// Scans rows of marker strings, rejecting ragged input and unknown markers.
pub fn scan_markers<S: AsRef<str>>(
    markers: &Markers,
    rows: &[Vec<S>],
) -> Result<Grid<CellOutput>> {
    let grid = markers.classify_rows(rows)?;
    Ok(scan(&grid))
}
