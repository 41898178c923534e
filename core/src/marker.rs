use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Write;

use crate::grid::check_rectangular;
use crate::*;

/// The pair of characters that distinguish mines from empty cells in textual grids.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    mine: char,
    empty: char,
}

impl Markers {
    /// Whitespace separates cells in text and digits are counts on output,
    /// so neither can be a marker.
    pub fn new(mine: char, empty: char) -> Result<Self> {
        if let Some(marker) = [mine, empty]
            .into_iter()
            .find(|marker| marker.is_whitespace() || marker.is_ascii_digit())
        {
            return Err(ScanError::InvalidMarker(marker));
        }
        if mine == empty {
            return Err(ScanError::ConflictingMarkers(mine));
        }
        Ok(Self { mine, empty })
    }

    pub const fn mine(&self) -> char {
        self.mine
    }

    pub const fn empty(&self) -> char {
        self.empty
    }

    /// Classifies a single marker, anything other than exactly one known char is `None`.
    pub fn classify(&self, value: &str) -> Option<CellInput> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(marker), None) => self.classify_char(marker),
            _ => None,
        }
    }

    pub fn classify_char(&self, marker: char) -> Option<CellInput> {
        if marker == self.mine {
            Some(CellInput::Mine)
        } else if marker == self.empty {
            Some(CellInput::Empty)
        } else {
            None
        }
    }

    /// Classifies rows of marker strings, such as the ones found in a JSON grid.
    ///
    /// Shape is checked before any marker, so a ragged grid is always reported as such.
    pub fn classify_rows<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> Result<Grid<CellInput>> {
        check_rectangular(rows)?;

        let classified = rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, value)| {
                        let value = value.as_ref();
                        self.classify(value)
                            .ok_or_else(|| ScanError::UnknownMarker {
                                row,
                                col,
                                value: value.to_string(),
                            })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Grid::from_rows(classified)
    }

    /// Parses a textual grid.
    ///
    /// Every non-blank line is a row and every non-whitespace char within it a cell,
    /// so `X..` and `X . .` describe the same row.
    pub fn parse_grid(&self, text: &str) -> Result<Grid<CellInput>> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect())
            .collect();
        check_rectangular(&rows)?;

        let mut classified = Vec::with_capacity(rows.len());
        for (row, cells) in rows.iter().enumerate() {
            let mut line = Vec::with_capacity(cells.len());
            for (col, &marker) in cells.iter().enumerate() {
                let cell = self
                    .classify_char(marker)
                    .ok_or_else(|| ScanError::UnknownMarker {
                        row,
                        col,
                        value: marker.to_string(),
                    })?;
                line.push(cell);
            }
            classified.push(line);
        }

        log::debug!("Parsed {} rows of text", classified.len());
        Grid::from_rows(classified)
    }

    pub fn output_marker(&self, cell: CellOutput) -> String {
        match cell {
            CellOutput::Mine => self.mine.to_string(),
            CellOutput::Count(count) => count.to_string(),
        }
    }

    /// One line per row, cells separated by a single space.
    pub fn render(&self, grid: &Grid<CellOutput>) -> String {
        self.render_with(grid, |_, marker| marker)
    }

    /// Like [`Markers::render`], but `decorate` may rewrite each cell's marker given its coordinates.
    pub fn render_with(
        &self,
        grid: &Grid<CellOutput>,
        mut decorate: impl FnMut(Coord2, String) -> String,
    ) -> String {
        let mut out = String::new();
        for (row, cells) in grid.iter_rows().enumerate() {
            let line: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| decorate((row, col), self.output_marker(cell)))
                .collect();
            // writing into a String cannot fail
            let _ = writeln!(out, "{}", line.join(" "));
        }
        out
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            mine: MINE_MARKER,
            empty: EMPTY_MARKER,
        }
    }
}
