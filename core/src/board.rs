use serde::{Deserialize, Serialize};

use crate::*;

/// Side length of the standard board.
pub const BOARD_SIZE: Coord = 8;

/// Background shade of a cell, alternating like a checkerboard starting light at `(0, 0)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    pub const fn at((row, col): Coord2) -> Self {
        if (row + col) % 2 == 0 {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    Moved { previous: Option<Coord2> },
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Moved { .. } => true,
        }
    }
}

/// Everything a view needs to paint a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub row: Coord,
    pub col: Coord,
    pub shade: Shade,
    pub highlighted: bool,
    pub value: CellOutput,
}

/// Scanned grid plus the single highlighted cell of a board view.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    scanned: Grid<CellOutput>,
    selected: Option<Coord2>,
}

impl Board {
    pub fn new(input: &Grid<CellInput>) -> Self {
        Self::from_scanned(scan(input))
    }

    pub fn from_scanned(scanned: Grid<CellOutput>) -> Self {
        Self {
            scanned,
            selected: None,
        }
    }

    /// Mine-free 8×8 board with nothing selected.
    pub fn standard() -> Self {
        Self::new(&Grid::from_elem((BOARD_SIZE, BOARD_SIZE), CellInput::Empty))
    }

    pub fn size(&self) -> Coord2 {
        self.scanned.size()
    }

    pub fn scanned(&self) -> &Grid<CellOutput> {
        &self.scanned
    }

    pub fn selected(&self) -> Option<Coord2> {
        self.selected
    }

    pub fn is_highlighted(&self, coords: Coord2) -> bool {
        self.selected == Some(coords)
    }

    /// Highlights `coords`, un-highlighting whatever was selected before.
    pub fn select(&mut self, coords: Coord2) -> Result<SelectOutcome> {
        if !self.scanned.contains(coords) {
            return Err(ScanError::InvalidCoords(coords));
        }

        if self.selected == Some(coords) {
            return Ok(SelectOutcome::NoChange);
        }

        let previous = self.selected.replace(coords);
        log::debug!("select {:?}, previous: {:?}", coords, previous);
        Ok(SelectOutcome::Moved { previous })
    }

    pub fn clear_selection(&mut self) -> Option<Coord2> {
        self.selected.take()
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        let &value = self.scanned.get(coords)?;
        Some(CellView {
            row: coords.0,
            col: coords.1,
            shade: Shade::at(coords),
            highlighted: self.is_highlighted(coords),
            value,
        })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.scanned
            .indexed_iter()
            .map(|(coords, &value)| CellView {
                row: coords.0,
                col: coords.1,
                shade: Shade::at(coords),
                highlighted: self.is_highlighted(coords),
                value,
            })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
