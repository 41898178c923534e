//! Adjacent-mine counting over rectangular grids.
//!
//! [`scan`] turns a [`Grid`] of [`CellInput`] into a grid of the same shape
//! where mines are echoed and every empty cell holds the number of mines among
//! its (up to eight) neighbors.
#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use grid::*;
pub use marker::*;
pub use scan::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod grid;
mod marker;
mod scan;
mod types;
