//! ruggle
//!
//! Finds every dictionary word that can be traced through a square letter
//! grid by chaining adjacent, unused cells.
//!
//! Entrypoints are
//! - [`Dictionary`]: the sorted word list, queried with [`Dictionary::lookup`]
//! - [`Grid`]: the letters, validated to form a square
//! - [`Solver`]: the pruned depth-first search tying both together

mod dictionary;
mod grid;
mod lookup;
mod solver;
mod trie;

pub use dictionary::{Dictionary, InitializeError};
pub use grid::{Grid, GridError, Path};
pub use lookup::{Oracle, WordValidity};
pub use solver::{solution, Solver, DEFAULT_MIN_LENGTH};
pub use trie::Trie;
