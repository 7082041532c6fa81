//! Square letter grid and the geometry of walking through it

use std::{fs::File, io, io::Read, path::Path as FsPath};

/// Relative moves to every neighbour, in the order they are tried
const DIRECTIONS: [(isize, isize); 8] = [
	// above
	(-1, 0),
	(-1, -1),
	(-1, 1),
	// sides
	(0, -1),
	(0, 1),
	// below
	(1, 0),
	(1, -1),
	(1, 1),
];

/// Letters laid out row by row in a square
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
	letters: Vec<char>,
	side: usize,
}

/// Ways building a [`Grid`] could go wrong
#[derive(Debug, thiserror::Error)]
pub enum GridError {
	/// Letter count cannot be laid out as a square
	#[error("{len} letters cannot form a square grid")]
	NotSquare {
		/// Number of letters received
		len: usize,
	},

	/// Could not correctly open given file
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Constructors
impl Grid {
	/// Lowercases `letters` and lays them out row by row.
	///
	/// # Errors
	///
	/// Will error if the number of letters is not a perfect square.
	pub fn new(letters: &str) -> Result<Self, GridError> {
		let letters = letters.to_lowercase().chars().collect::<Vec<_>>();

		let side = letters.len().isqrt();
		if side * side != letters.len() {
			return Err(GridError::NotSquare { len: letters.len() });
		}

		Ok(Self { letters, side })
	}

	/// Concatenates every line, stripped of whitespace, into a single grid.
	///
	/// # Errors
	///
	/// See [`Grid::new`].
	pub fn from_lines(content: &str) -> Result<Self, GridError> {
		let letters = content
			.lines()
			.flat_map(|line| line.chars().filter(|c| !c.is_whitespace()))
			.collect::<String>();
		Self::new(&letters)
	}

	/// Reads a grid written one row per line.
	///
	/// # Errors
	///
	/// Will error if the file cannot be read, see [`Grid::from_lines`] otherwise.
	pub fn file(path: &FsPath) -> Result<Self, GridError> {
		let mut file = File::open(path)?;
		let mut buffer = String::new();
		file.read_to_string(&mut buffer)?;
		Self::from_lines(&buffer)
	}
}

impl Grid {
	/// Number of rows, which is also the number of columns
	#[must_use]
	pub const fn side(&self) -> usize {
		self.side
	}

	/// Number of cells
	#[must_use]
	pub fn len(&self) -> usize {
		self.letters.len()
	}

	/// Whether the grid has no cell at all
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.letters.is_empty()
	}

	/// Letter at `index`
	///
	/// # Panics
	///
	/// Panics if `index` is out of the grid.
	#[must_use]
	pub fn letter(&self, index: usize) -> char {
		self.letters[index]
	}

	/// Row and column of `index`
	#[must_use]
	pub const fn position(&self, index: usize) -> (usize, usize) {
		(index / self.side, index % self.side)
	}

	/// Whether two distinct cells touch by an edge or a corner
	#[must_use]
	pub const fn are_adjacent(&self, a: usize, b: usize) -> bool {
		let (a_row, a_col) = self.position(a);
		let (b_row, b_col) = self.position(b);
		a != b && a_row.abs_diff(b_row) <= 1 && a_col.abs_diff(b_col) <= 1
	}

	/// String spelled by the cells of `path`, in order
	#[must_use]
	pub fn spell(&self, path: &[usize]) -> String {
		path.iter().map(|&index| self.letter(index)).collect()
	}

	/// Cells that can extend `path`.
	///
	/// An empty path can start anywhere. Otherwise these are the neighbours of
	/// the last cell that are not used by the path yet.
	#[must_use]
	pub fn next_cells(&self, path: &Path) -> Vec<usize> {
		let Some(last) = path.last() else {
			return (0..self.len()).collect();
		};

		let (row, col) = self.position(last);

		DIRECTIONS
			.iter()
			.filter_map(|&(d_row, d_col)| {
				let row = row.checked_add_signed(d_row).filter(|&r| r < self.side)?;
				let col = col.checked_add_signed(d_col).filter(|&c| c < self.side)?;
				Some(row * self.side + col)
			})
			.filter(|&index| !path.contains(index))
			.collect()
	}
}

/// Ordered cells of a word under construction, each used at most once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
	cells: Vec<usize>,
	/// `in_use[i]` is set when cell `i` is part of `cells`
	in_use: Vec<bool>,
}

impl Path {
	/// An empty path on a grid of `len` cells
	#[must_use]
	pub fn new(len: usize) -> Self {
		Self {
			cells: Vec::new(),
			in_use: vec![false; len],
		}
	}

	/// Appends `cell` to the path.
	///
	/// # Panics
	///
	/// Panics if `cell` is out of the grid, or, in debug builds, if it is
	/// already part of the path.
	pub fn push(&mut self, cell: usize) {
		debug_assert!(!self.in_use[cell], "cell {cell} is already used");
		self.in_use[cell] = true;
		self.cells.push(cell);
	}

	/// Removes and returns the last cell
	pub fn pop(&mut self) -> Option<usize> {
		let cell = self.cells.pop()?;
		self.in_use[cell] = false;
		Some(cell)
	}

	/// Last cell, [`None`] when the search has not started
	#[must_use]
	pub fn last(&self) -> Option<usize> {
		self.cells.last().copied()
	}

	/// Whether `cell` is already used
	#[must_use]
	pub fn contains(&self, cell: usize) -> bool {
		self.in_use.get(cell).copied().unwrap_or(false)
	}

	/// Number of cells
	#[must_use]
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	/// Whether no cell was pushed yet
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	/// Cells in order
	#[must_use]
	pub fn cells(&self) -> &[usize] {
		&self.cells
	}
}
