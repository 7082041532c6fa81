//! Pruned depth-first search for every word hidden in a [`Grid`]
//!
//! Entrypoint methods are
//! - [`Solver::solve`]: collects the distinct words found
//! - [`Solver::par_solve`]: same, spreading starting cells over threads
//! - [`Solver::for_each_word`]: streams every hit with the cells spelling it

use crate::{Grid, Oracle, Path, WordValidity};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// Shortest word accepted unless told otherwise
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Walks a [`Grid`] and asks an [`Oracle`] which strings are worth pursuing
#[derive(Debug)]
pub struct Solver<'a, O: Oracle> {
	grid: &'a Grid,
	oracle: &'a O,
	min_length: usize,
}

impl<'a, O: Oracle> Solver<'a, O> {
	/// Accepts words of [`DEFAULT_MIN_LENGTH`] letters or more
	#[must_use]
	pub const fn new(grid: &'a Grid, oracle: &'a O) -> Self {
		Self {
			grid,
			oracle,
			min_length: DEFAULT_MIN_LENGTH,
		}
	}

	/// Accepts words of `min_length` letters or more
	#[must_use]
	pub fn min_length(mut self, min_length: usize) -> Self {
		self.min_length = min_length;
		self
	}

	/// Distinct words found, whatever the path spelling them
	#[must_use]
	pub fn solve(&self) -> HashSet<String> {
		let mut words = HashSet::new();
		self.for_each_word(|word, _| {
			words.insert(word.to_owned());
		});

		log::debug!("found {} distinct words", words.len());
		words
	}

	/// Distinct words found, each with the first path that spelled it
	#[must_use]
	pub fn solve_paths(&self) -> HashMap<String, Vec<usize>> {
		let mut words = HashMap::new();
		self.for_each_word(|word, path| {
			if !words.contains_key(word) {
				words.insert(word.to_owned(), path.to_vec());
			}
		});
		words
	}

	/// Same result as [`Solver::solve`], every starting cell is searched on
	/// the rayon thread pool and partial sets are merged at the end.
	#[must_use]
	pub fn par_solve(&self) -> HashSet<String> {
		log::debug!("searching {} starting cells in parallel", self.grid.len());

		let words = self
			.grid
			.next_cells(&Path::new(self.grid.len()))
			.into_par_iter()
			.map(|start| {
				let mut words = HashSet::new();
				self.search_from(start, &mut |word: &str, _: &[usize]| {
					words.insert(word.to_owned());
				});
				words
			})
			.reduce(HashSet::new, |mut acc, words| {
				acc.extend(words);
				acc
			});

		log::debug!("found {} distinct words", words.len());
		words
	}

	/// Calls `on_word` with every accepted word and the cells spelling it.
	///
	/// A word reachable through several paths is reported once per path.
	pub fn for_each_word<F>(&self, mut on_word: F)
	where
		F: FnMut(&str, &[usize]),
	{
		log::debug!(
			"searching a {0}x{0} grid for words of {1} letters or more",
			self.grid.side(),
			self.min_length
		);

		for start in self.grid.next_cells(&Path::new(self.grid.len())) {
			self.search_from(start, &mut on_word);
		}
	}

	/// Explores every path beginning at `start`.
	///
	/// Each stack frame holds the cells left to try at one depth, in reverse
	/// so that popping keeps the neighbour order. The path and the letter
	/// buffer always hold one entry less than the stack has frames.
	fn search_from<F>(&self, start: usize, on_word: &mut F)
	where
		F: FnMut(&str, &[usize]),
	{
		let mut path = Path::new(self.grid.len());
		let mut buffer = String::new();
		let mut stack = vec![vec![start]];

		while let Some(frame) = stack.last_mut() {
			let Some(cell) = frame.pop() else {
				// branch exhausted, backtrack
				stack.pop();
				if path.pop().is_some() {
					buffer.pop();
				}
				continue;
			};

			path.push(cell);
			buffer.push(self.grid.letter(cell));

			let validity = self.oracle.classify(&buffer);

			if validity == WordValidity::Real && path.len() >= self.min_length {
				log::trace!("found `{buffer}` at {:?}", path.cells());
				on_word(&buffer, path.cells());
			}

			if !validity.can_extend() {
				path.pop();
				buffer.pop();
				continue;
			}

			let mut next = self.grid.next_cells(&path);
			next.reverse();
			stack.push(next);
		}
	}
}

/// Solves `letters` as a square grid, the forgiving way.
///
/// A letter count that cannot form a square is reported through the log and
/// gives an empty set instead of an error.
pub fn solution<O: Oracle>(letters: &str, oracle: &O, min_length: usize) -> HashSet<String> {
	match Grid::new(letters) {
		Ok(grid) => Solver::new(&grid, oracle).min_length(min_length).solve(),
		Err(err) => {
			log::warn!("Not a valid grid: {err}");
			HashSet::new()
		}
	}
}
