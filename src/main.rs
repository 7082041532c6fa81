//! Ruggle CLI
//!
//! Prints every word of the dictionary hidden in a letter grid, sorted.

use clap::Parser;
use ruggle::{Dictionary, Grid, Oracle, Solver, Trie, DEFAULT_MIN_LENGTH};
use std::{
	collections::BTreeSet,
	io::{stdout, Write},
	path::PathBuf,
};

#[derive(clap::Parser)]
struct Args {
	/// Grid letters, row after row
	letters: Option<String>,

	/// File holding the grid, one row per line
	#[arg(long, short, conflicts_with = "letters")]
	grid_file: Option<PathBuf>,

	/// Sorted word list, one word per line
	#[arg(long, short, env = "RUGGLE_DICT", default_value = "dictionary.txt")]
	dictionary: PathBuf,

	/// Shortest word to report
	#[arg(long, short, default_value_t = DEFAULT_MIN_LENGTH)]
	min_length: usize,

	/// Look words up in a prefix tree instead of probing the sorted list
	#[arg(long)]
	complete: bool,

	/// Search starting cells in parallel
	#[arg(long, short)]
	parallel: bool,

	/// Print words as soon as they are found instead of sorted at the end
	#[arg(long, short, conflicts_with = "parallel")]
	stream: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	pretty_env_logger::init();

	let args = Args::parse();

	let grid = match (&args.letters, &args.grid_file) {
		(Some(letters), _) => Grid::new(letters)?,
		(None, Some(path)) => Grid::file(path)?,
		(None, None) => return Err("no grid provided".into()),
	};

	let dict = Dictionary::file(&args.dictionary)?;
	if !dict.is_sorted() {
		log::warn!(
			"`{}` is not sorted or has duplicates, some words may be missed",
			args.dictionary.display()
		);
	}

	if args.complete {
		run(&args, &grid, &Trie::from(&dict))
	} else {
		run(&args, &grid, &dict)
	}
}

fn run<O: Oracle>(args: &Args, grid: &Grid, oracle: &O) -> Result<(), Box<dyn std::error::Error>> {
	let solver = Solver::new(grid, oracle).min_length(args.min_length);
	let mut out = stdout().lock();

	if args.stream {
		let mut error = None;
		solver.for_each_word(|word, _| {
			if error.is_none() {
				error = writeln!(out, "{word}").err();
			}
		});
		return error.map_or(Ok(()), |err| Err(err.into()));
	}

	let words = if args.parallel {
		solver.par_solve()
	} else {
		solver.solve()
	};

	log::info!("Found {} words", words.len());

	for word in words.into_iter().collect::<BTreeSet<_>>() {
		writeln!(out, "{word}")?;
	}

	Ok(())
}
