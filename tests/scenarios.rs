mod utils;

use ruggle::{Dictionary, Grid, GridError, Solver, Trie};
use std::io::Write;

const TINY: [&str; 4] = ["at", "ca", "cat", "ta"];

/// `c` reaches `t` through the second `a`, so `cat` is spelled as well
#[test]
fn two_by_two_complete() -> Result<(), Box<dyn std::error::Error>> {
	let trie = Trie::from_words(TINY);
	utils::test_grid("atca", &trie, 2, &["at", "ta", "ca", "cat"])
}

/// Probing a four word list never reaches its first word
#[test]
fn two_by_two_probed() -> Result<(), Box<dyn std::error::Error>> {
	let dict = Dictionary::from_words(TINY);
	utils::test_grid("atca", &dict, 2, &["ta", "ca", "cat"])
}

#[test]
fn uppercase_letters_are_lowered() -> Result<(), Box<dyn std::error::Error>> {
	let trie = Trie::from_words(TINY);
	utils::test_grid("ATCA", &trie, 3, &["cat"])
}

#[test]
fn five_letters_are_refused() -> Result<(), Box<dyn std::error::Error>> {
	let dict = Dictionary::from_words(["aeiou"]);
	utils::test_grid("aeiou", &dict, 1, &[])?;

	assert!(matches!(Grid::new("aeiou"), Err(GridError::NotSquare { len: 5 })));
	Ok(())
}

#[test]
fn single_cell() -> Result<(), Box<dyn std::error::Error>> {
	let dict = Dictionary::from_words(["a", "ab", "b", "ba", "bb"]);
	utils::test_grid("a", &dict, 1, &["a"])?;
	utils::test_grid("a", &dict, 2, &[])?;
	utils::test_grid("c", &dict, 1, &[])
}

#[test]
fn loads_files() -> Result<(), Box<dyn std::error::Error>> {
	let mut words = tempfile::NamedTempFile::new()?;
	writeln!(words, "act\nads\ncad\ncat\ndot\nore\nred\nrod\nsad\ntad\ntoad\ntoe\nzebra")?;

	let mut rows = tempfile::NamedTempFile::new()?;
	writeln!(rows, "CAT\nSDO\nGRE")?;

	let dict = Dictionary::file(words.path())?;
	let grid = Grid::file(rows.path())?;
	assert!(dict.is_sorted());

	let mut found = Solver::new(&grid, &dict)
		.min_length(4)
		.solve()
		.into_iter()
		.collect::<Vec<_>>();
	found.sort();

	assert_eq!(found, ["toad"]);
	Ok(())
}
