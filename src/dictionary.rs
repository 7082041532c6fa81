//! Word list the search is checked against
//!
//! Constructors are
//! - [`Dictionary::from_words`]: takes words as they come
//! - [`Dictionary::from_slice`]: parses a word list, one word per line
//! - [`Dictionary::file`]: reads and parses a word list file
//!
//! Querying lives in [`crate::lookup`].

use nom::{
	character::complete::{line_ending, not_line_ending},
	multi::separated_list0,
	Parser,
};
use nom_supreme::ParserExt;
use std::{fs::File, io, io::Read, path::Path};

/// An immutable list of lowercase words sorted in ascending order
///
/// Order and uniqueness are a caller contract: they are never re-checked when
/// querying. Feeding an unsorted list gives unspecified classifications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
	/// Sorted, distinct words
	pub(crate) words: Vec<String>,
}

/// Ways initializing a [`Dictionary`] could go wrong
#[derive(Debug, thiserror::Error)]
pub enum InitializeError {
	/// Could not parse the word list
	#[error("Could not parse file: {0}")]
	Parser(String),

	/// Could not correctly open given file
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Constructors
impl Dictionary {
	/// Wraps already sorted words without looking at them.
	pub fn from_words<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			words: words.into_iter().map(Into::into).collect(),
		}
	}

	/// Parses a word list. Lines are trimmed and blank ones are skipped.
	///
	/// # Errors
	///
	/// Will error if the content contains a stray carriage return that is not
	/// part of a `\r\n` line ending.
	pub fn from_slice(content: &str) -> Result<Self, InitializeError> {
		let words = WordListParser::parse(content)?;
		log::debug!("parsed a word list of {} entries", words.len());
		Ok(Self { words })
	}

	/// Reads the word list found at `path`.
	///
	/// # Errors
	///
	/// Will error if the file cannot be read or if its content cannot be
	/// parsed, see [`Dictionary::from_slice`].
	pub fn file(path: &Path) -> Result<Self, InitializeError> {
		let mut file = File::open(path)?;
		let mut buffer = String::new();
		file.read_to_string(&mut buffer)?;
		Self::from_slice(&buffer)
	}
}

impl Dictionary {
	/// Number of words
	#[must_use]
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Whether there is no word at all, every lookup is then [`crate::WordValidity::Invalid`]
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Words in stored order
	pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
		self.words.iter().map(String::as_str)
	}

	/// Whether words are strictly ascending, i.e. sorted and without duplicates.
	///
	/// Lookups never call this, it is there for callers who want to warn about
	/// a malformed word list.
	#[must_use]
	pub fn is_sorted(&self) -> bool {
		self.words.windows(2).all(|pair| pair[0] < pair[1])
	}
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::from_words(iter)
	}
}

/// Splits a word list into its lines
struct WordListParser;

impl WordListParser {
	fn parse(i: &str) -> Result<Vec<String>, InitializeError> {
		let parser_err = |e: nom::Err<nom::error::Error<_>>| InitializeError::Parser(e.to_string());

		let (_, lines) = separated_list0(line_ending, not_line_ending)
			.all_consuming()
			.parse(i)
			.map_err(parser_err)?;

		Ok(lines
			.into_iter()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.map(ToOwned::to_owned)
			.collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_unix_and_windows_lines() {
		let dict = Dictionary::from_slice("at\r\nca\ncat\n\n  ta \n").unwrap();
		assert_eq!(dict.words().collect::<Vec<_>>(), ["at", "ca", "cat", "ta"]);
	}

	#[test]
	fn parses_without_trailing_newline() {
		let dict = Dictionary::from_slice("apple\nbanana").unwrap();
		assert_eq!(dict.len(), 2);
	}

	#[test]
	fn empty_content_is_empty_dictionary() {
		let dict = Dictionary::from_slice("").unwrap();
		assert!(dict.is_empty());
	}

	#[test]
	fn stray_carriage_return_is_refused() {
		let err = Dictionary::from_slice("apple\rbanana\n").unwrap_err();
		assert!(matches!(err, InitializeError::Parser(_)));
	}

	#[test]
	fn missing_file_is_io_error() {
		let err = Dictionary::file(Path::new("/definitely/not/a/word/list.txt")).unwrap_err();
		assert!(matches!(err, InitializeError::Io(_)));
	}

	#[test]
	fn detects_unsorted_and_duplicates() {
		assert!(Dictionary::from_words(["a", "b", "c"]).is_sorted());
		assert!(!Dictionary::from_words(["b", "a"]).is_sorted());
		assert!(!Dictionary::from_words(["a", "a"]).is_sorted());
		assert!(Dictionary::default().is_sorted());
	}
}
