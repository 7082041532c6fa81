use crate::{lookup::Oracle, Dictionary, WordValidity};
use std::collections::HashMap;

/// Prefix tree answering exact and prefix queries without relying on order
///
/// Unlike [`Dictionary::lookup`], every word sharing a prefix is reachable,
/// so [`WordValidity::Possible`] is never missed.
#[derive(Debug, Default)]
pub struct Trie {
	root: TrieNode,
	len: usize,
}

#[derive(Debug, Default)]
struct TrieNode {
	leaves: HashMap<char, Self>,
	terminal: bool,
}

impl Trie {
	/// Builds a tree out of words in any order, duplicates collapse
	pub fn from_words<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut trie = Self::default();
		words.into_iter().for_each(|word| trie.insert(word.as_ref()));
		trie
	}

	/// Number of distinct words
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Whether no word was ever inserted
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Adds `word`, inserting it again is a no-op
	pub fn insert(&mut self, word: &str) {
		let mut current = &mut self.root;
		for char in word.chars() {
			current = current.leaves.entry(char).or_default();
		}

		if !current.terminal {
			current.terminal = true;
			self.len += 1;
		}
	}

	/// Classify `candidate`, see [`WordValidity`]
	#[must_use]
	pub fn lookup(&self, candidate: &str) -> WordValidity {
		let mut current = &self.root;

		for char in candidate.chars() {
			current = match current.leaves.get(&char) {
				Some(node) => node,
				None => return WordValidity::Invalid,
			};
		}

		if current.terminal {
			WordValidity::Real
		} else if current.leaves.is_empty() {
			// only the root can be a non-terminal leaf
			WordValidity::Invalid
		} else {
			WordValidity::Possible
		}
	}
}

impl From<&Dictionary> for Trie {
	fn from(dictionary: &Dictionary) -> Self {
		Self::from_words(dictionary.words())
	}
}

impl Oracle for Trie {
	fn classify(&self, candidate: &str) -> WordValidity {
		self.lookup(candidate)
	}
}
