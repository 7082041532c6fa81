//! Logic of the [`Dictionary`] to classify a candidate string

use crate::Dictionary;
use std::fmt;

/// How a candidate string relates to the words of a dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordValidity {
	/// Neither a word nor the beginning of one, searching deeper is pointless
	Invalid,
	/// Not a word itself but the strict beginning of at least one
	Possible,
	/// Exactly a word
	Real,
}

impl WordValidity {
	/// Whether a longer string starting with this candidate could still be a word
	#[must_use]
	pub const fn can_extend(self) -> bool {
		!matches!(self, Self::Invalid)
	}
}

impl fmt::Display for WordValidity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Invalid => "invalid",
			Self::Possible => "possible",
			Self::Real => "real",
		})
	}
}

/// Anything able to classify candidate strings during a search
///
/// Implementors are shared read-only between search workers.
pub trait Oracle: Sync {
	/// Classify `candidate`, see [`WordValidity`]
	fn classify(&self, candidate: &str) -> WordValidity;
}

/// Relation of a candidate to a dictionary word, from the candidate's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
	/// First differing char is smaller in the candidate (`car` to `cat`)
	Less,
	/// First differing char is greater in the candidate (`hat` to `bat`)
	Greater,
	/// Identical strings
	Equal,
	/// Candidate is a strict prefix of the word (`jump` to `jumps`)
	Shorter,
	/// Word is a strict prefix of the candidate (`barmaid` to `bar`)
	Longer,
}

impl Comparison {
	fn of(candidate: &str, word: &str) -> Self {
		let mut candidate = candidate.chars();
		let mut word = word.chars();

		loop {
			match (candidate.next(), word.next()) {
				(Some(c), Some(w)) if c < w => return Self::Less,
				(Some(c), Some(w)) if c > w => return Self::Greater,
				(Some(_), Some(_)) => continue,
				(None, Some(_)) => return Self::Shorter,
				(Some(_), None) => return Self::Longer,
				(None, None) => return Self::Equal,
			}
		}
	}
}

/// Methods for querying the dictionary
impl Dictionary {
	/// Classify `candidate` in a single narrowing pass over the sorted words.
	///
	/// The probe starts at the middle of the list and moves by a step that is
	/// halved (rounding up) after every comparison, until a step of one has
	/// been taken. A candidate is [`WordValidity::Real`] as soon as a probe
	/// equals it and [`WordValidity::Possible`] if any probed word starts with
	/// it.
	///
	/// Only the words on the probe trajectory are ever looked at. For lists of
	/// `2^k` or `2^k - 1` words that trajectory never reaches the first word,
	/// which then classifies as [`WordValidity::Invalid`]. Use [`crate::Trie`]
	/// for exhaustive answers.
	#[must_use]
	pub fn lookup(&self, candidate: &str) -> WordValidity {
		let len = self.words.len();
		if len == 0 {
			return WordValidity::Invalid;
		}

		let mut step = len.div_ceil(2);
		let mut probe = step.min(len - 1);
		let mut prefix_seen = false;

		loop {
			let comparison = Comparison::of(candidate, &self.words[probe]);
			log::trace!("probed `{}` for `{candidate}`: {comparison:?}", self.words[probe]);

			match comparison {
				Comparison::Equal => return WordValidity::Real,
				Comparison::Shorter => prefix_seen = true,
				Comparison::Less | Comparison::Greater | Comparison::Longer => {}
			}

			if step == 1 {
				break;
			}
			step = step.div_ceil(2);

			probe = match comparison {
				Comparison::Less | Comparison::Shorter => probe.saturating_sub(step),
				Comparison::Greater | Comparison::Longer | Comparison::Equal => {
					(probe + step).min(len - 1)
				}
			};
		}

		if prefix_seen {
			WordValidity::Possible
		} else {
			WordValidity::Invalid
		}
	}
}

impl Oracle for Dictionary {
	fn classify(&self, candidate: &str) -> WordValidity {
		self.lookup(candidate)
	}
}
