use super::hash::hash16;

/// Number of bucket slots in the word index (the 16-bit hash space).
pub const BUCKET_COUNT: usize = 1 << 16;

/// Index of a word record inside its [`WordTable`] arena.
pub type WordId = usize;

/// A directed, frequency-weighted link from an owning word to the word
/// observed immediately after it.
///
/// The target is an arena index; the table owns every record, an edge
/// never does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	/// Arena index of the successor word.
	pub target: WordId,
	/// How many times the successor was observed right after the owner.
	pub freq: u32,
}

/// One record per distinct word string.
///
/// Counters accumulate while a corpus is ingested and are read-only
/// during generation.
///
/// # Invariants
/// - `frequency >= start_count` and `frequency >= end_count`
/// - `edge_total` equals the sum of `freq` over `edges`
/// - at most one edge per successor word; repeats bump `freq`
#[derive(Clone, Debug)]
pub struct Word {
	/// 16-bit hash of the word. Shared by every word in the same bucket.
	key: u16,
	/// The normalized string. Immutable after creation.
	word: String,
	/// Total occurrences across the corpus.
	frequency: u32,
	/// How many times the word opened a sentence.
	start_count: u32,
	/// How many times the word closed a sentence.
	end_count: u32,
	/// Sum of `freq` over all outgoing edges.
	edge_total: u32,
	/// Outgoing successor edges, in first-observation order.
	edges: Vec<Edge>,
	/// Next record in this bucket's collision chain.
	next: Option<WordId>,
}

impl Word {
	fn new(key: u16, word: &str) -> Self {
		Self {
			key,
			word: word.to_owned(),
			frequency: 0,
			start_count: 0,
			end_count: 0,
			edge_total: 0,
			edges: Vec::new(),
			next: None,
		}
	}

	/// The normalized word string.
	pub fn text(&self) -> &str {
		&self.word
	}

	/// The word's 16-bit bucket key.
	pub fn key(&self) -> u16 {
		self.key
	}

	/// Total occurrences across the corpus.
	pub fn frequency(&self) -> u32 {
		self.frequency
	}

	/// How many times the word opened a sentence.
	pub fn start_count(&self) -> u32 {
		self.start_count
	}

	/// How many times the word closed a sentence.
	pub fn end_count(&self) -> u32 {
		self.end_count
	}

	/// Sum of `freq` over all outgoing edges, the sampling denominator.
	pub fn edge_total(&self) -> u32 {
		self.edge_total
	}

	/// Number of distinct successor words.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Outgoing successor edges, in first-observation order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}
}

/// The vocabulary store: owns every [`Word`] record, indexed by a fixed
/// array of 65,536 buckets with index-based collision chains.
///
/// # Responsibilities
/// - Deduplicate words: one record per distinct string, ever
/// - Accumulate per-word occurrence and sentence-boundary counts
/// - Accumulate successor-frequency edges between records
/// - Enumerate every record in bucket-then-chain order
///
/// # Invariants
/// - Every record is reachable through exactly one bucket chain
/// - Chains resolve collisions by exact string comparison, appending new
///   records at the chain tail (a linear scan, not O(1); chains grow with
///   vocabulary size against the fixed bucket count)
pub struct WordTable {
	/// Head record of each bucket's chain.
	buckets: Vec<Option<WordId>>,
	/// All word records, in insertion order.
	words: Vec<Word>,
	/// Running count of recorded occurrences, repeats included.
	occurrences: u32,
	/// Running count of observed sentence starts.
	sentences: u32,
}

impl WordTable {
	/// Creates an empty table with all 65,536 buckets unoccupied.
	pub fn new() -> Self {
		Self {
			buckets: vec![None; BUCKET_COUNT],
			words: Vec::new(),
			occurrences: 0,
			sentences: 0,
		}
	}

	/// Returns the record for `word`, creating it if absent.
	///
	/// Hashes the word, walks the bucket's collision chain comparing
	/// strings, and appends a fresh record (all counters zero) at the
	/// chain tail when no match exists. Counters only move through
	/// [`record_occurrence`](Self::record_occurrence), so interning the
	/// same word any number of times yields exactly one record.
	///
	/// # Errors
	/// Rejects the empty string; the store never holds an empty word.
	pub fn intern(&mut self, word: &str) -> Result<WordId, String> {
		if word.is_empty() {
			return Err("Cannot insert an empty word".to_owned());
		}

		let key = hash16(word);
		let mut slot = self.buckets[key as usize];
		let mut tail = None;
		while let Some(id) = slot {
			if self.words[id].word == word {
				return Ok(id);
			}
			tail = Some(id);
			slot = self.words[id].next;
		}

		let id = self.words.len();
		self.words.push(Word::new(key, word));
		match tail {
			Some(prev) => self.words[prev].next = Some(id),
			None => self.buckets[key as usize] = Some(id),
		}
		Ok(id)
	}

	/// Looks a word up without inserting. Returns `None` if absent.
	pub fn find(&self, word: &str) -> Option<WordId> {
		if word.is_empty() {
			return None;
		}
		let mut slot = self.buckets[hash16(word) as usize];
		while let Some(id) = slot {
			if self.words[id].word == word {
				return Some(id);
			}
			slot = self.words[id].next;
		}
		None
	}

	/// Records one occurrence of an interned word.
	///
	/// Bumps the word's frequency, its boundary counters when the
	/// occurrence opened or closed a sentence, the table-wide occurrence
	/// count, and the table-wide sentence count on a sentence start.
	pub fn record_occurrence(&mut self, id: WordId, is_sentence_start: bool, is_sentence_end: bool) {
		self.occurrences += 1;
		if is_sentence_start {
			self.sentences += 1;
		}

		let word = &mut self.words[id];
		word.frequency += 1;
		if is_sentence_start {
			word.start_count += 1;
		}
		if is_sentence_end {
			word.end_count += 1;
		}
	}

	/// Records that `target` was observed immediately after `owner`.
	///
	/// A repeat observation bumps the existing edge; a new successor
	/// appends an edge with frequency 1. `edge_total` moves either way.
	pub fn add_transition(&mut self, owner: WordId, target: WordId) {
		let word = &mut self.words[owner];
		word.edge_total += 1;
		for edge in &mut word.edges {
			if edge.target == target {
				edge.freq += 1;
				return;
			}
		}
		word.edges.push(Edge { target, freq: 1 });
	}

	/// Releases every record and resets all counters.
	///
	/// The table stays usable; a later rebuild starts from scratch.
	pub fn clear(&mut self) {
		self.words.clear();
		self.buckets.fill(None);
		self.occurrences = 0;
		self.sentences = 0;
	}

	/// The record behind a [`WordId`].
	///
	/// # Panics
	/// Panics if `id` did not come from this table (or predates a
	/// [`clear`](Self::clear)).
	pub fn word(&self, id: WordId) -> &Word {
		&self.words[id]
	}

	/// Number of distinct words stored.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// True when no words are stored.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Running count of recorded occurrences, repeats included.
	pub fn occurrence_count(&self) -> u32 {
		self.occurrences
	}

	/// Running count of observed sentence starts.
	pub fn sentence_count(&self) -> u32 {
		self.sentences
	}

	/// Iterates every stored word exactly once, in bucket order and then
	/// chain order within each bucket.
	///
	/// Each iterator carries its own cursor, so any number of traversals
	/// may coexist over one table.
	pub fn iter(&self) -> Words<'_> {
		Words {
			table: self,
			bucket: 0,
			cursor: None,
		}
	}
}

impl Default for WordTable {
	fn default() -> Self {
		Self::new()
	}
}

/// Iterator over every word record of a [`WordTable`], in bucket-then-chain
/// order. Yields each record exactly once with its [`WordId`].
pub struct Words<'a> {
	table: &'a WordTable,
	/// Next bucket to probe once the current chain is exhausted.
	bucket: usize,
	/// Next record within the current chain.
	cursor: Option<WordId>,
}

impl<'a> Iterator for Words<'a> {
	type Item = (WordId, &'a Word);

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			if let Some(id) = self.cursor {
				let word = &self.table.words[id];
				self.cursor = word.next;
				return Some((id, word));
			}
			if self.bucket >= BUCKET_COUNT {
				return None;
			}
			self.cursor = self.table.buckets[self.bucket];
			self.bucket += 1;
		}
	}
}
