use super::report::ModelReport;
use super::word_table::{WordId, WordTable, Words};
use crate::parse::Tokens;

/// The word-adjacency model: a [`WordTable`] plus the ingestion cursor
/// that links consecutive tokens into successor edges.
///
/// # Responsibilities
/// - Consume a stream of `(word, ends_sentence)` tokens
/// - Track sentence boundaries: a token after an end opens a new sentence
/// - Record occurrences, boundary counts and transitions in the table
///
/// # Invariants
/// - `previous` is `None` exactly when the next token starts a sentence
/// - No edge crosses a sentence boundary
#[derive(Default)]
pub struct ChainModel {
	table: WordTable,
	/// The word the last token landed on, reset at each sentence end.
	previous: Option<WordId>,
}

impl ChainModel {
	/// Creates an empty model.
	pub fn new() -> Self {
		Self {
			table: WordTable::new(),
			previous: None,
		}
	}

	/// Builds a model from a `(word, ends_sentence)` token sequence.
	///
	/// An empty sequence yields a valid empty model, not an error.
	///
	/// # Errors
	/// Fails on an empty word string, leaving the already-ingested prefix
	/// in place.
	pub fn from_tokens<I, S>(tokens: I) -> Result<Self, String>
	where
		I: IntoIterator<Item = (S, bool)>,
		S: AsRef<str>,
	{
		let mut model = Self::new();
		model.add_tokens(tokens)?;
		Ok(model)
	}

	/// Ingests one normalized token.
	///
	/// The token opens a sentence when the previous one ended a sentence
	/// (or nothing came before); it closes one when `ends_sentence` is
	/// set. A token doing both is a one-word sentence: both boundary
	/// counters move and no edge is added. Otherwise the token becomes
	/// the successor of the previous word.
	///
	/// # Errors
	/// Rejects an empty word string.
	pub fn add_token(&mut self, word: &str, ends_sentence: bool) -> Result<(), String> {
		let id = self.table.intern(word)?;
		let is_start = self.previous.is_none();
		self.table.record_occurrence(id, is_start, ends_sentence);
		if let Some(previous) = self.previous {
			self.table.add_transition(previous, id);
		}
		self.previous = if ends_sentence { None } else { Some(id) };
		Ok(())
	}

	/// Ingests a token sequence, preserving the cursor across calls.
	pub fn add_tokens<I, S>(&mut self, tokens: I) -> Result<(), String>
	where
		I: IntoIterator<Item = (S, bool)>,
		S: AsRef<str>,
	{
		for (word, ends_sentence) in tokens {
			self.add_token(word.as_ref(), ends_sentence)?;
		}
		Ok(())
	}

	/// Ingests raw text through the token scanner.
	///
	/// Sentences may continue across calls: a text ending mid-sentence
	/// leaves the cursor set, and the next call's first token chains onto
	/// it.
	pub fn add_text(&mut self, text: &str) -> Result<(), String> {
		for token in Tokens::new(text) {
			self.add_token(&token.word, token.ending.terminates_sentence())?;
		}
		Ok(())
	}

	/// Drops every record and resets the cursor; the model is reusable.
	pub fn clear(&mut self) {
		self.table.clear();
		self.previous = None;
	}

	/// Read access to the underlying word store.
	pub fn table(&self) -> &WordTable {
		&self.table
	}

	/// Iterates every stored word in bucket-then-chain order.
	pub fn words(&self) -> Words<'_> {
		self.table.iter()
	}

	/// Number of distinct words stored.
	pub fn distinct_words(&self) -> usize {
		self.table.len()
	}

	/// Total recorded occurrences, repeats included.
	pub fn occurrence_count(&self) -> u32 {
		self.table.occurrence_count()
	}

	/// Number of observed sentence starts.
	pub fn sentence_count(&self) -> u32 {
		self.table.sentence_count()
	}

	/// Snapshot of every word with its counters and successors, in a
	/// deterministic order, for diagnostics and tests.
	pub fn report(&self) -> ModelReport {
		ModelReport::new(&self.table)
	}
}
