use std::fmt;

use serde::Serialize;

use super::word_table::WordTable;

/// One recorded transition of a [`WordReport`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeReport {
	/// Text of the successor word.
	pub word: String,
	/// How many times the transition was observed.
	pub freq: u32,
}

/// Snapshot of one vocabulary record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WordReport {
	/// Bucket index the word hashes to.
	pub bucket: u16,
	/// The word itself.
	pub word: String,
	/// Total occurrences across the corpus.
	pub frequency: u32,
	/// Occurrences as the first word of a sentence.
	pub start_count: u32,
	/// Occurrences as the last word of a sentence.
	pub end_count: u32,
	/// Sum of all outgoing transition frequencies.
	pub edge_total: u32,
	/// Outgoing transitions, in recording order.
	pub edges: Vec<EdgeReport>,
}

/// Full structured dump of a model, in bucket-then-chain order.
///
/// The order is a function of the corpus alone, so two models built from
/// the same token stream produce equal reports.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelReport {
	/// Number of distinct words.
	pub distinct_words: usize,
	/// Total word occurrences consumed.
	pub occurrence_count: u32,
	/// Total sentences consumed.
	pub sentence_count: u32,
	/// One entry per distinct word.
	pub words: Vec<WordReport>,
}

impl ModelReport {
	pub(crate) fn new(table: &WordTable) -> Self {
		let words = table
			.iter()
			.map(|(_, word)| WordReport {
				bucket: word.key(),
				word: word.text().to_owned(),
				frequency: word.frequency(),
				start_count: word.start_count(),
				end_count: word.end_count(),
				edge_total: word.edge_total(),
				edges: word
					.edges()
					.iter()
					.map(|edge| EdgeReport {
						word: table.word(edge.target).text().to_owned(),
						freq: edge.freq,
					})
					.collect(),
			})
			.collect();

		Self {
			distinct_words: table.len(),
			occurrence_count: table.occurrence_count(),
			sentence_count: table.sentence_count(),
			words,
		}
	}
}

impl fmt::Display for ModelReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(
			f,
			"{} words, {} occurrences, {} sentences",
			self.distinct_words, self.occurrence_count, self.sentence_count
		)?;
		for word in &self.words {
			writeln!(
				f,
				"[{:#06x}] '{}': freq {}, starts {}, ends {}, successors {} ({} total)",
				word.bucket,
				word.word,
				word.frequency,
				word.start_count,
				word.end_count,
				word.edges.len(),
				word.edge_total
			)?;
			for edge in &word.edges {
				writeln!(f, "\t-> '{}' x{}", edge.word, edge.freq)?;
			}
		}
		Ok(())
	}
}
