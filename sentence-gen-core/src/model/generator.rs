use std::collections::HashSet;

use rand::Rng;

use super::chain_model::ChainModel;
use super::generation_input::GenerationInput;
use super::word_table::{WordId, WordTable};

/// Weighted random-walk sentence generator over a built [`ChainModel`].
///
/// # Responsibilities
/// - Pick a sentence-opening word from the start-count distribution
/// - Walk successor edges through frequency-weighted cumulative draws
/// - Test for sentence termination before every step, with a growing bias
/// - Suppress repetition: a word chosen once is excluded for the rest of
///   the sentence
///
/// # Behavior
/// - The model is never mutated; every run keeps its own overlay of
///   already-chosen words, so independent runs over one model cannot
///   interfere.
/// - A walk always terminates: each step consumes one word from a finite
///   vocabulary, and a dead end (every successor already chosen, or none
///   at all) is a normal sentence end, not an error.
pub struct SentenceGenerator<'a> {
	model: &'a ChainModel,
}

/// One weighted entry of a cumulative-distribution draw.
struct Candidate {
	id: WordId,
	weight: u32,
}

impl<'a> SentenceGenerator<'a> {
	/// Creates a generator borrowing the model.
	pub fn new(model: &'a ChainModel) -> Self {
		Self { model }
	}

	/// Generates one sentence with the thread-local rng.
	///
	/// # Errors
	/// Fails when the model holds no sentence-starting words.
	pub fn generate(&self, input: &GenerationInput) -> Result<String, String> {
		self.generate_with(input, &mut rand::rng())
	}

	/// Generates one sentence, drawing randomness from `rng`.
	///
	/// The first word is chosen from every word that ever opened a
	/// sentence, weighted by how often it did. Each following word is
	/// chosen from the current word's successors, weighted by transition
	/// frequency, after dropping successors already used in this
	/// sentence. Before each step the current word may close the
	/// sentence: its observed end ratio plus the accumulated bias is
	/// tested against a uniform draw.
	///
	/// Returns the words space-joined, first word capitalized, with a
	/// closing period.
	///
	/// # Errors
	/// Fails when the model holds no sentence-starting words; an empty
	/// model is the usual cause.
	pub fn generate_with<R: Rng>(&self, input: &GenerationInput, rng: &mut R) -> Result<String, String> {
		let table = self.model.table();
		let mut chosen: HashSet<WordId> = HashSet::new();

		let first = pick_start(table, rng)?;
		chosen.insert(first);

		let mut words = vec![capitalize(table.word(first).text())];
		let mut current = first;
		let mut bias = 0.0f64;

		loop {
			let word = table.word(current);

			// Termination test on the current word, before any step.
			if word.end_count() > 0 {
				let end_prob = f64::from(word.end_count()) / f64::from(word.frequency());
				if end_prob + bias > rng.random::<f64>() {
					break;
				}
			}
			bias += input.end_bias_increment();

			let candidates: Vec<Candidate> = word
				.edges()
				.iter()
				.filter(|edge| !chosen.contains(&edge.target))
				.map(|edge| Candidate {
					id: edge.target,
					weight: edge.freq,
				})
				.collect();

			let next = match pick_next(table, candidates, rng) {
				Some(id) => id,
				// Dead end: a controlled sentence end.
				None => break,
			};

			chosen.insert(next);
			words.push(table.word(next).text().to_owned());
			current = next;
		}

		Ok(format!("{}.", words.join(" ")))
	}
}

/// Draws the sentence-opening word from the start-count distribution.
///
/// Candidates are every word with a positive start count; the density
/// denominator is the table's sentence count, which those counts sum to.
fn pick_start<R: Rng>(table: &WordTable, rng: &mut R) -> Result<WordId, String> {
	let mut candidates: Vec<Candidate> = table
		.iter()
		.filter(|(_, word)| word.start_count() > 0)
		.map(|(id, word)| Candidate {
			id,
			weight: word.start_count(),
		})
		.collect();
	if candidates.is_empty() {
		return Err("No sentence-starting words in the model".to_owned());
	}

	sort_candidates(&mut candidates, table);
	let index = select(&candidates, table.sentence_count(), rng.random::<f64>());
	Ok(candidates[index].id)
}

/// Draws the next word from the surviving successors, re-normalized over
/// their frequency sum. `None` means the walk hit a dead end.
fn pick_next<R: Rng>(table: &WordTable, mut candidates: Vec<Candidate>, rng: &mut R) -> Option<WordId> {
	if candidates.is_empty() {
		return None;
	}

	sort_candidates(&mut candidates, table);
	let total = candidates.iter().map(|candidate| candidate.weight).sum::<u32>();
	let index = select(&candidates, total, rng.random::<f64>());
	Some(candidates[index].id)
}

/// Orders candidates for a cumulative draw: descending weight, ties by
/// word string so selection is reproducible under a seeded rng.
fn sort_candidates(candidates: &mut [Candidate], table: &WordTable) {
	candidates.sort_by(|a, b| {
		b.weight
			.cmp(&a.weight)
			.then_with(|| table.word(a.id).text().cmp(table.word(b.id).text()))
	});
}

/// Cumulative-distribution selection over a non-empty candidate list.
///
/// Picks the first candidate whose cumulative density strictly exceeds
/// `u`. The strict comparison makes the rule total over `u` in [0, 1);
/// if rounding (or a denominator larger than the weight sum) leaves no
/// density above the draw, the last candidate is selected.
fn select(candidates: &[Candidate], total: u32, u: f64) -> usize {
	let total = f64::from(total);
	let mut cumulative = 0.0f64;
	for (index, candidate) in candidates.iter().enumerate() {
		cumulative += f64::from(candidate.weight);
		if cumulative / total > u {
			return index;
		}
	}
	candidates.len() - 1
}

/// Uppercases the first character of the sentence-opening word.
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
