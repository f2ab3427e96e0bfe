use rand::rngs::StdRng;
use rand::SeedableRng;

use sentence_gen_core::model::chain_model::ChainModel;
use sentence_gen_core::model::generation_input::GenerationInput;
use sentence_gen_core::model::generator::SentenceGenerator;

const CORPUS: &str = "The quick brown fox jumps over the lazy dog. \
A quick fix beats a slow rewrite. The lazy dog sleeps all day. \
Mr. Smith walks the dog every morning. The fox ran away!";

#[test]
fn learning_a_corpus_fills_the_model() {
	let mut model = ChainModel::new();
	model.add_text(CORPUS).unwrap();

	assert_eq!(model.sentence_count(), 5);
	assert_eq!(model.occurrence_count(), 33);

	let report = model.report();
	assert_eq!(report.sentence_count, 5);
	assert_eq!(report.occurrence_count, 33);
	assert_eq!(report.distinct_words, model.distinct_words());

	// Case is preserved, so the capitalized and lowercase articles are
	// separate records.
	let capitalized = report.words.iter().find(|word| word.word == "The").unwrap();
	assert_eq!(capitalized.frequency, 3);
	assert_eq!(capitalized.start_count, 3);

	let lowercase = report.words.iter().find(|word| word.word == "the").unwrap();
	assert_eq!(lowercase.frequency, 2);
	assert_eq!(lowercase.start_count, 0);

	// An honorific's period does not close the sentence, so "Mr" keeps
	// its edge to "Smith".
	let honorific = report.words.iter().find(|word| word.word == "Mr").unwrap();
	assert_eq!(honorific.end_count, 0);
	assert_eq!(honorific.edges.len(), 1);
	assert_eq!(honorific.edges[0].word, "Smith");
}

#[test]
fn token_streams_and_raw_text_agree() {
	let mut by_text = ChainModel::new();
	by_text.add_text("The cat sat. The dog ran.").unwrap();

	let tokens = [
		("The", false),
		("cat", false),
		("sat", true),
		("The", false),
		("dog", false),
		("ran", true),
	];
	let by_tokens = ChainModel::from_tokens(tokens).unwrap();

	assert_eq!(by_tokens.report(), by_text.report());
}

#[test]
fn generated_sentences_are_well_formed() {
	let mut model = ChainModel::new();
	model.add_text(CORPUS).unwrap();

	let input = GenerationInput::new();
	let generator = SentenceGenerator::new(&model);
	let mut rng = StdRng::seed_from_u64(42);

	for _ in 0..25 {
		let sentence = generator.generate_with(&input, &mut rng).unwrap();
		assert!(sentence.ends_with('.'));

		let first = sentence.chars().next().unwrap();
		assert!(first.is_uppercase() || first.is_numeric());

		// Every emitted word must come from the vocabulary, modulo the
		// capitalization of the opening word.
		let body = sentence.trim_end_matches('.');
		for (position, word) in body.split(' ').enumerate() {
			if position == 0 {
				let mut chars = word.chars();
				let head = chars.next().unwrap();
				let lowered: String = head.to_lowercase().chain(chars).collect();
				assert!(
					model.table().find(word).is_some() || model.table().find(&lowered).is_some(),
					"unknown opening word {word:?} in {sentence:?}"
				);
			} else {
				assert!(
					model.table().find(word).is_some(),
					"unknown word {word:?} in {sentence:?}"
				);
			}
		}
	}
}

#[test]
fn rebuilding_reproduces_the_report() {
	let mut model = ChainModel::new();
	model.add_text(CORPUS).unwrap();
	let before = model.report();

	model.clear();
	assert_eq!(model.distinct_words(), 0);
	assert!(SentenceGenerator::new(&model)
		.generate_with(&GenerationInput::new(), &mut StdRng::seed_from_u64(1))
		.is_err());

	model.add_text(CORPUS).unwrap();
	assert_eq!(model.report(), before);
}

#[test]
fn report_serializes_to_json() {
	let mut model = ChainModel::new();
	model.add_text("The cat sat.").unwrap();

	let json = serde_json::to_value(model.report()).unwrap();
	assert_eq!(json["distinct_words"], 3);
	assert_eq!(json["sentence_count"], 1);
	assert_eq!(json["words"].as_array().unwrap().len(), 3);
}
