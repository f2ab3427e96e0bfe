//! Whitespace tokenizer and punctuation classifier for raw corpus text.

const MR: &str = "Mr.";
const MRS: &str = "Mrs.";
const MS: &str = "Ms.";

/// Punctuation class of a raw token, read from its final character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ending {
	/// No recognized punctuation.
	Nothing,
	/// Trailing comma.
	Comma,
	/// Trailing period of a known honorific, not a sentence end.
	Abbreviation,
	/// Trailing period.
	Period,
	/// Trailing question mark.
	Question,
	/// Trailing exclamation mark.
	Exclamation,
}

impl Ending {
	/// True when the classification closes the current sentence.
	pub fn terminates_sentence(self) -> bool {
		matches!(self, Self::Period | Self::Question | Self::Exclamation)
	}
}

/// A normalized word together with the punctuation class of its source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
	/// The word with punctuation stripped.
	pub word: String,
	/// Classification of the raw token's final character.
	pub ending: Ending,
}

/// Normalizes one whitespace-delimited token.
///
/// # Behavior
/// - The ending is classified from the final character alone; a closing
///   quote or bracket hides the punctuation inside it.
/// - The exact honorifics "Mr.", "Mrs." and "Ms." classify as
///   [`Ending::Abbreviation`] so their period does not close a sentence.
///   The match is case sensitive.
/// - The word keeps ASCII letters, digits, apostrophes and hyphens;
///   everything else is dropped. The result may be empty.
pub fn normalize(raw: &str) -> Token {
	let ending = if raw == MR || raw == MRS || raw == MS {
		Ending::Abbreviation
	} else {
		match raw.chars().last() {
			Some('.') => Ending::Period,
			Some('?') => Ending::Question,
			Some('!') => Ending::Exclamation,
			Some(',') => Ending::Comma,
			_ => Ending::Nothing,
		}
	};

	let word: String = raw
		.chars()
		.filter(|c| c.is_ascii_alphanumeric() || *c == '\'' || *c == '-')
		.collect();

	Token { word, ending }
}

/// Iterator over the normalized tokens of a text.
///
/// Tokens whose normalization is empty, such as a lone ellipsis or dash,
/// are skipped rather than yielded.
pub struct Tokens<'a> {
	raw: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
	/// Creates an iterator over the tokens of `text`.
	pub fn new(text: &'a str) -> Self {
		Self {
			raw: text.split_whitespace(),
		}
	}
}

impl<'a> Iterator for Tokens<'a> {
	type Item = Token;

	fn next(&mut self) -> Option<Token> {
		for raw in self.raw.by_ref() {
			let token = normalize(raw);
			if !token.word.is_empty() {
				return Some(token);
			}
		}
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ending_classification() {
		assert_eq!(normalize("cat.").ending, Ending::Period);
		assert_eq!(normalize("cat?").ending, Ending::Question);
		assert_eq!(normalize("cat!").ending, Ending::Exclamation);
		assert_eq!(normalize("cat,").ending, Ending::Comma);
		assert_eq!(normalize("cat").ending, Ending::Nothing);
	}

	#[test]
	fn terminators() {
		assert!(Ending::Period.terminates_sentence());
		assert!(Ending::Question.terminates_sentence());
		assert!(Ending::Exclamation.terminates_sentence());
		assert!(!Ending::Comma.terminates_sentence());
		assert!(!Ending::Abbreviation.terminates_sentence());
		assert!(!Ending::Nothing.terminates_sentence());
	}

	#[test]
	fn honorifics_do_not_terminate() {
		let token = normalize("Mr.");
		assert_eq!(token.word, "Mr");
		assert_eq!(token.ending, Ending::Abbreviation);

		assert_eq!(normalize("Mrs.").ending, Ending::Abbreviation);
		assert_eq!(normalize("Ms.").ending, Ending::Abbreviation);

		// The honorific match is exact, so a lowercase "mr." still
		// reads as a period-ended word.
		assert_eq!(normalize("mr.").ending, Ending::Period);
	}

	#[test]
	fn interior_punctuation_survives() {
		assert_eq!(normalize("didn't").word, "didn't");
		assert_eq!(normalize("well-known").word, "well-known");
	}

	#[test]
	fn wrapping_punctuation_is_stripped() {
		let token = normalize("(hello)");
		assert_eq!(token.word, "hello");
		assert_eq!(token.ending, Ending::Nothing);

		// Classification reads the final character only, so a closing
		// quote hides the exclamation mark inside it.
		let token = normalize("\"Stop!\"");
		assert_eq!(token.word, "Stop");
		assert_eq!(token.ending, Ending::Nothing);
	}

	#[test]
	fn digits_are_kept() {
		let token = normalize("42nd.");
		assert_eq!(token.word, "42nd");
		assert_eq!(token.ending, Ending::Period);
	}

	#[test]
	fn pure_punctuation_tokens_are_skipped() {
		let words: Vec<String> = Tokens::new("wait ... \u{2014} go.")
			.map(|token| token.word)
			.collect();
		assert_eq!(words, vec!["wait".to_owned(), "go".to_owned()]);
	}

	#[test]
	fn empty_text_yields_no_tokens() {
		assert_eq!(Tokens::new("").count(), 0);
		assert_eq!(Tokens::new("   \n\t  ").count(), 0);
	}

	#[test]
	fn scan_flags_sentence_ends() {
		let scanned: Vec<(String, bool)> = Tokens::new("The cat sat. The dog ran.")
			.map(|token| (token.word, token.ending.terminates_sentence()))
			.collect();
		assert_eq!(
			scanned,
			vec![
				("The".to_owned(), false),
				("cat".to_owned(), false),
				("sat".to_owned(), true),
				("The".to_owned(), false),
				("dog".to_owned(), false),
				("ran".to_owned(), true),
			]
		);
	}
}
