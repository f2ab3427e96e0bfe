/// Default per-step growth of the sentence-end bias.
pub const DEFAULT_END_BIAS_INCREMENT: f64 = 0.01;

/// Input parameters for sentence generation.
///
/// The end bias starts at zero for every generated sentence and grows by
/// `end_bias_increment` after each termination test, so long sentences
/// become steadily more likely to stop. An increment of zero disables the
/// bias and leaves termination to the per-word end probability alone.
///
/// # Invariants
/// - `end_bias_increment` stays within `[0.0, 1.0]`
pub struct GenerationInput {
	/// Added to the termination probability once per walked word.
	end_bias_increment: f64,
}

impl GenerationInput {
	/// Creates an input with the default end-bias increment.
	pub fn new() -> Self {
		Self {
			end_bias_increment: DEFAULT_END_BIAS_INCREMENT,
		}
	}

	/// Returns the current end-bias increment.
	pub fn end_bias_increment(&self) -> f64 {
		self.end_bias_increment
	}

	/// Sets the end-bias increment (0.0..=1.0).
	///
	/// # Errors
	/// Returns an error if the value is outside the valid range.
	pub fn set_end_bias_increment(&mut self, increment: f64) -> Result<(), String> {
		if !(0.0..=1.0).contains(&increment) {
			return Err("End bias increment must be between 0.0 and 1.0".to_owned());
		}
		self.end_bias_increment = increment;
		Ok(())
	}
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self::new()
	}
}
