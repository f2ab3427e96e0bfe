use std::env;

use sentence_gen_core::io::{list_files, normalize_folder, read_file};
use sentence_gen_core::model::chain_model::ChainModel;
use sentence_gen_core::model::generation_input::GenerationInput;
use sentence_gen_core::model::generator::SentenceGenerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Learn every corpus from the given directory (.txt files)
    // Defaults to "./data" when no argument is passed
    let folder = normalize_folder(&env::args().nth(1).unwrap_or_else(|| "./data".to_owned()));

    let mut model = ChainModel::new();
    for file in list_files(&folder, "txt")? {
        let text = read_file(folder.join(&file))?;
        model.add_text(&text)?;
        println!("Learned corpus '{}'", file);
    }

    println!(
        "Model holds {} words over {} occurrences in {} sentences",
        model.distinct_words(),
        model.occurrence_count(),
        model.sentence_count()
    );

    // Show the first records of the model dump (bucket-then-chain order)
    for line in model.report().to_string().lines().take(8) {
        println!("{}", line);
    }

    // Create a generation input with the default termination bias
    let mut input = GenerationInput::new();

    // The bias added to the end probability grows by this much per word;
    // larger values cut sentences shorter (must be between 0.0 and 1.0)
    input.set_end_bias_increment(0.05)?;

    // Test invalid increment values
    match input.set_end_bias_increment(2.0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Increment 2.0 is invalid, must be between 0.0 and 1.0"),
    }
    match input.set_end_bias_increment(-1.0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Increment -1.0 is invalid, must be between 0.0 and 1.0"),
    }

    // Generate 10 sentences using the input settings
    let generator = SentenceGenerator::new(&model);
    for i in 0..10 {
        println!("Generated sentence {}: {}", i + 1, generator.generate(&input)?);
    }

    Ok(())
}
