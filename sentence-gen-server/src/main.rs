use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, middleware, put, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use sentence_gen_core::io::{list_files, read_file};
use sentence_gen_core::model::chain_model::ChainModel;
use sentence_gen_core::model::generation_input::GenerationInput;
use sentence_gen_core::model::generator::SentenceGenerator;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
	end_bias: Option<f64>,
}

#[derive(Deserialize)]
struct CorpusQuery {
	names: Option<String>,
}

struct SharedData {
	model: ChainModel,
	corpora: Vec<String>,
}

impl GenerateParams {
	/// Builds the generation input from the query parameters.
	fn generation_input(&self) -> Result<GenerationInput, String> {
		let mut input = GenerationInput::new();
		if let Some(end_bias) = self.end_bias {
			input.set_end_bias_increment(end_bias)?;
		}
		Ok(input)
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates sentences from the loaded model based on query parameters.
/// Returns the sentences as the response body, one per line.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let count = query.count.unwrap_or(1).clamp(1, 100);

	let input = match query.generation_input() {
		Ok(input) => input,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let generator = SentenceGenerator::new(&shared_data.model);
	let mut sentences = Vec::with_capacity(count);
	for _ in 0..count {
		match generator.generate(&input) {
			Ok(sentence) => sentences.push(sentence),
			Err(e) => return HttpResponse::InternalServerError().body(e),
		}
	}

	HttpResponse::Ok().body(sentences.join("\n"))
}

#[get("/v1/corpora")]
async fn get_corpora() -> impl Responder {
	match list_files(&"./data".to_owned(), "txt") {
		Ok(files) => HttpResponse::Ok().body(files.join("\n").replace(".txt", "")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

#[get("/v1/loaded")]
async fn get_loaded(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().body(shared_data.corpora.join("\n"))
}

#[put("/v1/load")]
async fn put_corpora(data: web::Data<Mutex<SharedData>>, query: web::Query<CorpusQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	let corpus_names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();

	let mut model = ChainModel::new();
	for name in &corpus_names {
		let corpus_path = format!("./data/{}.txt", name);
		let text = match read_file(&corpus_path) {
			Ok(t) => t,
			Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to read corpus: {e}")),
		};
		match model.add_text(&text) {
			Ok(_) => log::info!("Learned corpus '{}'", name),
			Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to learn corpus: {e}")),
		}
	}

	shared_data.model = model;
	shared_data.corpora = corpus_names.iter().map(|s| s.to_string()).collect();

	HttpResponse::Ok().body("Corpora loaded successfully")
}

/// HTTP GET endpoint `/v1/dump`
///
/// Returns the full model report as JSON, in the store's deterministic
/// bucket-then-chain order.
#[get("/v1/dump")]
async fn get_dump(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().json(shared_data.model.report())
}

/// Main entry point for the server.
///
/// Starts with an empty model, wraps it in a `Mutex` for thread safety,
/// and starts an Actix-web HTTP server exposing the generation API.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Currently, the corpus directory is hardcoded and should be made configurable.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
	log::info!("Listening on 127.0.0.1:5000");

	let shared_data = SharedData {
		model: ChainModel::default(),
		corpora: Vec::new(),
	};
	let shared_model = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.app_data(shared_model.clone())
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.service(get_generated)
			.service(get_corpora)
			.service(put_corpora)
			.service(get_loaded)
			.service(get_dump)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
