use std::env;
use std::path::PathBuf;

use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use markov_blend_core::BlendError;
use markov_blend_core::delivery::render;

mod config;

use config::ServerConfig;

/// Struct representing query parameters for the `/v1/blend` endpoint
#[derive(Deserialize)]
struct BlendParams {
	names: Option<String>, // comma-separated source names, config sources if absent
	seed: Option<u64>
}

impl BlendParams {
	/// Determines the sources to blend.
	///
	/// Names are plain file stems inside the data directory; anything that
	/// could walk out of it is rejected.
	fn sources(&self, defaults: &[String]) -> Result<Vec<String>, String> {
		let names: Vec<String> = match &self.names {
			Some(s) => s
				.split(',')
				.map(str::trim)
				.filter(|s| !s.is_empty())
				.map(str::to_owned)
				.collect(),
			None => defaults.to_vec(),
		};

		if names.is_empty() {
			return Err("Missing or empty source names".into());
		}
		if let Some(bad) = names.iter().find(|name| name.contains(['/', '\\']) || name.contains("..")) {
			return Err(format!("Invalid source name: {}", bad));
		}
		Ok(names)
	}
}

/// HTTP GET endpoint `/v1/blend`
///
/// Builds a fresh model from the requested sources and returns generated
/// text, truncated to the configured length.
#[get("/v1/blend")]
async fn get_blend(config: web::Data<ServerConfig>, query: web::Query<BlendParams>) -> impl Responder {
	let sources = match query.sources(&config.blend.sources) {
		Ok(s) => s,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	let mut rng = match query.seed.or(config.blend.rng_seed) {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};

	let blender = config.blend.file_blender();
	match blender.blend(sources.as_slice(), &mut rng) {
		Ok(tokens) => HttpResponse::Ok().body(render(&tokens, config.blend.max_output_chars)),
		Err(e @ BlendError::NoValidSources) => HttpResponse::NotFound().body(e.to_string()),
		Err(e @ BlendError::BadSeed(_)) => HttpResponse::UnprocessableEntity().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/sources`
///
/// Lists the source names available in the data directory.
#[get("/v1/sources")]
async fn get_sources(config: web::Data<ServerConfig>) -> impl Responder {
	match config.blend.file_resolver().available() {
		Ok(names) => HttpResponse::Ok().body(names.join("\n")),
		Err(e) => {
			error!("failed to list sources: {}", e);
			HttpResponse::InternalServerError().body("Failed to list sources")
		}
	}
}

fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_blend).service(get_sources);
}

/// HTTP front end owning its configuration.
///
/// Nothing is shared between requests except the read-only configuration;
/// every request builds and drops its own model.
struct BlendServer {
	config: ServerConfig
}

impl BlendServer {
	fn new(config: ServerConfig) -> Self {
		Self { config }
	}

	/// Binds and serves until a shutdown signal (SIGINT/SIGTERM) is received.
	///
	/// In-flight requests get `shutdown_timeout_secs` to finish.
	async fn run(self) -> std::io::Result<()> {
		let address = (self.config.bind_address.clone(), self.config.port);
		let shutdown_timeout = self.config.shutdown_timeout_secs;
		let shared_config = web::Data::new(self.config);

		info!("listening on {}:{}", address.0, address.1);
		HttpServer::new(move || {
			App::new()
				.wrap(middleware::Logger::default())
				.app_data(shared_config.clone())
				.configure(routes)
		})
			.shutdown_timeout(shutdown_timeout)
			.bind(address)?
			.run()
			.await?;

		info!("server stopped");
		Ok(())
	}
}

/// Main entry point for the server.
///
/// The configuration file is taken from `MARKOV_BLEND_CONFIG`, then from the
/// first argument; defaults apply when neither is given.
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let config_path = env::var_os("MARKOV_BLEND_CONFIG")
		.or_else(|| env::args_os().nth(1))
		.map(PathBuf::from);
	let config = ServerConfig::load(config_path.as_deref())?;

	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.blend.log_level.as_str())).init();

	BlendServer::new(config).run().await?;
	Ok(())
}
