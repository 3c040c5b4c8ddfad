use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use bizmatch_algo::catalog::Catalog;
use bizmatch_algo::config::{LoggingSettings, Settings};
use bizmatch_algo::core::Recommender;
use bizmatch_algo::errors::{handle_json_payload_error, handle_query_payload_error};
use bizmatch_algo::routes::{self, AppState};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// RUST_LOG wins over the configured level when set
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn load_catalog(settings: &Settings) -> std::io::Result<Catalog> {
    match &settings.catalog.path {
        Some(path) => Catalog::from_file(path).map_err(|e| {
            error!("Failed to load catalog from {}: {}", path.display(), e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        }),
        None => Ok(Catalog::builtin()),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging);

    info!("Starting bizmatch recommendation service...");

    let catalog = Arc::new(load_catalog(&settings)?);

    info!("Catalog loaded with {} archetypes", catalog.len());

    let weights = settings.scoring_weights();
    let recommender = Recommender::new(catalog, weights);

    info!("Recommender initialized with weights: {:?}", weights);

    let app_state = AppState::new(recommender);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
