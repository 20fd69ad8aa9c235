use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use alignpt_match::config::Settings;
use alignpt_match::core::Matcher;
use alignpt_match::routes::{self, matches::AppState};
use alignpt_match::services::{
    DisabledSubmissionStore, PostgresSubmissionStore, ProviderCatalog, SubmissionStore,
};
use std::sync::Arc;
use tracing::{info, warn, error};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Unknown enum values, missing fields and malformed bodies all land here
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

pub fn handle_path_error(err: error::PathError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_path".to_string(),
        message: format!("Invalid path: {}", err),
        status_code: 400,
    }
    .into()
}

fn init_tracing(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

async fn build_store(settings: &Settings) -> std::io::Result<Arc<dyn SubmissionStore>> {
    let db = &settings.database;

    let Some(url) = db.url.as_deref() else {
        warn!("No database configured, intake submissions will not be stored");
        return Ok(Arc::new(DisabledSubmissionStore));
    };

    let store = PostgresSubmissionStore::from_settings(
        url,
        db.max_connections,
        db.min_connections,
        db.acquire_timeout_secs,
        db.idle_timeout_secs,
    )
    .await
    .map_err(|e| {
        error!("Failed to connect to PostgreSQL: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    info!("PostgreSQL submission store initialized");
    Ok(Arc::new(store))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_tracing(&settings.logging.level, &settings.logging.format);

    info!("Starting AlignPT matching service...");

    let catalog = ProviderCatalog::load(&settings.catalog.path).map_err(|e| {
        error!("Failed to load provider catalog from {}: {}", settings.catalog.path.display(), e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    if catalog.is_empty() {
        warn!("Provider catalog is empty, every search will return no matches");
    }

    let store = build_store(&settings).await?;

    // Initialize matcher with configured weights
    let weights = settings.weights();
    if (weights.total() - 100.0).abs() > f64::EPSILON {
        warn!("Configured weights sum to {}, not 100", weights.total());
    }

    let matcher = Matcher::new(weights).with_max_results(settings.matching.max_results);

    info!("Matcher initialized with weights: {:?}", weights);

    // Build application state
    let app_state = AppState {
        catalog: Arc::new(catalog),
        store,
        matcher,
    };

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
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
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
