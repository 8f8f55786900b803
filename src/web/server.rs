use axum::{
    extract::{Path, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::store::BacteriaCatalog;
use crate::cli::ServeArgs;
use crate::core::types::RecordKey;
use crate::external::ExternalSource;
use crate::matching::engine::{QueryConfig, QueryEngine};
use crate::matching::normalize::normalize;

/// Longest query accepted by the lookup endpoint, in characters
pub const MAX_QUERY_LENGTH: usize = 200;

/// Upper bound on the whole request, above the external lookup timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared application state. Read-only after startup.
pub struct AppState {
    pub catalog: BacteriaCatalog,
    pub external: ExternalSource,
    pub config: QueryConfig,
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

#[derive(Deserialize)]
struct LookupParams {
    q: Option<String>,
}

/// Create an error response that keeps internal details server-side
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the tokio runtime cannot be
/// created, or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/lookup", get(lookup_handler))
        .route("/api/catalog", get(catalog_handler))
        .route("/api/catalog/{key}", get(record_handler))
        .with_state(Arc::new(state))
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(REQUEST_TIMEOUT_SECS),
                ))
                // Limit concurrent requests to prevent DOS
                .layer(ConcurrencyLimitLayer::new(100)),
        )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let catalog = match &args.catalog {
        Some(path) => BacteriaCatalog::load_from_file(path)?,
        None => BacteriaCatalog::load_embedded()?,
    };
    let external = args.external.to_source()?;
    tracing::info!(
        "Serving {} catalog records (external lookup {})",
        catalog.len(),
        if external.is_offline() { "disabled" } else { "enabled" }
    );

    let app = create_router(AppState {
        catalog,
        external,
        config: QueryConfig::default(),
    });

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting bactopedia web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

/// Resolve a query to a single outcome
async fn lookup_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LookupParams>,
) -> Response {
    let start_time = std::time::Instant::now();
    let query = params.q.unwrap_or_default();

    if query.chars().count() > MAX_QUERY_LENGTH {
        return (
            StatusCode::BAD_REQUEST,
            Json(create_safe_error_response(
                "query_too_long",
                &format!("Query exceeds {MAX_QUERY_LENGTH} characters"),
                None,
            )),
        )
            .into_response();
    }

    let engine = QueryEngine::with_config(&state.catalog, &state.external, state.config.clone());
    let outcome = engine.resolve(&query).await;

    let mut body = match serde_json::to_value(&outcome) {
        Ok(body) => body,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(create_safe_error_response(
                    "serialization_failed",
                    "Failed to encode lookup result",
                    Some(&e.to_string()),
                )),
            )
                .into_response();
        }
    };

    #[allow(clippy::cast_possible_truncation)] // Processing time won't exceed u64
    let processing_time = start_time.elapsed().as_millis() as u64;
    if let Some(fields) = body.as_object_mut() {
        fields.insert("query".to_string(), serde_json::json!(query));
        fields.insert(
            "processing_time_ms".to_string(),
            serde_json::json!(processing_time),
        );
    }

    Json(body).into_response()
}

/// Return list of records in catalog
async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let records: Vec<serde_json::Value> = state
        .catalog
        .records
        .iter()
        .map(|r| {
            serde_json::json!({
                "key": r.key,
                "display_name": r.display_name,
                "classification": r.classification,
                "aliases": r.aliases,
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": records.len(),
        "records": records,
    }))
}

/// Return a single record by canonical key
async fn record_handler(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Response {
    match state.catalog.get(&RecordKey::new(normalize(&key))) {
        Some(record) => Json(record.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(create_safe_error_response(
                "record_not_found",
                "No record with that key",
                None,
            )),
        )
            .into_response(),
    }
}
