//! REST API server for masked text formatting.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! textmask-server
//!
//! # With custom port
//! textmask-server --port 8080
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use text_mask::numeric::{create_number_mask, NumberMaskConfig};
use text_mask::{batch, FormatOptions, FormatResult, Mask, MaskCatalog, MaskError, MaskSource};

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Text Mask API",
        version = "0.1.0",
        description = "Masked text formatting REST API. Returns masked, unmasked and obfuscated views of a value.",
        license(name = "MIT"),
        contact(name = "API Support")
    ),
    tags(
        (name = "Formatting", description = "Mask formatting endpoints"),
        (name = "Currency", description = "Dynamic number masks"),
        (name = "Presets", description = "Built-in mask catalog"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(
        format_text,
        format_batch,
        format_currency,
        list_presets,
        health,
    ),
    components(schemas(
        FormatRequest,
        FormatResponse,
        BatchFormatRequest,
        BatchFormatResponse,
        CurrencyRequest,
        PresetInfo,
        PresetsResponse,
        ErrorResponse,
        HealthResponse,
    ))
)]
struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"text": "11987654321", "mask": "(99) 99999-9999"}))]
struct FormatRequest {
    /// The whole current value of the field.
    text: String,
    /// Mask notation. Takes precedence over `preset`.
    #[serde(default)]
    mask: Option<String>,
    /// Name of a built-in preset, e.g. "brl_cpf".
    #[serde(default)]
    preset: Option<String>,
    /// Append trailing literals once the input runs out.
    #[serde(default)]
    auto_complete: bool,
    /// Placeholder for obfuscated slots (default "*").
    #[serde(default)]
    obfuscation_character: Option<char>,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "masked": "(11) 98765-4321",
    "unmasked": "11987654321",
    "obfuscated": "(11) 98765-4321"
}))]
struct FormatResponse {
    /// Display value
    masked: String,
    /// Raw accepted characters
    unmasked: String,
    /// Display value with obfuscated slots hidden
    obfuscated: String,
}

impl From<FormatResult> for FormatResponse {
    fn from(result: FormatResult) -> Self {
        Self {
            masked: result.masked,
            unmasked: result.unmasked,
            obfuscated: result.obfuscated,
        }
    }
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"texts": ["12345678", "87654321"], "preset": "brl_cep"}))]
struct BatchFormatRequest {
    /// Values to format, all with the same mask.
    texts: Vec<String>,
    #[serde(default)]
    mask: Option<String>,
    #[serde(default)]
    preset: Option<String>,
    #[serde(default)]
    auto_complete: bool,
    #[serde(default)]
    obfuscation_character: Option<char>,
}

#[derive(Serialize, ToSchema)]
struct BatchFormatResponse {
    /// One result per input, in input order
    results: Vec<FormatResponse>,
    /// Number of values processed
    total: usize,
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"text": "123456", "prefix": "R$ "}))]
struct CurrencyRequest {
    /// Amount, digits only or already formatted.
    text: String,
    #[serde(default)]
    prefix: String,
    /// Thousands delimiter (default "."). Null disables it.
    #[serde(default = "default_delimiter")]
    delimiter: Option<char>,
    /// Decimal separator (default ","). Null disables it.
    #[serde(default = "default_separator")]
    separator: Option<char>,
    /// Fractional digits (default 2).
    #[serde(default = "default_precision")]
    precision: usize,
}

fn default_delimiter() -> Option<char> {
    Some('.')
}

fn default_separator() -> Option<char> {
    Some(',')
}

fn default_precision() -> usize {
    2
}

#[derive(Serialize, ToSchema)]
struct PresetInfo {
    name: String,
    /// Mask notation, absent for dynamic presets
    #[serde(skip_serializing_if = "Option::is_none")]
    notation: Option<String>,
    dynamic: bool,
}

#[derive(Serialize, ToSchema)]
struct PresetsResponse {
    presets: Vec<PresetInfo>,
}

#[derive(Serialize, ToSchema)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    version: String,
}

type AppState = Arc<MaskCatalog>;
type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(e: MaskError) -> ApiError {
    tracing::debug!(error = %e, "rejecting request");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

#[utoipa::path(
    post,
    path = "/format",
    request_body = FormatRequest,
    responses(
        (status = 200, description = "Formatted value", body = FormatResponse),
        (status = 400, description = "Invalid mask or unknown preset", body = ErrorResponse)
    ),
    tag = "Formatting"
)]
async fn format_text(
    State(catalog): State<AppState>,
    Json(req): Json<FormatRequest>,
) -> Result<Json<FormatResponse>, ApiError> {
    let source = resolve_source(&catalog, req.mask.as_deref(), req.preset.as_deref())
        .map_err(bad_request)?;
    let options = options(req.auto_complete, req.obfuscation_character);
    let result = text_mask::format_with_mask(&req.text, source.as_ref(), &options);
    Ok(Json(result.into()))
}

#[utoipa::path(
    post,
    path = "/format/batch",
    request_body = BatchFormatRequest,
    responses(
        (status = 200, description = "Formatted values", body = BatchFormatResponse),
        (status = 400, description = "Invalid mask or unknown preset", body = ErrorResponse)
    ),
    tag = "Formatting"
)]
async fn format_batch(
    State(catalog): State<AppState>,
    Json(req): Json<BatchFormatRequest>,
) -> Result<Json<BatchFormatResponse>, ApiError> {
    let options = options(req.auto_complete, req.obfuscation_character);
    let results: Vec<FormatResponse> =
        match resolve_source(&catalog, req.mask.as_deref(), req.preset.as_deref())
            .map_err(bad_request)?
        {
            Some(source) => batch::format_batch(&req.texts, &source, &options)
                .into_iter()
                .map(FormatResponse::from)
                .collect(),
            None => req
                .texts
                .iter()
                .map(|text| FormatResult::passthrough(text).into())
                .collect(),
        };

    Ok(Json(BatchFormatResponse {
        total: results.len(),
        results,
    }))
}

#[utoipa::path(
    post,
    path = "/currency",
    request_body = CurrencyRequest,
    responses(
        (status = 200, description = "Formatted amount", body = FormatResponse),
        (status = 400, description = "Invalid number configuration", body = ErrorResponse)
    ),
    tag = "Currency"
)]
async fn format_currency(Json(req): Json<CurrencyRequest>) -> Result<Json<FormatResponse>, ApiError> {
    let config = NumberMaskConfig::new()
        .prefix(req.prefix)
        .delimiter(req.delimiter)
        .separator(req.separator)
        .precision(req.precision);
    let source = create_number_mask(&config).map_err(bad_request)?;
    let result = text_mask::format_with_mask(&req.text, Some(&source), &FormatOptions::default());
    Ok(Json(result.into()))
}

#[utoipa::path(
    get,
    path = "/presets",
    responses(
        (status = 200, description = "Available presets", body = PresetsResponse)
    ),
    tag = "Presets"
)]
async fn list_presets(State(catalog): State<AppState>) -> Json<PresetsResponse> {
    let presets = catalog
        .names()
        .into_iter()
        .filter_map(|name| {
            catalog.get(name).map(|source| match source {
                MaskSource::Static(mask) => PresetInfo {
                    name: name.to_string(),
                    notation: Some(mask.to_string()),
                    dynamic: false,
                },
                MaskSource::Dynamic(_) => PresetInfo {
                    name: name.to_string(),
                    notation: None,
                    dynamic: true,
                },
            })
        })
        .collect();

    Json(PresetsResponse { presets })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Helpers
// ============================================================================

/// `mask` wins over `preset`; neither means pass-through.
fn resolve_source(
    catalog: &MaskCatalog,
    mask: Option<&str>,
    preset: Option<&str>,
) -> Result<Option<MaskSource>, MaskError> {
    if let Some(notation) = mask {
        return Ok(Some(Mask::parse(notation)?.into()));
    }
    preset
        .map(|name| catalog.require(name).cloned())
        .transpose()
}

fn options(auto_complete: bool, obfuscation_character: Option<char>) -> FormatOptions {
    let options = FormatOptions::new().auto_complete(auto_complete);
    match obfuscation_character {
        Some(c) => options.obfuscation_character(c),
        None => options,
    }
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse args
    let port: u16 = std::env::args()
        .skip_while(|a| a != "--port")
        .nth(1)
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let catalog: AppState = Arc::new(MaskCatalog::builtin());
    tracing::info!(presets = catalog.len(), "Loaded mask catalog");

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    // Build router with Swagger UI
    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/format", post(format_text))
        .route("/format/batch", post(format_batch))
        .route("/currency", post(format_currency))
        .route("/presets", get(list_presets))
        .route("/health", get(health))
        .with_state(catalog)
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}:{}/swagger-ui/", "localhost", port);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Failed to bind {}", addr);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
