use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::store::CatalogIndex;
use crate::cli::ServeArgs;
use crate::core::bom::LineItem;
use crate::core::request::RawRequest;
use crate::core::types::{Diameter, ShaftKind, ValveKind};
use crate::resolve::ResolutionEngine;

/// Requests are small JSON documents; anything larger is abuse
const MAX_BODY_SIZE: usize = 64 * 1024;

/// Shared application state
pub struct AppState {
    pub catalog: CatalogIndex,
}

/// Response envelope of `/api/select`: the resolved positions, plus the
/// diagnostics joined into one display message when any were generated
#[derive(Serialize)]
struct SelectResponse {
    results: Vec<LineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Deserialize)]
struct OptionsQuery {
    /// Shaft kind to list admissible valve kinds for
    shaft: Option<ShaftKind>,
}

#[derive(Serialize)]
struct OptionsResponse {
    shafts: Vec<String>,
    diameters: Vec<u16>,
    valves: Vec<ValveKind>,
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server
/// fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
pub fn create_router() -> anyhow::Result<Router> {
    // Load catalog
    let catalog = CatalogIndex::load_embedded()?;
    let state = Arc::new(AppState { catalog });

    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .unwrap();

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/api/select", post(select_handler))
        .route("/api/options", get(options_handler))
        .with_state(state)
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
                // IP-based rate limiting to prevent abuse
                .layer(GovernorLayer {
                    config: Arc::new(governor_conf),
                })
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(30),
                ))
                // Limit concurrent requests
                .layer(ConcurrencyLimitLayer::new(100))
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let app = create_router()?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting shaft-solver web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

/// Resolve a configuration request into a bill of materials.
///
/// Always answers 200 with the `{results, message?}` envelope: hard
/// validation failures arrive as an empty result list with one message,
/// exactly like an unmatched configuration.
async fn select_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RawRequest>,
) -> Json<SelectResponse> {
    let engine = ResolutionEngine::new(&state.catalog);
    let resolution = engine.resolve(&request);

    let message = if resolution.notices.is_empty() {
        if resolution.items.is_empty() {
            Some("Nothing found".to_string())
        } else {
            None
        }
    } else {
        let joined = resolution
            .notices
            .iter()
            .map(|n| n.message.as_str())
            .collect::<Vec<_>>()
            .join("<br>");
        Some(joined)
    };

    Json(SelectResponse {
        results: resolution.items,
        message,
    })
}

/// Enumerate the selectable options: shaft kinds and diameters actually
/// present in the catalog, and the valve kinds admissible for the
/// requested shaft kind
async fn options_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OptionsQuery>,
) -> Json<OptionsResponse> {
    let shafts: Vec<String> = ShaftKind::all()
        .into_iter()
        .filter(|kind| {
            state
                .catalog
                .find_first(|item| item.name_contains(kind.tag()))
                .is_some()
        })
        .map(|kind| kind.tag().to_uppercase())
        .collect();

    let diameters: Vec<u16> = Diameter::all()
        .into_iter()
        .filter(|d| {
            let dia = d.millimeters().to_string();
            state
                .catalog
                .find_first(|item| item.name_contains(&dia))
                .is_some()
        })
        .map(Diameter::millimeters)
        .collect();

    let valves: Vec<ValveKind> = query
        .shaft
        .map(|kind| kind.admissible_valves().to_vec())
        .unwrap_or_default();

    Json(OptionsResponse {
        shafts,
        diameters,
        valves,
    })
}
