//! HTTP transport implementation.
//!
//! Serves the Opal custom tool contract:
//! - `GET /` health check (plain text `OK`)
//! - `GET /discovery` function manifest
//! - one route per registered tool, taken from its descriptor

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{MethodFilter, get, on},
};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument, warn};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::ToolServer;
use crate::domains::tools::{DiscoveryManifest, HttpMethod, ToolInvocationResult};

/// Path of the discovery endpoint.
pub const DISCOVERY_PATH: &str = "/discovery";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Build the application router.
    ///
    /// The route table is fixed once built; each tool contributes the
    /// endpoint and method declared in its descriptor.
    pub fn router(&self, server: ToolServer) -> Router {
        let mut app = Router::new()
            .route("/", get(health_check))
            .route(DISCOVERY_PATH, get(discovery));

        for descriptor in server.registry().descriptors() {
            let name = descriptor.name;
            app = app.route(
                &descriptor.endpoint,
                on(
                    method_filter(descriptor.http_method),
                    move |State(server): State<ToolServer>, headers: HeaderMap, body: Bytes| {
                        invoke_tool(server, name.clone(), headers, body)
                    },
                ),
            );
        }

        let mut app: Router = app.with_state(server).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(self.config.body_limit)),
        );

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport until a shutdown signal arrives.
    pub async fn run(self, server: ToolServer) -> TransportResult<()> {
        let addr = self.address();
        let tools = server.registry().descriptors();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let base_url = self.config.public_url();
        info!("Ready - {}", self.config.description());
        info!("Opal tool server running at {}", base_url);
        info!("Discovery endpoint: {}{}", base_url, DISCOVERY_PATH);
        for tool in &tools {
            info!("  → {} {} ({})", tool.http_method.as_str(), tool.endpoint, tool.name);
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(TransportError::http)?;

        info!("HTTP transport finished");
        Ok(())
    }
}

fn method_filter(method: HttpMethod) -> MethodFilter {
    match method {
        HttpMethod::Get => MethodFilter::GET,
        HttpMethod::Post => MethodFilter::POST,
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Unable to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Discovery endpoint - lists every registered function.
async fn discovery(State(server): State<ToolServer>) -> Json<DiscoveryManifest> {
    info!("Serving discovery manifest");
    Json(server.manifest())
}

/// Invoke a tool with the `parameters` found in the request body.
#[instrument(skip(server, headers, body))]
async fn invoke_tool(server: ToolServer, name: String, headers: HeaderMap, body: Bytes) -> Response {
    let body = match decode_body(&headers, &body) {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            return rejection.into_response();
        }
    };

    match server.call_tool(&name, body.as_ref()).await {
        Ok(received) => (StatusCode::OK, Json(ToolInvocationResult::Ok { received })).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Decode an optional JSON request body.
///
/// A request without a JSON content type, or with an empty body, carries no
/// body. Malformed JSON is rejected.
fn decode_body(headers: &HeaderMap, body: &[u8]) -> Result<Option<Value>, JsonRejection> {
    if body.is_empty() || !has_json_content_type(headers) {
        return Ok(None);
    }

    let Json(value) = Json::<Value>::from_bytes(body)?;
    Ok(Some(value))
}

/// `application/json` or any `application/*+json` media type.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|essence| {
            let essence = essence.trim().to_ascii_lowercase();
            essence == "application/json"
                || (essence.starts_with("application/") && essence.ends_with("+json"))
        })
        .unwrap_or(false)
}
