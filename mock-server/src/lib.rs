use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

pub const MOTD: &str = "Welcome";
pub const VERSION: &str = "1.6.1";

/// Body served by `/_chunks`.
pub const CHUNK_BODY: &str = "abcdefghijklmnopqrstuvwxyz";

#[derive(Clone, Debug, Serialize)]
pub struct Root {
    pub couchdb: &'static str,
    pub version: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct CouchError {
    pub error: String,
    pub reason: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/_chunks", get(chunks))
        .route("/_status/{code}", get(status))
        .route("/{db}", get(database))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "mock couchdb listening");
    }
    axum::serve(listener, app()).await
}

async fn root() -> Json<Root> {
    Json(Root {
        couchdb: MOTD,
        version: VERSION,
    })
}

async fn chunks() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], CHUNK_BODY)
}

/// Answers with the requested status and a CouchDB error envelope.
async fn status(Path(code): Path<u16>) -> Result<(StatusCode, Json<CouchError>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    tracing::debug!(code, "serving requested status");
    let body = CouchError {
        error: status
            .canonical_reason()
            .unwrap_or("unknown")
            .to_lowercase()
            .replace(' ', "_"),
        reason: format!("Requested status {code}."),
    };
    Ok((status, Json(body)))
}

/// No databases exist on the mock server.
async fn database(Path(db): Path<String>) -> (StatusCode, Json<CouchError>) {
    tracing::debug!(%db, "database lookup");
    (
        StatusCode::NOT_FOUND,
        Json(CouchError {
            error: "not_found".to_string(),
            reason: "Database does not exist.".to_string(),
        }),
    )
}
