use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use moviemood::dispatcher::UPSTREAM_FAILURE;
use moviemood::{
    Catalog, CommandDispatcher, CommandOutcome, InMemorySessionRegistry, Session, SessionRegistry,
    parse_result_count,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, error, info, warn};

use crate::models::{ChatRequest, ChatResponse, WelcomeResponse};

pub const WELCOME_MESSAGE: &str = "Welcome to MovieMood.\nHere are the comands you can use: {Movie [MOVIE_NAME], Actor/Actress [ACTOR_NAME/ACTRESS_NAME], Suggest}";
pub const UNAUTHORIZED_MESSAGE: &str =
    "Invalid Authorization Header! Navigate to the /welcome route to get authorized.";
const SESSION_FAILURE: &str = "The server can not generate a UUID now, try again later!";
const ROUTES: &str = "Available Routes:\n\n  GET  /welcome -> welcome\n  POST /chat    -> chat\n  GET  /health  -> health_check\n  GET  /        -> root          (current)\n";

type ApiError = (StatusCode, String);

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionRegistry>,
    pub dispatcher: Arc<CommandDispatcher>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            sessions: Arc::new(InMemorySessionRegistry::new()),
            dispatcher: Arc::new(CommandDispatcher::new(catalog)),
        }
    }
}

pub fn create_app(catalog: Arc<dyn Catalog>) -> Router {
    build_router(AppState::new(catalog))
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/welcome", get(welcome))
        .route("/chat", post(chat))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn root() -> &'static str {
    ROUTES
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn welcome(State(state): State<AppState>) -> Result<Json<WelcomeResponse>, ApiError> {
    let session = Session::issue();
    let token = session.token.clone();

    state.sessions.register(session).await.map_err(|e| {
        error!("Failed to register session: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, SESSION_FAILURE.to_string())
    })?;

    info!("Issued session {}", token);
    Ok(Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
        uuid: token,
    }))
}

async fn chat(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    match state.sessions.is_valid(token).await {
        Ok(true) => {}
        Ok(false) => {
            warn!("Rejected chat request with unknown token");
            return (StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE).into_response();
        }
        Err(e) => {
            error!("Failed to look up session: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE).into_response();
        }
    }

    // An unreadable body is handled as an empty message
    let request: ChatRequest = serde_json::from_slice(&body).unwrap_or_default();
    info!("Received chat message: {}", request.message);

    let outcome = state.dispatcher.resolve(&request.message).await;
    if let Some(count) = parse_result_count(outcome.message()) {
        debug!(count, "Rendered catalog results");
    }

    match outcome {
        CommandOutcome::Success { message } => Json(ChatResponse { message }).into_response(),
        CommandOutcome::ValidationError { message } => {
            (StatusCode::BAD_REQUEST, message).into_response()
        }
        CommandOutcome::UpstreamError { message } => {
            (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
        }
    }
}
