//! HTTP routes over a shared [`Character`].
//!
//! Endpoints:
//!   GET  /healthz             - Health check
//!   GET  /silver/state        - Full character snapshot
//!   GET  /silver/dialogue     - Lines for the current state
//!   POST /silver/absorb       - `{emeralds}` -> absorb result
//!   POST /silver/drain        - `{words}` -> drain result or null
//!   POST /silver/create       - create result or null
//!   POST /silver/teleport     - `{location}` -> teleport result
//!   POST /silver/ability      - tagged ability use -> ability outcome
//!   POST /silver/update_state - `{state}` -> `{success, new_state}`
//!
//! Request bodies are optional. An empty body behaves like `{}`, and missing
//! fields fall back to 0 or the empty string. A body that is present but not
//! valid JSON for the route is a 400. The ability route has no default
//! ability, so it requires a body.

use crate::error::ApiError;
use crate::extract::JsonOrDefault;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use silver_core::{
    AbilityOutcome, AbilityUse, AbsorbResult, Character, CharacterSnapshot, CharacterState,
    CreateResult, DrainResult, TeleportResult,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Shared handler state. Every request locks the one character for the
/// duration of its core call.
#[derive(Clone)]
pub struct AppState {
    silver: Arc<Mutex<Character>>,
}

impl AppState {
    pub fn new(silver: Character) -> Self {
        Self {
            silver: Arc::new(Mutex::new(silver)),
        }
    }

    pub async fn snapshot(&self) -> CharacterSnapshot {
        self.silver.lock().await.snapshot()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Character::new())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok\n" }))
        .route("/silver/state", get(get_state))
        .route("/silver/dialogue", get(get_dialogue))
        .route("/silver/absorb", post(absorb_emeralds))
        .route("/silver/drain", post(drain_words))
        .route("/silver/create", post(create_words))
        .route("/silver/teleport", post(teleport))
        .route("/silver/ability", post(use_ability))
        .route("/silver/update_state", post(update_state))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Request / Response Bodies
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AbsorbRequest {
    pub emeralds: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DrainRequest {
    pub words: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeleportRequest {
    pub location: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStateRequest {
    pub state: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DialogueResponse {
    pub state: CharacterState,
    pub lines: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateStateResponse {
    pub success: bool,
    pub new_state: CharacterState,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn get_state(State(state): State<AppState>) -> Json<CharacterSnapshot> {
    Json(state.snapshot().await)
}

pub async fn get_dialogue(State(state): State<AppState>) -> Json<DialogueResponse> {
    let silver = state.silver.lock().await;
    Json(DialogueResponse {
        state: silver.state(),
        lines: silver.current_dialogue(),
    })
}

pub async fn absorb_emeralds(
    State(state): State<AppState>,
    JsonOrDefault(req): JsonOrDefault<AbsorbRequest>,
) -> Json<AbsorbResult> {
    let result = state.silver.lock().await.absorb_emeralds(req.emeralds);
    debug!(
        emeralds = req.emeralds,
        power_restored = result.power_restored,
        "absorbed emeralds"
    );
    Json(result)
}

pub async fn drain_words(
    State(state): State<AppState>,
    JsonOrDefault(req): JsonOrDefault<DrainRequest>,
) -> Json<Option<DrainResult>> {
    let words = u32::try_from(req.words.max(0)).unwrap_or(u32::MAX);
    let result = state.silver.lock().await.drain_words(words);
    debug!(words, drained = ?result.as_ref().map(|r| r.amount), "drain words");
    Json(result)
}

pub async fn create_words(State(state): State<AppState>) -> Json<Option<CreateResult>> {
    let result = state.silver.lock().await.create_words();
    debug!(created = ?result.as_ref().map(|r| r.amount), "create words");
    Json(result)
}

pub async fn teleport(
    State(state): State<AppState>,
    JsonOrDefault(req): JsonOrDefault<TeleportRequest>,
) -> Json<TeleportResult> {
    let result = state.silver.lock().await.teleport(req.location);
    debug!(location = %result.location, "teleport");
    Json(result)
}

pub async fn use_ability(
    State(state): State<AppState>,
    body: Result<Json<AbilityUse>, JsonRejection>,
) -> Result<Json<AbilityOutcome>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let ability = request.ability();
    let outcome = state.silver.lock().await.use_ability(request);
    debug!(%ability, unavailable = outcome.is_unavailable(), "use ability");
    Ok(Json(outcome))
}

pub async fn update_state(
    State(state): State<AppState>,
    JsonOrDefault(req): JsonOrDefault<UpdateStateRequest>,
) -> Json<UpdateStateResponse> {
    let mut silver = state.silver.lock().await;
    let from = silver.state();

    if silver.update_state(&req.state) {
        info!(%from, to = %silver.state(), "state updated");
    } else {
        debug!(label = %req.state, "ignored unknown state label");
    }

    Json(UpdateStateResponse {
        success: true,
        new_state: silver.state(),
    })
}
