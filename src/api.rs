use std::path::Path;
use std::sync::Arc;

use aizuchi_model::Transcript;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::debug;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::aizuchi::{Aizuchi, TurnOutcome};

struct AppState {
    aizuchi: Aizuchi,
}

type AppStateArg = State<Arc<AppState>>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Submit {
    message: String,
    #[serde(default)]
    transcript: Transcript,
}

async fn submit(State(state): AppStateArg, Json(body): Json<Submit>) -> Json<TurnOutcome> {
    debug!("submit({:?}, {} turns)", body.message, body.transcript.len());
    Json(state.aizuchi.submit(&body.message, body.transcript))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Cleared {
    transcript: Transcript,
}

async fn clear(State(state): AppStateArg) -> Json<Cleared> {
    debug!("clear()");
    Json(Cleared {
        transcript: state.aizuchi.clear(),
    })
}

async fn phrases(State(state): AppStateArg) -> Json<Vec<&'static str>> {
    debug!("phrases()");
    Json(state.aizuchi.selector().phrases().to_vec())
}

pub fn router(aizuchi: Aizuchi, static_serving_dir: &Path) -> Router {
    let shared_state = Arc::new(AppState { aizuchi });
    Router::new()
        .nest(
            "/api/v1",
            Router::new()
                .route("/submit", post(submit))
                .route("/clear", post(clear))
                .route("/phrases", get(phrases))
                .with_state(shared_state),
        )
        .fallback_service(ServeDir::new(static_serving_dir))
}
