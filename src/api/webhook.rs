//! Action webhook endpoint

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use super::ApiState;
use crate::action::{self, BotMessage, CollectingDispatcher, Event, Tracker};

/// Webhook request from the dialogue framework
///
/// The payload also carries `domain`, `version`, and a top-level
/// `sender_id`; nothing here reads them
#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub next_action: String,

    #[serde(default)]
    pub tracker: Tracker,
}

/// Webhook response: events to apply plus bot messages to utter
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub events: Vec<Event>,
    pub responses: Vec<BotMessage>,
}

/// Error body for unknown action names
#[derive(Debug, Serialize)]
pub struct ActionErrorResponse {
    pub error: String,
    pub action_name: String,
}

/// Run the requested action against the tracker snapshot
async fn webhook(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, (StatusCode, Json<ActionErrorResponse>)> {
    let Some(action) = action::find_action(&request.next_action) else {
        tracing::warn!(action = %request.next_action, "unknown action requested");
        return Err((
            StatusCode::NOT_FOUND,
            Json(ActionErrorResponse {
                error: format!(
                    "no registered action found for name '{}'",
                    request.next_action
                ),
                action_name: request.next_action,
            }),
        ));
    };

    tracing::debug!(
        action = action.name,
        sender_id = %request.tracker.sender_id,
        "running action"
    );

    let mut dispatcher = CollectingDispatcher::new();
    let events = action.run(&state.resolver, &request.tracker, &mut dispatcher);

    Ok(Json(ActionResponse {
        events,
        responses: dispatcher.into_messages(),
    }))
}

/// List the registered action names
async fn list_actions() -> Json<Vec<&'static str>> {
    Json(action::ACTIONS.iter().map(|a| a.name).collect())
}

/// Build the webhook router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/webhook", post(webhook))
        .route("/actions", get(list_actions))
        .with_state(state)
}
