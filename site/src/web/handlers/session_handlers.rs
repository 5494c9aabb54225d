// restaurant_site/src/web/handlers/session_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::{SessionId, SESSION_HEADER};

/// Hands out a fresh session id for clients that do not mint their own.
#[instrument(name = "handler::start_session", skip(app_state))]
pub async fn start_session_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let session_id = Uuid::new_v4().to_string();
  app_state.sessions.cart_for(&session_id);
  info!(%session_id, "Session started.");
  Ok(
    HttpResponse::Created()
      .insert_header((SESSION_HEADER, session_id.clone()))
      .json(json!({ "session_id": session_id })),
  )
}

/// Ends the session and drops its cart.
#[instrument(name = "handler::end_session", skip(app_state), fields(session = %session.as_str()))]
pub async fn end_session_handler(app_state: web::Data<AppState>, session: SessionId) -> Result<HttpResponse, AppError> {
  let existed = app_state.sessions.remove(session.as_str());
  info!(existed, "Session ended.");
  Ok(HttpResponse::NoContent().finish())
}
