// restaurant_site/src/web/handlers/checkout_handlers.rs

use actix_web::{http::header, web, HttpResponse};
use menu_cart::CheckoutChannel;
use serde::Deserialize;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::SessionId;
use crate::web::presenters::HandoffView;

#[derive(Deserialize, Debug)]
pub struct CheckoutPayload {
  pub channel: String,
}

#[instrument(name = "handler::list_channels", skip(app_state))]
pub async fn list_channels_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let channels: Vec<HandoffView> = app_state.config.handoff.all().into_iter().map(HandoffView::from).collect();
  Ok(HttpResponse::Ok().json(channels))
}

fn handoff_for(app_state: &AppState, session: &SessionId, channel: &str) -> Result<HandoffView, AppError> {
  let channel: CheckoutChannel = channel.parse()?;
  let cart = app_state.sessions.cart_for(session.as_str());
  let handoff = cart.with(|c| app_state.config.handoff.handoff(channel, c))?;
  Ok(handoff.into())
}

#[instrument(name = "handler::start_checkout", skip(app_state, payload), fields(session = %session.as_str(), channel = %payload.channel))]
pub async fn start_checkout_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
  payload: web::Json<CheckoutPayload>,
) -> Result<HttpResponse, AppError> {
  let view = handoff_for(&app_state, &session, &payload.channel)?;
  Ok(HttpResponse::Ok().json(view))
}

/// Same as `POST /checkout` but answers with a redirect to the channel.
#[instrument(name = "handler::checkout_redirect", skip(app_state, path), fields(session = %session.as_str(), channel = %path.as_ref()))]
pub async fn checkout_redirect_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let view = handoff_for(&app_state, &session, &path)?;
  Ok(
    HttpResponse::SeeOther()
      .insert_header((header::LOCATION, view.target))
      .finish(),
  )
}
