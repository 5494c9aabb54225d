// restaurant_site/src/web/handlers/cart_handlers.rs

//! Cart views. Catalog and promo lookups are awaited before the cart lock is
//! taken; no guard lives across an `.await`.

use actix_web::{web, HttpResponse};
use menu_cart::{validate_promo, CartError, CartSnapshot};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::SessionId;
use crate::web::presenters::{CartView, RestoreView};

const MAX_PROMO_ATTEMPTS: u32 = 3;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct AddToCartPayload {
  pub menu_item_id: String,
}

#[derive(Deserialize, Debug)]
pub struct SetQuantityPayload {
  pub quantity: i64,
}

#[derive(Deserialize, Debug)]
pub struct SetInstructionsPayload {
  #[serde(default)]
  pub special_instructions: String,
}

#[derive(Deserialize, Debug)]
pub struct ApplyPromoPayload {
  pub code: String,
}

fn render(app_state: &AppState, session: &SessionId) -> HttpResponse {
  let cart = app_state.sessions.cart_for(session.as_str());
  let view = cart.with(|c| CartView::from(c));
  HttpResponse::Ok().json(view)
}

#[instrument(name = "handler::get_cart", skip(app_state), fields(session = %session.as_str()))]
pub async fn get_cart_handler(app_state: web::Data<AppState>, session: SessionId) -> Result<HttpResponse, AppError> {
  Ok(render(&app_state, &session))
}

#[instrument(name = "handler::add_to_cart", skip(app_state, payload), fields(session = %session.as_str(), menu_item_id = %payload.menu_item_id))]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
  payload: web::Json<AddToCartPayload>,
) -> Result<HttpResponse, AppError> {
  let item = app_state
    .catalog
    .find_item(&payload.menu_item_id)
    .await?
    .ok_or_else(|| {
      warn!("Attempted to add unknown menu item.");
      AppError::NotFound(format!("Menu item with ID {} not found.", payload.menu_item_id))
    })?;

  let cart = app_state.sessions.cart_for(session.as_str());
  cart.update(|c| c.add_item(&item));
  info!("Item added to cart.");
  Ok(render(&app_state, &session))
}

#[instrument(name = "handler::set_quantity", skip(app_state, path, payload), fields(session = %session.as_str(), line_id = %path.as_ref(), quantity = payload.quantity))]
pub async fn set_quantity_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
  path: web::Path<String>,
  payload: web::Json<SetQuantityPayload>,
) -> Result<HttpResponse, AppError> {
  let cart = app_state.sessions.cart_for(session.as_str());
  let outcome = cart.update(|c| c.set_quantity(&path, payload.quantity));
  info!(?outcome, "Quantity update handled.");
  Ok(render(&app_state, &session))
}

#[instrument(name = "handler::set_instructions", skip(app_state, path, payload), fields(session = %session.as_str(), line_id = %path.as_ref()))]
pub async fn set_instructions_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
  path: web::Path<String>,
  payload: web::Json<SetInstructionsPayload>,
) -> Result<HttpResponse, AppError> {
  let text = payload.into_inner().special_instructions;
  let cart = app_state.sessions.cart_for(session.as_str());
  let outcome = cart.update(|c| c.set_special_instructions(&path, text));
  info!(?outcome, "Special instructions update handled.");
  Ok(render(&app_state, &session))
}

#[instrument(name = "handler::remove_from_cart", skip(app_state, path), fields(session = %session.as_str(), line_id = %path.as_ref()))]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let cart = app_state.sessions.cart_for(session.as_str());
  let outcome = cart.update(|c| c.remove_item(&path));
  info!(?outcome, "Remove handled.");
  Ok(render(&app_state, &session))
}

#[instrument(name = "handler::clear_cart", skip(app_state), fields(session = %session.as_str()))]
pub async fn clear_cart_handler(app_state: web::Data<AppState>, session: SessionId) -> Result<HttpResponse, AppError> {
  let cart = app_state.sessions.cart_for(session.as_str());
  cart.update(|c| c.clear());
  Ok(render(&app_state, &session))
}

#[instrument(name = "handler::apply_promo", skip(app_state, payload), fields(session = %session.as_str()))]
pub async fn apply_promo_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
  payload: web::Json<ApplyPromoPayload>,
) -> Result<HttpResponse, AppError> {
  let code = payload.into_inner().code;
  let cart = app_state.sessions.cart_for(session.as_str());

  // The validator is awaited without the lock, so the cart may change in the
  // meantime; the engine refuses a discount validated against older contents.
  let mut attempt = 1;
  loop {
    let totals = cart.with(|c| c.totals());
    let discount = validate_promo(app_state.promos.as_ref(), &code, &totals).await?;
    match cart.update(|c| c.apply_discount(discount)) {
      Ok(outcome) => {
        info!(?outcome, attempt, "Promo code applied.");
        return Ok(render(&app_state, &session));
      }
      Err(CartError::PromoStale { .. }) if attempt < MAX_PROMO_ATTEMPTS => {
        warn!(attempt, "Cart changed while the promo code was validated, retrying.");
        attempt += 1;
      }
      Err(e) => return Err(e.into()),
    }
  }
}

#[instrument(name = "handler::remove_promo", skip(app_state), fields(session = %session.as_str()))]
pub async fn remove_promo_handler(app_state: web::Data<AppState>, session: SessionId) -> Result<HttpResponse, AppError> {
  let cart = app_state.sessions.cart_for(session.as_str());
  cart.update(|c| c.remove_discount());
  Ok(render(&app_state, &session))
}

#[instrument(name = "handler::get_snapshot", skip(app_state), fields(session = %session.as_str()))]
pub async fn get_snapshot_handler(app_state: web::Data<AppState>, session: SessionId) -> Result<HttpResponse, AppError> {
  let cart = app_state.sessions.cart_for(session.as_str());
  let snapshot = cart.with(|c| c.snapshot());
  Ok(HttpResponse::Ok().json(snapshot))
}

#[instrument(name = "handler::restore_snapshot", skip(app_state, payload), fields(session = %session.as_str(), entries = payload.entries().len()))]
pub async fn restore_snapshot_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
  payload: web::Json<CartSnapshot>,
) -> Result<HttpResponse, AppError> {
  let menu = app_state.catalog.load_menu().await?;

  let cart = app_state.sessions.cart_for(session.as_str());
  let (report, view) = cart.update(|c| {
    let report = c.restore(&payload, &menu);
    (report, CartView::from(&*c))
  });
  info!(restored = report.restored_lines, unknown = report.unknown_ids.len(), "Cart restored from snapshot.");
  Ok(HttpResponse::Ok().json(RestoreView { report, cart: view }))
}
