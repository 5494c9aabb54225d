// restaurant_site/src/web/handlers/menu_handlers.rs

use actix_web::{web, HttpResponse};
use menu_cart::DietaryFilter;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::presenters::{MenuItemView, MenuView};

#[instrument(name = "handler::get_menu", skip(app_state))]
pub async fn get_menu_handler(
  app_state: web::Data<AppState>,
  filter: web::Query<DietaryFilter>,
) -> Result<HttpResponse, AppError> {
  let menu = app_state.catalog.load_menu().await?;
  let menu = if filter.is_empty() { menu } else { menu.filtered(&filter) };
  info!(items = menu.item_count(), "Menu served.");
  Ok(HttpResponse::Ok().json(MenuView::from(&menu)))
}

#[instrument(name = "handler::get_menu_item", skip(app_state, path), fields(menu_item_id = %path.as_ref()))]
pub async fn get_menu_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  match app_state.catalog.find_item(&id).await? {
    Some(item) => Ok(HttpResponse::Ok().json(MenuItemView::from(&item))),
    None => {
      warn!("Menu item {} not found.", id);
      Err(AppError::NotFound(format!("Menu item with ID {} not found.", id)))
    }
  }
}
