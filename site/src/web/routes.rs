// restaurant_site/src/web/routes.rs

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;
use crate::web::handlers::{cart_handlers, checkout_handlers, menu_handlers, session_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Malformed bodies get the same JSON error shape as everything else.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid request body: {}", err)).into()
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/sessions")
          .route("", web::post().to(session_handlers::start_session_handler))
          .route("", web::delete().to(session_handlers::end_session_handler)),
      )
      .service(
        web::scope("/menu")
          .route("", web::get().to(menu_handlers::get_menu_handler))
          .route("/items/{id}", web::get().to(menu_handlers::get_menu_item_handler)),
      )
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::get_cart_handler))
          .route("", web::delete().to(cart_handlers::clear_cart_handler))
          .route("/items", web::post().to(cart_handlers::add_to_cart_handler))
          .route("/items/{id}", web::delete().to(cart_handlers::remove_from_cart_handler))
          .route("/items/{id}/quantity", web::put().to(cart_handlers::set_quantity_handler))
          .route("/items/{id}/instructions", web::put().to(cart_handlers::set_instructions_handler))
          .route("/promo", web::post().to(cart_handlers::apply_promo_handler))
          .route("/promo", web::delete().to(cart_handlers::remove_promo_handler))
          .route("/snapshot", web::get().to(cart_handlers::get_snapshot_handler))
          .route("/snapshot", web::put().to(cart_handlers::restore_snapshot_handler)),
      )
      .service(
        web::scope("/checkout")
          .route("", web::post().to(checkout_handlers::start_checkout_handler))
          .route("/channels", web::get().to(checkout_handlers::list_channels_handler))
          .route("/{channel}", web::get().to(checkout_handlers::checkout_redirect_handler)),
      ),
  );
}
