// restaurant_site/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use menu_cart::{CartError, CatalogError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Cart Error: {source}")]
  Cart {
    #[from]
    source: CartError,
  },
}

impl From<CatalogError> for AppError {
  fn from(err: CatalogError) -> Self {
    AppError::Cart {
      source: CartError::Catalog(err),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Sqlx(_) => StatusCode::INTERNAL_SERVER_ERROR,
      AppError::Cart { source } => match source {
        CartError::EmptyCart | CartError::PromoStale { .. } => StatusCode::CONFLICT,
        CartError::PromoRejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        CartError::UnknownChannel(_)
        | CartError::UnknownStrategy(_)
        | CartError::InvalidPrice { .. }
        | CartError::InvalidTaxRate { .. } => StatusCode::BAD_REQUEST,
        CartError::Catalog(_) => StatusCode::SERVICE_UNAVAILABLE,
        CartError::External { .. } => StatusCode::BAD_GATEWAY,
      },
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    let body = match self {
      AppError::Validation(m) | AppError::NotFound(m) => json!({ "error": m }),
      AppError::Config(m) => json!({ "error": "Configuration issue", "detail": m }),
      AppError::Sqlx(_) => json!({ "error": "Database operation failed" }),
      AppError::Cart { source } => match source {
        // Collaborator failures get a generic retry-or-dismiss message; the
        // cart itself is untouched by them.
        CartError::Catalog(_) => json!({ "error": "The menu is unavailable right now. Please try again." }),
        CartError::External { .. } => json!({ "error": "A partner service did not respond. Please try again." }),
        other => json!({ "error": other.to_string() }),
      },
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
