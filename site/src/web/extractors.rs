// restaurant_site/src/web/extractors.rs

use actix_web::{FromRequest, HttpRequest};
use tracing::warn;

use crate::errors::AppError;

pub const SESSION_HEADER: &str = "X-Session-ID";
const MAX_SESSION_ID_LEN: usize = 128;

/// The opaque client session id. Issuing and expiring ids is the client's
/// business; the site only uses it to find the right cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

impl SessionId {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

fn parse_session_id(raw: Option<&str>) -> Result<SessionId, AppError> {
  let value = raw.map(str::trim).unwrap_or_default();
  if value.is_empty() {
    return Err(AppError::Validation(format!("Missing {} header.", SESSION_HEADER)));
  }
  if value.len() > MAX_SESSION_ID_LEN || !value.chars().all(|c| c.is_ascii_graphic()) {
    return Err(AppError::Validation(format!("Invalid {} header.", SESSION_HEADER)));
  }
  Ok(SessionId(value.to_string()))
}

impl FromRequest for SessionId {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let raw = req.headers().get(SESSION_HEADER).and_then(|v| v.to_str().ok());
    let result = parse_session_id(raw);
    if let Err(e) = &result {
      warn!(error = %e, "SessionId extractor rejected request.");
    }
    futures_util::future::ready(result)
  }
}
