use actix_web::{
  HttpRequest,
  cookie::{Cookie, SameSite, time::Duration as CookieDuration},
};

use crate::domain::auth::entities::SessionData;
use crate::domain::auth::services::AuthService;

pub const SESSION_COOKIE: &str = "session_token";
pub const FLASH_COOKIE: &str = "flash";

/// Session cookie carrying the opaque token. No max-age: it lives for the
/// browser session, like the server-side entry it points at.
pub fn session_cookie(token: String) -> Cookie<'static> {
  Cookie::build(SESSION_COOKIE, token)
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .finish()
}

pub fn clear_session_cookie() -> Cookie<'static> {
  Cookie::build(SESSION_COOKIE, "")
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .max_age(CookieDuration::seconds(0))
    .finish()
}

/// Flash notice set before a redirect and consumed by the next page load.
/// Percent-encoded; notice strings contain spaces and punctuation.
pub fn flash_cookie(notice: &str) -> Cookie<'static> {
  Cookie::build(FLASH_COOKIE, urlencoding::encode(notice).into_owned())
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .finish()
}

pub fn clear_flash_cookie() -> Cookie<'static> {
  Cookie::build(FLASH_COOKIE, "")
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .max_age(CookieDuration::seconds(0))
    .finish()
}

/// Reads the pending flash notice, if any
pub fn take_flash(req: &HttpRequest) -> Option<String> {
  let cookie = req.cookie(FLASH_COOKIE)?;
  match urlencoding::decode(cookie.value()) {
    Ok(decoded) => Some(decoded.into_owned()),
    Err(_) => Some(cookie.value().to_string()),
  }
}

/// Resolves the caller's session from the request cookie. Anything short
/// of a valid, unexpired session is an anonymous caller.
pub async fn current_session(req: &HttpRequest, auth_service: &AuthService) -> Option<SessionData> {
  let cookie = req.cookie(SESSION_COOKIE)?;
  auth_service
    .resolve_session(cookie.value())
    .await
    .ok()
    .flatten()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_flash_cookie_round_trips_punctuation() {
    let cookie = flash_cookie("Borrower 'alice' approved!");
    assert_eq!(cookie.name(), FLASH_COOKIE);
    // The raw value is safe for a cookie header.
    assert!(!cookie.value().contains(' '));
    assert_eq!(
      urlencoding::decode(cookie.value()).unwrap(),
      "Borrower 'alice' approved!"
    );
  }

  #[test]
  fn test_session_cookie_is_http_only() {
    let cookie = session_cookie("token".to_string());
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
  }
}
