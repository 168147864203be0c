use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::session::{clear_flash_cookie, current_session, take_flash};
use crate::adapters::http::templates::TemplateEngine;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::Role;

/// Entry point: route signed-in callers to their dashboard, everyone else
/// to the login form.
pub async fn index(
  req: HttpRequest,
  auth_service: web::Data<Arc<AuthService>>,
) -> HttpResponse {
  let target = match current_session(&req, &auth_service).await {
    Some(session) if session.role == Role::Admin => "/admin",
    Some(_) => "/borrower",
    None => "/login",
  };

  HttpResponse::Found()
    .insert_header(("Location", target))
    .finish()
}

/// Render login page
pub async fn login_page(
  req: HttpRequest,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let mut context = tera::Context::new();
  context.insert("title", "Login");
  if let Some(notice) = take_flash(&req) {
    context.insert("notice", &notice);
  }

  let html = templates
    .render("pages/login.html.tera", &context)
    .map_err(actix_web::error::ErrorInternalServerError)?;

  Ok(
    HttpResponse::Ok()
      .cookie(clear_flash_cookie())
      .content_type("text/html")
      .body(html),
  )
}

/// Render registration page
pub async fn register_page(
  req: HttpRequest,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let mut context = tera::Context::new();
  context.insert("title", "Register");
  if let Some(notice) = take_flash(&req) {
    context.insert("notice", &notice);
  }

  let html = templates
    .render("pages/register.html.tera", &context)
    .map_err(actix_web::error::ErrorInternalServerError)?;

  Ok(
    HttpResponse::Ok()
      .cookie(clear_flash_cookie())
      .content_type("text/html")
      .body(html),
  )
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
  "OK"
}
