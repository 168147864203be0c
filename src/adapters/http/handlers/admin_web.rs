use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::http::session::{clear_flash_cookie, current_session, flash_cookie, take_flash};
use crate::adapters::http::templates::TemplateEngine;
use crate::application::auth::{ApproveBorrowerUseCase, ListPendingBorrowersUseCase, RejectBorrowerUseCase};
use crate::application::errors::WorkflowError;
use crate::application::lending::ListLoansUseCase;
use crate::domain::auth::services::AuthService;

/// GET /admin - pending borrowers and every loan on file
pub async fn dashboard(
  req: HttpRequest,
  templates: web::Data<TemplateEngine>,
  auth_service: web::Data<Arc<AuthService>>,
  pending_use_case: web::Data<Arc<ListPendingBorrowersUseCase>>,
  loans_use_case: web::Data<Arc<ListLoansUseCase>>,
) -> Result<HttpResponse, actix_web::Error> {
  let session = current_session(&req, &auth_service).await;

  let pending = match pending_use_case.execute(session.as_ref()).await {
    Ok(pending) => pending,
    Err(WorkflowError::Unauthorized) => {
      return Ok(
        HttpResponse::Found()
          .insert_header(("Location", "/login"))
          .finish(),
      );
    }
    Err(e) => return Err(actix_web::error::ErrorInternalServerError(e)),
  };

  let loans = loans_use_case
    .execute(session.as_ref())
    .await
    .map_err(actix_web::error::ErrorInternalServerError)?;

  let mut context = tera::Context::new();
  context.insert("title", "Admin Dashboard");
  if let Some(session) = &session {
    context.insert("username", &session.username);
  }
  context.insert("pending_borrowers", &pending);
  context.insert("loans", &loans);
  if let Some(notice) = take_flash(&req) {
    context.insert("notice", &notice);
  }

  let html = templates
    .render("pages/admin_dashboard.html.tera", &context)
    .map_err(actix_web::error::ErrorInternalServerError)?;

  Ok(
    HttpResponse::Ok()
      .cookie(clear_flash_cookie())
      .content_type("text/html")
      .body(html),
  )
}

/// POST /admin/approve/{id}
pub async fn approve(
  req: HttpRequest,
  path: web::Path<Uuid>,
  auth_service: web::Data<Arc<AuthService>>,
  use_case: web::Data<Arc<ApproveBorrowerUseCase>>,
) -> Result<HttpResponse, actix_web::Error> {
  let session = current_session(&req, &auth_service).await;
  let target_id = path.into_inner();

  match use_case.execute(session.as_ref(), target_id).await {
    Ok(response) => {
      let mut builder = HttpResponse::Found();
      if let Some(notice) = response.notice {
        builder.cookie(flash_cookie(&notice));
      }
      // A vanished target falls through silently; the queue re-renders
      // without it either way.
      Ok(builder.insert_header(("Location", "/admin")).finish())
    }
    Err(WorkflowError::Unauthorized) => Ok(
      HttpResponse::Found()
        .insert_header(("Location", "/login"))
        .finish(),
    ),
    Err(e) => Err(actix_web::error::ErrorInternalServerError(e)),
  }
}

/// POST /admin/reject/{id}
pub async fn reject(
  req: HttpRequest,
  path: web::Path<Uuid>,
  auth_service: web::Data<Arc<AuthService>>,
  use_case: web::Data<Arc<RejectBorrowerUseCase>>,
) -> Result<HttpResponse, actix_web::Error> {
  let session = current_session(&req, &auth_service).await;
  let target_id = path.into_inner();

  match use_case.execute(session.as_ref(), target_id).await {
    Ok(response) => {
      let mut builder = HttpResponse::Found();
      if let Some(notice) = response.notice {
        builder.cookie(flash_cookie(notice));
      }
      Ok(builder.insert_header(("Location", "/admin")).finish())
    }
    Err(WorkflowError::Unauthorized) => Ok(
      HttpResponse::Found()
        .insert_header(("Location", "/login"))
        .finish(),
    ),
    Err(e) => Err(actix_web::error::ErrorInternalServerError(e)),
  }
}
