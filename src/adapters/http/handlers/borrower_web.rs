use actix_web::{HttpRequest, HttpResponse, web};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;

use crate::adapters::http::session::{clear_flash_cookie, current_session, flash_cookie, take_flash};
use crate::adapters::http::templates::TemplateEngine;
use crate::application::errors::WorkflowError;
use crate::application::lending::{ApplyForLoanCommand, ApplyForLoanUseCase, ListOwnLoansUseCase};
use crate::domain::auth::services::AuthService;

/// Loan application form. Malformed numbers fail extraction with a 400
/// before the workflow ever runs; the core only checks the signs.
#[derive(Deserialize)]
pub struct LoanFormData {
  amount: Decimal,
  interest_rate: Decimal,
}

/// GET /borrower - the borrower's own loans plus the application form
pub async fn dashboard(
  req: HttpRequest,
  templates: web::Data<TemplateEngine>,
  auth_service: web::Data<Arc<AuthService>>,
  own_loans_use_case: web::Data<Arc<ListOwnLoansUseCase>>,
) -> Result<HttpResponse, actix_web::Error> {
  let session = current_session(&req, &auth_service).await;

  let loans = match own_loans_use_case.execute(session.as_ref()).await {
    Ok(loans) => loans,
    Err(WorkflowError::Unauthorized) => {
      return Ok(
        HttpResponse::Found()
          .insert_header(("Location", "/login"))
          .finish(),
      );
    }
    Err(e) => return Err(actix_web::error::ErrorInternalServerError(e)),
  };

  let mut context = tera::Context::new();
  context.insert("title", "Borrower Dashboard");
  if let Some(session) = &session {
    context.insert("username", &session.username);
  }
  context.insert("loans", &loans);
  if let Some(notice) = take_flash(&req) {
    context.insert("notice", &notice);
  }

  let html = templates
    .render("pages/borrower_dashboard.html.tera", &context)
    .map_err(actix_web::error::ErrorInternalServerError)?;

  Ok(
    HttpResponse::Ok()
      .cookie(clear_flash_cookie())
      .content_type("text/html")
      .body(html),
  )
}

/// POST /borrower/apply
pub async fn apply(
  req: HttpRequest,
  form: web::Form<LoanFormData>,
  auth_service: web::Data<Arc<AuthService>>,
  use_case: web::Data<Arc<ApplyForLoanUseCase>>,
) -> Result<HttpResponse, actix_web::Error> {
  let session = current_session(&req, &auth_service).await;
  let command = ApplyForLoanCommand {
    amount: form.amount,
    interest_rate: form.interest_rate,
  };

  match use_case.execute(session.as_ref(), command).await {
    Ok(response) => Ok(
      HttpResponse::Found()
        .cookie(flash_cookie(response.notice))
        .insert_header(("Location", "/borrower"))
        .finish(),
    ),
    Err(WorkflowError::Unauthorized) => Ok(
      HttpResponse::Found()
        .insert_header(("Location", "/login"))
        .finish(),
    ),
    Err(e) if e.is_user_facing() => Ok(
      HttpResponse::Found()
        .cookie(flash_cookie(&e.to_string()))
        .insert_header(("Location", "/borrower"))
        .finish(),
    ),
    Err(e) => Err(actix_web::error::ErrorInternalServerError(e)),
  }
}
