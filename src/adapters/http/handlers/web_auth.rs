use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::adapters::http::session::{
  SESSION_COOKIE, clear_session_cookie, flash_cookie, session_cookie,
};
use crate::application::auth::{
  LoginUserCommand, LoginUserUseCase, LogoutUserUseCase, RegisterAccountCommand,
  RegisterAccountUseCase,
};
use crate::application::errors::WorkflowError;
use crate::domain::auth::value_objects::Role;

#[derive(Deserialize)]
pub struct LoginFormData {
  username: String,
  password: String,
  role: String,
}

#[derive(Deserialize)]
pub struct RegisterFormData {
  username: String,
  password: String,
  role: String,
}

/// Handle login form submission
pub async fn login_submit(
  form: web::Form<LoginFormData>,
  use_case: web::Data<Arc<LoginUserUseCase>>,
) -> Result<HttpResponse, actix_web::Error> {
  let form = form.into_inner();
  let command = LoginUserCommand {
    username: form.username,
    password: form.password,
    role: form.role,
  };

  match use_case.execute(command).await {
    Ok(response) => {
      tracing::info!(username = %response.username, role = %response.role, "login successful");

      let target = match response.role {
        Role::Admin => "/admin",
        Role::Borrower => "/borrower",
      };

      Ok(
        HttpResponse::Found()
          .cookie(session_cookie(response.session_token))
          .insert_header(("Location", target))
          .finish(),
      )
    }
    Err(e) if e.is_user_facing() => Ok(
      HttpResponse::Found()
        .cookie(flash_cookie(&e.to_string()))
        .insert_header(("Location", "/login"))
        .finish(),
    ),
    Err(e) => Err(actix_web::error::ErrorInternalServerError(e)),
  }
}

/// Handle registration form submission. Never establishes a session; the
/// user is sent to the login form with a role-appropriate notice.
pub async fn register_submit(
  form: web::Form<RegisterFormData>,
  use_case: web::Data<Arc<RegisterAccountUseCase>>,
) -> Result<HttpResponse, actix_web::Error> {
  let form = form.into_inner();
  let command = RegisterAccountCommand {
    username: form.username,
    password: form.password,
    role: form.role,
  };

  match use_case.execute(command).await {
    Ok(response) => Ok(
      HttpResponse::Found()
        .cookie(flash_cookie(response.notice))
        .insert_header(("Location", "/login"))
        .finish(),
    ),
    Err(e) if e.is_user_facing() => Ok(
      HttpResponse::Found()
        .cookie(flash_cookie(&e.to_string()))
        .insert_header(("Location", "/register"))
        .finish(),
    ),
    Err(e) => Err(actix_web::error::ErrorInternalServerError(e)),
  }
}

/// Handle logout: clear the server-side session and the cookie
pub async fn logout(
  req: HttpRequest,
  use_case: web::Data<Arc<LogoutUserUseCase>>,
) -> Result<HttpResponse, actix_web::Error> {
  let token = req
    .cookie(SESSION_COOKIE)
    .map(|c| c.value().to_string())
    .unwrap_or_default();

  let response = use_case
    .execute(&token)
    .await
    .map_err(|e: WorkflowError| actix_web::error::ErrorInternalServerError(e))?;

  Ok(
    HttpResponse::Found()
      .cookie(clear_session_cookie())
      .cookie(flash_cookie(response.notice))
      .insert_header(("Location", "/login"))
      .finish(),
  )
}
