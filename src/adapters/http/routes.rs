use actix_web::web;
use std::sync::Arc;

use crate::application::auth::{
  ApproveBorrowerUseCase, ListPendingBorrowersUseCase, LoginUserUseCase, LogoutUserUseCase,
  RegisterAccountUseCase, RejectBorrowerUseCase,
};
use crate::application::lending::{ApplyForLoanUseCase, ListLoansUseCase, ListOwnLoansUseCase};
use crate::domain::auth::services::AuthService;

use super::handlers::{admin_web, borrower_web, pages, web_auth};
use super::templates::TemplateEngine;

/// Everything the web routes need, wired once in main
#[derive(Clone)]
pub struct WebRouteDependencies {
  pub templates: TemplateEngine,
  pub auth_service: Arc<AuthService>,
  pub register_use_case: Arc<RegisterAccountUseCase>,
  pub login_use_case: Arc<LoginUserUseCase>,
  pub logout_use_case: Arc<LogoutUserUseCase>,
  pub approve_use_case: Arc<ApproveBorrowerUseCase>,
  pub reject_use_case: Arc<RejectBorrowerUseCase>,
  pub pending_use_case: Arc<ListPendingBorrowersUseCase>,
  pub apply_use_case: Arc<ApplyForLoanUseCase>,
  pub loans_use_case: Arc<ListLoansUseCase>,
  pub own_loans_use_case: Arc<ListOwnLoansUseCase>,
}

/// Configure the web UI routes
///
/// # Routes
///
/// - GET  /          - entry, routes by session to a dashboard or login
/// - GET  /login     - login form
/// - POST /login     - authenticate, set session cookie
/// - GET  /register  - registration form
/// - POST /register  - create an account (no session)
/// - POST /logout    - clear session
/// - GET  /admin     - admin dashboard (pending borrowers + all loans)
/// - POST /admin/approve/{id} - approve a pending borrower
/// - POST /admin/reject/{id}  - reject and remove a borrower
/// - GET  /borrower  - borrower dashboard (own loans + application form)
/// - POST /borrower/apply     - file a loan application
/// - GET  /health    - health check
pub fn configure_web_routes(cfg: &mut web::ServiceConfig, deps: WebRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.templates))
    .app_data(web::Data::new(deps.auth_service))
    .app_data(web::Data::new(deps.register_use_case))
    .app_data(web::Data::new(deps.login_use_case))
    .app_data(web::Data::new(deps.logout_use_case))
    .app_data(web::Data::new(deps.approve_use_case))
    .app_data(web::Data::new(deps.reject_use_case))
    .app_data(web::Data::new(deps.pending_use_case))
    .app_data(web::Data::new(deps.apply_use_case))
    .app_data(web::Data::new(deps.loans_use_case))
    .app_data(web::Data::new(deps.own_loans_use_case))
    .route("/", web::get().to(pages::index))
    .route("/login", web::get().to(pages::login_page))
    .route("/login", web::post().to(web_auth::login_submit))
    .route("/register", web::get().to(pages::register_page))
    .route("/register", web::post().to(web_auth::register_submit))
    .route("/logout", web::post().to(web_auth::logout))
    .route("/admin", web::get().to(admin_web::dashboard))
    .route("/admin/approve/{id}", web::post().to(admin_web::approve))
    .route("/admin/reject/{id}", web::post().to(admin_web::reject))
    .route("/borrower", web::get().to(borrower_web::dashboard))
    .route("/borrower/apply", web::post().to(borrower_web::apply))
    .route("/health", web::get().to(pages::health_check));
}
