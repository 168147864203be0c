//! Account and session workflows: registration, the login state machine,
//! logout, and the admin approval queue.

mod approve_borrower;
mod list_pending_borrowers;
mod login_user;
mod logout_user;
mod register_account;
mod reject_borrower;

pub use approve_borrower::{ApproveBorrowerResponse, ApproveBorrowerUseCase};
pub use list_pending_borrowers::{ListPendingBorrowersUseCase, PendingBorrower};
pub use login_user::{LoginUserCommand, LoginUserResponse, LoginUserUseCase};
pub use logout_user::{LogoutUserResponse, LogoutUserUseCase};
pub use register_account::{
  RegisterAccountCommand, RegisterAccountResponse, RegisterAccountUseCase,
};
pub use reject_borrower::{RejectBorrowerResponse, RejectBorrowerUseCase};
