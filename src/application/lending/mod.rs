//! Loan workflows: filing applications and the dashboard listings.

mod apply_for_loan;
mod list_loans;
mod list_own_loans;

pub use apply_for_loan::{ApplyForLoanCommand, ApplyForLoanResponse, ApplyForLoanUseCase};
pub use list_loans::{ListLoansUseCase, LoanSummary};
pub use list_own_loans::ListOwnLoansUseCase;
