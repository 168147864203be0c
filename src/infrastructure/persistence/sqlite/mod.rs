pub mod account_repository;
pub mod loan_repository;

pub use account_repository::SqliteAccountRepository;
pub use loan_repository::SqliteLoanRepository;
