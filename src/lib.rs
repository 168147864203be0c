//! Loanbook: a small loan-management web application.
//!
//! Users register as admin or borrower; admins approve or reject pending
//! borrowers, and approved borrowers file loan applications for admins to
//! review. Layout is hexagonal: `domain` holds the entities, ports and
//! services, `application` the workflow use cases, `adapters` the HTTP
//! surface, and `infrastructure` the SQLite repositories, Argon2 hasher,
//! session store and configuration.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod testing;
