pub mod admin_web;
pub mod borrower_web;
pub mod pages;
pub mod web_auth;
