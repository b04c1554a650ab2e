pub mod auth;
pub mod base32;
pub mod cli;
pub mod errors;
pub mod totp;
pub mod vault;
