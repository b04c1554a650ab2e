//! One module per CLI command, each exposing an `execute` function.

pub mod add;
pub mod change_password;
pub mod delete;
pub mod edit;
pub mod list;
pub mod show;
