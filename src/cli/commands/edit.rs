//! `otpvault edit` — rename a secret and/or change its value.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;

/// Execute the `edit` command.
///
/// Rename and value change apply together as one durable write.
pub fn execute(cli: &Cli, name: &str, rename: Option<&str>, value: Option<&str>) -> Result<()> {
    let mut store = open_vault(cli)?;

    store.update_secret(name, rename, value)?;

    let final_name = rename.unwrap_or(name);
    match (rename, value) {
        (Some(_), Some(_)) => output::success(&format!(
            "Secret '{name}' renamed to '{final_name}' and value updated"
        )),
        (Some(_), None) => output::success(&format!("Secret '{name}' renamed to '{final_name}'")),
        _ => output::success(&format!("Secret '{name}' value updated")),
    }

    Ok(())
}
