//! `otpvault list` — display all secret names in a table.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let store = open_vault(cli)?;

    let names = store.list_secrets();

    output::info(&format!("{} secret(s) in the vault", names.len()));
    output::print_secrets_table(&names);

    Ok(())
}
