//! `otpvault add` — add a new secret to the vault.

use std::io::{self, IsTerminal, Read};

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{OtpVaultError, Result};

/// Execute the `add` command.
pub fn execute(cli: &Cli, name: &str, value: Option<&str>) -> Result<()> {
    // Determine the secret value from one of three sources.
    let secret_value = if let Some(v) = value {
        // Source 1: Inline value on the command line.
        output::warning("Value provided on command line — it may appear in shell history.");
        v.to_string()
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim_end().to_string()
    } else {
        // Source 3: Interactive hidden prompt (default).
        dialoguer::Password::new()
            .with_prompt(format!("Enter Base32 secret for {name}"))
            .interact()
            .map_err(|e| OtpVaultError::CommandFailed(format!("input prompt: {e}")))?
    };

    let mut store = open_vault(cli)?;
    store.create_secret(name, &secret_value)?;

    output::success(&format!(
        "Secret '{}' added ({} total)",
        name,
        store.secret_count()
    ));
    output::tip(&format!("Run `otpvault show {name}` to see its code."));

    Ok(())
}
