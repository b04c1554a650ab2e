//! `otpvault change-password` — replace the vault password.
//!
//! Requires the current password; a wrong current password changes
//! nothing and does not rewrite the vault file.

use crate::cli::output;
use crate::cli::{prompt_new_password, prompt_password, vault_path, Cli};
use crate::errors::{OtpVaultError, Result};
use crate::vault::VaultStore;

/// Execute the `change-password` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = vault_path(cli);
    let mut store = VaultStore::load(&path)?;

    if !store.is_initialized() {
        return Err(OtpVaultError::CommandFailed(
            "no vault password set yet — run any command to set one first".into(),
        ));
    }

    // 1. Verify the current password before prompting for a new one.
    let current = prompt_password("Enter current vault password")?;
    if store.verify_gate(&current).is_err() {
        return Err(OtpVaultError::InvalidCurrentPassword);
    }

    // 2. Prompt for the new password (with confirmation) and persist.
    let new = prompt_new_password()?;
    store.change_password(&current, &new)?;

    output::success("Vault password changed");

    Ok(())
}
