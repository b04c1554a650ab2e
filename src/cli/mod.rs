//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::errors::{OtpVaultError, Result};
use crate::vault::VaultStore;

/// Minimum length for newly chosen vault passwords.
const MIN_PASSWORD_LEN: usize = 8;

/// OtpVault CLI: password-gated vault for TOTP secrets.
#[derive(Parser)]
#[command(
    name = "otpvault",
    about = "Password-gated vault for TOTP secrets",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the vault file (default: vault.json)
    #[arg(long, env = "OTPVAULT_FILE", default_value = "vault.json", global = true)]
    pub vault: String,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add a new secret to the vault
    Add {
        /// Secret name (e.g. github)
        name: String,
        /// Base32 secret value (omit for interactive prompt)
        value: Option<String>,
    },

    /// Rename a secret and/or change its value
    Edit {
        /// Secret name
        name: String,
        /// New name for the secret
        #[arg(long)]
        rename: Option<String>,
        /// New Base32 secret value
        #[arg(long)]
        value: Option<String>,
    },

    /// Delete a secret
    Delete {
        /// Secret name
        name: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List all secret names
    List,

    /// Show the current code for a secret with a rotation countdown
    Show {
        /// Secret name
        name: String,
    },

    /// Change the vault password
    ChangePassword,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the vault password, trying in order:
/// 1. `OTPVAULT_PASSWORD` env var (scripts/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password(prompt: &str) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("OTPVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| OtpVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new password with confirmation (first-run setup and
/// password changes).
///
/// Also respects `OTPVAULT_PASSWORD` for scripted usage.  Enforces a
/// minimum password length.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("OTPVAULT_PASSWORD") {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSWORD_LEN {
                return Err(OtpVaultError::CommandFailed(format!(
                    "password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose vault password")
            .with_confirmation("Confirm vault password", "Passwords do not match, try again")
            .interact()
            .map_err(|e| OtpVaultError::CommandFailed(format!("password prompt: {e}")))?;

        if password.len() < MIN_PASSWORD_LEN {
            output::warning(&format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Build the vault file path from the CLI arguments.
pub fn vault_path(cli: &Cli) -> PathBuf {
    PathBuf::from(&cli.vault)
}

/// Load the vault and pass the password gate.
///
/// On first run (no password set yet) this runs setup: prompts for a new
/// password and persists it.  On later runs it prompts for the password
/// and verifies it; a single wrong attempt is fatal — there is no retry
/// loop, the process stops.
pub fn open_vault(cli: &Cli) -> Result<VaultStore> {
    let path = vault_path(cli);
    let mut store = VaultStore::load(&path)?;

    if store.is_initialized() {
        let password = prompt_password("Enter vault password")?;
        store.verify_gate(&password)?;
    } else {
        output::info("No vault password set yet — setting one up.");
        let password = prompt_new_password()?;
        store.setup_password(&password)?;
        output::success(&format!("Vault password set ({})", path.display()));
    }

    Ok(store)
}
