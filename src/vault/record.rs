//! On-disk vault data model.
//!
//! A vault file is a single JSON object with two top-level fields:
//!
//! ```text
//! {"password_hash": "<hex SHA-256>", "secrets": {"<name>": "<Base32>", ...}}
//! ```
//!
//! `password_hash` is omitted before first-run setup.  Secret values are
//! stored as plaintext Base32 — the vault is **not** encrypted at rest;
//! the password digest gates the application, not the file.  Anyone with
//! read access to the file can extract every secret.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The whole durable state of a vault.
///
/// Secrets live in a `BTreeMap` so serialization order is deterministic
/// and a load/save round trip reproduces the file byte for byte.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaultRecord {
    /// Lowercase hex SHA-256 digest of the vault password.
    /// `None` only before first-run setup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,

    /// Secret name -> Base32-encoded TOTP secret.
    #[serde(default)]
    pub secrets: BTreeMap<String, String>,
}

impl VaultRecord {
    /// Returns `true` once a vault password has been set.
    pub fn is_initialized(&self) -> bool {
        self.password_hash.is_some()
    }
}
