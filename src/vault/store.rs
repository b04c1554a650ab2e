//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` owns the in-memory `VaultRecord` for one session and is
//! the only thing that touches the vault file.  Every mutating method
//! validates first, then mutates, then rewrites the whole file, so a
//! failed operation leaves both memory and disk exactly as they were.

use std::fs;
use std::path::{Path, PathBuf};

use crate::auth;
use crate::base32;
use crate::errors::{OtpVaultError, Result};

use super::record::VaultRecord;

/// The main vault handle.  Create one with `VaultStore::load`, then use
/// its methods to manage secrets and the vault password.
pub struct VaultStore {
    /// Path to the vault JSON file on disk.
    path: PathBuf,

    /// The in-memory record, kept consistent with the last save.
    record: VaultRecord,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Load a vault from `path`.
    ///
    /// A missing file is a fresh vault (empty record, no password set).
    /// A file that exists but cannot be parsed is surfaced as
    /// `CorruptVault` — never silently replaced with an empty vault.
    pub fn load(path: &Path) -> Result<Self> {
        let record = if path.exists() {
            let data = fs::read(path)?;
            serde_json::from_slice(&data).map_err(|e| {
                OtpVaultError::CorruptVault(format!("{} is not a valid vault: {e}", path.display()))
            })?
        } else {
            VaultRecord::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            record,
        })
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize the whole record and write it to disk atomically.
    ///
    /// Writes to a temp file in the same directory, then renames it over
    /// the target path so readers never see a half-written file.
    pub fn save(&self) -> Result<()> {
        let bytes = serde_json::to_vec(&self.record)
            .map_err(|e| OtpVaultError::SerializationError(format!("vault record: {e}")))?;

        let parent = self.path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
        ));

        fs::write(&tmp_path, &bytes)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    // ------------------------------------------------------------------
    // Password operations
    // ------------------------------------------------------------------

    /// Set the vault password during first-run setup and persist.
    ///
    /// Only valid while no password has been set yet.
    pub fn setup_password(&mut self, password: &str) -> Result<()> {
        if self.record.is_initialized() {
            return Err(OtpVaultError::CommandFailed(
                "vault password is already set — use `change-password`".into(),
            ));
        }
        self.record.password_hash = Some(auth::hash_password(password));
        self.save()
    }

    /// Check the password against the stored digest.
    ///
    /// Failure is fatal at this layer: there is no retry loop, the
    /// caller is expected to stop the process.
    pub fn verify_gate(&self, password: &str) -> Result<()> {
        match &self.record.password_hash {
            Some(digest) if auth::verify_password(password, digest) => Ok(()),
            _ => Err(OtpVaultError::AuthFailure),
        }
    }

    /// Replace the vault password after verifying the current one.
    ///
    /// A wrong current password changes nothing, in memory or on disk.
    pub fn change_password(&mut self, current: &str, new: &str) -> Result<()> {
        let verified = matches!(
            &self.record.password_hash,
            Some(digest) if auth::verify_password(current, digest)
        );
        if !verified {
            return Err(OtpVaultError::InvalidCurrentPassword);
        }
        self.record.password_hash = Some(auth::hash_password(new));
        self.save()
    }

    // ------------------------------------------------------------------
    // Secret operations
    // ------------------------------------------------------------------

    /// Add a new secret and persist.
    ///
    /// Fails with `DuplicateName` if the name is taken and with
    /// `InvalidSecret` if the value is not syntactically Base32.
    pub fn create_secret(&mut self, name: &str, value: &str) -> Result<()> {
        Self::validate_secret_name(name)?;
        if self.record.secrets.contains_key(name) {
            return Err(OtpVaultError::DuplicateName(name.to_string()));
        }
        if !base32::is_valid(value) {
            return Err(OtpVaultError::InvalidSecret);
        }

        self.record
            .secrets
            .insert(name.to_string(), value.to_string());
        self.save()
    }

    /// Rename and/or change the value of an existing secret.
    ///
    /// At least one of `new_name` / `new_value` must be given.  Both
    /// changes land together as a single durable write — there is no
    /// persisted intermediate state where old and new names coexist.
    pub fn update_secret(
        &mut self,
        name: &str,
        new_name: Option<&str>,
        new_value: Option<&str>,
    ) -> Result<()> {
        if new_name.is_none() && new_value.is_none() {
            return Err(OtpVaultError::NothingToUpdate);
        }
        if !self.record.secrets.contains_key(name) {
            return Err(OtpVaultError::SecretNotFound(name.to_string()));
        }

        // Validate everything before touching the record.
        if let Some(target) = new_name {
            Self::validate_secret_name(target)?;
            if target != name && self.record.secrets.contains_key(target) {
                return Err(OtpVaultError::DuplicateName(target.to_string()));
            }
        }
        if let Some(value) = new_value {
            if !base32::is_valid(value) {
                return Err(OtpVaultError::InvalidSecret);
            }
        }

        let mut value = match self.record.secrets.remove(name) {
            Some(v) => v,
            None => return Err(OtpVaultError::SecretNotFound(name.to_string())),
        };
        if let Some(v) = new_value {
            value = v.to_string();
        }
        let key = new_name.unwrap_or(name).to_string();
        self.record.secrets.insert(key, value);

        self.save()
    }

    /// Remove a secret and persist.
    pub fn delete_secret(&mut self, name: &str) -> Result<()> {
        if self.record.secrets.remove(name).is_none() {
            return Err(OtpVaultError::SecretNotFound(name.to_string()));
        }
        self.save()
    }

    /// Look up a secret's Base32 value.
    pub fn get_secret(&self, name: &str) -> Result<&str> {
        self.record
            .secrets
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| OtpVaultError::SecretNotFound(name.to_string()))
    }

    /// List all secret names, sorted.  Display only — ordering is not a
    /// semantic contract.
    pub fn list_secrets(&self) -> Vec<String> {
        self.record.secrets.keys().cloned().collect()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` once a vault password has been set.
    pub fn is_initialized(&self) -> bool {
        self.record.is_initialized()
    }

    /// Returns the number of secrets in the vault.
    pub fn secret_count(&self) -> usize {
        self.record.secrets.len()
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Input length limit for secret names at the UI boundary.
    ///
    /// Must be non-empty and at most 256 characters.
    fn validate_secret_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(OtpVaultError::CommandFailed(
                "secret name cannot be empty".into(),
            ));
        }
        if name.len() > 256 {
            return Err(OtpVaultError::CommandFailed(
                "secret name cannot exceed 256 characters".into(),
            ));
        }
        Ok(())
    }
}
