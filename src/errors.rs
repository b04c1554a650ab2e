use thiserror::Error;

/// All errors that can occur in OtpVault.
#[derive(Debug, Error)]
pub enum OtpVaultError {
    // --- Vault errors ---
    #[error("Vault file is corrupt: {0}")]
    CorruptVault(String),

    #[error("Secret '{0}' not found")]
    SecretNotFound(String),

    #[error("Secret '{0}' already exists (use `edit` to change it)")]
    DuplicateName(String),

    #[error(
        "Secret value is not valid Base32 — only A-Z, 2-7, and trailing '=' padding are allowed"
    )]
    InvalidSecret,

    #[error("Nothing to update — pass --rename and/or --value")]
    NothingToUpdate,

    // --- TOTP errors ---
    #[error("Cannot generate a code for this secret: {0}")]
    DecodeError(String),

    // --- Auth errors ---
    #[error("Invalid password")]
    AuthFailure,

    #[error("Invalid current password")]
    InvalidCurrentPassword,

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

impl OtpVaultError {
    /// Process exit status for this error.
    ///
    /// A failed password check is fatal and uses a distinguished status
    /// so scripts can tell it apart from ordinary command failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AuthFailure => 2,
            _ => 1,
        }
    }
}

/// Convenience type alias for OtpVault results.
pub type Result<T> = std::result::Result<T, OtpVaultError>;
