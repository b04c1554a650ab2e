//! Password digest and verification for the vault gate.
//!
//! The digest is a single unsalted SHA-256 over the UTF-8 bytes of the
//! password, hex-encoded.  This is deliberately kept for compatibility
//! with existing vault files, and it is a known weakness: without a salt
//! or an iterated KDF, the digest is cheap to attack offline.  The vault
//! file itself is not encrypted either — the digest gates the
//! application, not the file.

use data_encoding::HEXLOWER;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Compute the vault password digest: lowercase hex SHA-256.
///
/// Deterministic — the same password always produces the same digest.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    HEXLOWER.encode(digest.as_slice())
}

/// Check a password against a stored digest in constant time.
pub fn verify_password(password: &str, stored_digest: &str) -> bool {
    let computed = hash_password(password);
    computed.as_bytes().ct_eq(stored_digest.as_bytes()).into()
}
