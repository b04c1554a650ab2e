//! Base32 validation and decoding for TOTP secrets.
//!
//! Validation is a deliberately lax syntactic pre-filter: it checks the
//! character class only, not that the string actually decodes.  A value
//! can pass `is_valid` and still fail `decode` later (for example `"A"`,
//! whose length no Base32 encoding produces).  The two stages are kept
//! separate so a bad-but-well-formed secret is accepted into the vault
//! and only fails at code-generation time.

use std::sync::OnceLock;

use data_encoding::BASE32_NOPAD;
use regex::Regex;

use crate::errors::{OtpVaultError, Result};

/// Uppercase RFC 4648 alphabet, then any number of `=` padding chars.
const BASE32_PATTERN: &str = r"^[A-Z2-7]*=*$";

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(BASE32_PATTERN).expect("valid regex"))
}

/// Returns `true` if `candidate` is syntactically valid Base32.
///
/// Accepts only uppercase A-Z, digits 2-7, and trailing `=` padding.
/// No length-multiple-of-8 or canonical-padding check is performed.
/// The empty (or all-padding) string passes — callers that want to
/// reject empty secrets must check length themselves.
pub fn is_valid(candidate: &str) -> bool {
    pattern().is_match(candidate)
}

/// Decode a Base32 secret into raw key bytes.
///
/// Trailing `=` padding is stripped before decoding, matching how
/// authenticator apps treat padded and unpadded secrets as equivalent.
pub fn decode(candidate: &str) -> Result<Vec<u8>> {
    let data = candidate.trim_end_matches('=');
    BASE32_NOPAD
        .decode(data.as_bytes())
        .map_err(|e| OtpVaultError::DecodeError(format!("invalid Base32: {e}")))
}
