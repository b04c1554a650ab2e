//! RFC 6238 TOTP code generation with fixed parameters:
//! HMAC-SHA1, 6 digits, 30-second time step, Unix epoch.
//!
//! `current_code` is a pure function of `(secret, at)` — no caching, no
//! clock access.  Callers sample the clock and call it again on every
//! display tick so the countdown tracks wall-clock time.

use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::base32;
use crate::errors::{OtpVaultError, Result};

/// Length of a TOTP time step in seconds.
pub const TIME_STEP: u64 = 30;

/// Number of digits in a generated code.
pub const DIGITS: u32 = 6;

/// A generated code and the seconds left until it rotates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotpCode {
    /// Zero-padded 6-digit code, e.g. `"007081"`.
    pub code: String,
    /// Seconds until the next step boundary, in `1..=30`.
    pub seconds_remaining: u64,
}

/// Generate the TOTP code for `secret` at Unix time `at` (seconds).
///
/// The secret must be Base32; a value that passed the syntactic
/// pre-filter can still fail here with a `DecodeError`.
pub fn current_code(secret: &str, at: u64) -> Result<TotpCode> {
    let key = base32::decode(secret)?;

    let counter = at / TIME_STEP;
    let message = counter.to_be_bytes();

    let mut mac = Hmac::<Sha1>::new_from_slice(&key)
        .map_err(|e| OtpVaultError::DecodeError(format!("invalid HMAC key: {e}")))?;
    mac.update(&message);
    let digest = mac.finalize().into_bytes();

    // Dynamic truncation (RFC 4226 §5.3): the low nibble of the last
    // byte picks a 4-byte window; the top bit is masked off to keep the
    // value a non-negative 31-bit integer.
    let offset = usize::from(digest[19] & 0x0f);
    let p = (u32::from(digest[offset] & 0x7f) << 24)
        | (u32::from(digest[offset + 1]) << 16)
        | (u32::from(digest[offset + 2]) << 8)
        | u32::from(digest[offset + 3]);

    let code = format!("{:06}", p % 1_000_000);

    let next_boundary = (counter + 1) * TIME_STEP;
    let seconds_remaining = next_boundary - at;

    Ok(TotpCode {
        code,
        seconds_remaining,
    })
}
