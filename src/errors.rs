//! Error types.

use core::fmt;

/// Errors produced by the CTR construction.
///
/// Every failure is reported before any keystream is applied; an `Err`
/// result means no ciphertext was produced.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The underlying block cipher rejected the key.
    InvalidKeyLength,
    /// The nonce is not exactly block size minus four bytes long.
    InvalidNonceLength,
    /// The input needs more keystream blocks than the 32-bit counter can
    /// count, which would reuse counter values within a single call.
    PlaintextTooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength => f.write_str("invalid key length"),
            Error::InvalidNonceLength => f.write_str("invalid nonce length"),
            Error::PlaintextTooLarge => f.write_str("plaintext exceeds counter space"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
