//! CTR (counter) mode of operation with a 32-bit big-endian block counter,
//! generic over block ciphers implementing the traits of the re-exported
//! [`cipher`] crate.
//!
//! The counter block is a caller-supplied nonce of block size minus four
//! bytes followed by a 32-bit big-endian counter that starts at 1 and wraps
//! modulo 2^32. Each keystream block is the block-cipher encryption of the
//! current counter block; encryption XORs the keystream against the
//! plaintext, and decryption is the identical operation.
//!
//! # ⚠️ Security Warning: Hazmat!
//!
//! This crate does not ensure ciphertexts are authentic! Thus ciphertext
//! integrity is not verified, which can lead to serious vulnerabilities!
//!
//! Additionally, a nonce must never be used more than once with the same
//! key: reusing a (key, nonce) pair reuses the keystream and breaks
//! confidentiality completely. Nonce uniqueness is the caller's
//! responsibility; this crate does not track previously used nonces.
//!
//! USE AT YOUR OWN RISK!
//!
//! # Example
//! ```
//! use aes::Aes128;
//! use ctr32::Ctr32;
//! use hex_literal::hex;
//!
//! let key = hex!("2b7e151628aed2a6abf7158809cf4f3c");
//! // AES has 16-byte blocks, so nonces are 12 bytes
//! let nonce = hex!("f0f1f2f3f4f5f6f7f8f9fafb");
//!
//! let cipher = Ctr32::<Aes128>::new_from_slice(&key)?;
//! let ciphertext = cipher.encrypt(&nonce, b"hello world")?;
//! assert_eq!(ciphertext.len(), b"hello world".len());
//!
//! // CTR mode is its own inverse
//! let recovered = cipher.decrypt(&nonce, &ciphertext)?;
//! assert_eq!(recovered, b"hello world");
//! # Ok::<(), ctr32::Error>(())
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, trivial_casts, unused_qualifications)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use cipher;

mod counter;
mod errors;

pub use counter::CounterBlock;
pub use errors::Error;

use alloc::vec;
use alloc::vec::Vec;
use cipher::generic_array::typenum::Unsigned;
use cipher::{BlockCipher, BlockEncrypt, KeyInit};
use core::fmt;
use counter::COUNTER_LEN;

/// XORs `mask` into `buf`, combining the first `min(buf.len(), mask.len())`
/// bytes. Applying the same mask twice restores the original bytes.
#[inline(always)]
pub fn xor(buf: &mut [u8], mask: &[u8]) {
    for (a, b) in buf.iter_mut().zip(mask) {
        *a ^= *b;
    }
}

/// CTR mode with a 32-bit big-endian counter over the block cipher `C`.
///
/// Every call to [`encrypt`](Self::encrypt) builds its own counter state
/// from the given nonce; no state is carried between calls, so a single
/// instance may be shared freely across threads.
#[derive(Clone)]
pub struct Ctr32<C>
where
    C: BlockCipher + BlockEncrypt,
{
    cipher: C,
}

impl<C> Ctr32<C>
where
    C: BlockCipher + BlockEncrypt,
{
    /// Wraps an already-initialized block cipher instance.
    ///
    /// # Panics
    ///
    /// Panics if the cipher's block size is four bytes or less, which leaves
    /// no room for a nonce prefix in the counter block.
    pub fn new(cipher: C) -> Self {
        assert!(
            C::BlockSize::USIZE > COUNTER_LEN,
            "block size too small for a 32-bit counter"
        );
        Self { cipher }
    }

    /// Initializes the underlying block cipher from a key given as a byte
    /// slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyLength`] if the block cipher rejects the
    /// key.
    pub fn new_from_slice(key: &[u8]) -> Result<Self, Error>
    where
        C: KeyInit,
    {
        let cipher = C::new_from_slice(key).map_err(|_| Error::InvalidKeyLength)?;
        Ok(Self::new(cipher))
    }

    /// Nonce length in bytes required by [`encrypt`](Self::encrypt): the
    /// cipher's block size minus the four counter bytes.
    pub fn nonce_size() -> usize {
        C::BlockSize::USIZE - COUNTER_LEN
    }

    /// Encrypts `plaintext` under the given nonce, returning a ciphertext of
    /// exactly the same length.
    ///
    /// The input is copied into an internal working buffer padded to a whole
    /// number of blocks; each block is XORed with the encrypted counter
    /// block and the counter is incremented once per block. The padding is
    /// truncated away before returning, so block boundaries never leak into
    /// the output. Caller-supplied slices are never mutated.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidNonceLength`] if `nonce` is not exactly
    ///   [`nonce_size`](Self::nonce_size) bytes. Mismatched nonces are
    ///   rejected rather than truncated or zero-padded, since a silently
    ///   shortened nonce shrinks the effective counter space.
    /// - [`Error::PlaintextTooLarge`] if the input needs more keystream
    ///   blocks than the 32-bit counter can count, which would cycle the
    ///   counter within this call.
    pub fn encrypt(&self, nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, Error> {
        let bs = C::BlockSize::USIZE;
        let mut counter =
            CounterBlock::<C::BlockSize>::from_nonce(nonce).ok_or(Error::InvalidNonceLength)?;

        let block_count = plaintext.len().div_ceil(bs);
        if block_count as u64 > u64::from(u32::MAX) {
            return Err(Error::PlaintextTooLarge);
        }

        let mut buf = vec![0u8; block_count * bs];
        buf[..plaintext.len()].copy_from_slice(plaintext);

        for chunk in buf.chunks_mut(bs) {
            let mut mask = counter.to_block();
            self.cipher.encrypt_block(&mut mask);
            xor(chunk, mask.as_slice());
            counter.increment();
        }

        buf.truncate(plaintext.len());
        Ok(buf)
    }

    /// Decrypts `ciphertext` under the given nonce.
    ///
    /// CTR mode is its own inverse, so this is the same keystream
    /// application as [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    ///
    /// Same as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, nonce: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
        self.encrypt(nonce, ciphertext)
    }
}

impl<C> fmt::Debug for Ctr32<C>
where
    C: BlockCipher + BlockEncrypt,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ctr32 { .. }")
    }
}
