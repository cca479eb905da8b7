//! Counter block handling.

use cipher::generic_array::{ArrayLength, GenericArray};

/// Width in bytes of the block counter at the end of a counter block.
pub(crate) const COUNTER_LEN: usize = 4;

/// An owned counter block of `N` bytes: a fixed nonce prefix of `N - 4`
/// bytes followed by a 32-bit big-endian block counter.
///
/// The prefix is written once at construction and never touched again;
/// [`increment`](Self::increment) only mutates the trailing four bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CounterBlock<N: ArrayLength<u8>> {
    block: GenericArray<u8, N>,
}

impl<N: ArrayLength<u8>> CounterBlock<N> {
    /// Builds the initial counter block for a fresh encryption: the nonce
    /// fills the first `N - 4` bytes and the counter starts at 1.
    ///
    /// Returns `None` if the nonce is not exactly `N - 4` bytes long, or if
    /// `N` is too small to hold a counter at all.
    pub fn from_nonce(nonce: &[u8]) -> Option<Self> {
        let prefix_len = N::USIZE.checked_sub(COUNTER_LEN)?;
        if nonce.len() != prefix_len {
            return None;
        }
        let mut block = GenericArray::<u8, N>::default();
        block[..prefix_len].copy_from_slice(nonce);
        block[prefix_len..].copy_from_slice(&1u32.to_be_bytes());
        Some(Self { block })
    }

    /// Wraps a raw block, e.g. to resume from a known counter value.
    pub fn from_block(block: GenericArray<u8, N>) -> Self {
        Self { block }
    }

    /// Adds 1 to the block counter, wrapping modulo 2^32 once it reaches
    /// `0xFFFF_FFFF`. The nonce prefix is left unchanged.
    pub fn increment(&mut self) {
        let tail = &mut self.block[N::USIZE - COUNTER_LEN..];
        let value = u32::from_be_bytes([tail[0], tail[1], tail[2], tail[3]]).wrapping_add(1);
        tail.copy_from_slice(&value.to_be_bytes());
    }

    /// Returns a copy of the current counter block, ready to be encrypted
    /// into a keystream mask.
    pub fn to_block(&self) -> GenericArray<u8, N> {
        self.block.clone()
    }

    /// The counter block bytes.
    pub fn as_slice(&self) -> &[u8] {
        self.block.as_slice()
    }
}

impl<N: ArrayLength<u8>> AsRef<[u8]> for CounterBlock<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
