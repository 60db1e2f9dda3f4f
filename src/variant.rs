//======================================================================
// src/variant.rs
// Defines the key-size parameter sets for the three TinyJambu variants.
//======================================================================

use aead::consts::{U16, U24, U32, U4, U6, U8};
use aead::generic_array::ArrayLength;

/// Parameters that distinguish the TinyJambu variants.
///
/// The three variants share the 128-bit permutation state, the 96-bit nonce
/// and the 64-bit tag; they differ only in how many key words the feedback
/// schedule cycles through and how many rounds the keyed permutation runs
/// for the heavyweight sweeps.
pub trait TinyJambuVariant: Sized + Clone {
    /// Secret key size in bytes.
    type KeySize: ArrayLength<u8>;
    /// Packed key schedule length in 32-bit words.
    type KeyWords: ArrayLength<u32>;
    const KEY_WORDS: usize;

    /// Round count for key setup, each message block and the first half of
    /// the tag. The lightweight sweeps (nonce columns, associated-data
    /// blocks, second tag half) always run [`crate::consts::SHORT_ROUNDS`].
    const LONG_ROUNDS: usize;
}

/// TinyJambu with a 128-bit secret key.
#[derive(Clone)]
pub struct TinyJambu128;
impl TinyJambuVariant for TinyJambu128 {
    type KeySize = U16;
    type KeyWords = U4;
    const KEY_WORDS: usize = 4;
    const LONG_ROUNDS: usize = 1024;
}

/// TinyJambu with a 192-bit secret key.
#[derive(Clone)]
pub struct TinyJambu192;
impl TinyJambuVariant for TinyJambu192 {
    type KeySize = U24;
    type KeyWords = U6;
    const KEY_WORDS: usize = 6;
    const LONG_ROUNDS: usize = 1152;
}

/// TinyJambu with a 256-bit secret key.
#[derive(Clone)]
pub struct TinyJambu256;
impl TinyJambuVariant for TinyJambu256 {
    type KeySize = U32;
    type KeyWords = U8;
    const KEY_WORDS: usize = 8;
    const LONG_ROUNDS: usize = 1280;
}
