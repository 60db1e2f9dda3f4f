//======================================================================
// src/tinyjambu.rs
// The TinyJambu AEAD mode: phase schedule and trait implementations.
//======================================================================

use aead::consts::{U0, U12, U8};
use aead::generic_array::GenericArray;
use aead::{AeadCore, AeadInPlace, Error, Key, KeyInit, KeySizeUser, Nonce, Result, Tag};
use core::marker::PhantomData;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::backends;
use crate::consts::{
    FRAMEBITS_AD, FRAMEBITS_NONCE, FRAMEBITS_TAG, FRAMEBITS_TEXT, STATE_WORDS,
};
use crate::variant::TinyJambuVariant;

/// The packed little-endian key schedule of a variant.
type KeyWords<V> = GenericArray<u32, <V as TinyJambuVariant>::KeyWords>;

/// TinyJambu authenticated encryption with associated data.
///
/// The key is packed into 32-bit words once at construction and wiped when
/// the cipher is dropped. Each encrypt/decrypt call runs the full schedule
/// (key setup, nonce, associated data, text, tag) over a fresh zeroed state,
/// so a single instance may be shared freely across messages as long as
/// every `(key, nonce)` pair stays unique.
#[derive(Clone)]
pub struct TinyJambuAead<V: TinyJambuVariant> {
    key: KeyWords<V>,
    _variant: PhantomData<V>,
}

impl<V: TinyJambuVariant> KeySizeUser for TinyJambuAead<V> {
    type KeySize = V::KeySize;
}

impl<V: TinyJambuVariant> KeyInit for TinyJambuAead<V> {
    fn new(key: &Key<Self>) -> Self {
        let mut words = KeyWords::<V>::default();
        for (word, chunk) in words.iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_le_bytes(chunk.try_into().unwrap());
        }

        Self {
            key: words,
            _variant: PhantomData,
        }
    }
}

impl<V: TinyJambuVariant> AeadCore for TinyJambuAead<V> {
    type NonceSize = U12;
    type TagSize = U8;
    type CiphertextOverhead = U0;
}

impl<V: TinyJambuVariant> AeadInPlace for TinyJambuAead<V> {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> Result<Tag<Self>> {
        let mut state = [0u32; STATE_WORDS];

        initialize::<V>(&mut state, &self.key, nonce);
        absorb::<V>(&mut state, &self.key, associated_data);
        crypt_in_place::<V>(&mut state, &self.key, buffer, true);

        let mut tag = Tag::<Self>::default();
        finalize::<V>(&mut state, &self.key, &mut tag);
        state.zeroize();

        Ok(tag)
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> Result<()> {
        let mut state = [0u32; STATE_WORDS];

        initialize::<V>(&mut state, &self.key, nonce);
        absorb::<V>(&mut state, &self.key, associated_data);
        crypt_in_place::<V>(&mut state, &self.key, buffer, false);

        let mut expected = Tag::<Self>::default();
        finalize::<V>(&mut state, &self.key, &mut expected);

        // Examines all eight byte pairs with no early exit. Wipe the
        // transient material before branching on the verdict.
        let ok = expected.ct_eq(tag).unwrap_u8() == 1;
        expected.as_mut_slice().zeroize();
        state.zeroize();

        if ok {
            Ok(())
        } else {
            // The buffer now holds unverified plaintext; callers never get
            // to see it.
            buffer.zeroize();
            Err(Error)
        }
    }
}

impl<V: TinyJambuVariant> Drop for TinyJambuAead<V> {
    fn drop(&mut self) {
        self.key.as_mut_slice().zeroize();
    }
}

impl<V: TinyJambuVariant> ZeroizeOnDrop for TinyJambuAead<V> {}

/// Key setup followed by the three nonce columns.
///
/// Expects `state` zeroed; runs the heavyweight sweep keyed by the packed
/// schedule, then per 32-bit nonce column mixes the nonce framebits into
/// `s[1]`, permutes and folds the column into `s[3]`.
fn initialize<V: TinyJambuVariant>(
    state: &mut [u32; STATE_WORDS],
    key: &KeyWords<V>,
    nonce: &Nonce<TinyJambuAead<V>>,
) {
    backends::permute_long::<V>(state, key);

    for column in nonce.chunks_exact(4) {
        state[1] ^= FRAMEBITS_NONCE;
        backends::permute_short::<V>(state, key);
        state[3] ^= u32::from_le_bytes(column.try_into().unwrap());
    }
}

/// Mixes the associated data into the state, one 32-bit block at a time.
///
/// A trailing 1-3 byte block is zero-extended before folding, and its byte
/// count is additionally mixed into `s[1]` so that differently-padded inputs
/// cannot collide.
fn absorb<V: TinyJambuVariant>(state: &mut [u32; STATE_WORDS], key: &KeyWords<V>, data: &[u8]) {
    let mut blocks = data.chunks_exact(4);

    for block in blocks.by_ref() {
        state[1] ^= FRAMEBITS_AD;
        backends::permute_short::<V>(state, key);
        state[3] ^= u32::from_le_bytes(block.try_into().unwrap());
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        state[1] ^= FRAMEBITS_AD;
        backends::permute_short::<V>(state, key);
        state[3] ^= from_le_partial(tail);
        state[1] ^= tail.len() as u32;
    }
}

/// Encrypts or decrypts the buffer in place.
///
/// Either way the output word is `s[2] ^ input`, and the word fed back into
/// `s[3]` is the plaintext: the input itself when encrypting, the freshly
/// decrypted word otherwise. For a partial tail only the low `8 * n` bits may
/// feed back; the encrypt side gets that for free from the zero-extended
/// load, the decrypt side has to mask out the keystream bytes that carried
/// no ciphertext.
fn crypt_in_place<V: TinyJambuVariant>(
    state: &mut [u32; STATE_WORDS],
    key: &KeyWords<V>,
    buffer: &mut [u8],
    encrypting: bool,
) {
    let mut blocks = buffer.chunks_exact_mut(4);

    for block in blocks.by_ref() {
        state[1] ^= FRAMEBITS_TEXT;
        backends::permute_long::<V>(state, key);

        let word = u32::from_le_bytes((&*block).try_into().unwrap());
        let out = state[2] ^ word;
        state[3] ^= if encrypting { word } else { out };
        block.copy_from_slice(&out.to_le_bytes());
    }

    let tail = blocks.into_remainder();
    if !tail.is_empty() {
        state[1] ^= FRAMEBITS_TEXT;
        backends::permute_long::<V>(state, key);

        let word = from_le_partial(tail);
        let out = state[2] ^ word;
        let mask = u32::MAX >> (32 - 8 * tail.len());
        state[3] ^= if encrypting { word } else { out & mask };

        for (i, byte) in tail.iter_mut().enumerate() {
            *byte = (out >> (8 * i)) as u8;
        }
        state[1] ^= tail.len() as u32;
    }
}

/// Squeezes the 64-bit tag out of `s[2]` in two framebit-separated halves.
fn finalize<V: TinyJambuVariant>(state: &mut [u32; STATE_WORDS], key: &KeyWords<V>, tag: &mut [u8]) {
    state[1] ^= FRAMEBITS_TAG;
    backends::permute_long::<V>(state, key);
    tag[..4].copy_from_slice(&state[2].to_le_bytes());

    state[1] ^= FRAMEBITS_TAG;
    backends::permute_short::<V>(state, key);
    tag[4..].copy_from_slice(&state[2].to_le_bytes());
}

/// Little-endian load of a 1-3 byte tail, zero-extended to a full word.
#[inline(always)]
fn from_le_partial(bytes: &[u8]) -> u32 {
    let mut word = 0u32;
    for (i, &byte) in bytes.iter().enumerate() {
        word |= u32::from(byte) << (8 * i);
    }
    word
}
