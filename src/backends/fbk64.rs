//======================================================================
// src/backends/fbk64.rs
// Unrolled NLFSR form: 64 feedback bits per loop iteration.
//======================================================================

use aead::generic_array::GenericArray;

use crate::consts::STATE_WORDS;
use crate::variant::TinyJambuVariant;

/// Applies `rounds` NLFSR steps to the 128-bit state, 64 at a time.
///
/// The first feedback word is computed exactly as in the 32-bit form; the
/// second is computed over the once-shifted register, with `f0` already
/// standing in for the top word. Two key indices are consumed per iteration.
/// `rounds` must be a multiple of 64.
#[inline(always)]
pub(crate) fn state_update<V: TinyJambuVariant>(
    state: &mut [u32; STATE_WORDS],
    key: &GenericArray<u32, V::KeyWords>,
    rounds: usize,
) {
    debug_assert!(rounds % 64 == 0);

    let mut j = 0;
    for _ in 0..rounds / 64 {
        let [s0, s1, s2, s3] = *state;

        let s47 = (s2 << 17) | (s1 >> 15);
        let s70 = (s3 << 26) | (s2 >> 6);
        let s85 = (s3 << 11) | (s2 >> 21);
        let s91 = (s3 << 5) | (s2 >> 27);
        let f0 = s0 ^ s47 ^ !(s70 & s85) ^ s91 ^ key[j];
        j = if j + 1 == V::KEY_WORDS { 0 } else { j + 1 };

        let s47 = (s3 << 17) | (s2 >> 15);
        let s70 = (f0 << 26) | (s3 >> 6);
        let s85 = (f0 << 11) | (s3 >> 21);
        let s91 = (f0 << 5) | (s3 >> 27);
        let f1 = s1 ^ s47 ^ !(s70 & s85) ^ s91 ^ key[j];
        j = if j + 1 == V::KEY_WORDS { 0 } else { j + 1 };

        *state = [s2, s3, f0, f1];
    }
}
