//======================================================================
// src/backends/fbk128.rs
// Unrolled NLFSR form: 128 feedback bits per loop iteration.
//======================================================================

use aead::generic_array::GenericArray;

use crate::consts::STATE_WORDS;
use crate::variant::TinyJambuVariant;

/// Applies `rounds` NLFSR steps to the 128-bit state, a full register's
/// worth at a time.
///
/// Each of the four feedback computations folds its result into the state
/// word it replaces, so the word rotation of the narrower forms disappears
/// entirely; later computations read the words already updated in this
/// iteration as the new top of the register. Four key indices are consumed
/// per iteration. `rounds` must be a multiple of 128.
#[inline(always)]
pub(crate) fn state_update<V: TinyJambuVariant>(
    state: &mut [u32; STATE_WORDS],
    key: &GenericArray<u32, V::KeyWords>,
    rounds: usize,
) {
    debug_assert!(rounds % 128 == 0);

    let mut j = 0;
    for _ in 0..rounds / 128 {
        {
            let s47 = (state[2] << 17) | (state[1] >> 15);
            let s70 = (state[3] << 26) | (state[2] >> 6);
            let s85 = (state[3] << 11) | (state[2] >> 21);
            let s91 = (state[3] << 5) | (state[2] >> 27);

            state[0] = state[0] ^ s47 ^ !(s70 & s85) ^ s91 ^ key[j];
            j = if j + 1 == V::KEY_WORDS { 0 } else { j + 1 };
        }
        {
            let s47 = (state[3] << 17) | (state[2] >> 15);
            let s70 = (state[0] << 26) | (state[3] >> 6);
            let s85 = (state[0] << 11) | (state[3] >> 21);
            let s91 = (state[0] << 5) | (state[3] >> 27);

            state[1] = state[1] ^ s47 ^ !(s70 & s85) ^ s91 ^ key[j];
            j = if j + 1 == V::KEY_WORDS { 0 } else { j + 1 };
        }
        {
            let s47 = (state[0] << 17) | (state[3] >> 15);
            let s70 = (state[1] << 26) | (state[0] >> 6);
            let s85 = (state[1] << 11) | (state[0] >> 21);
            let s91 = (state[1] << 5) | (state[0] >> 27);

            state[2] = state[2] ^ s47 ^ !(s70 & s85) ^ s91 ^ key[j];
            j = if j + 1 == V::KEY_WORDS { 0 } else { j + 1 };
        }
        {
            let s47 = (state[1] << 17) | (state[0] >> 15);
            let s70 = (state[2] << 26) | (state[1] >> 6);
            let s85 = (state[2] << 11) | (state[1] >> 21);
            let s91 = (state[2] << 5) | (state[1] >> 27);

            state[3] = state[3] ^ s47 ^ !(s70 & s85) ^ s91 ^ key[j];
            j = if j + 1 == V::KEY_WORDS { 0 } else { j + 1 };
        }
    }
}
