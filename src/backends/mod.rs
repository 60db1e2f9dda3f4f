//======================================================================
// src/backends/mod.rs
// Selects the NLFSR unrolling the cipher routes through.
//======================================================================

use aead::generic_array::GenericArray;
use cfg_if::cfg_if;

use crate::consts::{SHORT_ROUNDS, STATE_WORDS};
use crate::variant::TinyJambuVariant;

// All three unrollings are always compiled so the test suite can cross-check
// them; the feature flags only pick which one the cipher routes through.
#[cfg_attr(not(test), allow(dead_code))]
pub(crate) mod fbk128;
#[cfg_attr(not(test), allow(dead_code))]
pub(crate) mod fbk32;
#[cfg_attr(not(test), allow(dead_code))]
pub(crate) mod fbk64;

cfg_if! {
    if #[cfg(feature = "fbk128")] {
        use fbk128 as active;
    } else if #[cfg(feature = "fbk64")] {
        use fbk64 as active;
    } else {
        use fbk32 as active;
    }
}

/// Heavyweight keyed sweep: key setup, message blocks and the first half of
/// the tag.
#[inline(always)]
pub(crate) fn permute_long<V: TinyJambuVariant>(
    state: &mut [u32; STATE_WORDS],
    key: &GenericArray<u32, V::KeyWords>,
) {
    // Every sweep length must decompose into whole iterations of the widest
    // unrolling; a variant violating this fails to compile.
    const { assert!(V::LONG_ROUNDS % 128 == 0 && V::LONG_ROUNDS > 0) };
    active::state_update::<V>(state, key, V::LONG_ROUNDS);
}

/// Lightweight keyed sweep: nonce columns, associated-data blocks and the
/// second half of the tag.
#[inline(always)]
pub(crate) fn permute_short<V: TinyJambuVariant>(
    state: &mut [u32; STATE_WORDS],
    key: &GenericArray<u32, V::KeyWords>,
) {
    const { assert!(SHORT_ROUNDS % 128 == 0) };
    active::state_update::<V>(state, key, SHORT_ROUNDS);
}
