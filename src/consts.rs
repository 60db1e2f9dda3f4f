//======================================================================
// src/consts.rs
// State geometry, framebits and the shared round count.
//======================================================================

/// The permutation state size in 32-bit words.
///
/// The 128-bit register is viewed as (MSB) `s[3] || s[2] || s[1] || s[0]`
/// (LSB); bit `i` of the register is bit `i % 32` of word `s[i / 32]`.
pub const STATE_WORDS: usize = 4;

/// Round count for the lightweight keyed sweeps: each nonce column, each
/// associated-data block and the second half of the tag. The heavyweight
/// sweeps are per-variant ([`crate::variant::TinyJambuVariant::LONG_ROUNDS`]).
pub const SHORT_ROUNDS: usize = 640;

// The 3-bit frame constants separate the schedule phases sharing the one
// permutation. They belong at bits 36..38 of the register, i.e. bits 4..6 of
// `s[1]`, so each value below is the 3-bit constant pre-shifted left by 4.

/// Framebits mixed in before each nonce column, `0b001 << 4`.
pub const FRAMEBITS_NONCE: u32 = 0x10;

/// Framebits mixed in before each associated-data block, `0b011 << 4`.
pub const FRAMEBITS_AD: u32 = 0x30;

/// Framebits mixed in before each plain/cipher text block, `0b101 << 4`.
pub const FRAMEBITS_TEXT: u32 = 0x50;

/// Framebits mixed in before each tag half, `0b111 << 4`.
pub const FRAMEBITS_TAG: u32 = 0x70;
