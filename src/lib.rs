#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]

//======================================================================
// src/lib.rs
// Crate entry point. Declares modules and the public type aliases.
//======================================================================

// --- Module declarations ---
mod backends;
pub mod consts;
mod tinyjambu;
pub mod variant;

use crate::variant::{TinyJambu128, TinyJambu192, TinyJambu256};

pub use crate::tinyjambu::TinyJambuAead;

// --- Convenience Type Aliases for Users ---
pub type TinyJambu128Aead = TinyJambuAead<TinyJambu128>;
pub type TinyJambu192Aead = TinyJambuAead<TinyJambu192>;
pub type TinyJambu256Aead = TinyJambuAead<TinyJambu256>;


pub use aead;
