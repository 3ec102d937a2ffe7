//! # Columnar Cipher
//!
//! Classical columnar transposition: plaintext is written row-major into a
//! grid whose width is the key length, and ciphertext is read out column by
//! column in the order the key digits dictate. Decryption runs the same
//! layout in reverse and strips the trailing padding run.
//!
//! ## Quick Start
//!
//! ```rust
//! use columnar_cipher::{decrypt, encrypt, Key, Plaintext};
//!
//! let key = Key::parse("3142").unwrap();
//! let pt = Plaintext::parse("HELLOWORLD").unwrap();
//!
//! let ct = encrypt(&pt, &key);
//! assert_eq!(ct, "EWDLRXHOLLOX");
//! assert_eq!(decrypt(&ct, &key), "HELLOWORLD");
//! ```
//!
//! ## What's NOT Provided
//!
//! - Alphabets beyond ASCII A–Z
//! - Irregular or double transposition variants
//! - Any cryptographic strength; this is a classroom cipher

#![deny(unsafe_code)]

// ---------------------------------------------------------------------------
// Core modules
// ---------------------------------------------------------------------------

mod cipher;
mod grid;
mod key;
mod plaintext;

// Interactive front end (thin orchestration over the core)
pub mod session;

// ---------------------------------------------------------------------------
// Public surface
// ---------------------------------------------------------------------------

pub use cipher::{
    decrypt, encrypt, read_by_key_order, split_groups, strip_padding, write_by_key_order,
};
pub use grid::{Grid, PAD};
pub use key::{Key, KeyError};
pub use plaintext::{Plaintext, PlaintextError};
pub use session::Session;
