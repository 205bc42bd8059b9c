//! Hypercomplex (quaternion) arithmetic kernel with a demonstration block codec.
//!
//! The crate provides four-lane quaternion arithmetic over `f32`, deterministic
//! derivation of unit-norm key quaternions from a 64-bit seed, and a toy
//! "encryption" that multiplies every plaintext block by a key quaternion.
//! The codec is a demonstration transform and offers no confidentiality.
//!
//! # Ciphertext size
//!
//! Each 16-byte plaintext block is read as eight 16-bit words, which fill two
//! quaternions. Both are multiplied by the key and stored as `f32`, so every
//! block becomes 32 bytes and the ciphertext is a 40-byte header plus twice
//! the padded plaintext length (see [`codec::ciphertext_len`]). The 16-bit
//! lanes leave enough headroom for `f32` rounding that decryption recovers
//! the plaintext exactly.
//!
//! # Architecture
//!
//! ```text
//! Float4      (four f32 lanes, lane-wise ops and shuffles)
//!     ↓
//! Quaternion  (Hamilton product, conjugate, norm, normalize, inverse)
//!     ↓                          ↘
//! kernel      (Option-checked      key (LCG seed -> unit quaternion)
//!              out-parameter ops)      ↓
//!                                  codec (BlockHeader + per-block product)
//! ```
//!
//! # Examples
//!
//! Multiply two quaternions:
//!
//! ```
//! use hypercomplex::Quaternion;
//!
//! let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
//! let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
//! assert_eq!(a * b, Quaternion::new(-60.0, 12.0, 30.0, 24.0));
//! ```
//!
//! Encrypt and decrypt a message, sizing the buffers first:
//!
//! ```
//! use hypercomplex::{decrypt, derive_key, encrypt, HcError};
//!
//! let key = derive_key(12345).unwrap();
//! let msg = b"Hello, hypercomplex world! This is test data.";
//!
//! let mut cipher_len = 0;
//! assert_eq!(encrypt(msg, &key, &mut [], &mut cipher_len), Err(HcError::InvalidData));
//! let mut ciphertext = vec![0u8; cipher_len];
//! encrypt(msg, &key, &mut ciphertext, &mut cipher_len).unwrap();
//!
//! let mut plain_len = msg.len();
//! let mut recovered = vec![0u8; plain_len];
//! decrypt(&ciphertext, &key, &mut recovered, &mut plain_len).unwrap();
//! assert_eq!(&recovered[..plain_len], msg);
//! ```

#![deny(clippy::all)]

pub mod checksum;
pub mod codec;
pub mod constants;
pub mod error;
pub mod header;
pub mod kernel;
pub mod key;
pub mod lanes;
pub mod perf;
pub mod quaternion;
pub mod utils;

pub use codec::{decrypt, decrypt_to_vec, encrypt, encrypt_to_vec};
pub use error::HcError;
pub use header::BlockHeader;
pub use key::derive_key;
pub use perf::{benchmark, PerfStats};
pub use quaternion::Quaternion;
