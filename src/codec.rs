//! Quaternion block codec.
//!
//! Frames plaintext with a [`BlockHeader`], pads it to 16-byte blocks and
//! multiplies every block (as two lane quaternions) on the right by the key.
//! Decoding multiplies by the key's inverse on the same side.
//!
//! This is a demonstration transform, not a cipher: the key travels in the
//! header, blocks are not chained, and identical plaintext blocks produce
//! identical ciphertext blocks.
//!
//! Both directions follow an ask-then-retry sizing protocol: when the caller's
//! capacity is too small the call fails with [`HcError::InvalidData`], stores
//! the required size in the capacity argument and writes nothing.

use crate::checksum::checksum;
use crate::constants::{
    BLOCK_LEN, CIPHER_BLOCK_LEN, HEADER_LEN, MAX_KEY_NORM, NORM_EPSILON, QUATERNION_LEN,
};
use crate::error::HcError;
use crate::header::BlockHeader;
use crate::quaternion::Quaternion;
use crate::utils::converter;

/// Plaintext length rounded up to a whole number of blocks.
///
/// Returns `None` on arithmetic overflow.
pub fn padded_len(plain_len: usize) -> Option<usize> {
    plain_len
        .checked_add(BLOCK_LEN - 1)
        .map(|n| n / BLOCK_LEN * BLOCK_LEN)
}

/// Total ciphertext size (header plus transformed blocks) for `plain_len`
/// bytes of plaintext.
///
/// Returns `None` on arithmetic overflow.
///
/// # Examples
///
/// ```
/// use hypercomplex::codec::ciphertext_len;
///
/// assert_eq!(ciphertext_len(0), Some(40));
/// assert_eq!(ciphertext_len(1), Some(40 + 32));
/// assert_eq!(ciphertext_len(17), Some(40 + 64));
/// ```
pub fn ciphertext_len(plain_len: usize) -> Option<usize> {
    let blocks = padded_len(plain_len)? / BLOCK_LEN;
    blocks
        .checked_mul(CIPHER_BLOCK_LEN)?
        .checked_add(HEADER_LEN)
}

/// Encrypts `plaintext` under `key` into `ciphertext`.
///
/// # Parameters
/// - `plaintext`: Bytes to encrypt (any length, including zero).
/// - `key`: Key quaternion, normally from [`derive_key`](crate::derive_key).
/// - `ciphertext`: Output buffer.
/// - `cipher_len`: In: usable capacity (clamped to `ciphertext.len()`).
///   Out: the required size on a capacity failure, the written size on success.
///
/// # Errors
/// - [`HcError::InvalidData`] if the key has a non-finite component, a norm
///   above `1e18` (its inverse or the transformed lanes would overflow), or
///   the capacity is insufficient (nothing is written in that case).
/// - [`HcError::DivideByZero`] if the key norm is below `1e-6`, since such a
///   transform could never be inverted.
///
/// # Examples
///
/// ```
/// use hypercomplex::{codec, derive_key};
///
/// let key = derive_key(7).unwrap();
/// let msg = b"attack at dawn";
///
/// // Ask for the size first.
/// let mut len = 0;
/// assert!(codec::encrypt(msg, &key, &mut [], &mut len).is_err());
///
/// let mut out = vec![0u8; len];
/// codec::encrypt(msg, &key, &mut out, &mut len).unwrap();
/// assert_eq!(len, out.len());
/// ```
pub fn encrypt(
    plaintext: &[u8],
    key: &Quaternion,
    ciphertext: &mut [u8],
    cipher_len: &mut usize,
) -> Result<(), HcError> {
    if !key.is_valid() {
        return Err(HcError::InvalidData);
    }
    if key.norm() < NORM_EPSILON {
        return Err(HcError::DivideByZero);
    }
    if key.norm() > MAX_KEY_NORM || !key.inverse()?.is_valid() {
        return Err(HcError::InvalidData);
    }

    let required = ciphertext_len(plaintext.len()).ok_or(HcError::InvalidData)?;
    let capacity = (*cipher_len).min(ciphertext.len());
    if capacity < required {
        *cipher_len = required;
        return Err(HcError::InvalidData);
    }

    let header = BlockHeader::new(plaintext.len() as u64, *key, checksum(plaintext));
    let (head, body) = ciphertext[..required].split_at_mut(HEADER_LEN);
    head.copy_from_slice(&header.encode_le());

    for (chunk, out) in plaintext
        .chunks(BLOCK_LEN)
        .zip(body.chunks_exact_mut(CIPHER_BLOCK_LEN))
    {
        // Per-call scratch block; the tail of the last block stays zero.
        let mut block = [0u8; BLOCK_LEN];
        block[..chunk.len()].copy_from_slice(chunk);
        codec_block(&block, key, out);
    }

    *cipher_len = required;
    Ok(())
}

/// Decrypts `ciphertext` into `plaintext`.
///
/// The inverse transform uses the key snapshot stored in the header; the
/// supplied `key` must match it bit for bit.
///
/// # Parameters
/// - `ciphertext`: Exactly the bytes produced by [`encrypt`].
/// - `key`: The key used for encryption.
/// - `plaintext`: Output buffer.
/// - `plain_len`: In: usable capacity (clamped to `plaintext.len()`).
///   Out: the recorded plaintext length on a capacity failure or once the
///   data has been written.
///
/// Checks run in order: header magic, exact ciphertext size, capacity, key.
/// A size query therefore reports the plaintext length of any well-formed
/// ciphertext, whichever key is supplied.
///
/// # Errors
/// - [`HcError::InvalidData`] for a short or mis-sized ciphertext, a bad
///   magic, insufficient capacity (nothing written), a key mismatch or a
///   checksum mismatch. On a checksum mismatch the recovered bytes have
///   already been written to `plaintext`.
/// - [`HcError::DivideByZero`] if the stored key cannot be inverted.
pub fn decrypt(
    ciphertext: &[u8],
    key: &Quaternion,
    plaintext: &mut [u8],
    plain_len: &mut usize,
) -> Result<(), HcError> {
    let header = BlockHeader::decode_le(ciphertext)?;
    let length = framed_len(ciphertext, &header)?;

    let capacity = (*plain_len).min(plaintext.len());
    if capacity < length {
        *plain_len = length;
        return Err(HcError::InvalidData);
    }

    if !key.is_valid() || !same_bits(key, &header.key) {
        return Err(HcError::InvalidData);
    }

    let inv_key = header.key.inverse()?;
    let out = &mut plaintext[..length];
    for (src, dst) in ciphertext[HEADER_LEN..]
        .chunks_exact(CIPHER_BLOCK_LEN)
        .zip(out.chunks_mut(BLOCK_LEN))
    {
        let block = decodec_block(src, &inv_key);
        dst.copy_from_slice(&block[..dst.len()]);
    }

    *plain_len = length;
    if checksum(out) != header.checksum {
        return Err(HcError::InvalidData);
    }
    Ok(())
}

/// Encrypts into a freshly allocated buffer, performing the size query itself.
///
/// # Errors
/// Same as [`encrypt`], minus the capacity case.
pub fn encrypt_to_vec(plaintext: &[u8], key: &Quaternion) -> Result<Vec<u8>, HcError> {
    let mut len = 0usize;
    match encrypt(plaintext, key, &mut [], &mut len) {
        Err(HcError::InvalidData) if len > 0 => {}
        Err(e) => return Err(e),
        Ok(()) => return Ok(Vec::new()),
    }
    let mut out = vec![0u8; len];
    encrypt(plaintext, key, &mut out, &mut len)?;
    out.truncate(len);
    Ok(out)
}

/// Decrypts into a freshly allocated buffer sized from the header.
///
/// # Errors
/// Same as [`decrypt`], minus the capacity case.
///
/// # Examples
///
/// ```
/// use hypercomplex::{codec, derive_key};
///
/// let key = derive_key(12345).unwrap();
/// let msg = b"Hello, hypercomplex world! This is test data.";
/// let ct = codec::encrypt_to_vec(msg, &key).unwrap();
/// assert_eq!(codec::decrypt_to_vec(&ct, &key).unwrap(), msg);
/// ```
pub fn decrypt_to_vec(ciphertext: &[u8], key: &Quaternion) -> Result<Vec<u8>, HcError> {
    let header = BlockHeader::decode_le(ciphertext)?;
    let mut len = framed_len(ciphertext, &header)?;
    let mut out = vec![0u8; len];
    decrypt(ciphertext, key, &mut out, &mut len)?;
    out.truncate(len);
    Ok(out)
}

/// Plaintext length recorded in `header`, once `ciphertext` is confirmed to
/// be exactly the size that length implies.
fn framed_len(ciphertext: &[u8], header: &BlockHeader) -> Result<usize, HcError> {
    let length = usize::try_from(header.length).map_err(|_| HcError::InvalidData)?;
    let expected = ciphertext_len(length).ok_or(HcError::InvalidData)?;
    if ciphertext.len() != expected {
        return Err(HcError::InvalidData);
    }
    Ok(length)
}

/// Forward transform of one padded block into `CIPHER_BLOCK_LEN` bytes.
fn codec_block(block: &[u8; BLOCK_LEN], key: &Quaternion, out: &mut [u8]) {
    let lanes = converter::block_to_quaternions(block);
    for (q, dst) in lanes.iter().zip(out.chunks_exact_mut(QUATERNION_LEN)) {
        dst.copy_from_slice(&converter::quaternion_to_bytes(&q.multiply(key)));
    }
}

/// Inverse transform of one `CIPHER_BLOCK_LEN`-byte chunk.
fn decodec_block(src: &[u8], inv_key: &Quaternion) -> [u8; BLOCK_LEN] {
    let lanes = [
        converter::quaternion_from_bytes(&src[..QUATERNION_LEN]).multiply(inv_key),
        converter::quaternion_from_bytes(&src[QUATERNION_LEN..]).multiply(inv_key),
    ];
    converter::quaternions_to_block(&lanes)
}

fn same_bits(a: &Quaternion, b: &Quaternion) -> bool {
    a.to_array()
        .iter()
        .zip(b.to_array().iter())
        .all(|(x, y)| x.to_bits() == y.to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::derive_key;

    #[test]
    fn test_padded_len() {
        assert_eq!(padded_len(0), Some(0));
        assert_eq!(padded_len(1), Some(16));
        assert_eq!(padded_len(16), Some(16));
        assert_eq!(padded_len(17), Some(32));
        assert_eq!(padded_len(usize::MAX), None);
    }

    #[test]
    fn test_ciphertext_len() {
        assert_eq!(ciphertext_len(0), Some(HEADER_LEN));
        assert_eq!(ciphertext_len(16), Some(HEADER_LEN + 32));
        assert_eq!(ciphertext_len(45), Some(HEADER_LEN + 96));
        assert_eq!(ciphertext_len(usize::MAX / 2), None);
    }

    #[test]
    fn test_block_roundtrip_unit_key() {
        let key = derive_key(99).unwrap();
        let inv = key.inverse().unwrap();
        let block = *b"0123456789abcdef";
        let mut out = [0u8; CIPHER_BLOCK_LEN];
        codec_block(&block, &key, &mut out);
        assert_eq!(decodec_block(&out, &inv), block);
    }

    #[test]
    fn test_block_roundtrip_non_unit_key() {
        let key = Quaternion::new(3.0, -1.0, 0.5, 2.0);
        let inv = key.inverse().unwrap();
        let block = [0xFFu8; BLOCK_LEN];
        let mut out = [0u8; CIPHER_BLOCK_LEN];
        codec_block(&block, &key, &mut out);
        assert_eq!(decodec_block(&out, &inv), block);
    }

    #[test]
    fn test_conjugate_on_wrong_side_does_not_invert() {
        // Left-multiplying by the conjugate is not the inverse of a
        // right-multiplication.
        let key = derive_key(5).unwrap();
        let block = *b"asymmetric order";
        let lanes = converter::block_to_quaternions(&block);
        let wrong = [
            key.conjugate().multiply(&lanes[0].multiply(&key)),
            key.conjugate().multiply(&lanes[1].multiply(&key)),
        ];
        assert_ne!(converter::quaternions_to_block(&wrong), block);
    }

    #[test]
    fn test_header_written() {
        let key = derive_key(1).unwrap();
        let ct = encrypt_to_vec(b"abc", &key).unwrap();
        let header = BlockHeader::decode_le(&ct).unwrap();
        assert_eq!(header.length, 3);
        assert_eq!(header.key, key);
        assert_eq!(header.checksum, checksum(b"abc"));
    }

    #[test]
    fn test_encrypt_rejects_invalid_key() {
        let mut len = 1024;
        let mut buf = vec![0u8; len];
        let bad = Quaternion::new(f32::NAN, 0.0, 0.0, 0.0);
        assert_eq!(encrypt(b"x", &bad, &mut buf, &mut len), Err(HcError::InvalidData));
        assert_eq!(
            encrypt(b"x", &Quaternion::zero(), &mut buf, &mut len),
            Err(HcError::DivideByZero)
        );
    }

    #[test]
    fn test_capacity_clamped_to_buffer() {
        let key = derive_key(3).unwrap();
        let mut len = usize::MAX;
        let mut buf = vec![0u8; 10];
        assert_eq!(encrypt(b"hello", &key, &mut buf, &mut len), Err(HcError::InvalidData));
        assert_eq!(len, HEADER_LEN + CIPHER_BLOCK_LEN);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_decrypt_rejects_size_mismatch() {
        let key = derive_key(4).unwrap();
        let mut ct = encrypt_to_vec(b"sixteen bytes!!!", &key).unwrap();
        ct.push(0);
        assert_eq!(decrypt_to_vec(&ct, &key), Err(HcError::InvalidData));
        ct.truncate(ct.len() - 2);
        assert_eq!(decrypt_to_vec(&ct, &key), Err(HcError::InvalidData));
    }

    #[test]
    fn test_empty_plaintext() {
        let key = derive_key(8).unwrap();
        let ct = encrypt_to_vec(&[], &key).unwrap();
        assert_eq!(ct.len(), HEADER_LEN);
        assert_eq!(decrypt_to_vec(&ct, &key).unwrap(), Vec::<u8>::new());
    }
}
