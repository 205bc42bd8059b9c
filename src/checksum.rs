//! Low-strength integrity checksum.
//!
//! `checksum = (checksum << 1) ^ byte` for every byte in order, starting at
//! zero. Bits shifted past bit 31 are dropped, so only roughly the last 32
//! bytes of a message influence the result. Not cryptographically secure.

/// Computes the shift-xor checksum of `data`.
///
/// # Examples
///
/// ```
/// use hypercomplex::checksum::checksum;
///
/// assert_eq!(checksum(&[]), 0);
/// assert_eq!(checksum(&[1, 2]), (1 << 1) ^ 2);
/// ```
pub fn checksum(data: &[u8]) -> u32 {
    data.iter()
        .fold(0u32, |acc, &byte| (acc << 1) ^ u32::from(byte))
}
