//! Error types for the hypercomplex library.

use thiserror::Error;

/// Classic return code for a successful call.
pub const SUCCESS_CODE: i32 = 0;

/// Errors produced by the hypercomplex library.
///
/// Every fallible operation returns one of these instead of panicking. The
/// numeric codes match the classic return-code convention so they can be
/// surfaced unchanged through a process exit status or an FFI shim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HcError {
    /// A required input or output reference was absent.
    #[error("Required reference is missing")]
    NullPointer,
    /// Normalization or inversion attempted on a near-zero-norm quaternion.
    #[error("Quaternion norm is too small to divide by")]
    DivideByZero,
    /// Malformed header, bad magic, key mismatch, checksum mismatch or
    /// insufficient output capacity.
    #[error("Invalid data or insufficient buffer capacity")]
    InvalidData,
}

impl HcError {
    /// Returns the classic negative return code for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hypercomplex::error::HcError;
    ///
    /// assert_eq!(HcError::NullPointer.code(), -1);
    /// assert_eq!(HcError::InvalidData.code(), -3);
    /// ```
    pub fn code(self) -> i32 {
        match self {
            HcError::NullPointer => -1,
            HcError::DivideByZero => -2,
            HcError::InvalidData => -3,
        }
    }
}

/// Maps a result to its classic return code (`0` on success).
pub fn result_code<T>(result: &Result<T, HcError>) -> i32 {
    match result {
        Ok(_) => SUCCESS_CODE,
        Err(e) => e.code(),
    }
}
