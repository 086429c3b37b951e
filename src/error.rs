//! Error types for the TESSERA library.

use std::fmt;

/// Errors produced at the TESSERA input boundary.
///
/// The cipher engine itself is a total function of well-formed fixed-width
/// input; every error below is detected during decoding or schedule
/// construction, before any table lookup happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TesseraError {
    /// Input is not a valid hexadecimal string (odd length or non-hex digit).
    InvalidEncoding,
    /// Decoded byte count does not match the engine's block width.
    WidthMismatch { expected: usize, actual: usize },
    /// Caller-supplied permutation table is not a bijection over block positions.
    InvalidPermutation,
}

impl fmt::Display for TesseraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TesseraError::InvalidEncoding => {
                write!(f, "input is not a valid lowercase hexadecimal string")
            }
            TesseraError::WidthMismatch { expected, actual } => {
                write!(f, "expected {} bytes, got {}", expected, actual)
            }
            TesseraError::InvalidPermutation => {
                write!(f, "permutation table is not a bijection over block positions")
            }
        }
    }
}

impl std::error::Error for TesseraError {}
