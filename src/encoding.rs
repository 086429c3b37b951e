//! Hex boundary for keys and blocks
//!
//! All wire values are lowercase hex, two digits per byte, no separators.
//! Decoding is strict: malformed text and wrong-width values are rejected
//! before any cipher state is built.

use crate::error::TesseraError;

/// Encode a block as lowercase hex.
pub fn encode_block(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode hex into a caller-sized buffer.
///
/// Fails with `InvalidEncoding` for non-hex input (including odd length)
/// and `WidthMismatch` when the byte count differs from `out.len()`.
pub fn decode_into(text: &str, out: &mut [u8]) -> Result<(), TesseraError> {
    let raw = hex::decode(text).map_err(|_| TesseraError::InvalidEncoding)?;
    if raw.len() != out.len() {
        return Err(TesseraError::WidthMismatch {
            expected: out.len(),
            actual: raw.len(),
        });
    }
    out.copy_from_slice(&raw);
    Ok(())
}

/// Decode hex into an exact-width block.
pub fn decode_exact<const BYTES: usize>(text: &str) -> Result<[u8; BYTES], TesseraError> {
    let mut block = [0u8; BYTES];
    decode_into(text, &mut block)?;
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_lowercase_two_digits_per_byte() {
        assert_eq!(encode_block(&[0x00, 0x0A, 0xFF]), "000aff");
        assert_eq!(encode_block(&[0u8; 16]).len(), 32);
    }

    #[test]
    fn test_decode_roundtrip() {
        let block = decode_exact::<16>("a291a728727ac647a53193be9583c504").unwrap();
        assert_eq!(encode_block(&block), "a291a728727ac647a53193be9583c504");
    }

    #[test]
    fn test_decode_accepts_uppercase_digits() {
        let lower = decode_exact::<4>("deadbeef").unwrap();
        let upper = decode_exact::<4>("DEADBEEF").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        assert_eq!(
            decode_exact::<16>("zz91a728727ac647a53193be9583c504").unwrap_err(),
            TesseraError::InvalidEncoding
        );
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        assert_eq!(
            decode_exact::<16>("abc").unwrap_err(),
            TesseraError::InvalidEncoding
        );
    }

    #[test]
    fn test_decode_rejects_wrong_width() {
        assert_eq!(
            decode_exact::<16>("a291a728").unwrap_err(),
            TesseraError::WidthMismatch {
                expected: 16,
                actual: 4
            }
        );
        // A 256-bit value fed to a 128-bit engine is rejected, not truncated.
        let doubled = "a291a728727ac647a53193be9583c504".repeat(2);
        assert_eq!(
            decode_exact::<16>(&doubled).unwrap_err(),
            TesseraError::WidthMismatch {
                expected: 16,
                actual: 32
            }
        );
    }

    #[test]
    fn test_decode_rejects_empty() {
        assert_eq!(
            decode_exact::<16>("").unwrap_err(),
            TesseraError::WidthMismatch {
                expected: 16,
                actual: 0
            }
        );
    }
}
