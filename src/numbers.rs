//! Overflow-safe ASCII integer decoding.
//!
//! HTTP frames body lengths with decimal (`Content-Length`) and
//! hexadecimal (chunk-size) integers. Both decoders work on raw byte
//! slices and refuse to wrap around silently: a length that does not
//! fit in 64 bits is reported as an overflow, never as a smaller value.

/// Outcome of decoding an ASCII integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Ok(u64),
    /// A byte outside the digit alphabet.
    Invalid,
    /// The value does not fit in 64 bits.
    Overflow,
}

/// Decodes an unsigned decimal integer.
///
/// Leading zeros are accepted (`007` is 7; `000` and the empty slice
/// are 0). Signs are not: `+5` is invalid.
pub fn decode_decimal(digits: &[u8]) -> Decoded {
    if !digits.iter().all(|b| b.is_ascii_digit()) {
        return Decoded::Invalid;
    }

    let mut value: u64 = 0;
    for &byte in digits {
        value = match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(byte - b'0')))
        {
            Some(v) => v,
            None => return Decoded::Overflow,
        };
    }
    Decoded::Ok(value)
}

/// Decodes an unsigned hexadecimal integer (`0-9 a-f A-F`, no prefix).
///
/// Same contract as `decode_decimal`.
pub fn decode_hex(digits: &[u8]) -> Decoded {
    if !digits.iter().all(|b| b.is_ascii_hexdigit()) {
        return Decoded::Invalid;
    }

    let mut value: u64 = 0;
    for &byte in digits {
        let nibble = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            _ => byte - b'A' + 10,
        };
        value = match value
            .checked_mul(16)
            .and_then(|v| v.checked_add(u64::from(nibble)))
        {
            Some(v) => v,
            None => return Decoded::Overflow,
        };
    }
    Decoded::Ok(value)
}
