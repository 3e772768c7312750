//! Request-signing token (`tk` query parameter).
//!
//! The backend only accepts a translation request when it carries a token
//! derived from the exact text being translated. The token is a checksum
//! computed over the UTF-8 bytes of the text with 32-bit wrapping arithmetic.

const SEED: u32 = 406_644;
const FINAL_XOR: u32 = 3_293_161_072;
const BYTE_KEY: &[u8] = b"+-a^+6";
const FINAL_KEY: &[u8] = b"+-3^+b+-f";

/// Computes the signing token for `input`.
///
/// ```
/// assert_eq!(gtrans_cli::translation::compute_token(""), "557215.963819");
/// ```
pub fn compute_token(input: &str) -> String {
    let units: Vec<u16> = input.encode_utf16().collect();
    compute_token_utf16(&units)
}

/// Computes the signing token for raw UTF-16 code units.
///
/// Unlike `&str`, the input may contain unpaired surrogates. Each one is
/// encoded as a three-byte sequence instead of failing.
pub fn compute_token_utf16(units: &[u16]) -> String {
    let mut a = SEED;
    for byte in encode_utf8(units) {
        a = scramble(a.wrapping_add(u32::from(byte)), BYTE_KEY);
    }
    a = scramble(a, FINAL_KEY);
    a ^= FINAL_XOR;
    a %= 1_000_000;

    format!("{a}.{}", a ^ SEED)
}

/// Applies a scramble key to the accumulator.
///
/// The key is read in triples `(op, direction, amount)`: `op` is `+` for
/// wrapping addition and anything else for xor, `direction` is `+` for a
/// logical right shift and anything else for a left shift, and `amount` is a
/// digit or a lowercase letter (`a` = 10).
fn scramble(mut a: u32, key: &[u8]) -> u32 {
    for step in key.chunks_exact(3) {
        let amount = shift_amount(step[2]);
        let d = if step[1] == b'+' {
            a.wrapping_shr(amount)
        } else {
            a.wrapping_shl(amount)
        };
        a = if step[0] == b'+' {
            a.wrapping_add(d)
        } else {
            a ^ d
        };
    }
    a
}

fn shift_amount(c: u8) -> u32 {
    if c >= b'a' {
        u32::from(c) - 87
    } else {
        // Non-digits shift by zero
        char::from(c).to_digit(10).unwrap_or(0)
    }
}

/// UTF-8 encodes UTF-16 code units, pairing surrogates where possible.
fn encode_utf8(units: &[u16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(units.len() * 3);
    let mut i = 0;

    while i < units.len() {
        let mut m = u32::from(units[i]);

        if m < 0x80 {
            bytes.push(m as u8);
        } else if m < 0x800 {
            bytes.push((m >> 6 | 0xC0) as u8);
            bytes.push((m & 0x3F | 0x80) as u8);
        } else {
            let low = units.get(i + 1).map(|&u| u32::from(u));
            match low {
                Some(low) if m & 0xFC00 == 0xD800 && low & 0xFC00 == 0xDC00 => {
                    m = 0x10000 + ((m & 0x3FF) << 10) + (low & 0x3FF);
                    i += 1;
                    bytes.push((m >> 18 | 0xF0) as u8);
                    bytes.push((m >> 12 & 0x3F | 0x80) as u8);
                }
                _ => bytes.push((m >> 12 | 0xE0) as u8),
            }
            bytes.push((m >> 6 & 0x3F | 0x80) as u8);
            bytes.push((m & 0x3F | 0x80) as u8);
        }

        i += 1;
    }

    bytes
}
