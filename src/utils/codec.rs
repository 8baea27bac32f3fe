//! Base-62 codec between record ids and short codes.
//!
//! Short codes are never stored: every code is computed from the record id
//! with [`encode`] and turned back into an id with [`decode`]. Changing
//! [`ALPHABET`] invalidates every code issued so far.

/// Symbols used for short codes, ordered by digit value.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Numeric base of the codec.
pub const BASE: u64 = ALPHABET.len() as u64;

/// Error returned when a string is not a valid short code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCode {
    #[error("Short code is empty")]
    Empty,

    #[error("Short code contains invalid character {0:?}")]
    InvalidCharacter(char),

    #[error("Short code is out of range")]
    Overflow,
}

/// Encodes a record id as a short code, most significant digit first.
///
/// Zero encodes to the first alphabet symbol (`"a"`) so that every id has
/// a non-empty code.
///
/// # Examples
///
/// ```
/// use shorturls::utils::codec::encode;
///
/// assert_eq!(encode(250), "ec");
/// assert_eq!(encode(9_999_999_999), "k4U8YJ");
/// ```
pub fn encode(mut key: u64) -> String {
    if key == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut digits = Vec::new();
    while key > 0 {
        digits.push(ALPHABET[(key % BASE) as usize]);
        key /= BASE;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Decodes a short code back into the record id it was derived from.
///
/// Leading first-symbol digits are accepted, so `"ab"` decodes to the same
/// id as `"b"`.
///
/// # Errors
///
/// - [`InvalidCode::Empty`] for an empty string
/// - [`InvalidCode::InvalidCharacter`] for a symbol outside [`ALPHABET`]
/// - [`InvalidCode::Overflow`] when the value does not fit in a `u64`
///
/// # Examples
///
/// ```
/// use shorturls::utils::codec::decode;
///
/// assert_eq!(decode("fsr"), Ok(20353));
/// assert!(decode("no-dash").is_err());
/// ```
pub fn decode(code: &str) -> Result<u64, InvalidCode> {
    if code.is_empty() {
        return Err(InvalidCode::Empty);
    }

    code.chars().try_fold(0u64, |acc, c| {
        let digit = digit_value(c).ok_or(InvalidCode::InvalidCharacter(c))?;
        acc.checked_mul(BASE)
            .and_then(|v| v.checked_add(digit))
            .ok_or(InvalidCode::Overflow)
    })
}

fn digit_value(c: char) -> Option<u64> {
    match c {
        'a'..='z' => Some(c as u64 - 'a' as u64),
        'A'..='Z' => Some(c as u64 - 'A' as u64 + 26),
        '0'..='9' => Some(c as u64 - '0' as u64 + 52),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_62_distinct_symbols() {
        let mut symbols = ALPHABET.to_vec();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 62);
        assert_eq!(BASE, 62);
    }

    #[test]
    fn test_digit_value_matches_alphabet_position() {
        for (position, &symbol) in ALPHABET.iter().enumerate() {
            assert_eq!(digit_value(symbol as char), Some(position as u64));
        }
    }

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(250), "ec");
        assert_eq!(encode(20353), "fsr");
        assert_eq!(encode(9_999_999_999), "k4U8YJ");
    }

    #[test]
    fn test_encode_first_ids() {
        assert_eq!(encode(1), "b");
        assert_eq!(encode(2), "c");
        assert_eq!(encode(3), "d");
    }

    #[test]
    fn test_encode_zero_is_first_symbol() {
        assert_eq!(encode(0), "a");
        assert_eq!(decode("a"), Ok(0));
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode("ec"), Ok(250));
        assert_eq!(decode("fsr"), Ok(20353));
        assert_eq!(decode("k4U8YJ"), Ok(9_999_999_999));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), Err(InvalidCode::Empty));
    }

    #[test]
    fn test_decode_invalid_characters() {
        assert_eq!(decode("ab-c"), Err(InvalidCode::InvalidCharacter('-')));
        assert_eq!(decode("a b"), Err(InvalidCode::InvalidCharacter(' ')));
        assert_eq!(decode("ü"), Err(InvalidCode::InvalidCharacter('ü')));
        assert_eq!(decode("abc_"), Err(InvalidCode::InvalidCharacter('_')));
    }

    #[test]
    fn test_decode_leading_first_symbol() {
        assert_eq!(decode("ab"), Ok(1));
        assert_eq!(decode("aaaec"), Ok(250));
    }

    #[test]
    fn test_decode_overflow() {
        let max = encode(u64::MAX);
        assert_eq!(decode(&max), Ok(u64::MAX));

        let too_big = format!("{max}b");
        assert_eq!(decode(&too_big), Err(InvalidCode::Overflow));
    }

    #[test]
    fn test_round_trip_across_ranges() {
        let samples = (0..5_000u64)
            .chain([61, 62, 3843, 3844, 238_327, 238_328])
            .chain([u32::MAX as u64, u32::MAX as u64 + 1])
            .chain([i64::MAX as u64, u64::MAX - 1, u64::MAX]);

        for n in samples {
            assert_eq!(decode(&encode(n)), Ok(n), "round trip failed for {n}");
        }
    }

    #[test]
    fn test_length_grows_at_powers_of_62() {
        assert_eq!(encode(1).len(), 1);
        assert_eq!(encode(61).len(), 1);
        assert_eq!(encode(62).len(), 2);
        assert_eq!(encode(3843).len(), 2);
        assert_eq!(encode(3844).len(), 3);
        assert_eq!(encode(238_327).len(), 3);
        assert_eq!(encode(238_328).len(), 4);

        let mut previous = 0;
        for n in (0..300_000u64).step_by(97) {
            let len = encode(n).len();
            assert!(len >= previous);
            previous = len;
        }
    }

    #[test]
    fn test_encode_output_stays_in_alphabet() {
        for n in (0..1_000_000u64).step_by(7_919) {
            assert!(encode(n).bytes().all(|b| ALPHABET.contains(&b)));
        }
    }
}
