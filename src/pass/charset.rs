//! The 62-symbol alphanumeric alphabet.
//!
//! No punctuation: the output has to survive forms that reject it.

use crate::rand::RandomWord;

const DIGITS: u8 = 10;
const UPPERCASE: u8 = 26;
const LOWERCASE: u8 = 26;

/// Alphabet size.
pub const ALPHABET_LEN: u8 = DIGITS + UPPERCASE + LOWERCASE;

/// Symbols in value order: `0-9`, `A-Z`, `a-z`.
pub const ALPHABET: &[u8; ALPHABET_LEN as usize] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const _: () = assert!(ALPHABET_LEN == 62);

/// Reduce a word to an alphabet value.
///
/// 2^32 mod 62 = 4, so values 0-3 come up once more in every 2^32 words than
/// the rest. That bias is kept as-is.
#[inline(always)]
pub fn reduce(word: RandomWord) -> u8 {
    (word % ALPHABET_LEN as RandomWord) as u8
}

/// Map an alphabet value (`< ALPHABET_LEN`) to its ASCII symbol.
#[inline(always)]
pub fn symbol(value: u8) -> u8 {
    debug_assert!(value < ALPHABET_LEN);
    if value < DIGITS {
        b'0' + value
    } else if value < DIGITS + UPPERCASE {
        b'A' + (value - DIGITS)
    } else {
        b'a' + (value - DIGITS - UPPERCASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_matches_table() {
        for value in 0..ALPHABET_LEN {
            assert_eq!(symbol(value), ALPHABET[value as usize]);
        }
    }

    #[test]
    fn range_boundaries() {
        let cases = [
            (0, b'0'),
            (9, b'9'),
            (10, b'A'),
            (35, b'Z'),
            (36, b'a'),
            (61, b'z'),
            (62, b'0'),
            (u32::MAX, b'3'),
        ];
        for (word, expected) in cases {
            assert_eq!(symbol(reduce(word)), expected, "word {word}");
        }
    }

    #[test]
    fn low_residues_carry_the_bias() {
        // 2^32 = 62 * 69_273_666 + 4
        assert_eq!((1u64 << 32) % ALPHABET_LEN as u64, 4);
        assert_eq!(reduce(u32::MAX), 3);
    }
}
