//! True random integers rendered as uppercase hex.

use std::fmt::Write;

use crate::rand::{EntropySource, ScratchSpace};

/// Hex digits per 32-bit word.
pub const DIGITS_PER_WORD: usize = 8;

/// Draw `count` words and concatenate them as zero-padded uppercase hex.
///
/// One scratch region serves the whole batch; the next call starts a new one.
pub fn format_hex_words<S: EntropySource>(source: &mut S, count: u32) -> String {
    let mut scratch = ScratchSpace::new();
    let mut out = String::with_capacity(count as usize * DIGITS_PER_WORD);

    for _ in 0..count {
        let word = source.draw(&mut scratch);
        // Writing to a String cannot fail
        let _ = write!(out, "{word:08X}");
    }

    out
}
