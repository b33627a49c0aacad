//! Password generation.

use super::charset;
use crate::rand::{EntropySource, ScratchSpace};

/// Draw one word per character and map each into the alphabet.
///
/// One scratch region serves the whole password.
pub fn format_password<S: EntropySource>(source: &mut S, char_count: u32) -> String {
    let mut scratch = ScratchSpace::new();
    let mut buf = Vec::with_capacity(char_count as usize);

    buf.extend((0..char_count).map(|_| random_symbol(source.draw(&mut scratch))));

    // Safety: every byte comes from the ASCII alphabet
    unsafe { String::from_utf8_unchecked(buf) }
}

#[inline]
fn random_symbol(word: u32) -> u8 {
    charset::symbol(charset::reduce(word))
}
