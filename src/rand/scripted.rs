//! Deterministic stand-in for the entropy primitive.

use super::{EntropySource, RandomWord, ScratchSpace};

/// Replays a fixed sequence of words, wrapping at the end.
///
/// Never reads the scratch region: whatever a previous batch left there has
/// no influence on the next word.
#[derive(Debug, Clone)]
pub struct Scripted {
    words: Vec<RandomWord>,
    pos: usize,
}

impl Scripted {
    pub fn new(words: &[RandomWord]) -> Self {
        Self {
            words: words.to_vec(),
            pos: 0,
        }
    }

    /// Total draws served so far.
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl EntropySource for Scripted {
    fn draw(&mut self, _scratch: &mut ScratchSpace) -> RandomWord {
        if self.words.is_empty() {
            return 0;
        }
        let word = self.words[self.pos % self.words.len()];
        self.pos += 1;
        word
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
