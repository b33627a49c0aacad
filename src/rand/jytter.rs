//! Timing-jitter entropy primitive.
//!
//! Each draw times a short spin loop against the cycle counter, over and over,
//! folding the deltas into an accumulator until enough distinct delta classes
//! have been seen. The spin length depends on the accumulator, so pipeline and
//! cache noise from one sample shapes the next.
//!
//! All working state lives in the caller's scratch region and is overwritten on
//! entry. Nothing here estimates entropy or post-processes the output.

use super::hw::{Clock, CycleCounter};
use super::{EntropySource, RandomWord, ScratchSpace};

// Scratch slot assignment
const ACC: usize = 0;
const LAST: usize = 1;
const SEEN: usize = 2;
const SPINS: usize = 3;
const CHURN: usize = 4;

/// Distinct delta classes (out of 64) required before a word is released.
const MIN_CLASSES: u32 = 16;
const MIN_SPINS: u64 = 32;
/// Hard stop for counters too coarse to ever show enough classes.
const MAX_SPINS: u64 = 1 << 14;

/// The production entropy source.
#[derive(Debug, Default, Clone)]
pub struct Jytter<C: Clock = CycleCounter> {
    clock: C,
}

impl Jytter {
    #[inline]
    pub fn new() -> Self {
        Self {
            clock: CycleCounter,
        }
    }
}

impl<C: Clock> Jytter<C> {
    /// Drive the primitive from another tick source.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> EntropySource for Jytter<C> {
    fn draw(&mut self, scratch: &mut ScratchSpace) -> RandomWord {
        let s = scratch.slots_mut();
        let start = self.clock.now();
        *s = [0, start, 0, 0, start];

        loop {
            let mut churn = s[CHURN];
            for _ in 0..(churn & 0xF) + 1 {
                churn = core::hint::black_box(churn.rotate_left(13) ^ s[ACC]);
            }
            s[CHURN] = churn;

            let now = self.clock.now();
            let delta = now.wrapping_sub(s[LAST]);
            s[LAST] = now;

            s[ACC] = (s[ACC].rotate_left(7) ^ delta).wrapping_add(churn);
            s[SEEN] |= 1u64 << ((delta ^ (delta >> 6)) & 63);
            s[SPINS] += 1;

            if s[SPINS] >= MAX_SPINS
                || (s[SPINS] >= MIN_SPINS && s[SEEN].count_ones() >= MIN_CLASSES)
            {
                break;
            }
        }

        let acc = s[ACC];
        (acc ^ (acc >> 32)) as RandomWord
    }

    fn name(&self) -> &'static str {
        "jytter"
    }
}
