//! True random words from hardware timing jitter.
//!
//! The entropy primitive is consumed through [`EntropySource`]: one call, one
//! 32-bit word, with a caller-owned [`ScratchSpace`] as its working memory.
//! Production code uses [`Jytter`]; tests and benches substitute [`Scripted`].

mod hw;
mod jytter;
mod scripted;

use zeroize::Zeroize;

pub use hw::{Clock, CycleCounter, source_name};
pub use jytter::Jytter;
pub use scripted::Scripted;

/// The atomic unit of output from an entropy source.
pub type RandomWord = u32;

/// Number of 64-bit slots in a scratch region.
pub const SCRATCH_SLOTS: usize = 5;

// =============================================================================
// Scratch space
// =============================================================================

/// Working memory for one batch of draws.
///
/// Laid out as five 64-bit slots, the register image the primitive spills
/// into. The caller never interprets the contents. Allocate one on the stack
/// right before a batch, hand it to every draw of that batch, and let it drop
/// afterwards. It is deliberately not `Clone`: two batches never share one.
#[repr(C)]
#[derive(Debug, Default)]
pub struct ScratchSpace {
    slots: [u64; SCRATCH_SLOTS],
}

impl ScratchSpace {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw slots. Reserved for entropy primitives.
    #[inline(always)]
    pub fn slots_mut(&mut self) -> &mut [u64; SCRATCH_SLOTS] {
        &mut self.slots
    }
}

impl Drop for ScratchSpace {
    fn drop(&mut self) {
        self.slots.zeroize();
    }
}

// =============================================================================
// Entropy source
// =============================================================================

/// An opaque source of true random words.
///
/// `draw` never fails. A platform that cannot produce words is rejected when
/// the crate is built, not at runtime. Implementations may use `scratch` as
/// transient state but must not keep any reference to it after returning.
pub trait EntropySource {
    fn draw(&mut self, scratch: &mut ScratchSpace) -> RandomWord;

    fn name(&self) -> &'static str {
        "unnamed"
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    #[inline(always)]
    fn draw(&mut self, scratch: &mut ScratchSpace) -> RandomWord {
        (**self).draw(scratch)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
