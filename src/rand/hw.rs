//! Hardware cycle counters.

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
compile_error!("jytter needs a readable cycle counter: build for x86, x86_64 or aarch64");

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("jytter supports 32-bit and 64-bit targets only");

/// A monotonic tick source.
pub trait Clock {
    fn now(&mut self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &mut C {
    #[inline(always)]
    fn now(&mut self) -> u64 {
        (**self).now()
    }
}

/// The CPU's own cycle counter.
#[derive(Debug, Default, Clone, Copy)]
pub struct CycleCounter;

impl Clock for CycleCounter {
    #[inline(always)]
    fn now(&mut self) -> u64 {
        ticks()
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn source_name() -> &'static str {
    "rdtsc"
}

#[cfg(target_arch = "aarch64")]
pub fn source_name() -> &'static str {
    "cntvct_el0"
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn ticks() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "x86")]
#[inline(always)]
fn ticks() -> u64 {
    unsafe { core::arch::x86::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn ticks() -> u64 {
    let cnt: u64;
    unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt) }
    cnt
}
