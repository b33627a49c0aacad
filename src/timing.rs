//! Cycle-count cost of a run.

use crate::rand::Clock;

/// Run `body` between two counter reads; returns its result and the tick delta.
///
/// The delta wraps if the counter does.
pub fn measure<C: Clock, R>(clock: &mut C, body: impl FnOnce() -> R) -> (R, u64) {
    let start = clock.now();
    let result = body();
    let end = clock.now();
    (result, end.wrapping_sub(start))
}

/// Ticks spent in `body`.
pub fn elapsed_ticks<C: Clock>(clock: &mut C, body: impl FnOnce()) -> u64 {
    measure(clock, body).1
}

/// High and low 32-bit halves, eight uppercase hex digits each.
pub fn format_ticks(ticks: u64) -> String {
    format!("{:08X}{:08X}", (ticks >> 32) as u32, ticks as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::CycleCounter;

    struct Readings(Vec<u64>);

    impl Clock for Readings {
        fn now(&mut self) -> u64 {
            self.0.remove(0)
        }
    }

    #[test]
    fn delta_between_reads() {
        let mut clock = Readings(vec![100, 350]);
        assert_eq!(elapsed_ticks(&mut clock, || {}), 250);
    }

    #[test]
    fn wraparound_is_not_special_cased() {
        let mut clock = Readings(vec![u64::MAX - 1, 3]);
        assert_eq!(elapsed_ticks(&mut clock, || {}), 5);

        let mut clock = Readings(vec![10, 4]);
        assert_eq!(elapsed_ticks(&mut clock, || {}), u64::MAX - 5);
    }

    #[test]
    fn body_runs_once_and_result_is_returned() {
        let mut runs = 0;
        let (out, _) = measure(&mut CycleCounter, || {
            runs += 1;
            "done"
        });
        assert_eq!(out, "done");
        assert_eq!(runs, 1);
    }

    #[test]
    fn ticks_render_as_two_halves() {
        assert_eq!(format_ticks(0), "0000000000000000");
        assert_eq!(format_ticks(0x1_0000_00AB), "00000001000000AB");
        assert_eq!(format_ticks(u64::MAX), "FFFFFFFFFFFFFFFF");
    }
}
