use jytter::pass::charset::ALPHABET;
use jytter::rand::{EntropySource, RandomWord, SCRATCH_SLOTS, ScratchSpace, Scripted};
use jytter::{format_hex_words, format_password};

/// Fails the test if it ever sees its own leftovers at the start of a batch.
struct Tattletale {
    next: RandomWord,
    fresh_batches: usize,
}

const MARK: u64 = 0x5EED_5EED_5EED_5EED;

impl EntropySource for Tattletale {
    fn draw(&mut self, scratch: &mut ScratchSpace) -> RandomWord {
        let slots = scratch.slots_mut();
        if slots[0] != MARK {
            assert_eq!(slots, &[0; SCRATCH_SLOTS], "scratch carried over from another batch");
            self.fresh_batches += 1;
        }
        *slots = [MARK; SCRATCH_SLOTS];
        self.next = self.next.wrapping_add(1);
        self.next
    }
}

#[test]
fn test_hex_two_words_end_to_end() {
    let mut src = Scripted::new(&[0x0000_0000, 0x0000_0001, 0xFFFF_FFFF, 0x0000_0002]);
    assert_eq!(format_hex_words(&mut src, 2), "0000000000000001");
    assert_eq!(format_hex_words(&mut src, 2), "FFFFFFFF00000002");
}

#[test]
fn test_password_single_word_ten() {
    let mut src = Scripted::new(&[10]);
    assert_eq!(format_password(&mut src, 1), "A");
}

#[test]
fn test_password_boundaries() {
    let cases: [(RandomWord, &str); 8] = [
        (0, "0"),
        (9, "9"),
        (10, "A"),
        (35, "Z"),
        (36, "a"),
        (61, "z"),
        (62, "0"),
        (123, "z"),
    ];
    for (word, expected) in cases {
        let mut src = Scripted::new(&[word]);
        assert_eq!(format_password(&mut src, 1), expected, "word {word}");
    }
}

#[test]
fn test_lengths_and_charsets() {
    let words: Vec<RandomWord> = (0..997u32).map(|i| i.wrapping_mul(2_654_435_761)).collect();
    let mut src = Scripted::new(&words);

    for count in [0u32, 1, 2, 4, 8, 33] {
        let hex = format_hex_words(&mut src, count);
        assert_eq!(hex.len(), 8 * count as usize);
        assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)));
    }

    for count in [0u32, 1, 11, 22, 43, 500] {
        let pass = format_password(&mut src, count);
        assert_eq!(pass.len(), count as usize);
        assert!(pass.bytes().all(|b| ALPHABET.contains(&b)));
    }
}

#[test]
fn test_scripted_runs_reproduce() {
    let words = [0xCAFE_BABE, 7, 1 << 31, 61];
    let a = format_password(&mut Scripted::new(&words), 12);
    let b = format_password(&mut Scripted::new(&words), 12);
    assert_eq!(a, b);
}

#[test]
fn test_each_call_gets_fresh_scratch() {
    let mut src = Tattletale {
        next: 0,
        fresh_batches: 0,
    };

    assert_eq!(format_hex_words(&mut src, 3), "000000010000000200000003");
    assert_eq!(format_hex_words(&mut src, 1), "00000004");
    format_password(&mut src, 5);
    format_password(&mut src, 0);

    // the zero-length password never draws
    assert_eq!(src.fresh_batches, 3);
}
