// One byte per ROW, one bit per COM (digit slot). ROW0-7 is display A, ROW8-15 display B;
// rows 0-6 of a block are segments a-g, row 7 the decimal point.

use crate::constants::{DOT_ROW, MAX_DIGITS, NUM_DISPLAYS, NUM_ROWS, SEGMENT_ROWS};
use crate::font::BLANK;

pub type DisplayBuffer = [u8; NUM_ROWS];

/// Writes one digit slot of one display. All eight rows of the slot are
/// cleared before the new segments are set, so nothing from the previous
/// glyph survives.
pub fn set_digit(buffer: &mut DisplayBuffer, display: u8, position: u8, pattern: u8, dot: bool) {
    if display >= NUM_DISPLAYS || position >= MAX_DIGITS {
        return;
    }

    let base = (display * MAX_DIGITS) as usize;
    let bit = 1u8 << position;

    for row in &mut buffer[base..base + MAX_DIGITS as usize] {
        *row &= !bit;
    }

    for seg in 0..SEGMENT_ROWS {
        if (pattern >> seg) & 1 == 1 {
            buffer[base + seg as usize] |= bit;
        }
    }

    if dot {
        buffer[base + DOT_ROW as usize] |= bit;
    }
}

/// Addresses both displays as one 16-digit strip: 0-7 on display A, 8-15 on display B.
pub fn set_digit16(buffer: &mut DisplayBuffer, position: u8, pattern: u8, dot: bool) {
    if position >= NUM_DISPLAYS * MAX_DIGITS {
        return;
    }
    set_digit(
        buffer,
        position / MAX_DIGITS,
        position % MAX_DIGITS,
        pattern,
        dot,
    );
}

pub fn clear_display(buffer: &mut DisplayBuffer, display: u8) {
    if display >= NUM_DISPLAYS {
        return;
    }
    for position in 0..MAX_DIGITS {
        set_digit(buffer, display, position, BLANK, false);
    }
}

pub fn clear_all(buffer: &mut DisplayBuffer) {
    buffer.fill(0x00);
}

/// Lights every segment and dot on both displays.
pub fn fill_all(buffer: &mut DisplayBuffer) {
    buffer.fill(0xFF);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_with_dot_on_first_slot() {
        let mut buffer = [0; NUM_ROWS];
        set_digit(&mut buffer, 0, 0, 0x7F, true);
        assert_eq!(buffer, [1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn one_on_last_slot_of_display_b() {
        let mut buffer = [0; NUM_ROWS];
        set_digit(&mut buffer, 1, 7, 0x06, false);
        let mut expected = [0; NUM_ROWS];
        expected[9] = 1 << 7;
        expected[10] = 1 << 7;
        assert_eq!(buffer, expected);
    }

    #[test]
    fn replacing_a_digit_leaves_no_stale_segments() {
        let mut buffer = [0; NUM_ROWS];
        set_digit(&mut buffer, 0, 3, 0x7F, true);
        set_digit(&mut buffer, 0, 3, 0x06, false);
        let mut expected = [0; NUM_ROWS];
        set_digit(&mut expected, 0, 3, 0x06, false);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn neighbouring_slots_are_untouched() {
        let mut buffer = [0; NUM_ROWS];
        set_digit(&mut buffer, 0, 2, 0x7F, true);
        set_digit(&mut buffer, 1, 2, 0x7F, true);
        set_digit(&mut buffer, 0, 3, BLANK, false);
        assert!(buffer.iter().all(|row| *row == 1 << 2));
    }

    #[test]
    fn set_digit_is_idempotent() {
        for display in 0..NUM_DISPLAYS {
            for position in 0..MAX_DIGITS {
                for pattern in 0..=0x7F {
                    for dot in [false, true] {
                        let mut once = [0xA5; NUM_ROWS];
                        set_digit(&mut once, display, position, pattern, dot);
                        let mut twice = once;
                        set_digit(&mut twice, display, position, pattern, dot);
                        assert_eq!(once, twice);
                    }
                }
            }
        }
    }

    #[test]
    fn set_digit16_matches_split_coordinates() {
        for position in 0..16 {
            for pattern in 0..=0x7F {
                for dot in [false, true] {
                    let mut unified = [0x3C; NUM_ROWS];
                    let mut split = unified;
                    set_digit16(&mut unified, position, pattern, dot);
                    set_digit(&mut split, position / 8, position % 8, pattern, dot);
                    assert_eq!(unified, split);
                }
            }
        }
    }

    #[test]
    fn out_of_range_is_a_no_op() {
        let original = [0x5A; NUM_ROWS];
        let mut buffer = original;
        set_digit(&mut buffer, 2, 0, 0x7F, true);
        set_digit(&mut buffer, 0, 8, 0x7F, true);
        set_digit(&mut buffer, u8::MAX, u8::MAX, 0x7F, true);
        set_digit16(&mut buffer, 16, 0x7F, true);
        set_digit16(&mut buffer, u8::MAX, 0x7F, true);
        clear_display(&mut buffer, 2);
        assert_eq!(buffer, original);
    }

    #[test]
    fn clear_display_keeps_other_display() {
        let mut buffer = [0; NUM_ROWS];
        fill_all(&mut buffer);
        clear_display(&mut buffer, 0);
        assert_eq!(&buffer[..8], &[0; 8]);
        assert_eq!(&buffer[8..], &[0xFF; 8]);
    }

    #[test]
    fn clear_all_after_writes() {
        let mut buffer = [0; NUM_ROWS];
        for position in 0..16 {
            set_digit16(&mut buffer, position, 0x7F, position % 2 == 0);
        }
        clear_all(&mut buffer);
        assert_eq!(buffer, [0; NUM_ROWS]);
    }

    #[test]
    fn fill_all_sets_every_bit() {
        let mut buffer = [0; NUM_ROWS];
        fill_all(&mut buffer);
        assert_eq!(buffer, [0xFF; NUM_ROWS]);
    }
}
