// bit 0 = segment a .. bit 6 = segment g

pub const BLANK: u8 = 0x00;
pub const MINUS: u8 = 0x40; // g
pub const UNDERSCORE: u8 = 0x08; // d

pub const NUMBERS: [u8; 16] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, 0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71,
];
pub const LETTERS: [u8; 26] = [
    0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71, 0x3D, 0x76, 0x06, 0x1E, 0x7A, 0x38, 0x15, 0x54, 0x5C, 0x73,
    0x67, 0x50, 0x6D, 0x78, 0x3E, 0x1C, 0x2A, 0x49, 0x6E, 0x52,
];

/// Looks up the segment pattern for `c`. Letters are case-folded; `None` for
/// anything the table does not cover.
pub fn glyph(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(NUMBERS[c as usize - '0' as usize]),
        'a'..='z' => Some(LETTERS[c as usize - 'a' as usize]),
        'A'..='Z' => Some(LETTERS[c as usize - 'A' as usize]),
        ' ' => Some(BLANK),
        '-' => Some(MINUS),
        '_' => Some(UNDERSCORE),
        _ => None,
    }
}

pub fn glyph_or_blank(c: char) -> u8 {
    glyph(c).unwrap_or(BLANK)
}
