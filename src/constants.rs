pub const DEFAULT_ADDRESS: u8 = 0x70;
pub const NUM_DISPLAYS: u8 = 2;
pub const MAX_DIGITS: u8 = 8; // per display
pub const NUM_ROWS: usize = 16; // ROW0-ROW15, one byte each
pub const MAX_BRIGHTNESS: u8 = 15; // 4 bits
pub const DISPLAY_RAM_ADDRESS: u8 = 0x00;

pub(crate) const SEGMENT_ROWS: u8 = 7; // a-g
pub(crate) const DOT_ROW: u8 = 7;

#[allow(dead_code)]
pub mod opcode {
    pub const SYSTEM_SETUP: u8 = 0x20;
    pub const DISPLAY_SETUP: u8 = 0x80;
    pub const DIMMING: u8 = 0xE0;

    pub mod system_setup {
        pub const STANDBY: u8 = 0x00; // bit 0 clear: oscillator off
        pub const OSCILLATOR_ON: u8 = 0x01; // bit 0 set: normal operation
    }

    pub mod display_setup {
        pub const DISPLAY_OFF: u8 = 0x00;
        pub const DISPLAY_ON: u8 = 0x01; // bit 0, blinking (bits 1-2) left off
    }
}
