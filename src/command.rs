use crate::constants::{opcode, MAX_BRIGHTNESS};

/// Single-byte commands understood by the HT16K33.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    OscillatorOn,
    DisplayOn,
    /// Dimming level 0-15, saturated on encode.
    Brightness(u8),
}

impl Command {
    /// Packs the command into the byte sent on the bus (command base OR parameter).
    pub fn encode(self) -> u8 {
        match self {
            Command::OscillatorOn => opcode::SYSTEM_SETUP | opcode::system_setup::OSCILLATOR_ON,
            Command::DisplayOn => opcode::DISPLAY_SETUP | opcode::display_setup::DISPLAY_ON,
            Command::Brightness(level) => opcode::DIMMING | level.min(MAX_BRIGHTNESS),
        }
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> u8 {
        command.encode()
    }
}
