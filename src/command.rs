//! Commands of HD44780 that make sense on a write-only 4-bit bus,
//! and the enums used to describe controller options

use crate::utils::BitOps;

/// All instructions this driver sends
///
/// Variants carrying a `u8` register take the raw mirror bits (see [`crate::lcd::Lcd`]),
/// the opcode family bit is added when converting to a [`Command`].
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandSet {
    /// Clear DDRAM and set address counter to 0
    ClearDisplay,
    /// Set address counter to 0, display shift back to origin
    ReturnHome,
    /// Entry mode set, with I/D (bit 1) and S (bit 0)
    EntryModeSet(u8),
    /// Display on/off control, with D (bit 2), C (bit 1) and B (bit 0)
    DisplayOnOff(u8),
    /// Move cursor, or shift whole display, by one position
    CursorOrDisplayShift(ShiftType, MoveDirection),
    // these two are not commands from datasheet,
    // they are the single nibbles sent while the bus width is still unknown
    /// The `0b0011` nibble, repeated 3 times to force a known state
    ResetNibble,
    /// The `0b0010` nibble that switches the controller into 4-bit mode
    HalfFunctionSet,
    /// Function set, with N (bit 3) and F (bit 2), DL is always 0
    FunctionSet(u8),
    /// Set CGRAM address, only lower 6 bits are used
    SetCGRAM(u8),
    /// Set DDRAM address, only lower 7 bits are used
    SetDDRAM(u8),
    /// Write a byte into current RAM (DDRAM or CGRAM)
    WriteDataToRAM(u8),
}

/// Direction the address counter (or the display) moves
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveDirection {
    /// Cursor moves left after a write / shift to the left
    RightToLeft,
    /// Cursor moves right after a write / shift to the right
    #[default]
    LeftToRight,
}

/// What moves on a write or a shift
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftType {
    /// Only the cursor moves
    #[default]
    CursorOnly,
    /// The whole display moves with the cursor (autoscroll when used in entry mode)
    CursorAndDisplay,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Off,
    #[default]
    On,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineMode {
    OneLine,
    #[default]
    TwoLine,
}

/// Character font, 5x10 only takes effect in [`LineMode::OneLine`]
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    #[default]
    Font5x8,
    Font5x10,
}

/// One transaction on the bus
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Command {
    rs: RegisterSelection,
    data: Bits,
}

/// Which register of the controller a transaction addresses
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterSelection {
    /// RS low, instruction register
    Command,
    /// RS high, data register
    Data,
}

/// Payload of a transaction
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bits {
    /// A single nibble, lower 4 bits are used
    Bit4(u8),
    /// A full byte, sent as high nibble then low nibble
    Bit8(u8),
}

impl Command {
    pub(crate) fn new(rs: RegisterSelection, data: Bits) -> Self {
        Self { rs, data }
    }

    /// Register this command goes to
    pub fn get_register_selection(&self) -> RegisterSelection {
        self.rs
    }

    /// Payload of this command
    pub fn get_data(&self) -> Bits {
        self.data
    }
}

impl From<CommandSet> for Command {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::ClearDisplay => Self::new(
                RegisterSelection::Command,
                Bits::Bit8(0b0000_0001),
            ),

            CommandSet::ReturnHome => Self::new(
                RegisterSelection::Command,
                Bits::Bit8(0b0000_0010),
            ),

            CommandSet::EntryModeSet(entry_mode) => Self::new(
                RegisterSelection::Command,
                Bits::Bit8(0b0000_0100 | (entry_mode & 0b11)),
            ),

            CommandSet::DisplayOnOff(display_control) => Self::new(
                RegisterSelection::Command,
                Bits::Bit8(0b0000_1000 | (display_control & 0b111)),
            ),

            CommandSet::CursorOrDisplayShift(st, dir) => {
                let mut raw_bits: u8 = 0b0001_0000;

                match st {
                    ShiftType::CursorOnly => raw_bits.clear_bit(3),
                    ShiftType::CursorAndDisplay => raw_bits.set_bit(3),
                };

                match dir {
                    MoveDirection::RightToLeft => raw_bits.clear_bit(2),
                    MoveDirection::LeftToRight => raw_bits.set_bit(2),
                };

                Self::new(RegisterSelection::Command, Bits::Bit8(raw_bits))
            }

            CommandSet::ResetNibble => {
                Self::new(RegisterSelection::Command, Bits::Bit4(0b0011))
            }

            CommandSet::HalfFunctionSet => {
                Self::new(RegisterSelection::Command, Bits::Bit4(0b0010))
            }

            // DL (bit 4) stays clear, the bus is 4 bit wide
            CommandSet::FunctionSet(function_set) => Self::new(
                RegisterSelection::Command,
                Bits::Bit8(0b0010_0000 | (function_set & 0b1100)),
            ),

            CommandSet::SetCGRAM(addr) => Self::new(
                RegisterSelection::Command,
                Bits::Bit8(0b0100_0000 | (addr & 0b0011_1111)),
            ),

            CommandSet::SetDDRAM(addr) => Self::new(
                RegisterSelection::Command,
                Bits::Bit8(0b1000_0000 | (addr & 0b0111_1111)),
            ),

            CommandSet::WriteDataToRAM(data) => {
                Self::new(RegisterSelection::Data, Bits::Bit8(data))
            }
        }
    }
}
