use crate::{
    command::{Font, LineMode, MoveDirection, ShiftType, State},
    utils::{BitOps, BitState},
};

// bit positions inside each register, as listed in HD44780U datasheet table 6
const FUNCTION_SET_LINE_BIT: u8 = 3;
const FUNCTION_SET_FONT_BIT: u8 = 2;

const DISPLAY_CONTROL_DISPLAY_BIT: u8 = 2;
const DISPLAY_CONTROL_CURSOR_BIT: u8 = 1;
const DISPLAY_CONTROL_BLINK_BIT: u8 = 0;

const ENTRY_MODE_DIRECTION_BIT: u8 = 1;
const ENTRY_MODE_SHIFT_BIT: u8 = 0;

/// Mirror of the three write-only configuration registers of the controller
///
/// Every setter touches exactly one bit, the other bits of that register are kept as is.
/// The raw register value is what gets OR-ed into the command opcode.
#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub(crate) struct LcdState {
    function_set: u8,
    display_control: u8,
    entry_mode: u8,
}

fn write_bit(register: &mut u8, pos: u8, set: bool) {
    match set {
        true => register.set_bit(pos),
        false => register.clear_bit(pos),
    };
}

fn state_of(register: u8, pos: u8) -> State {
    match register.check_bit(pos) {
        BitState::Set => State::On,
        BitState::Clear => State::Off,
    }
}

impl LcdState {
    pub(crate) fn get_function_set(&self) -> u8 {
        self.function_set
    }

    pub(crate) fn get_display_control(&self) -> u8 {
        self.display_control
    }

    pub(crate) fn get_entry_mode(&self) -> u8 {
        self.entry_mode
    }

    pub(crate) fn get_line_mode(&self) -> LineMode {
        match self.function_set.check_bit(FUNCTION_SET_LINE_BIT) {
            BitState::Set => LineMode::TwoLine,
            BitState::Clear => LineMode::OneLine,
        }
    }

    pub(crate) fn set_line_mode(&mut self, line: LineMode) {
        write_bit(
            &mut self.function_set,
            FUNCTION_SET_LINE_BIT,
            line == LineMode::TwoLine,
        );
    }

    pub(crate) fn get_font(&self) -> Font {
        match self.function_set.check_bit(FUNCTION_SET_FONT_BIT) {
            BitState::Set => Font::Font5x10,
            BitState::Clear => Font::Font5x8,
        }
    }

    pub(crate) fn set_font(&mut self, font: Font) {
        write_bit(
            &mut self.function_set,
            FUNCTION_SET_FONT_BIT,
            font == Font::Font5x10,
        );
    }

    pub(crate) fn get_display_state(&self) -> State {
        state_of(self.display_control, DISPLAY_CONTROL_DISPLAY_BIT)
    }

    pub(crate) fn set_display_state(&mut self, display: State) {
        write_bit(
            &mut self.display_control,
            DISPLAY_CONTROL_DISPLAY_BIT,
            display == State::On,
        );
    }

    pub(crate) fn get_cursor_state(&self) -> State {
        state_of(self.display_control, DISPLAY_CONTROL_CURSOR_BIT)
    }

    pub(crate) fn set_cursor_state(&mut self, cursor: State) {
        write_bit(
            &mut self.display_control,
            DISPLAY_CONTROL_CURSOR_BIT,
            cursor == State::On,
        );
    }

    pub(crate) fn get_cursor_blink(&self) -> State {
        state_of(self.display_control, DISPLAY_CONTROL_BLINK_BIT)
    }

    pub(crate) fn set_cursor_blink(&mut self, blink: State) {
        write_bit(
            &mut self.display_control,
            DISPLAY_CONTROL_BLINK_BIT,
            blink == State::On,
        );
    }

    pub(crate) fn get_direction(&self) -> MoveDirection {
        match self.entry_mode.check_bit(ENTRY_MODE_DIRECTION_BIT) {
            BitState::Set => MoveDirection::LeftToRight,
            BitState::Clear => MoveDirection::RightToLeft,
        }
    }

    pub(crate) fn set_direction(&mut self, dir: MoveDirection) {
        write_bit(
            &mut self.entry_mode,
            ENTRY_MODE_DIRECTION_BIT,
            dir == MoveDirection::LeftToRight,
        );
    }

    pub(crate) fn get_shift_type(&self) -> ShiftType {
        match self.entry_mode.check_bit(ENTRY_MODE_SHIFT_BIT) {
            BitState::Set => ShiftType::CursorAndDisplay,
            BitState::Clear => ShiftType::CursorOnly,
        }
    }

    pub(crate) fn set_shift_type(&mut self, shift: ShiftType) {
        write_bit(
            &mut self.entry_mode,
            ENTRY_MODE_SHIFT_BIT,
            shift == ShiftType::CursorAndDisplay,
        );
    }
}
