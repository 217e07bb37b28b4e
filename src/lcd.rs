//! The [`Lcd`] driver, a thin stateful layer over a [`SendCommand`] sender

use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, Font, LineMode, MoveDirection, ShiftType, State},
    sender::SendCommand,
    state::LcdState,
    timing::CLEAR_HOME_MS,
};

mod init;

pub use init::Config;

// DDRAM address of the first column of each row, on a 2 line display
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// One attached LCD1602
///
/// The controller registers are write-only, so [`Lcd`] keeps a copy of what it last wrote,
/// and every option change is a read-modify-write on that copy followed by a full register write.
///
/// A [`Lcd`] only exists after [`Lcd::new`] has run the whole initialization sequence.
pub struct Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    sender: &'a mut Sender,
    delayer: &'b mut Delayer,
    state: LcdState,
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    fn send(&mut self, command: CommandSet) -> Result<(), Sender::Error> {
        self.sender.send(command, self.delayer)
    }

    /// Clear the entire display, and move cursor to (0, 0)
    pub fn clear_display(&mut self) -> Result<(), Sender::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("clear display");

        self.sender
            .send_and_delay(CommandSet::ClearDisplay, self.delayer, CLEAR_HOME_MS * 1_000)
    }

    /// Move cursor to (0, 0) and undo any display shift, DDRAM content is kept
    pub fn return_home(&mut self) -> Result<(), Sender::Error> {
        self.sender
            .send_and_delay(CommandSet::ReturnHome, self.delayer, CLEAR_HOME_MS * 1_000)
    }

    /// Move cursor to `(column, row)`
    ///
    /// Any row beyond the second one is treated as the second row.
    /// Column is not checked.
    pub fn set_cursor_pos(&mut self, pos: (u8, u8)) -> Result<(), Sender::Error> {
        let row = pos.1.min(1) as usize;
        let raw_pos = pos.0.wrapping_add(ROW_OFFSETS[row]);

        self.send(CommandSet::SetDDRAM(raw_pos))
    }

    /// Turn the whole display on or off, DDRAM content is kept
    pub fn set_display_state(&mut self, display: State) -> Result<(), Sender::Error> {
        self.state.set_display_state(display);
        self.send(CommandSet::DisplayOnOff(self.state.get_display_control()))
    }

    #[allow(missing_docs)]
    pub fn get_display_state(&self) -> State {
        self.state.get_display_state()
    }

    /// Show or hide the underline cursor
    pub fn set_cursor_state(&mut self, cursor: State) -> Result<(), Sender::Error> {
        self.state.set_cursor_state(cursor);
        self.send(CommandSet::DisplayOnOff(self.state.get_display_control()))
    }

    #[allow(missing_docs)]
    pub fn get_cursor_state(&self) -> State {
        self.state.get_cursor_state()
    }

    /// Blink the character at cursor position
    ///
    /// Sent as a regular display control instruction (`0b0000_1DCB`),
    /// same as [`Lcd::set_display_state`] and [`Lcd::set_cursor_state`].
    pub fn set_cursor_blink_state(&mut self, blink: State) -> Result<(), Sender::Error> {
        self.state.set_cursor_blink(blink);
        self.send(CommandSet::DisplayOnOff(self.state.get_display_control()))
    }

    #[allow(missing_docs)]
    pub fn get_cursor_blink_state(&self) -> State {
        self.state.get_cursor_blink()
    }

    /// Move cursor, or shift the whole display, one step without writing anything
    ///
    /// [`MoveDirection::RightToLeft`] moves to the left, [`MoveDirection::LeftToRight`] to the right.
    pub fn shift_cursor_or_display(
        &mut self,
        shift_type: ShiftType,
        dir: MoveDirection,
    ) -> Result<(), Sender::Error> {
        self.send(CommandSet::CursorOrDisplayShift(shift_type, dir))
    }

    /// Direction the cursor moves after each write
    pub fn set_direction(&mut self, dir: MoveDirection) -> Result<(), Sender::Error> {
        self.state.set_direction(dir);
        self.send(CommandSet::EntryModeSet(self.state.get_entry_mode()))
    }

    #[allow(missing_docs)]
    pub fn get_direction(&self) -> MoveDirection {
        self.state.get_direction()
    }

    /// [`ShiftType::CursorAndDisplay`] turns autoscroll on: the display moves on each write,
    /// and the cursor stays in place
    pub fn set_shift_type(&mut self, shift: ShiftType) -> Result<(), Sender::Error> {
        self.state.set_shift_type(shift);
        self.send(CommandSet::EntryModeSet(self.state.get_entry_mode()))
    }

    #[allow(missing_docs)]
    pub fn get_shift_type(&self) -> ShiftType {
        self.state.get_shift_type()
    }

    /// Line mode chosen at init, it can't change afterward
    pub fn get_line_mode(&self) -> LineMode {
        self.state.get_line_mode()
    }

    /// Font chosen at init, it can't change afterward
    pub fn get_font(&self) -> Font {
        self.state.get_font()
    }

    /// Draw a custom glyph into one of the 8 CGRAM slots
    ///
    /// `index` is masked to its lower 3 bits, each byte of `graph_data` is one row
    /// (top row first, lower 5 bits used). Afterward, DDRAM address is reset to 0,
    /// so next write goes to top left corner.
    pub fn write_graph_to_cgram(
        &mut self,
        index: u8,
        graph_data: &[u8; 8],
    ) -> Result<(), Sender::Error> {
        let index = index & 0b111;

        #[cfg(feature = "defmt")]
        defmt::debug!("write graph to CGRAM slot {}", index);

        self.send(CommandSet::SetCGRAM(index << 3))?;
        graph_data
            .iter()
            .try_for_each(|&line_data| self.send(CommandSet::WriteDataToRAM(line_data)))?;

        // switch back to DDRAM, otherwise next writes land in CGRAM
        self.send(CommandSet::SetDDRAM(0))
    }

    /// Write a raw byte at cursor position, `0..=7` shows the custom glyphs
    pub fn write_u8_to_cur(&mut self, byte: impl Into<u8>) -> Result<(), Sender::Error> {
        self.send(CommandSet::WriteDataToRAM(byte.into()))
    }

    /// Write [char] at cursor position
    ///
    /// ASCII characters are sent as is, anything else is shown as a full rectangle (`0xFF`)
    pub fn write_char_to_cur(&mut self, char: char) -> Result<(), Sender::Error> {
        let out_byte = match char.is_ascii() {
            true => char as u8,
            false => 0xFF,
        };

        self.write_u8_to_cur(out_byte)
    }

    /// Write string at cursor position, stops at the end of `str` or at the first NUL
    ///
    /// The controller moves its address counter by itself, no cursor command is sent in between.
    pub fn write_str_to_cur(&mut self, str: &str) -> Result<(), Sender::Error> {
        str.chars()
            .take_while(|&char| char != '\0')
            .try_for_each(|char| self.write_char_to_cur(char))
    }

    /// Wait for specified milliseconds
    pub fn delay_ms(&mut self, ms: u32) {
        self.delayer.delay_ms(ms);
    }

    /// Wait for specified microseconds
    pub fn delay_us(&mut self, us: u32) {
        self.delayer.delay_us(us)
    }
}

impl<'a, 'b, Sender, Delayer> fmt::Write for Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_str_to_cur(s).map_err(|_| fmt::Error)
    }
}
