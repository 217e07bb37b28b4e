use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, Font, LineMode, MoveDirection, ShiftType, State},
    lcd::Lcd,
    sender::SendCommand,
    state::LcdState,
    timing::{FIRST_RESET_NIBBLE_MS, POWER_ON_MS, SECOND_RESET_NIBBLE_US},
};

/// [`Config`] is the init config of a [`Lcd`]
///
/// Default is 2 line, 5x8 font, display on, cursor off, blink off,
/// left to right, no autoscroll.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    state: LcdState,
}

impl Default for Config {
    fn default() -> Self {
        let mut state = LcdState::default();

        state.set_line_mode(LineMode::TwoLine);
        state.set_font(Font::Font5x8);
        state.set_display_state(State::On);
        state.set_cursor_state(State::Off);
        state.set_cursor_blink(State::Off);
        state.set_direction(MoveDirection::LeftToRight);
        state.set_shift_type(ShiftType::CursorOnly);

        Self { state }
    }
}

#[allow(missing_docs)]
impl Config {
    pub fn get_line_mode(&self) -> LineMode {
        self.state.get_line_mode()
    }

    pub fn set_line_mode(mut self, line: LineMode) -> Self {
        self.state.set_line_mode(line);
        self
    }

    pub fn get_font(&self) -> Font {
        self.state.get_font()
    }

    /// 5x10 font is ignored by the controller in 2 line mode
    pub fn set_font(mut self, font: Font) -> Self {
        self.state.set_font(font);
        self
    }

    pub fn get_display_state(&self) -> State {
        self.state.get_display_state()
    }

    pub fn set_display_state(mut self, display: State) -> Self {
        self.state.set_display_state(display);
        self
    }

    pub fn get_cursor_state(&self) -> State {
        self.state.get_cursor_state()
    }

    pub fn set_cursor_state(mut self, cursor: State) -> Self {
        self.state.set_cursor_state(cursor);
        self
    }

    pub fn get_cursor_blink(&self) -> State {
        self.state.get_cursor_blink()
    }

    pub fn set_cursor_blink(mut self, blink: State) -> Self {
        self.state.set_cursor_blink(blink);
        self
    }

    pub fn get_direction(&self) -> MoveDirection {
        self.state.get_direction()
    }

    pub fn set_direction(mut self, dir: MoveDirection) -> Self {
        self.state.set_direction(dir);
        self
    }

    pub fn get_shift_type(&self) -> ShiftType {
        self.state.get_shift_type()
    }

    pub fn set_shift_type(mut self, shift: ShiftType) -> Self {
        self.state.set_shift_type(shift);
        self
    }
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    /// Create a [`Lcd`] driver, and init LCD hardware
    ///
    /// Follows "initializing by instruction" of HD44780U datasheet (figure 24),
    /// so it works whatever state the controller was left in (e.g. MCU reset without power cycle).
    pub fn new(
        sender: &'a mut Sender,
        delayer: &'b mut Delayer,
        config: Config,
    ) -> Result<Self, Sender::Error> {
        let state = config.state;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "init LCD, function set {=u8:#x}, display control {=u8:#x}, entry mode {=u8:#x}",
            state.get_function_set(),
            state.get_display_control(),
            state.get_entry_mode()
        );

        delayer.delay_ms(POWER_ON_MS);

        sender.release_bus()?;

        // bus width is unknown at this point, force the controller into 8 bit mode first,
        // only a single nibble is latched per instruction here
        sender.send_and_delay(CommandSet::ResetNibble, delayer, FIRST_RESET_NIBBLE_MS * 1_000)?;
        sender.send_and_delay(CommandSet::ResetNibble, delayer, SECOND_RESET_NIBBLE_US)?;
        sender.send(CommandSet::ResetNibble, delayer)?;

        // from now on, every instruction takes 2 nibbles
        sender.send(CommandSet::HalfFunctionSet, delayer)?;

        sender.send(CommandSet::FunctionSet(state.get_function_set()), delayer)?;
        sender.send(CommandSet::DisplayOnOff(state.get_display_control()), delayer)?;

        let mut lcd = Lcd {
            sender,
            delayer,
            state,
        };

        lcd.clear_display()?;

        let entry_mode = lcd.state.get_entry_mode();
        lcd.send(CommandSet::EntryModeSet(entry_mode))?;

        Ok(lcd)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;

    use super::*;
    use crate::sim::{Controller, Event};

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = Config::default();

        assert_eq!(config.get_line_mode(), LineMode::TwoLine);
        assert_eq!(config.get_font(), Font::Font5x8);
        assert_eq!(config.get_display_state(), State::On);
        assert_eq!(config.get_cursor_state(), State::Off);
        assert_eq!(config.get_cursor_blink(), State::Off);
        assert_eq!(config.get_direction(), MoveDirection::LeftToRight);
        assert_eq!(config.get_shift_type(), ShiftType::CursorOnly);
    }

    #[test]
    fn init_sends_reset_nibbles_then_config() {
        let controller = Controller::default();
        let mut sender = controller.sender();
        let mut delayer = controller.delayer();

        let lcd = Lcd::new(&mut sender, &mut delayer, Config::default()).unwrap();

        // RS and EN are left low
        assert!(!controller.rs_level());
        assert!(!controller.en_level());

        let nibbles = controller.nibbles();
        assert_eq!(
            &nibbles[..4],
            &[(false, 0x03), (false, 0x03), (false, 0x03), (false, 0x02)]
        );

        assert_eq!(lcd.get_display_state(), State::On);

        // replay: everything after the 4 single nibbles pairs up into full bytes
        let bytes: vec::Vec<_> = nibbles[4..]
            .chunks(2)
            .map(|pair| (pair[0].0, (pair[0].1 << 4) | pair[1].1))
            .collect();
        assert_eq!(
            bytes,
            vec![(false, 0x28), (false, 0x0C), (false, 0x01), (false, 0x06)]
        );
    }

    #[test]
    fn init_timing() {
        let controller = Controller::default();
        let mut sender = controller.sender();
        let mut delayer = controller.delayer();

        Lcd::new(&mut sender, &mut delayer, Config::default()).unwrap();

        let events = controller.events();

        // first thing is the power on wait
        assert_eq!(events[0], Event::Delay { ns: 50_000_000 });

        // every nibble is followed by the 1 µs pulse (before it) and the 40 µs settle time
        events
            .iter()
            .enumerate()
            .filter(|(_, event)| matches!(event, Event::Nibble { .. }))
            .for_each(|(index, _)| {
                assert_eq!(events[index - 1], Event::Delay { ns: 1_000 });
                assert_eq!(events[index + 1], Event::Delay { ns: 40_000 });
            });

        let extra_waits: vec::Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                Event::Delay { ns } if *ns != 1_000 && *ns != 40_000 => Some(*ns),
                _ => None,
            })
            .collect();
        // power on, after first and second reset nibble, after clear display
        assert_eq!(extra_waits, vec![50_000_000, 5_000_000, 150_000, 2_000_000]);
    }

    #[test]
    fn init_fills_state() {
        let controller = Controller::default();
        let mut sender = controller.sender();
        let mut delayer = controller.delayer();

        let lcd = Lcd::new(&mut sender, &mut delayer, Config::default()).unwrap();

        assert_eq!(lcd.state.get_function_set(), 0b0000_1000);
        assert_eq!(lcd.state.get_display_control(), 0b0000_0100);
        assert_eq!(lcd.state.get_entry_mode(), 0b0000_0010);
    }

    #[test]
    fn custom_config_goes_to_registers() {
        let controller = Controller::default();
        let mut sender = controller.sender();
        let mut delayer = controller.delayer();

        let config = Config::default()
            .set_line_mode(LineMode::OneLine)
            .set_font(Font::Font5x10)
            .set_cursor_state(State::On)
            .set_cursor_blink(State::On)
            .set_direction(MoveDirection::RightToLeft)
            .set_shift_type(ShiftType::CursorAndDisplay);

        let lcd = Lcd::new(&mut sender, &mut delayer, config).unwrap();
        assert_eq!(lcd.get_line_mode(), LineMode::OneLine);
        assert_eq!(lcd.get_font(), Font::Font5x10);

        // skip the 4 reset nibbles
        let sent: vec::Vec<_> = controller.nibbles()[4..]
            .chunks(2)
            .map(|pair| (pair[0].1 << 4) | pair[1].1)
            .collect();
        assert_eq!(sent, vec![0x24, 0x0F, 0x01, 0x05]);
    }
}
