use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{
    command::{Bits, Command, RegisterSelection},
    sender::SendCommand,
    timing::{ENABLE_PULSE_US, NIBBLE_SETTLE_US},
    utils::{BitOps, BitState},
};

/// Bit-banged 4 pin parallel sender
///
/// RW is expected to be tied to GND, so only RS, EN and DB4~DB7 are driven.
pub struct ParallelSender<ControlPin, DBPin>
where
    ControlPin: OutputPin,
    DBPin: OutputPin<Error = ControlPin::Error>,
{
    rs_pin: ControlPin,
    en_pin: ControlPin,
    db_pins: [DBPin; 4],
}

impl<ControlPin, DBPin> ParallelSender<ControlPin, DBPin>
where
    ControlPin: OutputPin,
    DBPin: OutputPin<Error = ControlPin::Error>,
{
    /// Bind the six lines, nothing is written until the first transfer
    pub fn new_4pin(
        rs: ControlPin,
        en: ControlPin,
        db4: DBPin,
        db5: DBPin,
        db6: DBPin,
        db7: DBPin,
    ) -> Self {
        Self {
            rs_pin: rs,
            en_pin: en,
            db_pins: [db4, db5, db6, db7],
        }
    }

    /// Give all the pins back
    pub fn release(self) -> (ControlPin, ControlPin, [DBPin; 4]) {
        (self.rs_pin, self.en_pin, self.db_pins)
    }

    // DB4 carries bit 0 of the nibble, DB7 carries bit 3
    fn push_bits(&mut self, raw_bits: u8) -> Result<(), ControlPin::Error> {
        self.db_pins
            .iter_mut()
            .enumerate()
            .try_for_each(|(index, pin)| match raw_bits.check_bit(index as u8) {
                BitState::Set => pin.set_high(),
                BitState::Clear => pin.set_low(),
            })
    }

    fn pulse_enable(&mut self, delayer: &mut impl DelayNs) -> Result<(), ControlPin::Error> {
        self.en_pin.set_high()?;
        delayer.delay_us(ENABLE_PULSE_US);
        self.en_pin.set_low()?;
        delayer.delay_us(NIBBLE_SETTLE_US);
        Ok(())
    }

    fn send_nibble(
        &mut self,
        nibble: u8,
        delayer: &mut impl DelayNs,
    ) -> Result<(), ControlPin::Error> {
        self.push_bits(nibble & 0b1111)?;
        self.pulse_enable(delayer)
    }
}

impl<ControlPin, DBPin, Delayer> SendCommand<Delayer> for ParallelSender<ControlPin, DBPin>
where
    ControlPin: OutputPin,
    DBPin: OutputPin<Error = ControlPin::Error>,
    Delayer: DelayNs,
{
    type Error = ControlPin::Error;

    fn release_bus(&mut self) -> Result<(), Self::Error> {
        self.rs_pin.set_low()?;
        self.en_pin.set_low()
    }

    fn send(
        &mut self,
        command: impl Into<Command>,
        delayer: &mut Delayer,
    ) -> Result<(), Self::Error> {
        let command = command.into();

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "send {} {}",
            command.get_register_selection(),
            command.get_data()
        );

        match command.get_register_selection() {
            RegisterSelection::Command => self.rs_pin.set_low()?,
            RegisterSelection::Data => self.rs_pin.set_high()?,
        }

        // in 4 bit mode, high nibble always goes first
        match command.get_data() {
            Bits::Bit4(raw_bits) => self.send_nibble(raw_bits, delayer),
            Bits::Bit8(raw_bits) => {
                self.send_nibble(raw_bits >> 4, delayer)?;
                self.send_nibble(raw_bits, delayer)
            }
        }
    }
}
