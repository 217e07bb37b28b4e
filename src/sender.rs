//! Built-in sender
//! If you want to drive the bus some other way, you will need to implement [`SendCommand`] trait

use embedded_hal::delay::DelayNs;

use crate::command::Command;

mod parallel_sender;

pub use parallel_sender::ParallelSender;

/// [`SendCommand`] is the trait a sender should implement to communicate with the hardware
///
/// The bus is write-only: a sender never reads the busy flag, so after each transfer it
/// must block long enough for the controller to finish the instruction.
pub trait SendCommand<Delayer: DelayNs> {
    /// Error raised by the underlying lines
    type Error;

    /// Put RS and EN into their idle (low) level
    fn release_bus(&mut self) -> Result<(), Self::Error>;

    /// Parse a [`Command`] and send it to hardware,
    /// including the fixed settle time after every nibble
    fn send(&mut self, command: impl Into<Command>, delayer: &mut Delayer)
        -> Result<(), Self::Error>;

    /// Send command, then wait specific duration
    ///
    /// Used for instructions that take longer than the per-nibble settle time
    fn send_and_delay(
        &mut self,
        command: impl Into<Command>,
        delayer: &mut Delayer,
        delay_us: u32,
    ) -> Result<(), Self::Error> {
        self.send(command, delayer)?;
        delayer.delay_us(delay_us);
        Ok(())
    }
}
