//! Fixed protocol timings
//!
//! The driver never reads the busy flag, so every wait below is a worst-case execution time
//! taken from the HD44780U datasheet. They may be made longer, never shorter.

/// Width of the EN high pulse that latches a nibble
pub const ENABLE_PULSE_US: u32 = 1;

/// Settle time after every latched nibble, covers the 37 µs of most instructions
pub const NIBBLE_SETTLE_US: u32 = 40;

/// Extra wait after "clear display" and "return home"
pub const CLEAR_HOME_MS: u32 = 2;

/// Wait after power rises above 2.7 V, datasheet asks for at least 40 ms
pub const POWER_ON_MS: u32 = 50;

/// Wait after the first reset nibble
pub const FIRST_RESET_NIBBLE_MS: u32 = 5;

/// Wait after the second reset nibble
pub const SECOND_RESET_NIBBLE_US: u32 = 150;
