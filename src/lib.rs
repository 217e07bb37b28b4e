/*!
# LCD 1602 Driver, 4 bit bus

Bit-banged driver for HD44780 compatible 16x2 character LCD.
The bus is write-only (RW tied to GND), the busy flag is never read,
fixed worst-case delays from the datasheet are used instead (see [`timing`]).

Basic Usage:

1. Initialize a "sender" <br/>
    This crate includes a 4-pin parallel driver [`sender::ParallelSender`],
    you can use any driver implementing [`sender::SendCommand`] instead.
<br/>
<br/>
2. Use [`lcd::Lcd::new()`] with a [`lcd::Config`] to create a [`lcd::Lcd`],
    it initializes the LCD1602 hardware
<br/>
<br/>
3. Use any methods provided by [`lcd::Lcd`] to control LCD1602

```ignore
let mut sender = ParallelSender::new_4pin(rs, en, db4, db5, db6, db7);
let mut lcd = Lcd::new(&mut sender, &mut delayer, Config::default())?;

lcd.write_graph_to_cgram(0, &HEART)?;
lcd.set_cursor_pos((2, 0))?;
lcd.write_u8_to_cur(0)?;
lcd.write_str_to_cur(" Welcome ")?;
```

Enable the `defmt` feature to get every transaction logged with [defmt](https://docs.rs/defmt).
*/

#![no_std]
#![warn(missing_docs)]

pub mod command;
pub mod lcd;
pub mod sender;
#[cfg(test)]
mod sim;
mod state;
pub mod timing;
pub mod utils;
