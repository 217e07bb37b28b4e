//! Drive LCD1602 with a STM32F411RET6 in 4 Pin Mode, and scroll a banner
//!
//! Wiring diagram
//!
//! LCD1602 <-> STM32F411RET6
//!     Vss <-> GND
//!     Vdd <-> 5V
//!      V0 <-> potentiometer <-> 5V & GND (to adjust the display contrast)
//!      RS <-> PA0
//!      RW <-> GND (bus is write only)
//!      EN <-> PA2 (and optionally connect to a 4.7 kOhm Pulldown resistor, to stable voltage level when STM32 reset)
//!      D4 <-> PA3
//!      D5 <-> PA4
//!      D6 <-> PA5
//!      D7 <-> PA6
//!       A <-> 5V
//!       K <-> GND

#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{pac, prelude::*};

use lcd1602_4bit::{
    command::{MoveDirection, ShiftType},
    lcd::{Config, Lcd},
    sender::ParallelSender,
};

// a little heart, stored in CGRAM slot 0
const HEART: [u8; 8] = [
    0b00000, 0b01010, 0b10101, 0b10001, 0b10001, 0b01010, 0b00100, 0b00000,
];

const BANNER: &str = "Scrolling banner on a 16x2 LCD, 4 bit bus!";

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(8.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);

    let gpioa = dp.GPIOA.split();

    // Push-pull mode for all lines, nothing is read back
    let rs_pin = gpioa.pa0.into_push_pull_output().erase();
    let en_pin = gpioa.pa2.into_push_pull_output().erase();
    let db4_pin = gpioa.pa3.into_push_pull_output().erase();
    let db5_pin = gpioa.pa4.into_push_pull_output().erase();
    let db6_pin = gpioa.pa5.into_push_pull_output().erase();
    let db7_pin = gpioa.pa6.into_push_pull_output().erase();

    let mut sender = ParallelSender::new_4pin(rs_pin, en_pin, db4_pin, db5_pin, db6_pin, db7_pin);

    // GPIO of STM32F4 never fails to write, so every `unwrap()` below is unreachable
    let mut lcd = Lcd::new(&mut sender, &mut delayer, Config::default()).unwrap();
    rprintln!("LCD ready");

    lcd.write_str_to_cur("Hello World").unwrap();
    lcd.delay_ms(2_000);
    lcd.clear_display().unwrap();

    lcd.write_graph_to_cgram(0, &HEART).unwrap();

    lcd.set_cursor_pos((2, 0)).unwrap();
    lcd.write_u8_to_cur(0u8).unwrap();
    lcd.write_str_to_cur(" Welcome ").unwrap();
    lcd.write_u8_to_cur(0u8).unwrap();
    lcd.delay_ms(2_000);

    lcd.clear_display().unwrap();
    lcd.write_str_to_cur(BANNER).unwrap();
    lcd.set_cursor_pos((0, 1)).unwrap();
    lcd.write_str_to_cur("lcd1602 4-bit driver").unwrap();

    rprintln!("scrolling {} characters", BANNER.len());

    let mut shifted = 0;
    loop {
        if shifted < BANNER.len() {
            lcd.shift_cursor_or_display(ShiftType::CursorAndDisplay, MoveDirection::RightToLeft)
                .unwrap();
            shifted += 1;
        } else {
            shifted = 0;
            lcd.set_cursor_pos((0, 0)).unwrap();
        }
        lcd.delay_ms(300);
    }
}
