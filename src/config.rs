use std::fmt;
use std::time::Duration;

use encoding::all::UTF_8;
use encoding::types::{EncoderTrap, EncodingRef};

use crate::consts::*;
use crate::printer::Error;

/// Construction time settings of a [`crate::printer::Printer`].
///
/// The heating values end up in the `ESC 7` command sent on startup:
///
/// * `heating_dots` - 0-255 max printing dots, unit 8 dots, default 7 (64 dots).
///   More dots draw more peak current but print faster.
/// * `heat_time` - 3-255, unit 10us, default 80 (800us). Longer is darker
///   but slower, too short leaves the page blank.
/// * `heat_interval` - 0-255, unit 10us, default 2 (20us). Longer is
///   clearer but slower.
///
/// `print_density` and `print_break_time` are packed into the `DC2 #`
/// operand. The defaults work well and changing them can make images print
/// as random text.
#[derive(Clone)]
pub struct PrinterConfig {
    pub baud_rate: u32,
    pub heat_time: u8,
    pub heat_interval: u8,
    pub heating_dots: u8,
    pub print_density: u8,
    pub print_break_time: u8,
    /// Pause after every byte. The printer UART drops bytes sent back to
    /// back on the slower boards.
    pub byte_delay: Duration,
    /// Serial write timeout
    pub timeout: Duration,
    pub codec: EncodingRef,
    pub trap: EncoderTrap,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        PrinterConfig {
            baud_rate: DEFAULT_BAUD_RATE,
            heat_time: DEFAULT_HEAT_TIME,
            heat_interval: DEFAULT_HEAT_INTERVAL,
            heating_dots: DEFAULT_HEATING_DOTS,
            print_density: DEFAULT_PRINT_DENSITY,
            print_break_time: DEFAULT_PRINT_BREAK_TIME,
            byte_delay: Duration::from_millis(DEFAULT_BYTE_DELAY),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT),
            codec: UTF_8 as EncodingRef,
            trap: EncoderTrap::Replace,
        }
    }
}

impl fmt::Debug for PrinterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrinterConfig")
            .field("baud_rate", &self.baud_rate)
            .field("heat_time", &self.heat_time)
            .field("heat_interval", &self.heat_interval)
            .field("heating_dots", &self.heating_dots)
            .field("print_density", &self.print_density)
            .field("print_break_time", &self.print_break_time)
            .field("byte_delay", &self.byte_delay)
            .field("timeout", &self.timeout)
            .field("codec", &self.codec.name())
            .finish()
    }
}

impl PrinterConfig {
    pub fn baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn heat_time(mut self, heat_time: u8) -> Self {
        self.heat_time = heat_time;
        self
    }

    pub fn heat_interval(mut self, heat_interval: u8) -> Self {
        self.heat_interval = heat_interval;
        self
    }

    pub fn heating_dots(mut self, heating_dots: u8) -> Self {
        self.heating_dots = heating_dots;
        self
    }

    pub fn print_density(mut self, density: u8, break_time: u8) -> Self {
        self.print_density = density;
        self.print_break_time = break_time;
        self
    }

    pub fn byte_delay(mut self, delay: Duration) -> Self {
        self.byte_delay = delay;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn codec(mut self, codec: EncodingRef, trap: EncoderTrap) -> Self {
        self.codec = codec;
        self.trap = trap;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.heat_time < MIN_HEAT_TIME {
            return Err(Error::HeatTimeOutOfRange(self.heat_time));
        }
        if self.print_density > MAX_DENSITY_NIBBLE {
            return Err(Error::DensityOutOfRange(self.print_density));
        }
        if self.print_break_time > MAX_DENSITY_NIBBLE {
            return Err(Error::BreakTimeOutOfRange(self.print_break_time));
        }
        Ok(())
    }
}
