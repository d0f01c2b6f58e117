use std::io::Write;
use std::num::NonZeroUsize;
use std::time::Duration;

use crate::barcode::{BarcodeSymbology, TextPosition};
use crate::command::{self, Toggle};
use crate::config::PrinterConfig;
use crate::text::{self, Justification, Style};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serial")]
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("Unable to encode text: {0}")]
    Encoding(String),

    #[error("Heat time {0} is below the minimum of 3")]
    HeatTimeOutOfRange(u8),

    #[error("Print density {0} does not fit in 4 bits")]
    DensityOutOfRange(u8),

    #[error("Print break time {0} does not fit in 4 bits")]
    BreakTimeOutOfRange(u8),

    #[error("Invalid barcode text position {0}, expected 0-3")]
    InvalidPrintPosition(u8),

    #[error("Invalid barcode height {0}, expected 1-255")]
    InvalidBarcodeHeight(u8),

    #[error("Invalid barcode width {0}, expected 2-3")]
    InvalidBarcodeWidth(u8),

    #[error("Barcode type {0} is not supported by the printer")]
    UnsupportedSymbology(BarcodeSymbology),

    #[error("Barcode type {symbology} can not hold {count} characters")]
    InvalidDigitCount {
        symbology: BarcodeSymbology,
        count: u8,
    },

    #[error("Unknown barcode type {0:?}")]
    UnknownSymbology(String),
}

/// A connected printer.
///
/// The printer keeps its modes (bold, alignment, ...) in its own registers
/// and never reports them back, so nothing here tracks them. Only one
/// command can be in flight at a time; every method takes `&mut self`.
pub struct Printer<W: Write> {
    sink: W,
    config: PrinterConfig,
}

impl<W: Write> Printer<W> {
    /// Takes ownership of `sink` and sends the initialization sequence.
    ///
    /// Fails without writing anything if `config` is out of range.
    pub fn new(sink: W, config: PrinterConfig) -> Result<Self, Error> {
        config.validate()?;
        let mut printer = Printer { sink, config };
        log::debug!(
            "Initializing printer: dots={} heat_time={} heat_interval={}",
            printer.config.heating_dots,
            printer.config.heat_time,
            printer.config.heat_interval
        );
        let init = command::init(&printer.config);
        printer.write(&init)?;
        Ok(printer)
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Gives the sink back. Closing it is up to the caller.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn encode(&self, content: &str) -> Result<Vec<u8>, Error> {
        self.config
            .codec
            .encode(content, self.config.trap)
            .map_err(|err| Error::Encoding(err.to_string()))
    }

    /// Writes `buf` one byte at a time with `byte_delay` after each byte.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, Error> {
        log::trace!("write {:02x?}", buf);
        let delay = self.config.byte_delay;
        for byte in buf {
            self.sink.write_all(std::slice::from_ref(byte))?;
            if delay > Duration::ZERO {
                std::thread::sleep(delay);
            }
        }
        self.sink.flush()?;
        Ok(buf.len())
    }

    /// ESC @ - Initialize printer, clear data in print buffer and set print mode
    /// to the default mode when powered on.
    ///
    /// ASCII    ESC   @
    /// Hex      1b   40
    /// Decimal  27   64
    ///
    /// Heating settings sent at startup are kept.
    pub fn reset(&mut self) -> Result<usize, Error> {
        self.write(&command::reset())
    }
    pub fn chain_reset(&mut self) -> Result<&mut Self, Error> {
        self.reset().map(|_| self)
    }

    /// LF - print the line buffer and feed one line
    pub fn linefeed(&mut self) -> Result<usize, Error> {
        self.write(&command::linefeed())
    }
    pub fn chain_linefeed(&mut self) -> Result<&mut Self, Error> {
        self.linefeed().map(|_| self)
    }

    pub fn feed(&mut self, n: usize) -> Result<usize, Error> {
        self.write(&command::feed(n))
    }
    pub fn chain_feed(&mut self, n: usize) -> Result<&mut Self, Error> {
        self.feed(n).map(|_| self)
    }

    /// ESC a n - Select justification
    ///
    /// ASCII    ESC   a  n
    /// Hex      1b   61  n
    /// Decimal  27   97  n
    ///
    /// | n | Justification |
    /// |---|---------------|
    /// | 0 | Left          |
    /// | 1 | Center        |
    /// | 2 | Right         |
    ///
    /// Accepts a [`Justification`] or the codes `"l"`, `"c"` and `"r"`.
    /// Unknown codes justify left.
    pub fn justify<J: Into<Justification>>(&mut self, align: J) -> Result<usize, Error> {
        self.write(&command::justify(align.into()))
    }
    pub fn chain_justify<J: Into<Justification>>(&mut self, align: J) -> Result<&mut Self, Error> {
        self.justify(align).map(|_| self)
    }

    fn toggle(&mut self, toggle: Toggle, on: bool) -> Result<usize, Error> {
        if on {
            self.write(&toggle.on())
        } else {
            self.write(&toggle.off())
        }
    }

    /// ESC E n - Bold
    pub fn bold_on(&mut self) -> Result<usize, Error> {
        self.toggle(Toggle::Bold, true)
    }
    pub fn bold_off(&mut self) -> Result<usize, Error> {
        self.toggle(Toggle::Bold, false)
    }
    pub fn chain_bold(&mut self, on: bool) -> Result<&mut Self, Error> {
        self.toggle(Toggle::Bold, on).map(|_| self)
    }

    /// ESC ! n - Font B (smaller characters)
    pub fn font_b_on(&mut self) -> Result<usize, Error> {
        self.toggle(Toggle::FontB, true)
    }
    pub fn font_b_off(&mut self) -> Result<usize, Error> {
        self.toggle(Toggle::FontB, false)
    }
    pub fn chain_font_b(&mut self, on: bool) -> Result<&mut Self, Error> {
        self.toggle(Toggle::FontB, on).map(|_| self)
    }

    /// ESC - n - Underline
    pub fn underline_on(&mut self) -> Result<usize, Error> {
        self.toggle(Toggle::Underline, true)
    }
    pub fn underline_off(&mut self) -> Result<usize, Error> {
        self.toggle(Toggle::Underline, false)
    }
    pub fn chain_underline(&mut self, on: bool) -> Result<&mut Self, Error> {
        self.toggle(Toggle::Underline, on).map(|_| self)
    }

    /// GS B n - White on black. Note the GS prefix.
    pub fn inverse_on(&mut self) -> Result<usize, Error> {
        self.toggle(Toggle::Inverse, true)
    }
    pub fn inverse_off(&mut self) -> Result<usize, Error> {
        self.toggle(Toggle::Inverse, false)
    }
    pub fn chain_inverse(&mut self, on: bool) -> Result<&mut Self, Error> {
        self.toggle(Toggle::Inverse, on).map(|_| self)
    }

    /// ESC { n - Rotate characters 180 degrees
    pub fn upsidedown_on(&mut self) -> Result<usize, Error> {
        self.toggle(Toggle::UpsideDown, true)
    }
    pub fn upsidedown_off(&mut self) -> Result<usize, Error> {
        self.toggle(Toggle::UpsideDown, false)
    }
    pub fn chain_upsidedown(&mut self, on: bool) -> Result<&mut Self, Error> {
        self.toggle(Toggle::UpsideDown, on).map(|_| self)
    }

    /// GS H n - Selects the print position of HRI (Human Readable
    /// Interpretation) characters when printing a barcode
    ///
    /// | n | Position        |
    /// |---|-----------------|
    /// | 0 | Not printed     |
    /// | 1 | Above barcode   |
    /// | 2 | Below barcode   |
    /// | 3 | Above and below |
    ///
    /// Raw modes convert with `TextPosition::try_from(n)`.
    pub fn barcode_select_print_position(
        &mut self,
        position: TextPosition,
    ) -> Result<usize, Error> {
        self.write(&command::barcode_print_position(position))
    }
    pub fn chain_barcode_select_print_position(
        &mut self,
        position: TextPosition,
    ) -> Result<&mut Self, Error> {
        self.barcode_select_print_position(position).map(|_| self)
    }

    /// GS h n - Sets the barcode height in dots, 1 <= n <= 255, default 50
    pub fn barcode_height(&mut self, dots: u8) -> Result<usize, Error> {
        let bytes = command::barcode_height(dots)?;
        self.write(&bytes)
    }
    pub fn chain_barcode_height(&mut self, dots: u8) -> Result<&mut Self, Error> {
        self.barcode_height(dots).map(|_| self)
    }

    /// GS w n - Sets the barcode module width, 2 <= n <= 3, default 2
    pub fn barcode_width(&mut self, n: u8) -> Result<usize, Error> {
        let bytes = command::barcode_width(n)?;
        self.write(&bytes)
    }
    pub fn chain_barcode_width(&mut self, n: u8) -> Result<&mut Self, Error> {
        self.barcode_width(n).map(|_| self)
    }

    /// Prints a barcode.
    ///
    /// `digit_count` is sent as the length operand and must suit
    /// `symbology`:
    ///
    /// | Code | System  | Characters |
    /// |------|---------|------------|
    /// | 65   | UPC-A   | 11, 12     |
    /// | 66   | UPC-E   | 11, 12     |
    /// | 67   | EAN13   | 12, 13     |
    /// | 68   | EAN8    | 7, 8       |
    /// | 69   | CODE39  | > 1        |
    /// | 70   | I25     | > 1, even  |
    /// | 71   | CODEBAR | > 1        |
    /// | 72   | CODE93  | > 1        |
    /// | 73   | CODE128 | > 1        |
    /// | 74   | CODE11  | > 1        |
    /// | 75   | MSI     | > 1        |
    ///
    /// UPC-E and I25 are refused. Whether `digits` really has
    /// `digit_count` characters is not checked; a mismatch shows up as a
    /// garbled print.
    pub fn barcode(
        &mut self,
        digits: &str,
        symbology: BarcodeSymbology,
        digit_count: u8,
        print_numbers: TextPosition,
    ) -> Result<usize, Error> {
        let bytes = command::barcode(digits.as_bytes(), symbology, digit_count, print_numbers)?;
        self.write(&bytes)
    }
    pub fn chain_barcode(
        &mut self,
        digits: &str,
        symbology: BarcodeSymbology,
        digit_count: u8,
        print_numbers: TextPosition,
    ) -> Result<&mut Self, Error> {
        self.barcode(digits, symbology, digit_count, print_numbers)
            .map(|_| self)
    }

    /// Prints `msg` with one justification and one style.
    ///
    /// With `chars_per_line` set a line feed is inserted after every
    /// `chars_per_line + 1` bytes (see [`text::wrap`]); existing line feeds are not counted, so use
    /// them for empty lines only. The style is switched off again before
    /// returning, even when writing the text failed.
    pub fn print_text(
        &mut self,
        msg: &str,
        justification: Justification,
        style: Style,
        chars_per_line: Option<NonZeroUsize>,
    ) -> Result<usize, Error> {
        let body = self.encode(msg)?;
        let body = match chars_per_line {
            Some(width) => text::wrap(&body, width),
            None => body,
        };

        let mut n = self.justify(justification)?;
        let toggle = style.toggle();
        if let Some(toggle) = toggle {
            n += self.write(&toggle.on())?;
        }
        let written = self.write(&body);
        if let Some(toggle) = toggle {
            let off = self.write(&toggle.off());
            if let Err(e) = &off {
                log::warn!("Unable to switch off {:?}: {}", toggle, e);
            }
            n += written?;
            n += off?;
        } else {
            n += written?;
        }
        Ok(n)
    }
    pub fn chain_print_text(
        &mut self,
        msg: &str,
        justification: Justification,
        style: Style,
        chars_per_line: Option<NonZeroUsize>,
    ) -> Result<&mut Self, Error> {
        self.print_text(msg, justification, style, chars_per_line)
            .map(|_| self)
    }

    /// Left justified, normal text
    pub fn print(&mut self, content: &str) -> Result<usize, Error> {
        self.print_text(content, Justification::Left, Style::Normal, None)
    }
    pub fn chain_print(&mut self, content: &str) -> Result<&mut Self, Error> {
        self.print(content).map(|_| self)
    }

    pub fn println(&mut self, content: &str) -> Result<usize, Error> {
        Ok(self.print(content)? + self.linefeed()?)
    }
    pub fn chain_println(&mut self, content: &str) -> Result<&mut Self, Error> {
        self.println(content).map(|_| self)
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        Ok(self.sink.flush()?)
    }
}
