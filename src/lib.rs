//! Driver for serial-attached "micro panel" thermal receipt printers, the
//! kind sold by Adafruit and Sparkfun.
//!
//! The printer is write-only from the host side: every operation turns into
//! a short byte sequence that is paced out one byte at a time. Any
//! [`std::io::Write`] can stand in for the serial line, which makes it easy
//! to print to a device file or record bytes in a `Vec<u8>`.
//!
//! ```no_run
//! # #[cfg(feature = "serial")]
//! # fn main() -> Result<(), thermalprinter::printer::Error> {
//! use thermalprinter::config::PrinterConfig;
//! use thermalprinter::printer::Printer;
//! use thermalprinter::text::{Justification, Style};
//!
//! let mut printer = Printer::open("/dev/ttyUSB0", PrinterConfig::default())?;
//! printer
//!     .chain_print_text("Hello", Justification::Center, Style::Bold, None)?
//!     .chain_feed(3)?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "serial"))]
//! # fn main() {}
//! ```

pub mod barcode;
pub mod command;
pub mod config;
pub mod consts;
pub mod printer;
#[cfg(feature = "serial")]
pub mod serial;
pub mod text;
