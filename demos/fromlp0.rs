use std::fs::OpenOptions;

use thermalprinter::config::PrinterConfig;
use thermalprinter::printer::{Error, Printer};
use thermalprinter::text::{Justification, Style};

fn main() -> Result<(), Error> {
    let device_file = OpenOptions::new().write(true).open("/dev/usb/lp0")?;

    // USB class printers buffer on their own
    let config = PrinterConfig::default().byte_delay(std::time::Duration::ZERO);
    let mut printer = Printer::new(device_file, config)?;

    printer
        .chain_justify("c")?
        .chain_print_text("Underlined Text", Justification::Center, Style::Underline, None)?
        .chain_linefeed()?
        .chain_print_text("Inverse", Justification::Left, Style::Inverse, None)?
        .chain_feed(3)?
        .flush()
}
