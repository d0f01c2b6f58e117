use std::error::Error;
use std::num::NonZeroUsize;

use thermalprinter::barcode::{BarcodeSymbology, TextPosition};
use thermalprinter::config::PrinterConfig;
use thermalprinter::printer::Printer;
use thermalprinter::text::{Justification, Style};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let port = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());

    let mut printer = Printer::open(&port, PrinterConfig::default())?;

    printer
        .chain_print_text("Bold centered", Justification::Center, Style::Bold, None)?
        .chain_linefeed()?
        .chain_print_text(
            "The quick brown fox jumps over the lazy dog",
            Justification::Left,
            Style::FontB,
            NonZeroUsize::new(32),
        )?
        .chain_linefeed()?
        .chain_upsidedown(true)?
        .chain_println("Upside down")?
        .chain_upsidedown(false)?
        .chain_barcode_height(80)?
        .chain_barcode("01234567890", BarcodeSymbology::UPCA, 11, TextPosition::Below)?
        .chain_feed(3)?
        .flush()?;

    Ok(())
}
