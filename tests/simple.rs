extern crate tempfile;

extern crate thermalprinter;

use std::io::{Read, Seek, SeekFrom};
use std::num::NonZeroUsize;
use std::time::Duration;

use thermalprinter::barcode::{BarcodeSymbology, TextPosition};
use thermalprinter::config::PrinterConfig;
use thermalprinter::printer::Printer;
use thermalprinter::text::{Justification, Style};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn config() -> PrinterConfig {
    PrinterConfig::default().byte_delay(Duration::ZERO)
}

#[test]
fn simple() {
    init_logger();

    let mut printer = Printer::new(Vec::new(), config()).unwrap();

    let _ = printer
        .chain_justify('c')
        .unwrap()
        .chain_underline(true)
        .unwrap()
        .chain_print("EAN13")
        .unwrap()
        .chain_underline(false)
        .unwrap()
        .chain_feed(1)
        .unwrap()
        .chain_barcode(
            "01234567890",
            BarcodeSymbology::EAN13,
            13,
            TextPosition::Below,
        )
        .unwrap()
        .chain_feed(3)
        .unwrap();

    let mut expected = vec![27, 64, 27, 55, 7, 80, 2, 18, 35, 0xff];
    expected.extend_from_slice(&[27, 97, 1, 27, 45, 1]);
    expected.extend_from_slice(&[27, 97, 0]);
    expected.extend_from_slice(b"EAN13");
    expected.extend_from_slice(&[27, 45, 0, 10]);
    expected.extend_from_slice(&[29, 72, b'2', 29, 107, 67, 13]);
    expected.extend_from_slice(b"01234567890");
    expected.extend_from_slice(&[10, 10, 10]);
    assert_eq!(printer.into_inner(), expected);
}

#[test]
fn init_parameters_at_fixed_offsets() {
    init_logger();

    for (dots, heat, interval) in [(0, 3, 0), (7, 80, 2), (20, 255, 250), (255, 128, 255)] {
        let config = config()
            .heating_dots(dots)
            .heat_time(heat)
            .heat_interval(interval)
            .print_density(10, 2);
        let bytes = Printer::new(Vec::new(), config).unwrap().into_inner();
        assert_eq!(bytes.len(), 10);
        assert_eq!(&bytes[..4], &[27, 64, 27, 55]);
        assert_eq!(bytes[4], dots);
        assert_eq!(bytes[5], heat);
        assert_eq!(bytes[6], interval);
        assert_eq!(&bytes[7..9], &[18, 35]);
        assert_eq!(bytes[9] >> 4, 10);
        assert_eq!(bytes[9] & 0x0f, 2);
    }
}

#[test]
fn wrapped_text_breaks_after_each_full_line() {
    init_logger();

    let mut printer = Printer::new(Vec::new(), config()).unwrap();
    printer.get_mut().clear();
    printer
        .print_text("hello world", Justification::Left, Style::Normal, NonZeroUsize::new(5))
        .unwrap();

    // "hello ", "\n", "world"
    let mut expected = vec![27, 97, 0];
    expected.extend_from_slice(b"hello \nworld");
    assert_eq!(printer.into_inner(), expected);
}

#[test]
fn wrapped_text_ignores_existing_line_breaks() {
    init_logger();

    let mut printer = Printer::new(Vec::new(), config()).unwrap();
    printer.get_mut().clear();
    printer
        .print_text(
            "ab\ncdefgh",
            Justification::from("l"),
            Style::Inverse,
            NonZeroUsize::new(3),
        )
        .unwrap();

    let mut expected = vec![27, 97, 0, 29, 66, 1];
    expected.extend_from_slice(b"ab\nc\ndefg\nh");
    expected.extend_from_slice(&[29, 66, 0]);
    assert_eq!(printer.into_inner(), expected);
}

#[test]
fn latin1_codec() {
    init_logger();

    let config = config().codec(
        encoding::all::ISO_8859_1,
        encoding::types::EncoderTrap::Replace,
    );
    let mut printer = Printer::new(Vec::new(), config).unwrap();
    printer.get_mut().clear();
    printer.print("Grüße €").unwrap();

    let mut expected = vec![27, 97, 0];
    expected.extend_from_slice(&[b'G', b'r', 0xfc, 0xdf, b'e', b' ', b'?']);
    assert_eq!(printer.into_inner(), expected);
}

#[test]
fn device_file() {
    init_logger();

    let file = tempfile::tempfile().unwrap();
    let mut printer = Printer::new(file, config()).unwrap();
    printer
        .chain_reset()
        .unwrap()
        .chain_println("receipt")
        .unwrap()
        .flush()
        .unwrap();

    let mut file = printer.into_inner();
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).unwrap();

    let mut expected = vec![27, 64, 27, 55, 7, 80, 2, 18, 35, 0xff, 27, 64, 27, 97, 0];
    expected.extend_from_slice(b"receipt\n");
    assert_eq!(bytes, expected);
}
