//! Byte sequences for every printer operation.
//!
//! Nothing in here touches the device. [`crate::printer::Printer`] writes
//! the returned bytes out with the configured pacing.

use crate::barcode::{BarcodeSymbology, TextPosition};
use crate::config::PrinterConfig;
use crate::consts::*;
use crate::printer::Error;
use crate::text::Justification;

/// Device side modes that stay active until switched off or reset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Bold,
    FontB,
    Underline,
    Inverse,
    UpsideDown,
}

impl Toggle {
    pub const ALL: [Toggle; 5] = [
        Toggle::Bold,
        Toggle::FontB,
        Toggle::Underline,
        Toggle::Inverse,
        Toggle::UpsideDown,
    ];

    fn prefix(self) -> [u8; 2] {
        match self {
            Toggle::Bold => [ESC, CMD_BOLD],
            Toggle::FontB => [ESC, CMD_PRINT_MODE],
            Toggle::Underline => [ESC, CMD_UNDERLINE],
            // GS, not ESC
            Toggle::Inverse => [GS, CMD_INVERSE],
            Toggle::UpsideDown => [ESC, CMD_UPSIDE_DOWN],
        }
    }

    pub fn on(self) -> [u8; 3] {
        let [a, b] = self.prefix();
        [a, b, TOGGLE_ON]
    }

    pub fn off(self) -> [u8; 3] {
        let [a, b] = self.prefix();
        [a, b, TOGGLE_OFF]
    }
}

/// Power-on handshake: initialize, heating settings, then density.
///
/// | Offset | Byte |
/// |--------|------|
/// | 0..2   | ESC @ |
/// | 2..4   | ESC 7 |
/// | 4      | heating dots |
/// | 5      | heat time |
/// | 6      | heat interval |
/// | 7..9   | DC2 # |
/// | 9      | density << 4 \| break time |
pub fn init(config: &PrinterConfig) -> [u8; 10] {
    [
        ESC,
        CMD_INITIALIZE,
        ESC,
        CMD_PRINT_SETTINGS,
        config.heating_dots,
        config.heat_time,
        config.heat_interval,
        DC2,
        CMD_PRINT_DENSITY,
        density_byte(config.print_density, config.print_break_time),
    ]
}

pub fn density_byte(density: u8, break_time: u8) -> u8 {
    (density << 4) | break_time
}

/// ESC @ - clear the print buffer and restore power-on modes
pub fn reset() -> [u8; 2] {
    [ESC, CMD_INITIALIZE]
}

pub fn linefeed() -> [u8; 1] {
    [LF]
}

/// `n` line feeds, at least one
pub fn feed(n: usize) -> Vec<u8> {
    vec![LF; n.max(1)]
}

pub fn justify(align: Justification) -> [u8; 3] {
    [ESC, CMD_JUSTIFY, align.operand()]
}

/// GS H n - where the human readable digits go, raw operand form
pub fn barcode_print_position(position: TextPosition) -> [u8; 3] {
    [GS, CMD_HRI_POSITION, position as u8]
}

/// GS h n - barcode height in dots, 1..=255
pub fn barcode_height(dots: u8) -> Result<[u8; 3], Error> {
    if dots == 0 {
        return Err(Error::InvalidBarcodeHeight(dots));
    }
    Ok([GS, CMD_BARCODE_HEIGHT, dots])
}

/// GS w n - barcode module width, 2 or 3
pub fn barcode_width(n: u8) -> Result<[u8; 3], Error> {
    if !(MIN_BARCODE_WIDTH..=MAX_BARCODE_WIDTH).contains(&n) {
        return Err(Error::InvalidBarcodeWidth(n));
    }
    Ok([GS, CMD_BARCODE_WIDTH, n])
}

/// Position select (ASCII digit operand) followed by `GS k m n d1..dn`.
///
/// `digit_count` is sent as given; it is checked against the symbology but
/// not against `digits`.
pub fn barcode(
    digits: &[u8],
    symbology: BarcodeSymbology,
    digit_count: u8,
    print_numbers: TextPosition,
) -> Result<Vec<u8>, Error> {
    symbology.validate(digit_count)?;

    let mut bytes = Vec::with_capacity(7 + digits.len());
    bytes.extend_from_slice(&[GS, CMD_HRI_POSITION, print_numbers.ascii()]);
    bytes.extend_from_slice(&[GS, CMD_BARCODE_PRINT, symbology.code(), digit_count]);
    bytes.extend_from_slice(digits);
    Ok(bytes)
}
