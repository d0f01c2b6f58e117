use std::fmt;
use std::str::FromStr;

use crate::printer::Error;

/// Barcode systems known to the printer. The discriminant is the `m` byte
/// sent with `GS k m n d1..dn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BarcodeSymbology {
    #[default]
    UPCA = 65,
    UPCE = 66,
    EAN13 = 67,
    EAN8 = 68,
    CODE39 = 69,
    I25 = 70,
    CODEBAR = 71,
    CODE93 = 72,
    CODE128 = 73,
    CODE11 = 74,
    MSI = 75,
}

/// Selects the print position of HRI (Human Readable Interpretation)
/// characters when printing a barcode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextPosition {
    Off = 0x00,
    Above = 0x01,
    #[default]
    Below = 0x02,
    Both = 0x03,
}

/// Number of characters a symbology accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigitCount {
    /// Inclusive range
    Between(u8, u8),
    /// More than one character
    AtLeastTwo,
    /// More than one character, and an even count
    EvenAtLeastTwo,
}

impl DigitCount {
    pub fn accepts(self, count: u8) -> bool {
        match self {
            DigitCount::Between(min, max) => (min..=max).contains(&count),
            DigitCount::AtLeastTwo => count > 1,
            DigitCount::EvenAtLeastTwo => count > 1 && count % 2 == 0,
        }
    }
}

impl BarcodeSymbology {
    pub const ALL: [BarcodeSymbology; 11] = [
        BarcodeSymbology::UPCA,
        BarcodeSymbology::UPCE,
        BarcodeSymbology::EAN13,
        BarcodeSymbology::EAN8,
        BarcodeSymbology::CODE39,
        BarcodeSymbology::I25,
        BarcodeSymbology::CODEBAR,
        BarcodeSymbology::CODE93,
        BarcodeSymbology::CODE128,
        BarcodeSymbology::CODE11,
        BarcodeSymbology::MSI,
    ];

    /// The `m` byte of the print command
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            BarcodeSymbology::UPCA => "UPCA",
            BarcodeSymbology::UPCE => "UPCE",
            BarcodeSymbology::EAN13 => "EAN13",
            BarcodeSymbology::EAN8 => "EAN8",
            BarcodeSymbology::CODE39 => "CODE39",
            BarcodeSymbology::I25 => "I25",
            BarcodeSymbology::CODEBAR => "CODEBAR",
            BarcodeSymbology::CODE93 => "CODE93",
            BarcodeSymbology::CODE128 => "CODE128",
            BarcodeSymbology::CODE11 => "CODE11",
            BarcodeSymbology::MSI => "MSI",
        }
    }

    /// Character count the printer manual lists for this system
    pub fn digit_count(self) -> DigitCount {
        match self {
            BarcodeSymbology::UPCA | BarcodeSymbology::UPCE => DigitCount::Between(11, 12),
            BarcodeSymbology::EAN13 => DigitCount::Between(12, 13),
            BarcodeSymbology::EAN8 => DigitCount::Between(7, 8),
            BarcodeSymbology::I25 => DigitCount::EvenAtLeastTwo,
            _ => DigitCount::AtLeastTwo,
        }
    }

    // UPC-E and ITF print garbage on the A2 firmware
    pub fn is_supported(self) -> bool {
        !matches!(self, BarcodeSymbology::UPCE | BarcodeSymbology::I25)
    }

    /// Checks that the printer can print this system with `count`
    /// characters. The data itself is not looked at.
    pub fn validate(self, count: u8) -> Result<(), Error> {
        if !self.is_supported() {
            return Err(Error::UnsupportedSymbology(self));
        }
        if !self.digit_count().accepts(count) {
            return Err(Error::InvalidDigitCount {
                symbology: self,
                count,
            });
        }
        Ok(())
    }
}

impl fmt::Display for BarcodeSymbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BarcodeSymbology {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase().replace(|c: char| c == '-' || c == '_', "");
        BarcodeSymbology::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == upper)
            .ok_or_else(|| Error::UnknownSymbology(s.to_string()))
    }
}

impl TextPosition {
    /// ASCII digit form of the position ('0'..'3'), which the printer
    /// accepts interchangeably with the raw value
    pub fn ascii(self) -> u8 {
        b'0' + self as u8
    }
}

impl TryFrom<u8> for TextPosition {
    type Error = Error;

    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        match mode {
            0 => Ok(TextPosition::Off),
            1 => Ok(TextPosition::Above),
            2 => Ok(TextPosition::Below),
            3 => Ok(TextPosition::Both),
            _ => Err(Error::InvalidPrintPosition(mode)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbology_codes() {
        let codes: Vec<u8> = BarcodeSymbology::ALL.iter().map(|k| k.code()).collect();
        assert_eq!(codes, (65..=75).collect::<Vec<u8>>());
        assert_eq!(BarcodeSymbology::default(), BarcodeSymbology::UPCA);
    }

    #[test]
    fn parse_symbology() {
        assert_eq!("ean13".parse::<BarcodeSymbology>().unwrap(), BarcodeSymbology::EAN13);
        assert_eq!("Code-128".parse::<BarcodeSymbology>().unwrap(), BarcodeSymbology::CODE128);
        assert_eq!("UPC_A".parse::<BarcodeSymbology>().unwrap(), BarcodeSymbology::UPCA);

        let resp = "QR".parse::<BarcodeSymbology>();
        assert!(matches!(resp, Err(Error::UnknownSymbology(ref s)) if s == "QR"));
    }

    #[test]
    fn digit_count_tests() {
        assert!(BarcodeSymbology::UPCA.validate(11).is_ok());
        assert!(BarcodeSymbology::UPCA.validate(12).is_ok());
        assert!(BarcodeSymbology::EAN13.validate(13).is_ok());
        assert!(BarcodeSymbology::EAN8.validate(7).is_ok());
        assert!(BarcodeSymbology::CODE39.validate(2).is_ok());

        assert!(matches!(
            BarcodeSymbology::EAN13.validate(11),
            Err(Error::InvalidDigitCount {
                symbology: BarcodeSymbology::EAN13,
                count: 11
            })
        ));
        assert!(matches!(
            BarcodeSymbology::CODE128.validate(1),
            Err(Error::InvalidDigitCount { .. })
        ));
        assert!(DigitCount::EvenAtLeastTwo.accepts(4));
        assert!(!DigitCount::EvenAtLeastTwo.accepts(5));
    }

    #[test]
    fn unsupported_symbologies() {
        assert!(matches!(
            BarcodeSymbology::UPCE.validate(11),
            Err(Error::UnsupportedSymbology(BarcodeSymbology::UPCE))
        ));
        assert!(matches!(
            BarcodeSymbology::I25.validate(4),
            Err(Error::UnsupportedSymbology(BarcodeSymbology::I25))
        ));
    }

    #[test]
    fn text_position() {
        assert_eq!(TextPosition::Below.ascii(), b'2');
        assert_eq!(TextPosition::Off.ascii(), b'0');
        assert_eq!(TextPosition::try_from(3).unwrap(), TextPosition::Both);
        assert!(matches!(
            TextPosition::try_from(4),
            Err(Error::InvalidPrintPosition(4))
        ));
    }
}
