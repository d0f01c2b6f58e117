//! Control bytes and command selectors understood by the printer.

/// Escape, the prefix of most commands
pub const ESC: u8 = 0x1b;
/// Group separator, prefix of the barcode and inverse commands
pub const GS: u8 = 0x1d;
/// Device control 2, prefix of the density command
pub const DC2: u8 = 0x12;
/// Print the line buffer and feed one line
pub const LF: u8 = 0x0a;

pub const CMD_INITIALIZE: u8 = b'@'; // ESC @
pub const CMD_PRINT_SETTINGS: u8 = b'7'; // ESC 7 n1 n2 n3
pub const CMD_PRINT_DENSITY: u8 = b'#'; // DC2 # n
pub const CMD_JUSTIFY: u8 = b'a'; // ESC a n
pub const CMD_BOLD: u8 = b'E'; // ESC E n
pub const CMD_PRINT_MODE: u8 = b'!'; // ESC ! n
pub const CMD_UNDERLINE: u8 = b'-'; // ESC - n
pub const CMD_UPSIDE_DOWN: u8 = b'{'; // ESC { n
pub const CMD_INVERSE: u8 = b'B'; // GS B n
pub const CMD_HRI_POSITION: u8 = b'H'; // GS H n
pub const CMD_BARCODE_HEIGHT: u8 = b'h'; // GS h n
pub const CMD_BARCODE_WIDTH: u8 = b'w'; // GS w n
pub const CMD_BARCODE_PRINT: u8 = b'k'; // GS k m n d1..dn

pub const TOGGLE_OFF: u8 = 0x00;
pub const TOGGLE_ON: u8 = 0x01;

/// Heating time, unit 10us. Values below 3 leave blank pages.
pub const DEFAULT_HEAT_TIME: u8 = 80;
pub const MIN_HEAT_TIME: u8 = 3;
/// Heating interval, unit 10us
pub const DEFAULT_HEAT_INTERVAL: u8 = 2;
/// Max heating dots, 8 * (n + 1) dots
pub const DEFAULT_HEATING_DOTS: u8 = 7;
/// Density is 50% + 5% * n
pub const DEFAULT_PRINT_DENSITY: u8 = 15;
/// Break time is n * 250us
pub const DEFAULT_PRINT_BREAK_TIME: u8 = 15;
/// Both density operands share one byte, 4 bits each
pub const MAX_DENSITY_NIBBLE: u8 = 0x0f;

pub const DEFAULT_BAUD_RATE: u32 = 19200;
/// Pause after every byte, in milliseconds
pub const DEFAULT_BYTE_DELAY: u64 = 2;
/// Serial write timeout, in milliseconds
pub const DEFAULT_TIMEOUT: u64 = 3000;

pub const MIN_BARCODE_WIDTH: u8 = 2;
pub const MAX_BARCODE_WIDTH: u8 = 3;
