use std::num::NonZeroUsize;

use crate::command::Toggle;
use crate::consts;

/// Horizontal alignment of printed lines
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Justification {
    #[default]
    Left = 0x00,
    Center = 0x01,
    Right = 0x02,
}

impl Justification {
    /// Operand of `ESC a n`
    pub fn operand(self) -> u8 {
        self as u8
    }
}

/// Accepts the single letter codes `l`, `c` and `r` in either case.
/// Anything else is left aligned.
impl From<char> for Justification {
    fn from(code: char) -> Self {
        match code.to_ascii_uppercase() {
            'C' => Justification::Center,
            'R' => Justification::Right,
            _ => Justification::Left,
        }
    }
}

impl From<&str> for Justification {
    fn from(code: &str) -> Self {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Justification::from(c),
            _ => Justification::Left,
        }
    }
}

/// Style applied to a whole `print_text` call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Normal,
    Bold,
    Underline,
    Inverse,
    FontB,
}

impl Style {
    /// The device toggle behind this style, `None` for normal text
    pub fn toggle(self) -> Option<Toggle> {
        match self {
            Style::Normal => None,
            Style::Bold => Some(Toggle::Bold),
            Style::Underline => Some(Toggle::Underline),
            Style::Inverse => Some(Toggle::Inverse),
            Style::FontB => Some(Toggle::FontB),
        }
    }
}

/// Single letter codes: `n`ormal, `b`old, `u`nderline, `i`nverse (`r` for
/// reverse works too) and `f`ont B. Unknown codes print normal text.
impl From<char> for Style {
    fn from(code: char) -> Self {
        match code {
            'b' => Style::Bold,
            'u' => Style::Underline,
            'i' | 'r' => Style::Inverse,
            'f' => Style::FontB,
            _ => Style::Normal,
        }
    }
}

impl From<&str> for Style {
    fn from(code: &str) -> Self {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Style::from(c),
            _ => Style::Normal,
        }
    }
}

/// Inserts a line feed after every `width + 1` bytes of `msg`. The extra
/// byte is usually the space between two words, which then trails the
/// printed line. The last piece is not followed by a line feed. Existing
/// line feeds and multi-byte characters are not taken into account.
pub fn wrap(msg: &[u8], width: NonZeroUsize) -> Vec<u8> {
    let stride = width.get().saturating_add(1);
    let mut out = Vec::with_capacity(msg.len() + msg.len() / stride);
    for (i, chunk) in msg.chunks(stride).enumerate() {
        if i > 0 {
            out.push(consts::LF);
        }
        out.extend_from_slice(chunk);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn justification_codes() {
        for (code, expected) in [
            ("l", Justification::Left),
            ("L", Justification::Left),
            ("c", Justification::Center),
            ("C", Justification::Center),
            ("r", Justification::Right),
            ("R", Justification::Right),
            ("x", Justification::Left),
            ("", Justification::Left),
            ("ct", Justification::Left),
        ] {
            assert_eq!(Justification::from(code), expected, "code {:?}", code);
        }
        assert_eq!(Justification::Right.operand(), 2);
    }

    #[test]
    fn style_codes() {
        assert_eq!(Style::from('b'), Style::Bold);
        assert_eq!(Style::from("u"), Style::Underline);
        assert_eq!(Style::from("i"), Style::Inverse);
        assert_eq!(Style::from("r"), Style::Inverse);
        assert_eq!(Style::from("f"), Style::FontB);
        assert_eq!(Style::from("n"), Style::Normal);
        assert_eq!(Style::from("z"), Style::Normal);
        assert_eq!(Style::Normal.toggle(), None);
        assert_eq!(Style::Bold.toggle(), Some(Toggle::Bold));
    }

    #[test]
    fn wrap_tests() {
        assert_eq!(wrap(b"hello world", width(5)), b"hello \nworld".to_vec());
        assert_eq!(wrap(b"hello world!", width(5)), b"hello \nworld!".to_vec());
        assert_eq!(wrap(b"one two three", width(3)), b"one \ntwo \nthre\ne".to_vec());
        assert_eq!(wrap(b"abc", width(5)), b"abc".to_vec());
        assert_eq!(wrap(b"", width(5)), Vec::<u8>::new());
        assert_eq!(wrap(b"abcdef", width(usize::MAX)), b"abcdef".to_vec());
        // existing line feeds are just bytes
        assert_eq!(wrap(b"ab\ncdef", width(2)), b"ab\n\ncde\nf".to_vec());
    }
}
