//! HID keyboard usage ids, and the US layout mapping from the characters the
//! encoders type.

#[repr(transparent)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCode(pub u8);

impl KeyCode {
    pub const NONE: Self = Self(0x00);
    pub const A: Self = Self(0x04);
    pub const N1: Self = Self(0x1E);
    pub const N0: Self = Self(0x27);
    pub const ENTER: Self = Self(0x28);
    pub const TAB: Self = Self(0x2B);
    pub const SPACE: Self = Self(0x2C);
    pub const MINUS: Self = Self(0x2D);
    pub const EQUALS: Self = Self(0x2E);
    pub const LEFT_BRACKET: Self = Self(0x2F);
    pub const RIGHT_BRACKET: Self = Self(0x30);
    pub const BACKSLASH: Self = Self(0x31);
    pub const SEMICOLON: Self = Self(0x33);
    pub const QUOTE: Self = Self(0x34);
    pub const GRAVE: Self = Self(0x35);
    pub const COMMA: Self = Self(0x36);
    pub const DOT: Self = Self(0x37);
    pub const SLASH: Self = Self(0x38);
}

#[repr(transparent)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Modifier(pub u8);

impl Modifier {
    pub const NONE: Self = Self(0);
    pub const LEFT_SHIFT: Self = Self(0b0000_0010);
}

/// A character as a usage id plus the modifier that has to be down with it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HidKey {
    pub code: KeyCode,
    pub modifier: Modifier,
}

impl HidKey {
    const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifier: Modifier::NONE,
        }
    }

    const fn shifted(code: KeyCode) -> Self {
        Self {
            code,
            modifier: Modifier::LEFT_SHIFT,
        }
    }

    /// `None` for anything a US keyboard can't type with at most shift.
    #[must_use]
    pub const fn from_char(key: char) -> Option<Self> {
        if !key.is_ascii() {
            return None;
        }
        let byte = key as u8;
        let key = match byte {
            b'a'..=b'z' => Self::plain(KeyCode(KeyCode::A.0 + (byte - b'a'))),
            b'A'..=b'Z' => Self::shifted(KeyCode(KeyCode::A.0 + (byte - b'A'))),
            b'1'..=b'9' => Self::plain(KeyCode(KeyCode::N1.0 + (byte - b'1'))),
            b'0' => Self::plain(KeyCode::N0),
            b'\n' => Self::plain(KeyCode::ENTER),
            b'\t' => Self::plain(KeyCode::TAB),
            b' ' => Self::plain(KeyCode::SPACE),
            b'-' => Self::plain(KeyCode::MINUS),
            b'=' => Self::plain(KeyCode::EQUALS),
            b'[' => Self::plain(KeyCode::LEFT_BRACKET),
            b']' => Self::plain(KeyCode::RIGHT_BRACKET),
            b'\\' => Self::plain(KeyCode::BACKSLASH),
            b';' => Self::plain(KeyCode::SEMICOLON),
            b'\'' => Self::plain(KeyCode::QUOTE),
            b'`' => Self::plain(KeyCode::GRAVE),
            b',' => Self::plain(KeyCode::COMMA),
            b'.' => Self::plain(KeyCode::DOT),
            b'/' => Self::plain(KeyCode::SLASH),
            b'!' => Self::shifted(KeyCode(KeyCode::N1.0)),
            b'@' => Self::shifted(KeyCode(KeyCode::N1.0 + 1)),
            b'#' => Self::shifted(KeyCode(KeyCode::N1.0 + 2)),
            b'$' => Self::shifted(KeyCode(KeyCode::N1.0 + 3)),
            b'%' => Self::shifted(KeyCode(KeyCode::N1.0 + 4)),
            b'^' => Self::shifted(KeyCode(KeyCode::N1.0 + 5)),
            b'&' => Self::shifted(KeyCode(KeyCode::N1.0 + 6)),
            b'*' => Self::shifted(KeyCode(KeyCode::N1.0 + 7)),
            b'(' => Self::shifted(KeyCode(KeyCode::N1.0 + 8)),
            b')' => Self::shifted(KeyCode::N0),
            b'_' => Self::shifted(KeyCode::MINUS),
            b'+' => Self::shifted(KeyCode::EQUALS),
            b'{' => Self::shifted(KeyCode::LEFT_BRACKET),
            b'}' => Self::shifted(KeyCode::RIGHT_BRACKET),
            b'|' => Self::shifted(KeyCode::BACKSLASH),
            b':' => Self::shifted(KeyCode::SEMICOLON),
            b'"' => Self::shifted(KeyCode::QUOTE),
            b'~' => Self::shifted(KeyCode::GRAVE),
            b'<' => Self::shifted(KeyCode::COMMA),
            b'>' => Self::shifted(KeyCode::DOT),
            b'?' => Self::shifted(KeyCode::SLASH),
            _ => return None,
        };
        Some(key)
    }
}
