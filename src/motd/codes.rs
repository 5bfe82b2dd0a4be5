//! Formatting code tables
//!
//! The legacy chat format encodes presentation as `§x` pairs, where `x`
//! selects either a color (`0`-`9`, `a`-`f`) or a style (`k`-`o`, plus `r`
//! for reset). The tables here are fixed protocol data; both lookups accept
//! uppercase code characters, as vanilla servers emit either case.

use bitflags::bitflags;

/// One of the 16 chat colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl Color {
    /// Look up a color by its code character
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            '0' => Some(Self::Black),
            '1' => Some(Self::DarkBlue),
            '2' => Some(Self::DarkGreen),
            '3' => Some(Self::DarkAqua),
            '4' => Some(Self::DarkRed),
            '5' => Some(Self::DarkPurple),
            '6' => Some(Self::Gold),
            '7' => Some(Self::Gray),
            '8' => Some(Self::DarkGray),
            '9' => Some(Self::Blue),
            'a' => Some(Self::Green),
            'b' => Some(Self::Aqua),
            'c' => Some(Self::Red),
            'd' => Some(Self::LightPurple),
            'e' => Some(Self::Yellow),
            'f' => Some(Self::White),
            _ => None,
        }
    }

    /// Get the code character for this color
    pub fn code(self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
        }
    }

    /// Get the CSS hex value for this color
    pub fn hex(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::DarkBlue => "#0000AA",
            Self::DarkGreen => "#00AA00",
            Self::DarkAqua => "#00AAAA",
            Self::DarkRed => "#AA0000",
            Self::DarkPurple => "#AA00AA",
            Self::Gold => "#FFAA00",
            Self::Gray => "#AAAAAA",
            Self::DarkGray => "#555555",
            Self::Blue => "#5555FF",
            Self::Green => "#55FF55",
            Self::Aqua => "#55FFFF",
            Self::Red => "#FF5555",
            Self::LightPurple => "#FF55FF",
            Self::Yellow => "#FFFF55",
            Self::White => "#FFFFFF",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

bitflags! {
    /// Active style effects of a span
    ///
    /// `RESET` marks a region explicitly returned to defaults by a `§r`
    /// code, which view layers may render differently from plain untouched
    /// text (the vanilla reset also forces the color back to white).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold text (`l`)
        const BOLD = 1 << 0;
        /// Struck-through text (`m`)
        const STRIKETHROUGH = 1 << 1;
        /// Underlined text (`n`)
        const UNDERLINE = 1 << 2;
        /// Italic text (`o`)
        const ITALIC = 1 << 3;
        /// Explicit return to defaults (`r`)
        const RESET = 1 << 4;
    }
}

impl StyleFlags {
    /// Look up the style effect for a code character
    ///
    /// `k` (obfuscated) is a recognized code with no supported visual
    /// effect, so it yields an empty flag set rather than `None`.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'k' => Some(Self::empty()),
            'l' => Some(Self::BOLD),
            'm' => Some(Self::STRIKETHROUGH),
            'n' => Some(Self::UNDERLINE),
            'o' => Some(Self::ITALIC),
            'r' => Some(Self::RESET),
            _ => None,
        }
    }
}
