//! ANSI text colors for the logging facility.
//!
//! A [`LogColor`] is either [`LogColor::Normal`] (plain attribute reset) or
//! one of the 16 palette entries of the 256-color foreground set, combined
//! with any of four display [`Modifiers`].
//!
//! ```text
//!   Normal            ──▶  ESC[0m
//!   Styled(c, mods)   ──▶  ESC[38;5;<c>m [ESC[1m] [ESC[4m] [ESC[7m] [ESC[5m]
//!                                         bold   underline reverse blink
//! ```

use core::fmt::{self, Write};

/// Control Sequence Introducer.
const CSI: &str = "\x1B[";

/// All attributes off; normal text attribute and color.
pub const ANSI_NORMAL: &str = "\x1B[0m";
pub const ANSI_BOLD: &str = "\x1B[1m";
pub const ANSI_UNDERLINE: &str = "\x1B[4m";
pub const ANSI_BLINK: &str = "\x1B[5m";
pub const ANSI_REVERSE: &str = "\x1B[7m";

/// Base foreground colors. The discriminant is the ANSI palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BaseColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    Gray = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl BaseColor {
    /// Palette index, always in `0..=15`.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Map a palette index to a color. Only the low nibble is considered.
    pub const fn from_code(code: u8) -> Self {
        match code & 0x0F {
            0 => Self::Black,
            1 => Self::Red,
            2 => Self::Green,
            3 => Self::Yellow,
            4 => Self::Blue,
            5 => Self::Magenta,
            6 => Self::Cyan,
            7 => Self::White,
            8 => Self::Gray,
            9 => Self::BrightRed,
            10 => Self::BrightGreen,
            11 => Self::BrightYellow,
            12 => Self::BrightBlue,
            13 => Self::BrightMagenta,
            14 => Self::BrightCyan,
            _ => Self::BrightWhite,
        }
    }
}

/// Independent display modifiers applied after the foreground color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub bold: bool,
    pub underline: bool,
    pub reverse: bool,
    pub blink: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        bold: false,
        underline: false,
        reverse: false,
        blink: false,
    };

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub const fn blink(mut self) -> Self {
        self.blink = true;
        self
    }

    /// Escape sequences for the enabled modifiers, in rendering order.
    fn escapes(self) -> impl Iterator<Item = &'static str> {
        [
            (self.bold, ANSI_BOLD),
            (self.underline, ANSI_UNDERLINE),
            (self.reverse, ANSI_REVERSE),
            (self.blink, ANSI_BLINK),
        ]
        .into_iter()
        .filter_map(|(on, esc)| on.then_some(esc))
    }
}

/// Color selection for the colorized emit operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogColor {
    /// Reset to the terminal's normal attributes.
    #[default]
    Normal,
    Styled(BaseColor, Modifiers),
}

impl LogColor {
    /// Plain foreground color without modifiers.
    pub const fn fg(base: BaseColor) -> Self {
        Self::Styled(base, Modifiers::NONE)
    }

    /// Same color with bold added. `Normal` stays `Normal`.
    pub const fn bold(self) -> Self {
        match self {
            Self::Normal => Self::Normal,
            Self::Styled(base, mods) => Self::Styled(base, mods.bold()),
        }
    }

    pub const fn underline(self) -> Self {
        match self {
            Self::Normal => Self::Normal,
            Self::Styled(base, mods) => Self::Styled(base, mods.underline()),
        }
    }

    pub const fn reverse(self) -> Self {
        match self {
            Self::Normal => Self::Normal,
            Self::Styled(base, mods) => Self::Styled(base, mods.reverse()),
        }
    }

    pub const fn blink(self) -> Self {
        match self {
            Self::Normal => Self::Normal,
            Self::Styled(base, mods) => Self::Styled(base, mods.blink()),
        }
    }
}

impl From<BaseColor> for LogColor {
    fn from(base: BaseColor) -> Self {
        Self::fg(base)
    }
}

// ── Message-class colors ──────────────────────────────────────

pub const NORMAL: LogColor = LogColor::Normal;
pub const WARNING: LogColor = LogColor::fg(BaseColor::Yellow);
pub const ERROR: LogColor = LogColor::fg(BaseColor::BrightRed);
pub const HIGHLIGHT: LogColor = LogColor::fg(BaseColor::BrightCyan);

/// Write the escape sequence(s) that select `color`.
pub fn write_color<W: Write + ?Sized>(out: &mut W, color: LogColor) -> fmt::Result {
    match color {
        LogColor::Normal => out.write_str(ANSI_NORMAL),
        LogColor::Styled(base, mods) => {
            write!(out, "{CSI}38;5;{}m", base.code())?;
            for esc in mods.escapes() {
                out.write_str(esc)?;
            }
            Ok(())
        }
    }
}
