//! How emitted sequences are shown: raw bytes for the terminal, or a visible rendering for humans.
use std::{borrow::Cow, fmt::Write};

use clap::ValueEnum;

/// Output rendering of a sequence
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
#[cfg_attr(feature = "config", derive(serde::Deserialize), serde(rename_all = "lowercase"))]
pub enum OutputMode {
    /// The bytes themselves, for the terminal to act on
    #[default]
    Raw,
    /// ESC as `\x1b`, other control bytes as `\xNN`
    Escaped,
    /// Control bytes in caret notation, ESC as `^[`
    Caret,
}

impl OutputMode {
    /// Render `seq` in this mode
    pub fn render(self, seq: &str) -> Cow<'_, str> {
        match self {
            Self::Raw => Cow::Borrowed(seq),
            Self::Escaped => Cow::Owned(seq.chars().fold(String::with_capacity(seq.len() * 2), |mut s, c| {
                match c {
                    '\\' => s.push_str("\\\\"),
                    c if c.is_ascii_control() => {
                        // infallible for String
                        let _ = write!(s, "\\x{:02x}", c as u8);
                    }
                    c => s.push(c),
                }
                s
            })),
            Self::Caret => Cow::Owned(seq.chars().fold(String::with_capacity(seq.len() * 2), |mut s, c| {
                match c {
                    '\x7f' => s.push_str("^?"),
                    c if c.is_ascii_control() => {
                        s.push('^');
                        s.push((c as u8 + 0x40) as char);
                    }
                    c => s.push(c),
                }
                s
            })),
        }
    }
    /// A mode that is safe to print next to other text
    #[inline]
    pub fn visible(self) -> Self {
        match self {
            Self::Raw => Self::Escaped,
            mode => mode,
        }
    }
}
