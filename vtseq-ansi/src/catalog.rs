//! The catalog of zero-argument sequences as a name to bytes mapping.
//!
//! [`Fixed`] names every constant in [`consts`](crate::consts) once, so callers can select a sequence at
//! runtime (from a config file, a command line, ...) and still get the `&'static str` literal back.

use std::{fmt, str::FromStr};

use crate::{consts::*, UnknownSequence};

macro_rules! fixed_enum {
    {
        $(#[$meta:meta])*
        $vis:vis enum $ident:ident {
            $($(#[$vmeta:meta])* $variant:ident = ($name:literal, $seq:ident)),* $(,)?
        }
    } => {
        $(#[$meta])*
        $vis enum $ident {
            $($(#[$vmeta])* $variant),*
        }
        impl $ident {
            /// Every entry, in catalog order
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
            /// The escape sequence
            #[inline]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $seq),*
                }
            }
            /// The kebab-case name of the entry
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),*
                }
            }
        }
        impl FromStr for $ident {
            type Err = UnknownSequence;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)*
                    _ => Err(UnknownSequence(s.to_string())),
                }
            }
        }
        #[cfg(feature = "clap")]
        impl ::clap::ValueEnum for $ident {
            fn value_variants<'a>() -> &'a [Self] { Self::ALL }
            fn to_possible_value(&self) -> Option<::clap::builder::PossibleValue> {
                Some(::clap::builder::PossibleValue::new(self.name()))
            }
        }
    };
}

fixed_enum! {
/// A zero-argument control sequence.
///
/// Some entries share bytes with another entry under a different name
/// ([`Fixed::AutoWrap`] and [`Fixed::EnableLineWrap`] for example); both names are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fixed {
    ReverseIndex = ("reverse-index", REVERSE_INDEX),
    SaveCursorPointerInMemory = ("save-cursor-pointer-in-memory", SAVE_CURSOR_POINTER_IN_MEMORY),
    RestoreCursorPointerFromMemory = ("restore-cursor-pointer-from-memory", RESTORE_CURSOR_POINTER_FROM_MEMORY),
    CursorBlinking = ("cursor-blinking", CURSOR_BLINKING),
    CursorBlinkingDisable = ("cursor-blinking-disable", CURSOR_BLINKING_DISABLE),
    ShowCursor = ("show-cursor", SHOW_CURSOR),
    HideCursor = ("hide-cursor", HIDE_CURSOR),
    EnterAltScreen = ("enter-alt-screen", ENTER_ALT_SCREEN),
    ExitAltScreen = ("exit-alt-screen", EXIT_ALT_SCREEN),
    EnableLineWrap = ("enable-line-wrap", ENABLE_LINE_WRAP),
    DisableLineWrap = ("disable-line-wrap", DISABLE_LINE_WRAP),
    EraseInDisplay = ("erase-in-display", ERASE_IN_DISPLAY),
    EraseInLine = ("erase-in-line", ERASE_IN_LINE),
    ScrollUp = ("scroll-up", SCROLL_UP),
    ScrollDown = ("scroll-down", SCROLL_DOWN),
    SaveCursorPosition = ("save-cursor-position", SAVE_CURSOR_POSITION),
    RestoreCursorPosition = ("restore-cursor-position", RESTORE_CURSOR_POSITION),
    EnableVirtualTerminalProcessing = ("enable-virtual-terminal-processing", ENABLE_VIRTUAL_TERMINAL_PROCESSING),
    ResetAllAttributes = ("reset-all-attributes", RESET_ALL_ATTRIBUTES),
    BoldBright = ("bold-bright", BOLD_BRIGHT),
    NormalIntensity = ("normal-intensity", NORMAL_INTENSITY),
    Underline = ("underline", UNDERLINE),
    UnderlineDisable = ("underline-disable", UNDERLINE_DISABLE),
    Negative = ("negative", NEGATIVE),
    Positive = ("positive", POSITIVE),
    TabSet = ("tab-set", TAB_SET),
    TabClear = ("tab-clear", TAB_CLEAR),
    TabClearAll = ("tab-clear-all", TAB_CLEAR_ALL),
    DoubleHeightTop = ("double-height-top", DOUBLE_HEIGHT_TOP),
    DoubleHeightBottom = ("double-height-bottom", DOUBLE_HEIGHT_BOTTOM),
    SingleWidthLine = ("single-width-line", SINGLE_WIDTH_LINE),
    DoubleWidthLine = ("double-width-line", DOUBLE_WIDTH_LINE),
    DeviceStatusReport = ("device-status-report", DEVICE_STATUS_REPORT),
    RequestCursorPosition = ("request-cursor-position", REQUEST_CURSOR_POSITION),
    ApplicationKeypad = ("application-keypad", APPLICATION_KEYPAD),
    NormalKeypad = ("normal-keypad", NORMAL_KEYPAD),
    AutoWrap = ("auto-wrap", AUTO_WRAP),
    AutoWrapOff = ("auto-wrap-off", AUTO_WRAP_OFF),
    ClearAndResetScrollback = ("clear-and-reset-scrollback", CLEAR_AND_RESET_SCROLLBACK),
    SoftTerminalReset = ("soft-terminal-reset", SOFT_TERMINAL_RESET),
    RequestTerminalParameters = ("request-terminal-parameters", REQUEST_TERMINAL_PARAMETERS),
}}

impl fmt::Display for Fixed {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}
impl AsRef<str> for Fixed {
    #[inline]
    fn as_ref(&self) -> &str { self.as_str() }
}
impl AsRef<[u8]> for Fixed {
    #[inline]
    fn as_ref(&self) -> &[u8] { self.as_str().as_bytes() }
}

/// Every `(name, sequence)` pair, in catalog order
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> { Fixed::ALL.iter().map(|f| (f.name(), f.as_str())) }

/// The sequence registered under `name`, if any
pub fn lookup(name: &str) -> Option<&'static str> { name.parse::<Fixed>().ok().map(Fixed::as_str) }

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_entry_is_nonempty_and_starts_with_esc() {
        for (name, seq) in entries() {
            assert!(!seq.is_empty(), "{name} is empty");
            assert!(seq.starts_with('\x1b'), "{name} = {seq:?} does not start with ESC");
        }
    }

    #[test]
    fn names_are_unique_and_resolve_to_their_entry() {
        let mut seen = HashSet::new();
        for &f in Fixed::ALL {
            assert!(seen.insert(f.name()), "duplicate name {}", f.name());
            assert_eq!(f.name().parse::<Fixed>(), Ok(f));
            assert_eq!(lookup(f.name()), Some(f.as_str()));
        }
        assert_eq!(seen.len(), 41);
    }

    #[test]
    fn aliases_share_bytes_but_not_names() {
        assert_eq!(Fixed::AutoWrap.as_str(), Fixed::EnableLineWrap.as_str());
        assert_eq!(Fixed::AutoWrapOff.as_str(), Fixed::DisableLineWrap.as_str());
        assert_eq!(Fixed::RequestCursorPosition.as_str(), Fixed::DeviceStatusReport.as_str());
        assert_ne!(Fixed::AutoWrap, Fixed::EnableLineWrap);
        assert_ne!(Fixed::AutoWrap.name(), Fixed::EnableLineWrap.name());
    }

    #[test]
    fn the_two_cursor_save_mechanisms_stay_distinct() {
        assert_eq!(Fixed::SaveCursorPointerInMemory.as_str(), "\x1b7");
        assert_eq!(Fixed::RestoreCursorPointerFromMemory.as_str(), "\x1b8");
        assert_eq!(Fixed::SaveCursorPosition.as_str(), "\x1b[s");
        assert_eq!(Fixed::RestoreCursorPosition.as_str(), "\x1b[u");
    }

    #[test]
    fn entries_match_their_wire_bytes() {
        let expected = [
            (Fixed::ReverseIndex, "\x1bM"),
            (Fixed::CursorBlinking, "\x1b[?12h"),
            (Fixed::CursorBlinkingDisable, "\x1b[?12l"),
            (Fixed::ShowCursor, "\x1b[?25h"),
            (Fixed::HideCursor, "\x1b[?25l"),
            (Fixed::EnterAltScreen, "\x1b[?1049h"),
            (Fixed::ExitAltScreen, "\x1b[?1049l"),
            (Fixed::EnableLineWrap, "\x1b[?7h"),
            (Fixed::DisableLineWrap, "\x1b[?7l"),
            (Fixed::EraseInDisplay, "\x1b[2J"),
            (Fixed::EraseInLine, "\x1b[K"),
            (Fixed::ScrollUp, "\x1b[S"),
            (Fixed::ScrollDown, "\x1b[T"),
            (Fixed::EnableVirtualTerminalProcessing, "\x1b[?1h"),
            (Fixed::ResetAllAttributes, "\x1b[0m"),
            (Fixed::BoldBright, "\x1b[1m"),
            (Fixed::NormalIntensity, "\x1b[22m"),
            (Fixed::Underline, "\x1b[4m"),
            (Fixed::UnderlineDisable, "\x1b[24m"),
            (Fixed::Negative, "\x1b[7m"),
            (Fixed::Positive, "\x1b[27m"),
            (Fixed::TabSet, "\x1bH"),
            (Fixed::TabClear, "\x1b[0g"),
            (Fixed::TabClearAll, "\x1b[3g"),
            (Fixed::DoubleHeightTop, "\x1b#3"),
            (Fixed::DoubleHeightBottom, "\x1b#4"),
            (Fixed::SingleWidthLine, "\x1b#5"),
            (Fixed::DoubleWidthLine, "\x1b#6"),
            (Fixed::DeviceStatusReport, "\x1b[6n"),
            (Fixed::ApplicationKeypad, "\x1b="),
            (Fixed::NormalKeypad, "\x1b>"),
            (Fixed::ClearAndResetScrollback, "\x1b[3J"),
            (Fixed::SoftTerminalReset, "\x1b[!p"),
            (Fixed::RequestTerminalParameters, "\x1b[x"),
        ];
        for (f, bytes) in expected {
            assert_eq!(f.as_str(), bytes, "{}", f.name());
            assert_eq!(f.to_string(), bytes);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(lookup("auto_wrap"), None);
        assert_eq!("AutoWrap".parse::<Fixed>(), Err(UnknownSequence("AutoWrap".to_string())));
    }
}
