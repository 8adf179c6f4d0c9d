//! Zero-argument sequences as literal constants.
//!
//! for reference:
//!  - ESC = escape = "\x1B"
//!  - CSI = control sequence introducer = "\x1B["
//!  - SGR = select graphic rendition = "\x1B[" + _ + "m"
//!
//! refs:
//!  - vt100:
//!     - https://vt100.net/docs/vt100-ug/contents.html
//!  - xterm:
//!     - https://invisible-island.net/xterm/ctlseqs/ctlseqs.html
//!  - windows:
//!     - https://learn.microsoft.com/en-us/windows/console/console-virtual-terminal-sequences

/// Reverse of `\n`: move the cursor up one line keeping the column, scrolling the buffer if needed
pub const REVERSE_INDEX: &str = esc!("M");
/// Save the cursor position in terminal memory (DECSC)
pub const SAVE_CURSOR_POINTER_IN_MEMORY: &str = esc!("7");
/// Restore the cursor position saved with [`SAVE_CURSOR_POINTER_IN_MEMORY`] (DECRC)
pub const RESTORE_CURSOR_POINTER_FROM_MEMORY: &str = esc!("8");

/// Start the cursor blinking
pub const CURSOR_BLINKING: &str = decset!("12", on);
/// Stop the cursor blinking
pub const CURSOR_BLINKING_DISABLE: &str = decset!("12", off);
/// Show the cursor
pub const SHOW_CURSOR: &str = decset!("25", on);
/// Hide the cursor
pub const HIDE_CURSOR: &str = decset!("25", off);

/// Enter alternate screen buffer mode
pub const ENTER_ALT_SCREEN: &str = decset!("1049", on);
/// Exit alternate screen buffer mode
pub const EXIT_ALT_SCREEN: &str = decset!("1049", off);

/// Enable line wrap
pub const ENABLE_LINE_WRAP: &str = decset!("7", on);
/// Disable line wrap
pub const DISABLE_LINE_WRAP: &str = decset!("7", off);
/// Enable auto-wrap mode (DECAWM), same bytes as [`ENABLE_LINE_WRAP`]
pub const AUTO_WRAP: &str = decset!("7", on);
/// Disable auto-wrap mode (DECAWM), same bytes as [`DISABLE_LINE_WRAP`]
pub const AUTO_WRAP_OFF: &str = decset!("7", off);

/// Clear the whole screen
pub const ERASE_IN_DISPLAY: &str = csi!("2J");
/// Clear from the cursor to the end of the line
pub const ERASE_IN_LINE: &str = csi!("K");
/// Clear the screen and the scrollback buffer
pub const CLEAR_AND_RESET_SCROLLBACK: &str = csi!("3J");

/// Scroll the display up one line
pub const SCROLL_UP: &str = csi!("S");
/// Scroll the display down one line
pub const SCROLL_DOWN: &str = csi!("T");

/// Save the cursor position (SCOSC)
pub const SAVE_CURSOR_POSITION: &str = csi!("s");
/// Restore the cursor position saved with [`SAVE_CURSOR_POSITION`] (SCORC)
pub const RESTORE_CURSOR_POSITION: &str = csi!("u");

/// Enable virtual terminal processing (cursor keys send application sequences)
pub const ENABLE_VIRTUAL_TERMINAL_PROCESSING: &str = decset!("1", on);

/// Reset all attributes to default
pub const RESET_ALL_ATTRIBUTES: &str = sgr!("0");
/// Set bold
pub const BOLD_BRIGHT: &str = sgr!("1");
/// Unset bold
pub const NORMAL_INTENSITY: &str = sgr!("22");
/// Set underline
pub const UNDERLINE: &str = sgr!("4");
/// Unset underline
pub const UNDERLINE_DISABLE: &str = sgr!("24");
/// Reverse foreground and background
pub const NEGATIVE: &str = sgr!("7");
/// Unset reverse
pub const POSITIVE: &str = sgr!("27");

/// Set a tab stop at the cursor column
pub const TAB_SET: &str = esc!("H");
/// Clear the tab stop at the cursor column
pub const TAB_CLEAR: &str = csi!("0g");
/// Clear every tab stop
pub const TAB_CLEAR_ALL: &str = csi!("3g");

/// Current line becomes the top half of a double-height line
pub const DOUBLE_HEIGHT_TOP: &str = esc!("#3");
/// Current line becomes the bottom half of a double-height line
pub const DOUBLE_HEIGHT_BOTTOM: &str = esc!("#4");
/// Current line becomes single-width single-height
pub const SINGLE_WIDTH_LINE: &str = esc!("#5");
/// Current line becomes double-width single-height
pub const DOUBLE_WIDTH_LINE: &str = esc!("#6");

/// Ask for a cursor position report, answered as `ESC [ <row> ; <col> R` on the terminal's input
pub const DEVICE_STATUS_REPORT: &str = csi!("6n");
/// Alias of [`DEVICE_STATUS_REPORT`]
pub const REQUEST_CURSOR_POSITION: &str = csi!("6n");

/// Keypad sends application sequences (DECKPAM)
pub const APPLICATION_KEYPAD: &str = esc!("=");
/// Keypad sends numeric characters (DECKPNM)
pub const NORMAL_KEYPAD: &str = esc!(">");

/// Soft terminal reset (DECSTR)
pub const SOFT_TERMINAL_RESET: &str = csi!("!p");
/// Request terminal parameters (DECREQTPARM)
pub const REQUEST_TERMINAL_PARAMETERS: &str = csi!("x");
