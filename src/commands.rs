//! Subcommands, one per catalog lookup or builder.
use anyhow::{Context, Result};
use clap::Subcommand;
use vtseq_ansi::{self as ansi, Fixed};

/// Top level commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every fixed sequence by name
    List,
    /// Print fixed sequences by name, in the order given
    Fixed {
        #[arg(required = true, value_enum, value_name = "NAME")]
        names: Vec<Fixed>,
    },
    #[command(flatten)]
    Build(Build),
}

/// Parametric sequences
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Build {
    /// Move the cursor to ROW, COL
    CursorPosition {
        #[arg(allow_negative_numbers = true)]
        row: i64,
        #[arg(allow_negative_numbers = true)]
        col: i64,
    },
    /// Move the cursor N columns right
    CursorForward {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Move the cursor N columns left
    CursorBackward {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Move the cursor N lines down
    CursorDown {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Move the cursor N lines up
    CursorUp {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Move the cursor to the start of the line N lines down
    CursorNextLine {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Move the cursor to the start of the line N lines up
    CursorPreviousLine {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Move the cursor to column COL
    CursorHorizontalAbsolute {
        #[arg(allow_negative_numbers = true)]
        col: i64,
    },
    /// 256 color foreground
    TextColor {
        #[arg(allow_negative_numbers = true)]
        color: i64,
    },
    /// 256 color background
    BackgroundColor {
        #[arg(allow_negative_numbers = true)]
        color: i64,
    },
    /// 24-bit foreground
    RgbTextColor {
        #[arg(allow_negative_numbers = true)]
        r: i64,
        #[arg(allow_negative_numbers = true)]
        g: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// 24-bit background
    RgbBackgroundColor {
        #[arg(allow_negative_numbers = true)]
        r: i64,
        #[arg(allow_negative_numbers = true)]
        g: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Scroll the page up N lines
    ScrollUpLines {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Scroll the page down N lines
    ScrollDownLines {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Erase in display: 0 to end, 1 to start, 2 all, 3 scrollback
    EraseInDisplay {
        #[arg(allow_negative_numbers = true)]
        mode: i64,
    },
    /// Erase in line: 0 to end, 1 to start, 2 all
    EraseInLine {
        #[arg(allow_negative_numbers = true)]
        mode: i64,
    },
    /// Set a terminal mode (SM)
    SetMode {
        #[arg(allow_negative_numbers = true)]
        mode: i64,
    },
    /// Reset a terminal mode (RM)
    ResetMode {
        #[arg(allow_negative_numbers = true)]
        mode: i64,
    },
    /// Window manipulation; move (3) and resize (4, 8) take two extra values
    Window {
        #[arg(allow_negative_numbers = true)]
        ps: i64,
        #[arg(allow_negative_numbers = true)]
        extras: Vec<i64>,
    },
    /// Set the scrolling region margins
    ScrollingRegion {
        #[arg(allow_negative_numbers = true)]
        top: i64,
        #[arg(allow_negative_numbers = true)]
        bottom: i64,
    },
    /// Insert N blank lines
    InsertLines {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Delete N lines
    DeleteLines {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Insert N blank characters
    InsertCharacters {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Delete N characters
    DeleteCharacters {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Select graphic rendition with any number of parameters
    Sgr {
        #[arg(allow_negative_numbers = true)]
        params: Vec<i64>,
    },
    /// Format a cursor position report
    ReportCursorPosition {
        #[arg(allow_negative_numbers = true)]
        row: i64,
        #[arg(allow_negative_numbers = true)]
        col: i64,
    },
    /// Select the default (0) or alternate (1) character set
    SetCharacterSet {
        #[arg(allow_negative_numbers = true)]
        g: i64,
        #[arg(value_parser = parse_charset)]
        charset: u8,
    },
    /// Designate a character set into G0..G3
    DesignateCharacterSet {
        #[arg(allow_negative_numbers = true)]
        g: i64,
        #[arg(value_parser = parse_charset)]
        charset: u8,
    },
    /// Set the ANSI conformance level
    ConformanceLevel {
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },
}

impl Build {
    /// Encode the sequence
    ///
    /// Designation with a selector outside 0..=3 is an error here rather than an empty string.
    pub fn encode(&self) -> Result<String> {
        use Build::*;
        Ok(match *self {
            CursorPosition { row, col } => ansi::cursor_position(row, col),
            CursorForward { n } => ansi::cursor_forward(n),
            CursorBackward { n } => ansi::cursor_backward(n),
            CursorDown { n } => ansi::cursor_down(n),
            CursorUp { n } => ansi::cursor_up(n),
            CursorNextLine { n } => ansi::cursor_next_line(n),
            CursorPreviousLine { n } => ansi::cursor_previous_line(n),
            CursorHorizontalAbsolute { col } => ansi::cursor_horizontal_absolute(col),
            TextColor { color } => ansi::set_text_color(color),
            BackgroundColor { color } => ansi::set_background_color(color),
            RgbTextColor { r, g, b } => ansi::set_rgb_text_color(r, g, b),
            RgbBackgroundColor { r, g, b } => ansi::set_rgb_background_color(r, g, b),
            ScrollUpLines { n } => ansi::scroll_up_lines(n),
            ScrollDownLines { n } => ansi::scroll_down_lines(n),
            EraseInDisplay { mode } => ansi::erase_in_display_mode(mode),
            EraseInLine { mode } => ansi::erase_in_line_mode(mode),
            SetMode { mode } => ansi::set_mode(mode),
            ResetMode { mode } => ansi::reset_mode(mode),
            Window { ps, ref extras } => ansi::window_manipulation(ps, extras),
            ScrollingRegion { top, bottom } => ansi::set_scrolling_region(top, bottom),
            InsertLines { n } => ansi::insert_lines(n),
            DeleteLines { n } => ansi::delete_lines(n),
            InsertCharacters { n } => ansi::insert_characters(n),
            DeleteCharacters { n } => ansi::delete_characters(n),
            Sgr { ref params } => ansi::set_graphics_rendition(params),
            ReportCursorPosition { row, col } => ansi::report_cursor_position(row, col),
            SetCharacterSet { g, charset } => ansi::set_character_set(g, charset),
            DesignateCharacterSet { g, charset } => {
                ansi::try_designate_character_set(g, charset).context("cannot designate character set")?
            }
            ConformanceLevel { level } => ansi::set_conformance_level(level),
        })
    }
}

/// Parse a charset argument, exactly one ASCII character.
pub fn parse_charset(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        &[b] if b.is_ascii_graphic() => Ok(b),
        _ => Err(format!("{s:?} is not a single printable ASCII character")),
    }
}
