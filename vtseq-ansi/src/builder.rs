//! Parametric sequences.
//!
//! Every function here is a plain formatter: parameters are substituted as given, without range checks
//! or clamping, so `cursor_up(-3)` really is `CSI -3 A`. Keeping values meaningful for the terminal is
//! the caller's job.

use std::fmt::Write;

/// Move the cursor to `row`, `col` (1-based on every terminal we know of) -> `CSI row ; col H`
#[inline]
pub fn cursor_position(row: i64, col: i64) -> String { format!(csi!("{};{}H"), row, col) }

/// Move the cursor `n` columns right -> `CSI n C`
#[inline]
pub fn cursor_forward(n: i64) -> String { format!(csi!("{}C"), n) }
/// Move the cursor `n` columns left -> `CSI n D`
#[inline]
pub fn cursor_backward(n: i64) -> String { format!(csi!("{}D"), n) }
/// Move the cursor `n` lines down -> `CSI n B`
#[inline]
pub fn cursor_down(n: i64) -> String { format!(csi!("{}B"), n) }
/// Move the cursor `n` lines up -> `CSI n A`
#[inline]
pub fn cursor_up(n: i64) -> String { format!(csi!("{}A"), n) }
/// Move the cursor to the start of the line `n` lines down -> `CSI n E`
#[inline]
pub fn cursor_next_line(n: i64) -> String { format!(csi!("{}E"), n) }
/// Move the cursor to the start of the line `n` lines up -> `CSI n F`
#[inline]
pub fn cursor_previous_line(n: i64) -> String { format!(csi!("{}F"), n) }
/// Move the cursor to column `col` of the current line -> `CSI col G`
#[inline]
pub fn cursor_horizontal_absolute(col: i64) -> String { format!(csi!("{}G"), col) }

/// 256 color palette foreground -> `CSI 38;5;n m`
#[inline]
pub fn set_text_color(n: i64) -> String { format!(sgr!("38;5;{}"), n) }
/// 256 color palette background -> `CSI 48;5;n m`
#[inline]
pub fn set_background_color(n: i64) -> String { format!(sgr!("48;5;{}"), n) }
/// 24-bit foreground -> `CSI 38;2;r;g;b m`
#[inline]
pub fn set_rgb_text_color(r: i64, g: i64, b: i64) -> String { format!(sgr!("38;2;{};{};{}"), r, g, b) }
/// 24-bit background -> `CSI 48;2;r;g;b m`
#[inline]
pub fn set_rgb_background_color(r: i64, g: i64, b: i64) -> String { format!(sgr!("48;2;{};{};{}"), r, g, b) }

/// Scroll the page up `n` lines -> `CSI n S`
#[inline]
pub fn scroll_up_lines(n: i64) -> String { format!(csi!("{}S"), n) }
/// Scroll the page down `n` lines -> `CSI n T`
#[inline]
pub fn scroll_down_lines(n: i64) -> String { format!(csi!("{}T"), n) }

/// Erase in display -> `CSI mode J`
///
/// - 0: cursor to end of display
/// - 1: start of display to cursor
/// - 2: whole display
/// - 3: scrollback buffer
#[inline]
pub fn erase_in_display_mode(mode: i64) -> String { format!(csi!("{}J"), mode) }
/// Erase in line -> `CSI mode K`
///
/// - 0: cursor to end of line
/// - 1: start of line to cursor
/// - 2: whole line
#[inline]
pub fn erase_in_line_mode(mode: i64) -> String { format!(csi!("{}K"), mode) }

/// Set mode (SM) -> `CSI mode h`
#[inline]
pub fn set_mode(mode: i64) -> String { format!(csi!("{}h"), mode) }
/// Reset mode (RM) -> `CSI mode l`
#[inline]
pub fn reset_mode(mode: i64) -> String { format!(csi!("{}l"), mode) }

/// Set the top and bottom margins of the scrolling region (DECSTBM) -> `CSI top ; bottom r`
#[inline]
pub fn set_scrolling_region(top: i64, bottom: i64) -> String { format!(csi!("{};{}r"), top, bottom) }

/// Insert `n` blank lines at the cursor -> `CSI n L`
#[inline]
pub fn insert_lines(n: i64) -> String { format!(csi!("{}L"), n) }
/// Delete `n` lines at the cursor -> `CSI n M`
#[inline]
pub fn delete_lines(n: i64) -> String { format!(csi!("{}M"), n) }
/// Insert `n` blank characters at the cursor -> `CSI n @`
#[inline]
pub fn insert_characters(n: i64) -> String { format!(csi!("{}@"), n) }
/// Delete `n` characters at the cursor -> `CSI n P`
#[inline]
pub fn delete_characters(n: i64) -> String { format!(csi!("{}P"), n) }

/// Select graphic rendition with any number of parameters -> `CSI p1;p2;... m`
///
/// Parameters are joined with `;` in the order given. No parameters gives the bare `CSI m`, which is
/// not byte-identical to [`RESET_ALL_ATTRIBUTES`](crate::consts::RESET_ALL_ATTRIBUTES) (`CSI 0 m`).
pub fn set_graphics_rendition(params: &[i64]) -> String {
    let mut out = params.iter().enumerate().fold(String::from(csi!()), |mut out, (i, p)| {
        if i > 0 {
            out.push(';');
        }
        // infallible for String
        let _ = write!(out, "{p}");
        out
    });
    out.push('m');
    out
}

/// Format a cursor position report -> `CSI row ; col R`
///
/// This is the shape of the terminal's answer to
/// [`DEVICE_STATUS_REPORT`](crate::consts::DEVICE_STATUS_REPORT), useful for emulators and tests.
#[inline]
pub fn report_cursor_position(row: i64, col: i64) -> String { format!(csi!("{};{}R"), row, col) }

/// Set the ANSI conformance level (DECSCL) -> `CSI level "p`
#[inline]
pub fn set_conformance_level(level: i64) -> String { format!(csi!("{}\"p"), level) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_position_substitutes_row_then_col() {
        assert_eq!(cursor_position(1, 1), "\x1b[1;1H");
        assert_eq!(cursor_position(5, 10), "\x1b[5;10H");
        assert_eq!(cursor_position(0, 0), "\x1b[0;0H");
        assert_eq!(cursor_position(-2, 7), "\x1b[-2;7H");
    }

    #[test]
    fn relative_movement_uses_one_letter_per_direction() {
        let cases: [(fn(i64) -> String, i64, &str); 7] = [
            (cursor_forward, 5, "\x1b[5C"),
            (cursor_backward, 3, "\x1b[3D"),
            (cursor_down, 2, "\x1b[2B"),
            (cursor_up, 4, "\x1b[4A"),
            (cursor_next_line, 1, "\x1b[1E"),
            (cursor_previous_line, 2, "\x1b[2F"),
            (cursor_horizontal_absolute, 10, "\x1b[10G"),
        ];
        for (f, n, want) in cases {
            assert_eq!(f(n), want);
        }
    }

    #[test]
    fn colors_are_not_bounds_checked() {
        assert_eq!(set_text_color(1), "\x1b[38;5;1m");
        assert_eq!(set_background_color(2), "\x1b[48;5;2m");
        assert_eq!(set_text_color(300), "\x1b[38;5;300m");
        assert_eq!(set_rgb_text_color(255, 128, 0), "\x1b[38;2;255;128;0m");
        assert_eq!(set_rgb_background_color(0, 255, 0), "\x1b[48;2;0;255;0m");
        assert_eq!(set_rgb_background_color(-1, 256, 0), "\x1b[48;2;-1;256;0m");
    }

    #[test]
    fn scroll_erase_and_modes() {
        assert_eq!(scroll_up_lines(3), "\x1b[3S");
        assert_eq!(scroll_down_lines(2), "\x1b[2T");
        assert_eq!(erase_in_display_mode(0), "\x1b[0J");
        assert_eq!(erase_in_display_mode(1), "\x1b[1J");
        assert_eq!(erase_in_display_mode(2), "\x1b[2J");
        assert_eq!(erase_in_line_mode(0), "\x1b[0K");
        assert_eq!(erase_in_line_mode(1), "\x1b[1K");
        assert_eq!(erase_in_line_mode(2), "\x1b[2K");
        assert_eq!(set_mode(4), "\x1b[4h");
        assert_eq!(reset_mode(4), "\x1b[4l");
    }

    #[test]
    fn scrolling_region_and_line_editing() {
        assert_eq!(set_scrolling_region(0, 24), "\x1b[0;24r");
        assert_eq!(set_scrolling_region(1, 10), "\x1b[1;10r");
        assert_eq!(delete_lines(2), "\x1b[2M");
        assert_eq!(insert_lines(3), "\x1b[3L");
        assert_eq!(delete_characters(4), "\x1b[4P");
        assert_eq!(insert_characters(5), "\x1b[5@");
    }

    #[test]
    fn graphics_rendition_keeps_order_and_duplicates() {
        assert_eq!(set_graphics_rendition(&[]), "\x1b[m");
        assert_eq!(set_graphics_rendition(&[0]), "\x1b[0m");
        assert_eq!(set_graphics_rendition(&[1, 4, 31]), "\x1b[1;4;31m");
        assert_eq!(set_graphics_rendition(&[31, 1, 31]), "\x1b[31;1;31m");
        assert_ne!(set_graphics_rendition(&[]), crate::consts::RESET_ALL_ATTRIBUTES);
    }

    #[test]
    fn report_and_conformance() {
        assert_eq!(report_cursor_position(5, 10), "\x1b[5;10R");
        assert_eq!(set_conformance_level(2), "\x1b[2\"p");
    }

    #[test]
    fn extremes_are_formatted_verbatim() {
        assert_eq!(cursor_up(i64::MIN), format!("\x1b[{}A", i64::MIN));
        assert_eq!(cursor_position(i64::MAX, 0), format!("\x1b[{};0H", i64::MAX));
    }
}

#[cfg(test)]
mod builder_proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn cursor_position_is_a_plain_template(r in any::<i64>(), c in any::<i64>()) {
            prop_assert_eq!(cursor_position(r, c), format!("\x1b[{r};{c}H"));
        }

        #[test]
        fn graphics_rendition_joins_in_order(params in prop::collection::vec(any::<i64>(), 0..16)) {
            let joined = params.iter().map(i64::to_string).collect::<Vec<_>>().join(";");
            prop_assert_eq!(set_graphics_rendition(&params), format!("\x1b[{joined}m"));
        }

        #[test]
        fn builders_are_deterministic(n in any::<i64>(), m in any::<i64>()) {
            prop_assert_eq!(set_scrolling_region(n, m), set_scrolling_region(n, m));
            prop_assert_eq!(set_rgb_text_color(n, m, n), set_rgb_text_color(n, m, n));
            prop_assert_eq!(erase_in_line_mode(n), erase_in_line_mode(n));
        }
    }
}
