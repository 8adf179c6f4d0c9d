//! Literal builders for escape sequences.
//!
//! Every macro expands to a `concat!`, so the result is a `&'static str` usable in `const` items
//! and as a `format!`/`write!` template: `format!(csi!("{};{}H"), row, col)`.

/// Escapes a string to be printed to the terminal
#[macro_export]
macro_rules! esc {
    ($( $a:expr ),* $(,)?) => { concat!('\x1B', $( $a ),*) };
}
/// Control Sequence Introducer (CSI)
#[macro_export]
macro_rules! csi {
    ($( $a:expr ),* $(,)?) => { $crate::esc!('[', $( $a ),*) };
}
/// Private mode set/reset, `CSI ? {mode} h` or `CSI ? {mode} l`
#[macro_export]
macro_rules! decset {
    ($mode:literal, on) => { $crate::csi!('?', $mode, 'h') };
    ($mode:literal, off) => { $crate::csi!('?', $mode, 'l') };
}
/// Select Graphic Rendition (SGR)
#[macro_export]
macro_rules! sgr {
    ($( $a:expr ),* $(,)?) => { $crate::csi!($($a),*, 'm') };
}

/// Indexed or true-color foreground literal
///
/// `fg!(196)` is `CSI 38;5;196 m`, `fg!(255, 128, 0)` is `CSI 38;2;255;128;0 m`, and `fg!(reset)` is `CSI 39 m`.
/// Use [`set_text_color`](crate::set_text_color) when the color is only known at runtime.
#[macro_export]
macro_rules! fg {
    (reset) => {
        $crate::sgr!("39")
    };
    ($ansi:literal) => {
        $crate::sgr!("38;5;", stringify!($ansi))
    };
    ($r:literal, $g:literal, $b:literal) => {
        $crate::sgr!("38;2;", stringify!($r), ';', stringify!($g), ';', stringify!($b))
    };
}

/// Indexed or true-color background literal, the `48` counterpart of [`fg!`]
#[macro_export]
macro_rules! bg {
    (reset) => {
        $crate::sgr!("49")
    };
    ($ansi:literal) => {
        $crate::sgr!("48;5;", stringify!($ansi))
    };
    ($r:literal, $g:literal, $b:literal) => {
        $crate::sgr!("48;2;", stringify!($r), ';', stringify!($g), ';', stringify!($b))
    };
}

/// Macro for executing a series of fallible write functions on a [`Terminal`](crate::Terminal), <br>
/// essentially using `and_then` to chain the results of each function call
/// # Example
/// ```
/// use vtseq_ansi::{execute, Terminal};
/// let mut out: Vec<u8> = Vec::new();
/// execute!(out, cursor_hide(), clear_screen(), cursor_to(1, 1), write_seq("hi"), cursor_show()).unwrap();
/// assert_eq!(out, b"\x1b[?25l\x1b[2J\x1b[1;1Hhi\x1b[?25h");
/// ```
#[macro_export]
macro_rules! execute {
    ($i:expr, $f:ident($($a:expr),*)$(, $fr:ident($($ar:expr),*))+) => {
        match $i.$f($($a),*) {
            Ok(_) => $crate::execute!($i, $($fr($($ar),*)),+),
            Err(e) => Err(e),
        }
    };
    ($i:expr, $f:ident($($a:expr),*)) => {
        $i.$f($($a),*)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn literals_expand_to_expected_bytes() {
        assert_eq!(esc!("7"), "\x1b7");
        assert_eq!(csi!("2J"), "\x1b[2J");
        assert_eq!(decset!("25", off), "\x1b[?25l");
        assert_eq!(sgr!("0"), "\x1b[0m");
        assert_eq!(fg!(196), "\x1b[38;5;196m");
        assert_eq!(bg!(0, 255, 0), "\x1b[48;2;0;255;0m");
        assert_eq!(fg!(reset), "\x1b[39m");
    }

    #[test]
    fn literals_work_as_format_templates() {
        assert_eq!(format!(csi!("{};{}H"), 5, 10), "\x1b[5;10H");
        assert_eq!(format!(sgr!("38;5;{}"), -1), "\x1b[38;5;-1m");
    }
}
