use std::io::{Result, Write};

use crate::{builder, consts::*, Fixed};

/// Terminal ANSI writes, for anything that is [`Write`]
///
/// Nothing here flushes; the sink and its buffering belong to the caller.
pub trait Terminal: Write {
    /// Write one sequence
    #[inline]
    fn write_seq(&mut self, seq: &str) -> Result<()> { self.write_all(seq.as_bytes()) }
    /// Write one catalog entry
    #[inline]
    fn write_fixed(&mut self, seq: Fixed) -> Result<()> { self.write_seq(seq.as_str()) }
    /// Write every item in order, stopping at the first error
    #[inline]
    fn write_iter<Item: AsRef<[u8]>, C: IntoIterator<Item = Item>>(&mut self, c: C) -> Result<()> {
        for s in c {
            self.write_all(s.as_ref())?;
        }
        Ok(())
    }
    /// Clear the screen and the scrollback buffer
    #[inline]
    fn clear_all(&mut self) -> Result<()> { self.clear_screen().and_then(|_| self.clear_scrollback()) }
    #[inline]
    fn clear_screen(&mut self) -> Result<()> { self.write_seq(ERASE_IN_DISPLAY) }
    #[inline]
    fn clear_scrollback(&mut self) -> Result<()> { self.write_seq(CLEAR_AND_RESET_SCROLLBACK) }
    #[inline]
    fn enter_alt_screen(&mut self) -> Result<()> { self.write_seq(ENTER_ALT_SCREEN) }
    #[inline]
    fn exit_alt_screen(&mut self) -> Result<()> { self.write_seq(EXIT_ALT_SCREEN) }
    #[inline]
    fn cursor_hide(&mut self) -> Result<()> { self.write_seq(HIDE_CURSOR) }
    #[inline]
    fn cursor_show(&mut self) -> Result<()> { self.write_seq(SHOW_CURSOR) }
    #[inline]
    fn cursor_save(&mut self) -> Result<()> { self.write_seq(SAVE_CURSOR_POINTER_IN_MEMORY) }
    #[inline]
    fn cursor_restore(&mut self) -> Result<()> { self.write_seq(RESTORE_CURSOR_POINTER_FROM_MEMORY) }
    #[inline]
    fn cursor_to(&mut self, row: i64, col: i64) -> Result<()> { self.write_seq(&builder::cursor_position(row, col)) }
    #[inline]
    fn attr_reset(&mut self) -> Result<()> { self.write_seq(RESET_ALL_ATTRIBUTES) }
}
impl<W: Write + ?Sized> Terminal for W {}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn writes_exactly_the_encoded_bytes() {
        let mut out: Vec<u8> = Vec::new();
        out.write_fixed(Fixed::HideCursor).unwrap();
        out.cursor_to(5, 10).unwrap();
        out.write_seq(&builder::set_graphics_rendition(&[1, 4])).unwrap();
        out.clear_all().unwrap();
        assert_eq!(out, b"\x1b[?25l\x1b[5;10H\x1b[1;4m\x1b[2J\x1b[3J");
    }

    #[test]
    fn write_iter_preserves_order() {
        let mut out: Vec<u8> = Vec::new();
        out.write_iter([Fixed::SaveCursorPosition.as_str(), "x", Fixed::RestoreCursorPosition.as_str()]).unwrap();
        assert_eq!(out, b"\x1b[sx\x1b[u");
    }

    #[test]
    fn sink_errors_propagate() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> { Err(io::ErrorKind::BrokenPipe.into()) }
            fn flush(&mut self) -> io::Result<()> { Ok(()) }
        }
        let err = Broken.cursor_hide().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
