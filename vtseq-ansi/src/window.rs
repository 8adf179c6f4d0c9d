//! Window manipulation (XTWINOPS), `CSI Ps t` and `CSI Ps ; a ; b t`.

use tracing::debug;

/// Named window manipulation selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum WindowOp {
    /// Restore a minimized window
    DeIconify = 1,
    /// Minimize the window
    Iconify = 2,
    /// Move the window to `x`, `y`
    Move = 3,
    /// Resize the window to `height`, `width` in pixels
    ResizePixels = 4,
    /// Bring the window to the front of the stacking order
    Raise = 5,
    /// Send the window to the back of the stacking order
    Lower = 6,
    /// Redraw the window
    Refresh = 7,
    /// Resize the text area to `rows`, `cols` in characters
    ResizeCells = 8,
    /// Maximize or restore the window
    Maximize = 9,
}

impl WindowOp {
    /// Does this selector carry a coordinate/size pair?
    #[inline]
    pub const fn takes_pair(self) -> bool { matches!(self, Self::Move | Self::ResizePixels | Self::ResizeCells) }
    /// The numeric `Ps` written into the sequence
    #[inline]
    pub const fn selector(self) -> i64 { self as i64 }
}

impl TryFrom<i64> for WindowOp {
    type Error = i64;
    fn try_from(ps: i64) -> Result<Self, Self::Error> {
        Ok(match ps {
            1 => Self::DeIconify,
            2 => Self::Iconify,
            3 => Self::Move,
            4 => Self::ResizePixels,
            5 => Self::Raise,
            6 => Self::Lower,
            7 => Self::Refresh,
            8 => Self::ResizeCells,
            9 => Self::Maximize,
            _ => return Err(ps),
        })
    }
}

/// Which template a window manipulation request encodes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowForm {
    /// No extra arguments: `CSI ps t`
    Single,
    /// A pair-taking selector with exactly two extras: `CSI ps ; a ; b t`
    Pair(i64, i64),
    /// Extras that don't fit the selector, dropped: `CSI ps t`
    Fallback,
}

impl WindowForm {
    /// Pick the form for selector `ps` with `extras`
    ///
    /// ```
    /// use vtseq_ansi::WindowForm;
    /// assert_eq!(WindowForm::classify(8, &[24, 80]), WindowForm::Pair(24, 80));
    /// assert_eq!(WindowForm::classify(5, &[]), WindowForm::Single);
    /// assert_eq!(WindowForm::classify(5, &[1, 2]), WindowForm::Fallback);
    /// assert_eq!(WindowForm::classify(3, &[100]), WindowForm::Fallback);
    /// ```
    pub fn classify(ps: i64, extras: &[i64]) -> Self {
        let pair = WindowOp::try_from(ps).map_or(false, WindowOp::takes_pair);
        match (pair, extras) {
            (_, []) => Self::Single,
            (true, &[a, b]) => Self::Pair(a, b),
            _ => Self::Fallback,
        }
    }
}

/// Window manipulation -> `CSI ps t`, or `CSI ps ; a ; b t` for move/resize with exactly two extras
///
/// Any other combination of selector and extras silently falls back to `CSI ps t`.
pub fn window_manipulation(ps: i64, extras: &[i64]) -> String {
    match WindowForm::classify(ps, extras) {
        WindowForm::Single => format!(csi!("{}t"), ps),
        WindowForm::Pair(a, b) => format!(csi!("{};{};{}t"), ps, a, b),
        WindowForm::Fallback => {
            debug!(ps, extras = extras.len(), "window manipulation extras ignored");
            format!(csi!("{}t"), ps)
        }
    }
}

/// Typed shorthand for [`window_manipulation`] with a named selector
#[inline]
pub fn window_op(op: WindowOp, extras: &[i64]) -> String { window_manipulation(op.selector(), extras) }
