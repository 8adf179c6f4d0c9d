//! Character set selection and designation (SCS).
//!
//! Common charset bytes: `B` for US ASCII, `0` for DEC special graphics (line drawing), `A` for UK.

use tracing::debug;

use crate::InvalidGSet;

/// One of the four character set slots a terminal keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum GSet {
    /// Usually the default set, invoked into GL
    G0 = 0,
    /// The alternate set, shifted in with SO
    G1 = 1,
    /// Reached by single shift SS2
    G2 = 2,
    /// Reached by single shift SS3
    G3 = 3,
}

impl GSet {
    /// The intermediate byte that addresses this slot in `ESC {intermediate} {charset}`
    #[inline]
    pub const fn intermediate(self) -> char {
        match self {
            Self::G0 => '(',
            Self::G1 => ')',
            Self::G2 => '*',
            Self::G3 => '+',
        }
    }
    /// Designate `charset` into this slot
    #[inline]
    pub fn designate(self, charset: u8) -> String { format!(esc!("{}{}"), self.intermediate(), charset as char) }
}

impl TryFrom<i64> for GSet {
    type Error = InvalidGSet;
    fn try_from(g: i64) -> Result<Self, Self::Error> {
        match g {
            0 => Ok(Self::G0),
            1 => Ok(Self::G1),
            2 => Ok(Self::G2),
            3 => Ok(Self::G3),
            _ => Err(InvalidGSet(g)),
        }
    }
}

/// Select the default (`g == 0`) or alternate (anything else) character set -> `ESC ( c` or `ESC ) c`
#[inline]
pub fn set_character_set(g: i64, charset: u8) -> String {
    if g == 0 {
        GSet::G0.designate(charset)
    } else {
        GSet::G1.designate(charset)
    }
}

/// Designate `charset` into G0..G3 -> `ESC ( c`, `ESC ) c`, `ESC * c` or `ESC + c`
///
/// A selector outside `0..=3` produces an empty string, see [`try_designate_character_set`] for the
/// checked variant.
pub fn designate_character_set(g: i64, charset: u8) -> String {
    try_designate_character_set(g, charset).unwrap_or_else(|e| {
        debug!(%e, "no sequence produced");
        String::new()
    })
}

/// Designate `charset` into G0..G3, failing on a selector outside `0..=3`
#[inline]
pub fn try_designate_character_set(g: i64, charset: u8) -> Result<String, InvalidGSet> {
    GSet::try_from(g).map(|set| set.designate(charset))
}
