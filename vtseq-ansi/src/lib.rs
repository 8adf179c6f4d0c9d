//! Typed encoders for ANSI/VT100 terminal control sequences.
//!
//! - [`consts`] and [`Fixed`]: zero-argument sequences as `&'static str` literals
//! - builder functions ([`cursor_position`], [`set_graphics_rendition`], [`window_manipulation`], ...): parametric
//!   sequences as owned `String`s
//! - [`Terminal`]: writes either of the above to any [`std::io::Write`]
//!
//! Nothing in this crate touches a terminal. Every function is a pure formatter, so the same input always
//! gives the same bytes, and numbers are substituted as given (no clamping, no validation).
//!
//! ```
//! use vtseq_ansi::{consts::HIDE_CURSOR, cursor_position, set_graphics_rendition, window_manipulation};
//! assert_eq!(HIDE_CURSOR, "\x1b[?25l");
//! assert_eq!(cursor_position(5, 10), "\x1b[5;10H");
//! assert_eq!(set_graphics_rendition(&[1, 4, 31]), "\x1b[1;4;31m");
//! assert_eq!(window_manipulation(8, &[24, 80]), "\x1b[8;24;80t");
//! assert_eq!(window_manipulation(3, &[100]), "\x1b[3t");
//! ```

#[macro_use]
pub mod macros;
pub mod consts;
pub mod catalog;
#[doc(inline)]
pub use catalog::Fixed;
mod error;
pub use error::*;
mod builder;
#[doc(inline)]
pub use builder::*;
mod window;
#[doc(inline)]
pub use window::*;
mod charset;
#[doc(inline)]
pub use charset::*;
mod traits;
#[doc(inline)]
pub use traits::*;
