//! Span drawing for packed 1-bit-per-pixel monochrome framebuffers.
//!
//! Each byte holds 8 horizontally adjacent pixels, most significant bit
//! leftmost. [`draw_screen`] clears a caller-owned buffer and sets one
//! inclusive run of bits on a single row, writing whole bytes where the run
//! covers them. [`Panel`] scans a [`Framebuffer`] out to an EL320.256 style
//! panel through the `embedded-hal` traits.
//!
//! ```
//! use el320_span::{draw_screen, SpanError};
//!
//! let mut screen = [0xAAu8; 3];
//! draw_screen(Some(&mut screen[..]), 3, 1, 3, 21, 0).unwrap();
//! assert_eq!(screen, [0x1F, 0xFF, 0xFC]);
//!
//! let err = draw_screen(Some(&mut screen[..]), 3, 1, 3, 24, 0).unwrap_err();
//! assert_eq!(err, SpanError::EndOutOfBounds { x2: 24, bit_width: 24 });
//! assert_eq!(screen, [0, 0, 0]);
//! ```

#![cfg_attr(not(test), no_std)]

mod dump;
mod error;
mod framebuffer;
mod geometry;
mod panel;
mod span;

pub use dump::ScreenDump;
pub use error::{PanelError, SpanError};
pub use framebuffer::Framebuffer;
pub use geometry::{Geometry, PanelTiming, EL320_256};
pub use panel::{Panel, RowBus};
pub use span::{draw_next_bit, draw_screen, init_screen, is_partial_byte, SpanFill, SpanRequest};
