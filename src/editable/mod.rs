//! Host-side editing primitives.
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: the buffer capabilities the assist
//!   pipeline needs from its host (offset reads, slicing, line lookups and
//!   bounds-checked mutation)
//! - [`RopeBuffer`]: the `ropey::Rope` backed implementation
//! - [`Selection`]: char-offset selection, collapsed for a plain cursor

mod buffer;
mod selection;

pub use buffer::{BufferError, RopeBuffer, TextBuffer, TextBufferMut};
pub use selection::Selection;
