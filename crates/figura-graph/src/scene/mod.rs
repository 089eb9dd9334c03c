//! Draw stream types.
//!
//! Responsibilities:
//! - record the visible effect of `draw` / `rotate` on leaf nodes
//! - keep deterministic ordering (insertion order == traversal order)
//!
//! Groups never record anything themselves; they only delegate.

mod cmd;
mod list;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
