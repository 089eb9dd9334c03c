//! Leaf node variants.
//!
//! Extending the set of leaves:
//! - add a new shape module under `shapes::*`
//! - implement [`Drawable`] and [`Shape`] for it
//! - re-export it here and from the prelude

mod line;
mod triangle;

pub use line::Line;
pub use triangle::Triangle;

use crate::node::Drawable;
use crate::scene::{DrawCmd, DrawList};

/// A leaf variant whose kind tag is fixed at the type level.
///
/// Lets a group construct children in place via [`Group::add_new`](crate::group::Group::add_new).
pub trait Shape: Drawable + Sized {
    const KIND: &'static str;

    fn with_id(id: impl Into<String>) -> Self;
}

impl DrawList {
    /// Records a leaf draw.
    #[inline]
    pub fn push_draw(&mut self, kind: &'static str, id: &str) {
        self.push(DrawCmd::Draw { kind, id: id.to_string() });
    }

    /// Records a leaf rotation.
    #[inline]
    pub fn push_rotate(&mut self, kind: &'static str, id: &str, angle: f64) {
        self.push(DrawCmd::Rotate { kind, id: id.to_string(), angle });
    }
}
