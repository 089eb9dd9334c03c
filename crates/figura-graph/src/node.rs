use std::cell::Ref;
use std::fmt;
use std::ops::Deref;

use crate::scene::DrawList;

// ── Drawable trait ────────────────────────────────────────────────────────

/// The contract shared by leaves and groups.
///
/// Leaves record their effect into the [`DrawList`]; groups forward every
/// call to their children in insertion order and record nothing themselves.
///
/// # Implementing a custom leaf
///
/// ```
/// use figura_graph::prelude::*;
///
/// struct Dot { id: String }
///
/// impl Drawable for Dot {
///     fn kind(&self) -> &'static str { "Dot" }
///     fn id(&self) -> &str { &self.id }
///     fn draw(&self, out: &mut DrawList) {
///         out.push_draw(self.kind(), &self.id);
///     }
///     fn rotate(&self, angle: f64, out: &mut DrawList) {
///         out.push_rotate(self.kind(), &self.id, angle);
///     }
/// }
///
/// let mut group = Group::new("g");
/// group.add_owned(Dot { id: "d1".into() });
/// assert_eq!(count_elements(&group), 1);
/// ```
pub trait Drawable {
    /// Variant tag. Constant for the lifetime of the node.
    ///
    /// `"Group"` is reserved for composite nodes; traversal algorithms use it
    /// to decide whether to descend.
    fn kind(&self) -> &'static str;

    /// Identifying tag given at construction.
    fn id(&self) -> &str;

    /// Performs the node's visible effect.
    fn draw(&self, out: &mut DrawList);

    /// Applies a rotation of `angle` degrees. Groups pass the same angle to
    /// every child; transforms are never composed.
    fn rotate(&self, angle: f64, out: &mut DrawList);

    /// Calls `visit` once per direct child, in insertion order.
    ///
    /// The default implementation has no children, which is right for leaves.
    fn visit_children(&self, _visit: &mut dyn FnMut(&dyn Drawable)) {}
}

impl fmt::Debug for dyn Drawable + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind(), self.id())
    }
}

// ── NodeRef ───────────────────────────────────────────────────────────────

/// Read-only access to a child node, whatever its ownership mode.
///
/// Shared children hold a `RefCell` borrow for as long as the `NodeRef`
/// lives; keep it short.
pub enum NodeRef<'r, 'a> {
    /// Owned or borrowed child.
    Direct(&'r (dyn Drawable + 'a)),
    /// Shared child, borrowed out of its `RefCell`.
    Shared(Ref<'r, dyn Drawable + 'a>),
}

impl<'a> Deref for NodeRef<'_, 'a> {
    type Target = dyn Drawable + 'a;

    #[inline]
    fn deref(&self) -> &Self::Target {
        match self {
            NodeRef::Direct(node) => *node,
            NodeRef::Shared(node) => &**node,
        }
    }
}

impl fmt::Debug for NodeRef<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
