use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::node::{Drawable, NodeRef};

/// How a group holds one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// The group is the sole owner; dropping the slot drops the child.
    Owned,
    /// Reference counted; the child lives until its last handle is released.
    Shared,
    /// Aliasing reference into a scope that outlives the group.
    Borrowed,
}

enum Slot<'a> {
    Owned(Box<dyn Drawable + 'a>),
    /// Client code may keep its own handle and keep mutating the node
    /// (e.g. clear a shared sub-group); the parent observes the change.
    Shared(Rc<RefCell<dyn Drawable + 'a>>),
    /// The lifetime `'a` bounds the owning group, so the referent cannot be
    /// dropped while the group can still reach it.
    Borrowed(&'a (dyn Drawable + 'a)),
}

/// One slot in a [`Group`](super::Group)'s child sequence.
///
/// Dropping a slot drops an `Owned` child, releases one strong count of a
/// `Shared` child and leaves a `Borrowed` referent untouched.
///
/// The handle a slot stores is not reachable from outside: iterating a group
/// only ever yields read-only [`NodeRef`]s, so a shared child can be
/// mutated only through a handle the client kept itself.
///
/// ```compile_fail
/// use figura_graph::prelude::*;
///
/// let group = Group::new("g").child(Line::new("l"));
/// for child in &group {
///     if let Child::Shared(rc) = child {
///         rc.borrow_mut();
///     }
/// }
/// ```
pub struct Child<'a>(Slot<'a>);

impl<'a> Child<'a> {
    #[inline]
    pub fn owned(node: impl Drawable + 'a) -> Self {
        Self(Slot::Owned(Box::new(node)))
    }

    #[inline]
    pub fn boxed(node: Box<dyn Drawable + 'a>) -> Self {
        Self(Slot::Owned(node))
    }

    #[inline]
    pub fn shared<D: Drawable + 'a>(node: Rc<RefCell<D>>) -> Self {
        let node: Rc<RefCell<dyn Drawable + 'a>> = node;
        Self(Slot::Shared(node))
    }

    #[inline]
    pub fn borrowed<D: Drawable + 'a>(node: &'a D) -> Self {
        Self(Slot::Borrowed(node))
    }

    #[inline]
    pub fn ownership(&self) -> Ownership {
        match self.0 {
            Slot::Owned(_) => Ownership::Owned,
            Slot::Shared(_) => Ownership::Shared,
            Slot::Borrowed(_) => Ownership::Borrowed,
        }
    }

    /// Read-only view of the child node.
    ///
    /// # Panics
    /// Panics if the child is shared and currently mutably borrowed
    /// through another handle.
    #[inline]
    pub fn node(&self) -> NodeRef<'_, 'a> {
        match &self.0 {
            Slot::Owned(node) => NodeRef::Direct(&**node),
            Slot::Shared(node) => NodeRef::Shared(node.borrow()),
            Slot::Borrowed(node) => NodeRef::Direct(*node),
        }
    }

    /// Like [`node`](Self::node), but returns `None` instead of panicking
    /// when a shared child is mutably borrowed.
    pub fn try_node(&self) -> Option<NodeRef<'_, 'a>> {
        match &self.0 {
            Slot::Shared(node) => node.try_borrow().ok().map(NodeRef::Shared),
            _ => Some(self.node()),
        }
    }

    /// Number of strong handles to a shared child, `None` otherwise.
    pub fn strong_count(&self) -> Option<usize> {
        match &self.0 {
            Slot::Shared(node) => Some(Rc::strong_count(node)),
            _ => None,
        }
    }
}

impl<'a, D: Drawable + 'a> From<D> for Child<'a> {
    fn from(node: D) -> Self {
        Self::owned(node)
    }
}

impl fmt::Debug for Child<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Child");
        s.field("ownership", &self.ownership());
        match self.try_node() {
            Some(node) => s.field("node", &node),
            None => s.field("node", &format_args!("<borrowed mutably>")),
        };
        s.finish()
    }
}
