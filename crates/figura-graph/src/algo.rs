//! Read-only traversals over a tree of drawables.
//!
//! All traversals are depth-first, visit children in insertion order and use
//! natural recursion: nesting depth is bounded by the thread's stack. None of
//! them mutate the tree. A cyclic tree (see [`group`](crate::group)) makes
//! them recurse until the stack overflows.

use crate::group::Group;
use crate::node::Drawable;

/// Counts the leaves reachable from `group`. Groups themselves are not counted.
///
/// ```
/// use figura_graph::prelude::*;
///
/// let b = Group::new("B").child(Line::new("b1")).child(Line::new("b2"));
/// let a = Group::new("A").child(Line::new("L1")).child(Triangle::new("T1")).child(b);
/// assert_eq!(count_elements(&a), 4);
/// assert_eq!(count_elements(&Group::new("empty")), 0);
/// ```
pub fn count_elements(group: &Group<'_>) -> usize {
    count_in(group)
}

fn count_in(node: &dyn Drawable) -> usize {
    let mut n = 0;
    node.visit_children(&mut |child| {
        if child.kind() == Group::KIND {
            n += count_in(child);
        } else {
            n += 1;
        }
    });
    n
}

/// Visits `root` and every node below it, pre-order, with its depth
/// (`root` is depth 0).
pub fn walk(root: &dyn Drawable, mut visit: impl FnMut(&dyn Drawable, usize)) {
    walk_at(root, 0, &mut visit);
}

fn walk_at(node: &dyn Drawable, depth: usize, visit: &mut dyn FnMut(&dyn Drawable, usize)) {
    visit(node, depth);
    node.visit_children(&mut |child| walk_at(child, depth + 1, visit));
}

/// Maximum group nesting: 0 for a leaf, 1 for a group of leaves (or an empty
/// group), 2 for a group holding such a group, and so on.
pub fn depth(root: &dyn Drawable) -> usize {
    let mut max = 0;
    walk(root, |node, d| {
        if node.kind() == Group::KIND {
            max = max.max(d + 1);
        }
    });
    max
}

/// True if `root` or any node below it carries `id`.
pub fn contains_id(root: &dyn Drawable, id: &str) -> bool {
    if root.id() == id {
        return true;
    }
    let mut found = false;
    root.visit_children(&mut |child| {
        found = found || contains_id(child, id);
    });
    found
}
