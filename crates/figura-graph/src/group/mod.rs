//! Composite node.
//!
//! A [`Group`] owns an ordered sequence of [`Child`] slots and forwards every
//! [`Drawable`] operation to them in insertion order.
//!
//! # Caller contracts
//!
//! - **Cycles.** A group reachable from itself (only constructible through
//!   `Shared` children) makes `draw`, `rotate` and every traversal recurse
//!   until the stack is exhausted. Nothing detects this; the tree builder
//!   must keep the graph acyclic.
//! - **Aliases.** `Borrowed` children are checked by the compiler: a group
//!   cannot be used after its referent goes out of scope.
//!
//! ```compile_fail
//! use figura_graph::prelude::*;
//!
//! let mut group = Group::new("outer");
//! {
//!     let line = Line::new("short-lived");
//!     group.add_borrowed(&line);
//! }
//! group.draw(&mut DrawList::new());
//! ```

mod child;

pub use child::{Child, Ownership};

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::GraphError;
use crate::node::Drawable;
use crate::scene::DrawList;
use crate::shapes::Shape;

/// Ordered collection of child drawables, itself a drawable.
///
/// # Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
/// use figura_graph::prelude::*;
///
/// let stack_tri = Triangle::new("t2");
/// let shared = Rc::new(RefCell::new(Line::new("l2")));
///
/// let mut group = Group::new("A")
///     .child(Line::new("l1"))
///     .child(Child::shared(shared.clone()))
///     .child(Child::borrowed(&stack_tri));
/// group.add_new::<Triangle>("t3");
///
/// let mut out = DrawList::new();
/// group.draw(&mut out);
/// assert_eq!(out.ids().collect::<Vec<_>>(), ["l1", "l2", "t2", "t3"]);
/// ```
pub struct Group<'a> {
    id: String,
    children: Vec<Child<'a>>,
}

impl<'a> Group<'a> {
    pub const KIND: &'static str = "Group";

    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        log::trace!("create group - id = {id}");
        Self {
            id,
            children: Vec::new(),
        }
    }

    /// Builder form of [`add`](Self::add).
    pub fn child(mut self, child: impl Into<Child<'a>>) -> Self {
        self.add(child.into());
        self
    }

    /// Builder form of [`add`](Self::add) for several children.
    pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Child<'a>>>) -> Self {
        for child in iter {
            self.add(child.into());
        }
        self
    }

    // ── insertion ─────────────────────────────────────────────────────────

    /// Appends `child` at the end of the sequence.
    pub fn add(&mut self, child: Child<'a>) {
        match child.try_node() {
            Some(node) => log::trace!(
                "id = {}; add object = {} ({:?})",
                self.id,
                node.kind(),
                child.ownership()
            ),
            None => log::trace!("id = {}; add object = <busy> (Shared)", self.id),
        }
        self.children.push(child);
    }

    /// Appends a node the group takes sole ownership of.
    #[inline]
    pub fn add_owned(&mut self, node: impl Drawable + 'a) {
        self.add(Child::owned(node));
    }

    /// Appends an already boxed node the group takes sole ownership of.
    #[inline]
    pub fn add_boxed(&mut self, node: Box<dyn Drawable + 'a>) {
        self.add(Child::boxed(node));
    }

    /// Appends a reference-counted node. The caller may keep other handles.
    #[inline]
    pub fn add_shared<D: Drawable + 'a>(&mut self, node: Rc<RefCell<D>>) {
        self.add(Child::shared(node));
    }

    /// Appends an alias to a node owned elsewhere. The group never drops it.
    #[inline]
    pub fn add_borrowed<D: Drawable + 'a>(&mut self, node: &'a D) {
        self.add(Child::borrowed(node));
    }

    /// Constructs a leaf in place and takes ownership of it.
    pub fn add_new<S: Shape + 'a>(&mut self, id: impl Into<String>) {
        self.add(Child::owned(S::with_id(id)));
    }

    // ── removal ───────────────────────────────────────────────────────────

    /// Removes and returns the slot at `index`, shifting later children left.
    pub fn remove(&mut self, index: usize) -> Result<Child<'a>, GraphError> {
        if index >= self.children.len() {
            return Err(GraphError::OutOfBounds {
                index,
                len: self.children.len(),
            });
        }
        let child = self.children.remove(index);
        log::trace!("id = {}; remove slot {index} ({:?})", self.id, child.ownership());
        Ok(child)
    }

    /// Removes and returns the first direct child whose id is `id`.
    ///
    /// Fails with [`GraphError::Busy`] if a shared child is mutably borrowed
    /// before a match is found: its id cannot be read, so it might be the
    /// first match.
    pub fn remove_by_id(&mut self, id: &str) -> Result<Child<'a>, GraphError> {
        let mut found = None;
        for (index, child) in self.children.iter().enumerate() {
            match child.try_node() {
                Some(node) if node.id() == id => {
                    found = Some(index);
                    break;
                }
                Some(_) => {}
                None => {
                    return Err(GraphError::Busy { group: self.id.clone(), index });
                }
            }
        }

        match found {
            Some(index) => self.remove(index),
            None => Err(GraphError::NotFound {
                group: self.id.clone(),
                id: id.to_string(),
            }),
        }
    }

    /// Empties the sequence. Shared children stay alive while other handles
    /// exist; borrowed referents are never touched.
    pub fn clear(&mut self) {
        log::trace!("id = {}; clear {} children", self.id, self.children.len());
        self.children.clear();
    }

    /// Alias of [`clear`](Self::clear).
    #[inline]
    pub fn remove_all(&mut self) {
        self.clear();
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// Number of direct children.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Child<'a>> {
        self.children.iter()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Child<'a>> {
        self.children.get(index)
    }
}

impl<'g, 'a> IntoIterator for &'g Group<'a> {
    type Item = &'g Child<'a>;
    type IntoIter = std::slice::Iter<'g, Child<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Drawable for Group<'_> {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn id(&self) -> &str {
        &self.id
    }

    /// # Panics
    /// Panics if a shared child is mutably borrowed elsewhere during the call.
    fn draw(&self, out: &mut DrawList) {
        log::trace!("draw group - id = {}", self.id);
        for child in &self.children {
            child.node().draw(out);
        }
    }

    /// # Panics
    /// Panics if a shared child is mutably borrowed elsewhere during the call.
    fn rotate(&self, angle: f64, out: &mut DrawList) {
        log::trace!("rotate group - id = {}; angle = {}", self.id, angle);
        for child in &self.children {
            child.node().rotate(angle, out);
        }
    }

    fn visit_children(&self, visit: &mut dyn FnMut(&dyn Drawable)) {
        for child in &self.children {
            visit(&*child.node());
        }
    }
}

impl Drop for Group<'_> {
    fn drop(&mut self) {
        log::trace!("destroy group - id = {}", self.id);
    }
}

impl std::fmt::Debug for Group<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Group")
            .field("id", &self.id)
            .field("children", &self.children)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::algo::count_elements;
    use crate::shapes::{Line, Triangle};

    /// Leaf that counts how many times it has been dropped.
    struct Tracked {
        id: String,
        drops: Rc<Cell<usize>>,
    }

    impl Tracked {
        fn new(id: &str, drops: &Rc<Cell<usize>>) -> Self {
            Self { id: id.to_string(), drops: drops.clone() }
        }
    }

    impl Drawable for Tracked {
        fn kind(&self) -> &'static str {
            "Tracked"
        }
        fn id(&self) -> &str {
            &self.id
        }
        fn draw(&self, out: &mut DrawList) {
            out.push_draw(self.kind(), &self.id);
        }
        fn rotate(&self, angle: f64, out: &mut DrawList) {
            out.push_rotate(self.kind(), &self.id, angle);
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn sample() -> Group<'static> {
        let b = Group::new("B").child(Line::new("b1")).child(Triangle::new("b2"));
        Group::new("A")
            .child(Line::new("L1"))
            .child(Triangle::new("T1"))
            .child(b)
    }

    // ── draw / rotate ─────────────────────────────────────────────────────

    #[test]
    fn draw_visits_leaves_depth_first_in_order() {
        let mut out = DrawList::new();
        sample().draw(&mut out);
        assert_eq!(out.ids().collect::<Vec<_>>(), ["L1", "T1", "b1", "b2"]);
        assert!(out.cmds().all(|c| c.kind() != Group::KIND));
    }

    #[test]
    fn rotate_passes_same_angle_to_every_leaf() {
        let mut out = DrawList::new();
        sample().rotate(30.0, &mut out);
        assert_eq!(out.len(), 4);
        assert!(out.cmds().all(|c| c.angle() == Some(30.0)));
    }

    #[test]
    fn empty_group_is_a_no_op() {
        let group = Group::new("empty");
        let mut out = DrawList::new();
        group.draw(&mut out);
        group.rotate(90.0, &mut out);
        assert!(out.is_empty());
        assert_eq!(group.kind(), "Group");
    }

    #[test]
    fn borrowed_child_behaves_like_owned() {
        let aliased = Triangle::new("t");
        let owning = Group::new("own").child(Triangle::new("t"));
        let aliasing = Group::new("alias").child(Child::borrowed(&aliased));

        let (mut a, mut b) = (DrawList::new(), DrawList::new());
        owning.draw(&mut a);
        owning.rotate(12.5, &mut a);
        aliasing.draw(&mut b);
        aliasing.rotate(12.5, &mut b);

        assert_eq!(a.items(), b.items());
        assert_eq!(aliasing.get(0).map(|c| c.node().kind()), Some("Triangle"));
    }

    // ── insertion ─────────────────────────────────────────────────────────

    #[test]
    fn add_variants_preserve_insertion_order() {
        let stack_line = Line::new("borrowed");
        let shared = Rc::new(RefCell::new(Triangle::new("shared")));

        let mut group = Group::new("g");
        group.add_owned(Line::new("owned"));
        group.add_boxed(Box::new(Triangle::new("boxed")));
        group.add_shared(shared.clone());
        group.add_borrowed(&stack_line);
        group.add_new::<Triangle>("new");

        let modes: Vec<Ownership> = group.iter().map(Child::ownership).collect();
        assert_eq!(
            modes,
            [
                Ownership::Owned,
                Ownership::Owned,
                Ownership::Shared,
                Ownership::Borrowed,
                Ownership::Owned,
            ]
        );
        let ids: Vec<String> = group.iter().map(|c| c.node().id().to_string()).collect();
        assert_eq!(ids, ["owned", "boxed", "shared", "borrowed", "new"]);
        assert_eq!(group.len(), 5);
    }

    #[test]
    fn shared_group_mutation_is_visible_to_parent() {
        let b = Rc::new(RefCell::new(Group::new("B").child(Line::new("b1"))));
        let a = Group::new("A").child(Child::shared(b.clone()));
        assert_eq!(count_elements(&a), 1);

        b.borrow_mut().add_new::<Triangle>("b2");
        assert_eq!(count_elements(&a), 2);

        b.borrow_mut().clear();
        let mut out = DrawList::new();
        a.draw(&mut out);
        assert!(out.is_empty());
    }

    // ── removal ───────────────────────────────────────────────────────────

    #[test]
    fn remove_takes_slot_out_entirely() {
        let mut group = sample();
        let removed = group.remove(1).unwrap();
        assert_eq!(removed.node().id(), "T1");
        assert_eq!(group.len(), 2);
        let ids: Vec<String> = group.iter().map(|c| c.node().id().to_string()).collect();
        assert_eq!(ids, ["L1", "B"]);
    }

    #[test]
    fn remove_out_of_bounds() {
        let mut group = Group::new("g").child(Line::new("l"));
        assert_eq!(group.remove(1).unwrap_err(), GraphError::OutOfBounds { index: 1, len: 1 });
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn remove_by_id_first_match_only() {
        let mut group = Group::new("g")
            .child(Line::new("x"))
            .child(Triangle::new("y"))
            .child(Triangle::new("x"));

        let removed = group.remove_by_id("x").unwrap();
        assert_eq!(removed.node().kind(), "Line");
        assert_eq!(group.len(), 2);

        let err = group.remove_by_id("missing").unwrap_err();
        assert_eq!(err, GraphError::NotFound { group: "g".into(), id: "missing".into() });
    }

    #[test]
    fn remove_by_id_does_not_skip_busy_first_match() {
        let shared = Rc::new(RefCell::new(Line::new("x")));
        let mut group = Group::new("g")
            .child(Child::shared(shared.clone()))
            .child(Triangle::new("x"));

        let guard = shared.borrow_mut();
        let err = group.remove_by_id("x").unwrap_err();
        assert_eq!(err, GraphError::Busy { group: "g".into(), index: 0 });
        assert_eq!(group.len(), 2);
        drop(guard);

        let removed = group.remove_by_id("x").unwrap();
        assert_eq!(removed.ownership(), Ownership::Shared);
        assert_eq!(removed.node().kind(), "Line");
        assert_eq!(group.get(0).map(|c| c.node().kind()), Some("Triangle"));
    }

    #[test]
    fn remove_by_id_reports_busy_not_missing() {
        let shared = Rc::new(RefCell::new(Line::new("x")));
        let mut group = Group::new("h").child(Child::shared(shared.clone()));

        let guard = shared.borrow_mut();
        let err = group.remove_by_id("x").unwrap_err();
        assert_eq!(err, GraphError::Busy { group: "h".into(), index: 0 });
        assert_eq!(group.len(), 1);
        drop(guard);
    }

    #[test]
    fn remove_by_id_ignores_busy_slot_after_match() {
        let shared = Rc::new(RefCell::new(Line::new("late")));
        let mut group = Group::new("g")
            .child(Triangle::new("x"))
            .child(Child::shared(shared.clone()));

        let _guard = shared.borrow_mut();
        let removed = group.remove_by_id("x").unwrap();
        assert_eq!(removed.node().kind(), "Triangle");
        assert_eq!(group.len(), 1);
    }

    // ── ownership on clear / drop ─────────────────────────────────────────

    #[test]
    fn clear_drops_owned_keeps_shared_and_borrowed() {
        let drops = Rc::new(Cell::new(0));
        let borrowed = Tracked::new("borrowed", &drops);
        let shared = Rc::new(RefCell::new(Tracked::new("shared", &drops)));

        let mut group = Group::new("B");
        group.add_owned(Tracked::new("owned", &drops));
        group.add_shared(shared.clone());
        group.add_borrowed(&borrowed);
        assert_eq!(Rc::strong_count(&shared), 2);

        group.clear();
        assert_eq!(group.len(), 0);
        assert_eq!(count_elements(&group), 0);
        assert_eq!(drops.get(), 1);
        assert_eq!(Rc::strong_count(&shared), 1);

        let mut out = DrawList::new();
        shared.borrow().draw(&mut out);
        borrowed.draw(&mut out);
        assert_eq!(shared.borrow().kind(), "Tracked");
        assert_eq!(out.ids().collect::<Vec<_>>(), ["shared", "borrowed"]);
    }

    #[test]
    fn dropping_group_drops_owned_subtree_recursively() {
        let drops = Rc::new(Cell::new(0));
        let shared = Rc::new(RefCell::new(Tracked::new("shared", &drops)));
        {
            let inner = Group::new("inner")
                .child(Tracked::new("i1", &drops))
                .child(Tracked::new("i2", &drops));
            let _outer = Group::new("outer")
                .child(Tracked::new("o1", &drops))
                .child(inner)
                .child(Child::shared(shared.clone()));
        }
        assert_eq!(drops.get(), 3);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn shared_child_survives_last_parent_only_while_held() {
        let drops = Rc::new(Cell::new(0));
        let shared = Rc::new(RefCell::new(Tracked::new("s", &drops)));
        let mut a = Group::new("A");
        let mut b = Group::new("B");
        a.add_shared(shared.clone());
        b.add_shared(shared.clone());
        drop(shared);

        a.clear();
        assert_eq!(drops.get(), 0);
        b.clear();
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn visit_children_yields_direct_children_only() {
        let mut seen = Vec::new();
        sample().visit_children(&mut |c| seen.push(c.id().to_string()));
        assert_eq!(seen, ["L1", "T1", "B"]);
    }

    #[test]
    fn into_iterator_matches_iter() {
        let group = sample();
        let n = (&group).into_iter().count();
        assert_eq!(n, group.iter().count());
    }
}
