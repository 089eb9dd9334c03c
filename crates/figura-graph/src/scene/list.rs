use super::DrawCmd;

/// A recorded command plus its position in the stream.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    /// Position in the stream: the index of this item in
    /// [`DrawList::items`], reset by [`DrawList::clear`].
    pub order: usize,
    pub cmd: DrawCmd,
}

/// Recorded draw stream.
///
/// Every leaf pushes exactly one command per `draw` / `rotate` call, so the
/// item sequence is the depth-first traversal order of the tree.
///
/// ```
/// use figura_graph::prelude::*;
///
/// let mut out = DrawList::new();
/// Line::new("l1").draw(&mut out);
/// assert_eq!(out.ids().collect::<Vec<_>>(), ["l1"]);
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a command at the end of the stream.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        let order = self.items.len();
        self.items.push(DrawItem { order, cmd });
    }

    /// Iterates recorded commands in insertion order.
    pub fn cmds(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().map(|item| &item.cmd)
    }

    /// Node ids in recorded order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.cmds().map(DrawCmd::id)
    }
}
