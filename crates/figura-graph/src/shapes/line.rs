use crate::node::Drawable;
use crate::scene::DrawList;

use super::Shape;

/// Straight line primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: String,
}

impl Line {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Shape for Line {
    const KIND: &'static str = "Line";

    fn with_id(id: impl Into<String>) -> Self {
        Self::new(id)
    }
}

impl Drawable for Line {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn draw(&self, out: &mut DrawList) {
        log::trace!("draw line - id = {}", self.id);
        out.push_draw(Self::KIND, &self.id);
    }

    fn rotate(&self, angle: f64, out: &mut DrawList) {
        log::trace!("rotate line - id = {}; angle = {}", self.id, angle);
        out.push_rotate(Self::KIND, &self.id, angle);
    }
}
