use crate::node::Drawable;
use crate::scene::DrawList;

use super::Shape;

/// Triangle primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    id: String,
}

impl Triangle {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Shape for Triangle {
    const KIND: &'static str = "Triangle";

    fn with_id(id: impl Into<String>) -> Self {
        Self::new(id)
    }
}

impl Drawable for Triangle {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn draw(&self, out: &mut DrawList) {
        log::trace!("draw triangle - id = {}", self.id);
        out.push_draw(Self::KIND, &self.id);
    }

    fn rotate(&self, angle: f64, out: &mut DrawList) {
        log::trace!("rotate triangle - id = {}; angle = {}", self.id, angle);
        out.push_rotate(Self::KIND, &self.id, angle);
    }
}
