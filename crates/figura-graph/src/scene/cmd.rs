use std::fmt;

/// A single recorded leaf effect.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Leaf `kind` / `id` was drawn.
    Draw { kind: &'static str, id: String },
    /// Leaf `kind` / `id` was rotated by `angle` degrees.
    Rotate { kind: &'static str, id: String, angle: f64 },
}

impl DrawCmd {
    #[inline]
    pub fn id(&self) -> &str {
        match self {
            DrawCmd::Draw { id, .. } | DrawCmd::Rotate { id, .. } => id,
        }
    }

    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Draw { kind, .. } | DrawCmd::Rotate { kind, .. } => kind,
        }
    }

    /// Rotation angle, `None` for draw commands.
    #[inline]
    pub fn angle(&self) -> Option<f64> {
        match self {
            DrawCmd::Draw { .. } => None,
            DrawCmd::Rotate { angle, .. } => Some(*angle),
        }
    }
}

impl fmt::Display for DrawCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCmd::Draw { kind, id } => write!(f, "draw {} - id = {}", kind.to_lowercase(), id),
            DrawCmd::Rotate { kind, id, angle } => {
                write!(f, "rotate {} - id = {}; angle = {}", kind.to_lowercase(), id, angle)
            }
        }
    }
}
