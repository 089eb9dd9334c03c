//! Composite graph of drawable nodes.
//!
//! Leaves and groups share one [`Drawable`](node::Drawable) contract, so a
//! whole tree is drawn, rotated or counted by calling the operation on its
//! root. Groups hold children under one of three ownership modes (owned,
//! shared, borrowed) and forward every call to them in insertion order.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | `Drawable`, `NodeRef` |
//! | [`shapes`] | `Line`, `Triangle`, `Shape` |
//! | [`group`] | `Group`, `Child`, `Ownership` |
//! | [`algo`] | `count_elements`, `walk`, `depth`, `contains_id` |
//! | [`scene`] | `DrawList`, `DrawCmd`, the recorded draw stream |
//! | [`error`] | `GraphError` |
//! | [`logging`] | `init_logging`, `LoggingConfig` |
//!
//! # Quick start
//!
//! ```rust
//! use figura_graph::prelude::*;
//!
//! let b = Group::new("B").child(Line::new("b1")).child(Triangle::new("b2"));
//! let a = Group::new("A")
//!     .child(Line::new("L1"))
//!     .child(Triangle::new("T1"))
//!     .child(b);
//!
//! let mut out = DrawList::new();
//! a.draw(&mut out);
//! assert_eq!(out.ids().collect::<Vec<_>>(), ["L1", "T1", "b1", "b2"]);
//! assert_eq!(count_elements(&a), 4);
//! ```

pub mod algo;
pub mod error;
pub mod group;
pub mod logging;
pub mod node;
pub mod scene;
pub mod shapes;

pub use error::GraphError;

/// Everything needed to build and walk trees.
pub mod prelude {
    pub use crate::algo::{contains_id, count_elements, depth, walk};
    pub use crate::error::GraphError;
    pub use crate::group::{Child, Group, Ownership};
    pub use crate::logging::{init_logging, LoggingConfig};
    pub use crate::node::{Drawable, NodeRef};
    pub use crate::scene::{DrawCmd, DrawItem, DrawList};
    pub use crate::shapes::{Line, Shape, Triangle};
}
