//! Scene node state
//!
//! Widgets do not own engine scene nodes. They keep the transform state the
//! host copies into its scene graph every frame.

use glam::{Mat4, Vec3};

/// Local transform and visibility of a widget or visual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Position relative to the parent widget.
    pub position: Vec3,
    /// Whether the node (and everything under it) is drawn.
    pub visible: bool,
}

impl Node {
    /// Create a visible node at the origin.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            visible: true,
        }
    }

    /// Create a visible node at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            visible: true,
        }
    }

    /// Set the in-plane position, keeping the depth.
    pub fn set_xy(&mut self, x: f32, y: f32) {
        self.position.x = x;
        self.position.y = y;
    }

    /// Local transform matrix.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
