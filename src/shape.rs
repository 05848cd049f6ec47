//! Primitive shape visuals
//!
//! A [`ShapeVisual`] is the retained description of one primitive the host
//! renderer draws: its kind, size, fill, border, opacity and placement.
//! Mesh construction happens on the host side whenever
//! [`ShapeVisual::take_geometry_dirty`] reports a change.

use crate::error::{self, UiError};
use crate::scene::Node;
use glam::{Vec2, Vec3, Vec4};

/// RGBA color with components in `[0, 1]`.
pub type Color = [f32; 4];

/// Smallest extent a visual is given when a size computation collapses to zero.
pub const MIN_EXTENT: f32 = 1e-4;

/// Primitive outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// Rectangle with rounded corners.
    RoundedRect { radius: f32 },
    /// Circle inscribed in the visual's size.
    Circle,
    /// Rectangle whose short sides are semicircles.
    Pill,
}

/// Outline drawn around a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

/// Retained primitive visual.
#[derive(Debug, Clone)]
pub struct ShapeVisual {
    kind: ShapeKind,
    size: Vec2,
    fill: Color,
    border: Option<Border>,
    opacity: f32,
    texture: Option<String>,
    node: Node,
    geometry_dirty: bool,
    disposed: bool,
}

impl ShapeVisual {
    /// Create a visual of the given kind and size.
    pub fn new(kind: ShapeKind, size: Vec2, fill: Color) -> Self {
        Self {
            kind,
            size,
            fill,
            border: None,
            opacity: 1.0,
            texture: None,
            node: Node::new(),
            geometry_dirty: true,
            disposed: false,
        }
    }

    /// Rounded rectangle.
    pub fn rounded_rect(width: f32, height: f32, radius: f32, fill: Color) -> Self {
        Self::new(ShapeKind::RoundedRect { radius }, Vec2::new(width, height), fill)
    }

    /// Circle of the given radius.
    pub fn circle(radius: f32, fill: Color) -> Self {
        Self::new(ShapeKind::Circle, Vec2::splat(radius * 2.0), fill)
    }

    /// Pill shape.
    pub fn pill(width: f32, height: f32, fill: Color) -> Self {
        Self::new(ShapeKind::Pill, Vec2::new(width, height), fill)
    }

    /// Set the border.
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Set the local position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.node.position = position;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn border(&self) -> Option<Border> {
        self.border
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn texture(&self) -> Option<&str> {
        self.texture.as_deref()
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn position(&self) -> Vec3 {
        self.node.position
    }

    pub fn is_visible(&self) -> bool {
        self.node.visible
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Corner radius actually used for the outline.
    ///
    /// Rounded rectangles clamp their radius to half the short side; pills
    /// always use exactly half the short side.
    pub fn corner_radius(&self) -> f32 {
        let half_short = self.size.x.min(self.size.y).max(0.0) * 0.5;
        match self.kind {
            ShapeKind::RoundedRect { radius } => radius.clamp(0.0, half_short),
            ShapeKind::Circle | ShapeKind::Pill => half_short,
        }
    }

    /// Resize the visual. Marks the geometry dirty when the size changed.
    pub fn set_size(&mut self, width: f32, height: f32) {
        let size = Vec2::new(width, height);
        if size != self.size {
            self.size = size;
            self.geometry_dirty = true;
        }
    }

    /// Change the corner radius of a rounded rectangle.
    pub fn set_corner_radius(&mut self, radius: f32) {
        if let ShapeKind::RoundedRect { radius: current } = &mut self.kind {
            if *current != radius {
                *current = radius;
                self.geometry_dirty = true;
            }
        }
    }

    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    pub fn set_border(&mut self, border: Option<Border>) {
        if border != self.border {
            self.border = border;
            self.geometry_dirty = true;
        }
    }

    /// Set the opacity, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.node.visible = visible;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.node.position = position;
    }

    /// Set the in-plane position, keeping the depth.
    pub fn set_xy(&mut self, x: f32, y: f32) {
        self.node.set_xy(x, y);
    }

    /// Request a texture; the host loads it asynchronously.
    pub fn set_texture(&mut self, source_path: impl Into<String>) {
        self.texture = Some(source_path.into());
    }

    /// Called by the host when loading the requested texture failed.
    ///
    /// The texture is dropped and the visual falls back to its fill color.
    pub fn texture_failed(&mut self, reason: impl Into<String>) {
        if let Some(source_path) = self.texture.take() {
            error::report(&UiError::TextureLoad {
                source_path,
                reason: reason.into(),
            });
        }
    }

    /// Fill color with the opacity folded into alpha.
    pub fn effective_color(&self) -> Color {
        let [r, g, b, a] = self.fill;
        [r, g, b, a * self.opacity]
    }

    /// Returns whether the geometry changed since the last call and clears the flag.
    pub fn take_geometry_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.geometry_dirty, false)
    }

    /// Release the visual. Calling this twice is reported and ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            tracing::warn!("shape visual disposed twice");
            return;
        }
        self.disposed = true;
        self.texture = None;
        self.node.visible = false;
    }
}

/// Linear interpolation between two colors, `t` clamped to `[0, 1]`.
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Vec4::from(a).lerp(Vec4::from(b), t.clamp(0.0, 1.0)).into()
}
