//! Widgets
//!
//! Every widget is a small composition of [`ShapeVisual`]s and [`Label`]s
//! with a setter-driven state machine. Interaction (raycasting, pointer
//! dispatch) lives in the host; it reads [`Widget::hit_targets`] and calls
//! the state setters.

pub mod button;
pub mod checkbox;
pub mod floating;
pub mod label;
pub mod panel;
pub mod progress;
pub mod scroll;
pub mod slider;
pub mod toggle;
pub mod tooltip;

pub use button::{Button, ButtonColors, ButtonConfig, ButtonState};
pub use checkbox::{Checkbox, CheckboxConfig};
pub use floating::{FloatingText, FloatingTextConfig};
pub use label::{Label, ShapingState};
pub use panel::{Panel, PanelConfig};
pub use progress::{ProgressBar, ProgressBarConfig};
pub use scroll::{ScrollView, ScrollViewConfig};
pub use slider::{Slider, SliderConfig};
pub use toggle::{Toggle, ToggleConfig};
pub use tooltip::{Tooltip, TooltipConfig};

use crate::id::WidgetId;
use crate::layout::LayoutBox;
use crate::scene::Node;
use crate::shape::ShapeVisual;
use crate::text::TextMeasure;
use glam::{Vec2, Vec3};

/// Pointer-sensitive rectangle in a widget's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTarget {
    /// Widget that owns the rectangle.
    pub id: WidgetId,
    /// Center of the rectangle.
    pub center: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl HitTarget {
    pub fn new(id: WidgetId, center: Vec2, size: Vec2) -> Self {
        Self { id, center, size }
    }

    /// Whether a local-space point lies inside the rectangle (edges included).
    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.size / 2.0;
        let d = (point - self.center).abs();
        d.x <= half.x && d.y <= half.y
    }

    /// The same rectangle moved by `offset`.
    pub fn translated(mut self, offset: Vec2) -> Self {
        self.center += offset;
        self
    }

    /// The part of this rectangle inside `other`, keeping this id.
    ///
    /// Returns `None` when the overlap has no area.
    pub fn intersect(&self, other: &HitTarget) -> Option<HitTarget> {
        let min = (self.center - self.size / 2.0).max(other.center - other.size / 2.0);
        let max = (self.center + self.size / 2.0).min(other.center + other.size / 2.0);
        if min.x >= max.x || min.y >= max.y {
            return None;
        }
        Some(HitTarget::new(self.id, (min + max) / 2.0, max - min))
    }
}

/// A retained UI element.
pub trait Widget: LayoutBox {
    /// Identifier assigned at construction.
    fn id(&self) -> WidgetId;

    /// Local transform relative to the parent.
    fn node(&self) -> &Node;

    fn node_mut(&mut self) -> &mut Node;

    /// Width and height used for layout.
    fn size(&self) -> Vec2;

    /// Advance time-based state by `dt` seconds.
    fn update(&mut self, _dt: f32) {}

    /// Shape every label this widget owns and refresh dependent geometry.
    fn shape_text(&mut self, _measure: &mut dyn TextMeasure) {}

    /// Rectangles the interaction layer tests pointers against.
    fn hit_targets(&self) -> Vec<HitTarget> {
        Vec::new()
    }

    /// Primitive visuals to draw, in back-to-front order.
    fn visuals(&self) -> Vec<&ShapeVisual> {
        Vec::new()
    }

    /// Labels to draw.
    fn labels(&self) -> Vec<&Label> {
        Vec::new()
    }

    /// Rectangle, in local space, outside which descendants are not drawn
    /// or hit.
    fn clip_rect(&self) -> Option<HitTarget> {
        None
    }

    /// Child widgets laid out by this widget.
    fn children(&self) -> Vec<&dyn Widget> {
        Vec::new()
    }

    /// Release every visual. Must be called once before dropping.
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;

    /// Position relative to the parent.
    fn position(&self) -> Vec3 {
        self.node().position
    }

    fn set_position(&mut self, position: Vec3) {
        self.node_mut().position = position;
    }

    fn is_visible(&self) -> bool {
        self.node().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.node_mut().visible = visible;
    }
}

/// Depth-first walk over `root` and its descendants.
///
/// `f` receives each widget and its position accumulated from `root`.
pub fn traverse(root: &dyn Widget, f: &mut dyn FnMut(&dyn Widget, Vec3)) {
    traverse_inner(root, Vec3::ZERO, f);
}

fn traverse_inner(widget: &dyn Widget, parent_offset: Vec3, f: &mut dyn FnMut(&dyn Widget, Vec3)) {
    let offset = parent_offset + widget.position();
    f(widget, offset);
    for child in widget.children() {
        traverse_inner(child, offset, f);
    }
}

/// Collect hit targets of `root` and its descendants in `root`'s space.
///
/// Hidden widgets and their subtrees are skipped. Targets below a widget
/// with a [`Widget::clip_rect`] are cut to it, or dropped when outside.
pub fn collect_hit_targets(root: &dyn Widget) -> Vec<HitTarget> {
    let mut targets = Vec::new();
    collect_inner(root, Vec2::ZERO, None, &mut targets);
    targets
}

fn collect_inner(
    widget: &dyn Widget,
    offset: Vec2,
    clip: Option<HitTarget>,
    out: &mut Vec<HitTarget>,
) {
    if !widget.is_visible() {
        return;
    }
    for target in widget.hit_targets() {
        let target = target.translated(offset);
        match &clip {
            Some(clip) => out.extend(target.intersect(clip)),
            None => out.push(target),
        }
    }

    let clip = match (widget.clip_rect(), clip) {
        (Some(own), Some(outer)) => match own.translated(offset).intersect(&outer) {
            Some(both) => Some(both),
            // nothing below can be hit
            None => return,
        },
        (Some(own), None) => Some(own.translated(offset)),
        (None, outer) => outer,
    };
    for child in widget.children() {
        collect_inner(child, offset + child.position().truncate(), clip, out);
    }
}
