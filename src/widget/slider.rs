//! Slider

use super::{HitTarget, Widget};
use crate::id::WidgetId;
use crate::layout::{LayoutBox, CHILD_DEPTH_OFFSET};
use crate::scene::Node;
use crate::shape::{Color, ShapeVisual, MIN_EXTENT};
use glam::{Vec2, Vec3};

/// Settings for creating a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    /// Lower bound. Default: 0.
    pub min: f32,
    /// Upper bound. Default: 1.
    pub max: f32,
    /// Initial value. Default: 0.
    pub value: f32,
    /// Snap increment. Default: none.
    pub step: Option<f32>,
    /// Track width. Default: 0.3.
    pub width: f32,
    /// Track height. Default: 0.02.
    pub track_height: f32,
    /// Handle radius. Default: 0.02.
    pub handle_radius: f32,
    pub track_color: Color,
    pub fill_color: Color,
    pub handle_color: Color,
    /// Handle color under the pointer or while dragged. Default: light blue-grey.
    pub handle_hover_color: Color,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            value: 0.0,
            step: None,
            width: 0.3,
            track_height: 0.02,
            handle_radius: 0.02,
            track_color: [0.2, 0.2, 0.2, 1.0],
            fill_color: [0.2, 0.6, 0.8, 1.0],
            handle_color: [1.0, 1.0, 1.0, 1.0],
            handle_hover_color: [0.85, 0.9, 1.0, 1.0],
        }
    }
}

impl SliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn step(mut self, step: f32) -> Self {
        self.step = Some(step);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn track_height(mut self, height: f32) -> Self {
        self.track_height = height;
        self
    }

    pub fn handle_radius(mut self, radius: f32) -> Self {
        self.handle_radius = radius;
        self
    }
}

/// Horizontal track with a draggable handle.
pub struct Slider {
    id: WidgetId,
    node: Node,
    size: Vec2,
    min: f32,
    max: f32,
    step: Option<f32>,
    value: f32,
    track: ShapeVisual,
    fill: ShapeVisual,
    handle: ShapeVisual,
    handle_color: Color,
    handle_hover_color: Color,
    hovered: bool,
    dragging: bool,
    disabled: bool,
    disposed: bool,
}

impl Slider {
    pub fn new(id: WidgetId, config: SliderConfig) -> Self {
        let width = config.width;
        let height = config.track_height;
        let mut slider = Self {
            id,
            node: Node::new(),
            size: Vec2::new(width, height.max(config.handle_radius * 2.0)),
            min: config.min,
            max: config.max,
            step: config.step.filter(|step| *step > 0.0),
            value: config.min,
            track: ShapeVisual::pill(width, height, config.track_color),
            fill: ShapeVisual::pill(width, height, config.fill_color),
            handle: ShapeVisual::circle(config.handle_radius, config.handle_color),
            handle_color: config.handle_color,
            handle_hover_color: config.handle_hover_color,
            hovered: false,
            dragging: false,
            disabled: false,
            disposed: false,
        };
        slider.value = slider.constrain(config.value);
        slider.apply_value();
        slider
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Position of the value within the range, 0 when the range is empty.
    pub fn ratio(&self) -> f32 {
        let span = self.max - self.min;
        if span == 0.0 {
            0.0
        } else {
            ((self.value - self.min) / span).clamp(0.0, 1.0)
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn fill(&self) -> &ShapeVisual {
        &self.fill
    }

    pub fn handle(&self) -> &ShapeVisual {
        &self.handle
    }

    pub fn track(&self) -> &ShapeVisual {
        &self.track
    }

    /// Set the value, clamped into range and snapped to the step.
    ///
    /// Returns whether the value changed.
    pub fn set_value(&mut self, value: f32) -> bool {
        let value = self.constrain(value);
        if value == self.value {
            return false;
        }
        self.value = value;
        self.apply_value();
        true
    }

    /// Change the range; the value is clamped into it.
    pub fn set_range(&mut self, min: f32, max: f32) {
        self.min = min;
        self.max = max;
        self.value = self.constrain(self.value);
        self.apply_value();
    }

    /// Pointer entered or left. The handle lightens while hovered or dragged.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.refresh_handle();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.dragging = false;
        }
        let opacity = if disabled { 0.5 } else { 1.0 };
        for visual in [&mut self.track, &mut self.fill, &mut self.handle] {
            visual.set_opacity(opacity);
        }
        self.refresh_handle();
    }

    /// Start dragging at a pointer x in local space.
    pub fn begin_drag(&mut self, local_x: f32) -> bool {
        if self.disabled {
            return false;
        }
        self.dragging = true;
        self.refresh_handle();
        self.drag_to(local_x)
    }

    /// Move the handle under the pointer. Ignored unless dragging.
    pub fn drag_to(&mut self, local_x: f32) -> bool {
        if !self.dragging {
            return false;
        }
        let value = self.value_at(local_x);
        self.set_value(value)
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.refresh_handle();
    }

    /// Value under a pointer x in local space.
    pub fn value_at(&self, local_x: f32) -> f32 {
        let width = self.size.x;
        let ratio = if width > 0.0 {
            ((local_x + width / 2.0) / width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.min + ratio * (self.max - self.min)
    }

    fn constrain(&self, value: f32) -> f32 {
        let (low, high) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        let value = match self.step {
            Some(step) => self.min + ((value - self.min) / step).round() * step,
            None => value,
        };
        value.clamp(low, high)
    }

    fn refresh_handle(&mut self) {
        let active = (self.hovered || self.dragging) && !self.disabled;
        let color = if active {
            self.handle_hover_color
        } else {
            self.handle_color
        };
        self.handle.set_fill(color);
    }

    fn apply_value(&mut self) {
        let width = self.size.x;
        let ratio = self.ratio();
        let fill_width = (ratio * width).max(MIN_EXTENT);
        let left = -width / 2.0;

        self.fill.set_size(fill_width, self.track.size().y);
        self.fill
            .set_position(Vec3::new(left + fill_width / 2.0, 0.0, CHILD_DEPTH_OFFSET));
        self.handle
            .set_position(Vec3::new(left + ratio * width, 0.0, 2.0 * CHILD_DEPTH_OFFSET));
    }
}

impl LayoutBox for Slider {
    fn layout_size(&self) -> Vec2 {
        self.size
    }

    fn set_layout_position(&mut self, position: Vec3) {
        self.node.position = position;
    }
}

impl Widget for Slider {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn hit_targets(&self) -> Vec<HitTarget> {
        vec![HitTarget::new(self.id, Vec2::ZERO, self.size)]
    }

    fn visuals(&self) -> Vec<&ShapeVisual> {
        vec![&self.track, &self.fill, &self.handle]
    }

    fn dispose(&mut self) {
        if self.disposed {
            tracing::warn!(id = %self.id, "slider disposed twice");
            return;
        }
        self.disposed = true;
        self.track.dispose();
        self.fill.dispose();
        self.handle.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}
