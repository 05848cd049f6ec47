//! On/off switch

use super::{HitTarget, Widget};
use crate::id::WidgetId;
use crate::layout::{LayoutBox, CHILD_DEPTH_OFFSET};
use crate::scene::Node;
use crate::shape::{lerp_color, Color, ShapeVisual};
use glam::{Vec2, Vec3};

/// Settings for creating a toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleConfig {
    /// Track width. Default: 0.12.
    pub width: f32,
    /// Track height. Default: 0.06.
    pub height: f32,
    /// Gap between the handle and the track edge. Default: 0.006.
    pub inset: f32,
    /// Initial value. Default: false.
    pub on: bool,
    /// Handle travel per second, as a fraction of the full travel. Default: 6.
    pub speed: f32,
    pub off_color: Color,
    pub on_color: Color,
    pub handle_color: Color,
    /// Handle color under the pointer. Default: light blue-grey.
    pub handle_hover_color: Color,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            width: 0.12,
            height: 0.06,
            inset: 0.006,
            on: false,
            speed: 6.0,
            off_color: [0.3, 0.3, 0.3, 1.0],
            on_color: [0.2, 0.6, 0.8, 1.0],
            handle_color: [1.0, 1.0, 1.0, 1.0],
            handle_hover_color: [0.85, 0.9, 1.0, 1.0],
        }
    }
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn colors(mut self, off: Color, on: Color) -> Self {
        self.off_color = off;
        self.on_color = on;
        self
    }
}

/// Pill-shaped switch whose handle slides between the off and on ends.
pub struct Toggle {
    id: WidgetId,
    node: Node,
    size: Vec2,
    track: ShapeVisual,
    handle: ShapeVisual,
    off_color: Color,
    on_color: Color,
    handle_color: Color,
    handle_hover_color: Color,
    speed: f32,
    on: bool,
    progress: f32,
    hovered: bool,
    disabled: bool,
    disposed: bool,
}

impl Toggle {
    pub fn new(id: WidgetId, config: ToggleConfig) -> Self {
        let radius = ((config.height - 2.0 * config.inset) / 2.0).max(0.0);
        let mut toggle = Self {
            id,
            node: Node::new(),
            size: Vec2::new(config.width, config.height),
            track: ShapeVisual::pill(config.width, config.height, config.off_color),
            handle: ShapeVisual::circle(radius, config.handle_color),
            off_color: config.off_color,
            on_color: config.on_color,
            handle_color: config.handle_color,
            handle_hover_color: config.handle_hover_color,
            speed: config.speed,
            on: config.on,
            progress: if config.on { 1.0 } else { 0.0 },
            hovered: false,
            disabled: false,
            disposed: false,
        };
        toggle.apply_progress();
        toggle
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Handle position from 0 (off end) to 1 (on end).
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the handle is still moving toward its target.
    pub fn is_animating(&self) -> bool {
        self.progress != self.target()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn track(&self) -> &ShapeVisual {
        &self.track
    }

    pub fn handle(&self) -> &ShapeVisual {
        &self.handle
    }

    /// Distance the handle center moves between the two ends.
    pub fn travel(&self) -> f32 {
        self.size.x - self.size.y
    }

    /// Flip the value unless disabled. Returns the value afterwards.
    pub fn toggle(&mut self) -> bool {
        if !self.disabled {
            self.set_on(!self.on);
        }
        self.on
    }

    /// Set the value; the handle slides there over the next updates.
    pub fn set_on(&mut self, on: bool) {
        if on != self.on {
            tracing::debug!(id = %self.id, on, "toggle switched");
        }
        self.on = on;
    }

    /// Set the value and move the handle there at once.
    pub fn set_on_immediate(&mut self, on: bool) {
        self.set_on(on);
        self.progress = self.target();
        self.apply_progress();
    }

    /// Pointer entered or left. The handle lightens while hovered and enabled.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.refresh_handle();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        let opacity = if disabled { 0.5 } else { 1.0 };
        self.track.set_opacity(opacity);
        self.handle.set_opacity(opacity);
        self.refresh_handle();
    }

    fn refresh_handle(&mut self) {
        let color = if self.hovered && !self.disabled {
            self.handle_hover_color
        } else {
            self.handle_color
        };
        self.handle.set_fill(color);
    }

    fn target(&self) -> f32 {
        if self.on {
            1.0
        } else {
            0.0
        }
    }

    fn apply_progress(&mut self) {
        let travel = self.travel();
        let x = -travel / 2.0 + self.progress * travel;
        self.handle.set_position(Vec3::new(x, 0.0, CHILD_DEPTH_OFFSET));
        self.track
            .set_fill(lerp_color(self.off_color, self.on_color, self.progress));
    }
}

impl LayoutBox for Toggle {
    fn layout_size(&self) -> Vec2 {
        self.size
    }

    fn set_layout_position(&mut self, position: Vec3) {
        self.node.position = position;
    }
}

impl Widget for Toggle {
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

    fn update(&mut self, dt: f32) {
        let target = self.target();
        if self.progress == target {
            return;
        }
        let step = self.speed * dt;
        self.progress = if self.progress < target {
            (self.progress + step).min(target)
        } else {
            (self.progress - step).max(target)
        };
        self.apply_progress();
    }

    fn hit_targets(&self) -> Vec<HitTarget> {
        vec![HitTarget::new(self.id, Vec2::ZERO, self.size)]
    }

    fn visuals(&self) -> Vec<&ShapeVisual> {
        vec![&self.track, &self.handle]
    }

    fn dispose(&mut self) {
        if self.disposed {
            tracing::warn!(id = %self.id, "toggle disposed twice");
            return;
        }
        self.disposed = true;
        self.track.dispose();
        self.handle.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle() -> Toggle {
        Toggle::new(
            WidgetId(0),
            ToggleConfig::new().size(0.2, 0.1).inset(0.01).speed(4.0),
        )
    }

    #[test]
    fn test_initial_handle_at_off_end() {
        let t = toggle();
        assert!(!t.is_on());
        assert!((t.handle().position().x + 0.05).abs() < 1e-6);
        assert!((t.handle().size().x - 0.08).abs() < 1e-6);
        assert_eq!(t.track().fill(), ToggleConfig::default().off_color);
    }

    #[test]
    fn test_handle_slides_over_updates() {
        let mut t = toggle();
        assert!(t.toggle());
        assert!(t.is_animating());
        assert_eq!(t.progress(), 0.0);

        t.update(0.125);
        assert!((t.progress() - 0.5).abs() < 1e-6);
        assert!(t.handle().position().x.abs() < 1e-6);

        t.update(1.0);
        assert_eq!(t.progress(), 1.0);
        assert!(!t.is_animating());
        assert!((t.handle().position().x - 0.05).abs() < 1e-6);
        assert_eq!(t.track().fill(), ToggleConfig::default().on_color);
    }

    #[test]
    fn test_reverse_mid_flight() {
        let mut t = toggle();
        t.set_on(true);
        t.update(0.125);
        t.set_on(false);
        t.update(0.0625);
        assert!((t.progress() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_immediate_and_disabled() {
        let mut t = toggle();
        t.set_on_immediate(true);
        assert_eq!(t.progress(), 1.0);
        assert!(!t.is_animating());

        t.set_disabled(true);
        assert!(t.toggle());
        assert_eq!(t.handle().opacity(), 0.5);
    }

    #[test]
    fn test_hover_tints_handle() {
        let config = ToggleConfig::default();
        let mut t = toggle();
        assert_eq!(t.handle().fill(), config.handle_color);

        t.set_hovered(true);
        assert!(t.is_hovered());
        assert_eq!(t.handle().fill(), config.handle_hover_color);

        t.set_disabled(true);
        assert_eq!(t.handle().fill(), config.handle_color);

        t.set_disabled(false);
        t.set_hovered(false);
        assert_eq!(t.handle().fill(), config.handle_color);
    }
}
