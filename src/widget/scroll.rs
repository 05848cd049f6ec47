//! Scroll view
//!
//! A fixed viewport over a vertically laid out content container. Clipping
//! is done by the host with the stencil reference the view carries; the
//! view itself hides children that fall completely outside the viewport so
//! they are neither drawn nor hit-tested.

use super::{HitTarget, Widget};
use crate::id::{IdAllocator, StencilAllocator, WidgetId};
use crate::layout::{
    compute, Align, BackgroundConfig, Container, ContainerConfig, LayoutBox, LayoutParams,
    Padding, CHILD_DEPTH_OFFSET,
};
use crate::scene::Node;
use crate::shape::{Color, ShapeVisual};
use crate::text::TextMeasure;
use glam::{Vec2, Vec3};

/// Settings for creating a scroll view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollViewConfig {
    /// Viewport width. Default: 0.4.
    pub width: f32,
    /// Viewport height. Default: 0.3.
    pub height: f32,
    /// Space between content children. Default: 0.01.
    pub gap: f32,
    /// Content insets. Default: 0.01 on every side.
    pub padding: Padding,
    /// Horizontal placement of content children. Default: center.
    pub align: Align,
    /// Width of the scrollbar thumb. Default: 0.008.
    pub scrollbar_width: f32,
    pub scrollbar_color: Color,
    /// Viewport background. Default: none.
    pub background: Option<BackgroundConfig>,
}

impl Default for ScrollViewConfig {
    fn default() -> Self {
        Self {
            width: 0.4,
            height: 0.3,
            gap: 0.01,
            padding: Padding::all(0.01),
            align: Align::Center,
            scrollbar_width: 0.008,
            scrollbar_color: [0.6, 0.6, 0.6, 0.8],
            background: None,
        }
    }
}

impl ScrollViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn background(mut self, background: BackgroundConfig) -> Self {
        self.background = Some(background);
        self
    }
}

/// Vertically scrolling viewport.
pub struct ScrollView {
    id: WidgetId,
    node: Node,
    size: Vec2,
    stencil_ref: u8,
    content: Container,
    offset: f32,
    drag_anchor: Option<f32>,
    background: Option<ShapeVisual>,
    thumb: ShapeVisual,
    disposed: bool,
}

impl ScrollView {
    /// Create a scroll view.
    ///
    /// Takes two ids (the view and its inner container) and one stencil
    /// reference. `stencils` must be shared by every clipping widget in the
    /// scene.
    pub fn new(
        ids: &mut IdAllocator,
        stencils: &mut StencilAllocator,
        config: ScrollViewConfig,
    ) -> Self {
        let id = ids.next_id();
        let content_id = ids.next_id();
        let stencil_ref = stencils.next_ref();
        let layout = LayoutParams::new()
            .gap(config.gap)
            .padding(config.padding)
            .align(config.align);
        let content = Container::new(
            content_id,
            ContainerConfig::new().size(config.width, 0.0).layout(layout),
        );
        let size = Vec2::new(config.width, config.height);
        let background = config.background.map(|bg| bg.build(size));
        let thumb = ShapeVisual::pill(config.scrollbar_width, size.y, config.scrollbar_color);

        let mut view = Self {
            id,
            node: Node::new(),
            size,
            stencil_ref,
            content,
            offset: 0.0,
            drag_anchor: None,
            background,
            thumb,
            disposed: false,
        };
        view.refresh();
        view
    }

    pub fn stencil_ref(&self) -> u8 {
        self.stencil_ref
    }

    pub fn content(&self) -> &Container {
        &self.content
    }

    /// Current scroll distance from the top.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Height of the laid out content.
    pub fn content_height(&self) -> f32 {
        if self.content.is_empty() {
            0.0
        } else {
            self.content.size().y
        }
    }

    /// Largest valid offset.
    pub fn max_offset(&self) -> f32 {
        (self.content_height() - self.size.y).max(0.0)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn thumb(&self) -> &ShapeVisual {
        &self.thumb
    }

    /// Append a content child.
    pub fn add_child(&mut self, child: Box<dyn Widget>) {
        self.content.add_child(child);
        self.refresh();
    }

    /// Remove the first content child with the given id.
    pub fn remove_child(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let child = self.content.remove_child(id);
        self.refresh();
        child
    }

    pub fn clear_children(&mut self) -> Vec<Box<dyn Widget>> {
        let children = self.content.clear_children();
        self.refresh();
        children
    }

    /// Scroll to `offset`, clamped to the valid range. Returns whether it moved.
    pub fn scroll_to(&mut self, offset: f32) -> bool {
        let offset = offset.clamp(0.0, self.max_offset());
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        self.refresh();
        true
    }

    /// Scroll by `delta`; positive values reveal content further down.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        self.scroll_to(self.offset + delta)
    }

    /// Start a drag at pointer height `local_y`.
    pub fn begin_drag(&mut self, local_y: f32) {
        self.drag_anchor = Some(local_y);
    }

    /// Follow the pointer: moving it up by `d` scrolls down by `d`.
    pub fn drag_to(&mut self, local_y: f32) -> bool {
        let Some(anchor) = self.drag_anchor else {
            return false;
        };
        self.drag_anchor = Some(local_y);
        self.scroll_by(local_y - anchor)
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Re-run the content layout, clamp the offset and update clipping.
    pub fn refresh(&mut self) {
        self.fit_content();
        self.offset = self.offset.clamp(0.0, self.max_offset());

        let content_height = self.content_height();
        let content_y = self.size.y / 2.0 - content_height / 2.0 + self.offset;
        self.content
            .set_position(Vec3::new(0.0, content_y, CHILD_DEPTH_OFFSET));

        let half_view = self.size.y / 2.0;
        for child in self.content.children_mut() {
            let center = content_y + child.position().y;
            let half = child.size().y / 2.0;
            let overlaps = center - half < half_view && center + half > -half_view;
            child.set_visible(overlaps);
        }

        self.update_thumb();
    }

    /// Size the content to the viewport width and the height its children need,
    /// so cross-axis alignment is relative to the viewport edges.
    fn fit_content(&mut self) {
        let sizes: Vec<Vec2> = self
            .content
            .children()
            .iter()
            .map(|child| child.size())
            .collect();
        let params = self.content.params().auto_size(true);
        let height = compute(&sizes, &params, Vec2::ZERO)
            .and_then(|outcome| outcome.container_size)
            .map_or(0.0, |size| size.y);
        self.content.set_size(self.size.x, height);
    }

    fn update_thumb(&mut self) {
        let max_offset = self.max_offset();
        if max_offset <= 0.0 {
            self.thumb.set_visible(false);
            return;
        }
        let view = self.size.y;
        let thumb_height = view * (view / self.content_height());
        let travel = view - thumb_height;
        let y = view / 2.0 - thumb_height / 2.0 - travel * (self.offset / max_offset);
        self.thumb.set_size(self.thumb.size().x, thumb_height);
        self.thumb.set_position(Vec3::new(
            self.size.x / 2.0 - self.thumb.size().x / 2.0,
            y,
            2.0 * CHILD_DEPTH_OFFSET,
        ));
        self.thumb.set_visible(true);
    }
}

impl LayoutBox for ScrollView {
    fn layout_size(&self) -> Vec2 {
        self.size
    }

    fn set_layout_position(&mut self, position: Vec3) {
        self.node.position = position;
    }
}

impl Widget for ScrollView {
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
        self.content.update(dt);
    }

    fn shape_text(&mut self, measure: &mut dyn TextMeasure) {
        self.content.shape_text(measure);
        self.refresh();
    }

    fn hit_targets(&self) -> Vec<HitTarget> {
        vec![HitTarget::new(self.id, Vec2::ZERO, self.size)]
    }

    fn clip_rect(&self) -> Option<HitTarget> {
        Some(HitTarget::new(self.id, Vec2::ZERO, self.size))
    }

    fn visuals(&self) -> Vec<&ShapeVisual> {
        let mut visuals: Vec<&ShapeVisual> = self.background.iter().collect();
        visuals.push(&self.thumb);
        visuals
    }

    fn children(&self) -> Vec<&dyn Widget> {
        vec![&self.content as &dyn Widget]
    }

    fn dispose(&mut self) {
        if self.disposed {
            tracing::warn!(id = %self.id, "scroll view disposed twice");
            return;
        }
        self.disposed = true;
        if let Some(background) = &mut self.background {
            background.dispose();
        }
        self.thumb.dispose();
        self.content.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{collect_hit_targets, Button, ButtonConfig};

    fn view_with_rows(rows: usize) -> ScrollView {
        let mut ids = IdAllocator::new();
        let mut stencils = StencilAllocator::new();
        let mut view = ScrollView::new(
            &mut ids,
            &mut stencils,
            ScrollViewConfig::new().size(2.0, 2.0).gap(0.0).padding(0.0),
        );
        for _ in 0..rows {
            view.add_child(Box::new(Button::new(
                ids.next_id(),
                ButtonConfig::new().size(1.0, 1.0),
            )));
        }
        view
    }

    #[test]
    fn test_content_starts_at_top() {
        let view = view_with_rows(4);
        assert_eq!(view.content_height(), 4.0);
        assert_eq!(view.max_offset(), 2.0);
        assert_eq!(view.content().position().y, -1.0);
        assert_eq!(view.stencil_ref(), 1);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut view = view_with_rows(4);
        assert!(!view.scroll_by(-1.0));
        assert!(view.scroll_by(5.0));
        assert_eq!(view.offset(), 2.0);
        assert_eq!(view.content().position().y, 1.0);
        assert!(!view.scroll_by(1.0));
    }

    #[test]
    fn test_short_content_does_not_scroll() {
        let mut view = view_with_rows(1);
        assert_eq!(view.max_offset(), 0.0);
        assert!(!view.scroll_by(1.0));
        assert!(!view.thumb().is_visible());
        // a single row sits at the top of the viewport
        let row_y = view.content().position().y + view.content().children()[0].position().y;
        assert_eq!(row_y, 0.5);
    }

    #[test]
    fn test_rows_outside_viewport_hidden() {
        let mut view = view_with_rows(4);
        let visible = |view: &ScrollView| -> Vec<bool> {
            view.content().children().iter().map(|c| c.is_visible()).collect()
        };
        assert_eq!(visible(&view), vec![true, true, false, false]);

        view.scroll_to(2.0);
        assert_eq!(visible(&view), vec![false, false, true, true]);

        view.scroll_to(0.5);
        assert_eq!(visible(&view), vec![true, true, true, false]);
    }

    #[test]
    fn test_drag_scrolls() {
        let mut view = view_with_rows(4);
        assert!(!view.drag_to(1.0));

        view.begin_drag(0.0);
        assert!(view.drag_to(0.75));
        assert_eq!(view.offset(), 0.75);
        view.drag_to(0.5);
        assert_eq!(view.offset(), 0.5);
        view.end_drag();
        assert!(!view.is_dragging());
    }

    #[test]
    fn test_thumb_tracks_offset() {
        let mut view = view_with_rows(4);
        assert!(view.thumb().is_visible());
        assert_eq!(view.thumb().size().y, 1.0);
        assert_eq!(view.thumb().position().y, 0.5);
        view.scroll_to(2.0);
        assert_eq!(view.thumb().position().y, -0.5);
    }

    #[test]
    fn test_align_start_uses_viewport_edge() {
        let mut ids = IdAllocator::new();
        let mut stencils = StencilAllocator::new();
        let mut view = ScrollView::new(
            &mut ids,
            &mut stencils,
            ScrollViewConfig::new()
                .size(2.0, 2.0)
                .padding(0.0)
                .align(Align::Start),
        );
        view.add_child(Box::new(Button::new(
            ids.next_id(),
            ButtonConfig::new().size(1.0, 0.5),
        )));

        assert_eq!(view.content().size(), Vec2::new(2.0, 0.5));
        let row_x = view.content().position().x + view.content().children()[0].position().x;
        assert_eq!(row_x, -0.5);
    }

    #[test]
    fn test_hit_targets_clipped_to_viewport() {
        let mut view = view_with_rows(4);
        view.scroll_to(0.5);

        // (0, -1.3) lies below the viewport, over the clipped part of row 2
        let targets = collect_hit_targets(&view);
        assert!(targets.iter().all(|t| !t.contains(Vec2::new(0.0, -1.3))));

        // rows 0 and 2 are cut at the viewport edges, row 3 is hidden
        let rows: Vec<HitTarget> = targets.into_iter().filter(|t| t.id != view.id()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].center, Vec2::new(0.0, 0.75));
        assert_eq!(rows[0].size, Vec2::new(1.0, 0.5));
        assert_eq!(rows[1].center, Vec2::new(0.0, 0.0));
        assert_eq!(rows[2].center, Vec2::new(0.0, -0.75));
        assert_eq!(rows[2].size, Vec2::new(1.0, 0.5));
    }

    #[test]
    fn test_remove_reclamps_offset() {
        let mut view = view_with_rows(4);
        view.scroll_to(2.0);
        let last = view.content().children()[3].id();
        view.remove_child(last);
        assert_eq!(view.offset(), 1.0);
    }
}
