//! Layout container
//!
//! A [`Container`] owns an ordered list of child widgets and re-runs the box
//! layout after every change to its children, its parameters or its size.

use super::{
    arrange, Align, Direction, Justify, LayoutBox, LayoutOutcome, LayoutParams, Padding,
    BACKGROUND_DEPTH,
};
use crate::id::WidgetId;
use crate::scene::Node;
use crate::shape::{Border, Color, ShapeVisual};
use crate::text::TextMeasure;
use crate::widget::{HitTarget, Widget};
use glam::{Vec2, Vec3};

/// Background drawn behind a container's children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundConfig {
    /// Fill color. Default: dark translucent grey.
    pub color: Color,
    /// Corner radius. Default: 0.02.
    pub corner_radius: f32,
    /// Optional outline. Default: none.
    pub border: Option<Border>,
    /// Opacity. Default: 1.
    pub opacity: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            color: [0.1, 0.1, 0.12, 0.9],
            corner_radius: 0.02,
            border: None,
            opacity: 1.0,
        }
    }
}

impl BackgroundConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub(crate) fn build(&self, size: Vec2) -> ShapeVisual {
        let mut visual = ShapeVisual::rounded_rect(size.x, size.y, self.corner_radius, self.color)
            .with_position(Vec3::new(0.0, 0.0, BACKGROUND_DEPTH));
        visual.set_border(self.border);
        visual.set_opacity(self.opacity);
        visual
    }
}

/// Settings for creating a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerConfig {
    /// Width. Default: 1.
    pub width: f32,
    /// Height. Default: 1.
    pub height: f32,
    /// Layout parameters.
    pub layout: LayoutParams,
    /// Background, if any. Default: none.
    pub background: Option<BackgroundConfig>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            layout: LayoutParams::default(),
            background: None,
        }
    }
}

impl ContainerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn layout(mut self, layout: LayoutParams) -> Self {
        self.layout = layout;
        self
    }

    pub fn background(mut self, background: BackgroundConfig) -> Self {
        self.background = Some(background);
        self
    }
}

/// Widget that lays out its children.
pub struct Container {
    id: WidgetId,
    node: Node,
    params: LayoutParams,
    size: Vec2,
    background: Option<ShapeVisual>,
    children: Vec<Box<dyn Widget>>,
    disposed: bool,
}

impl Container {
    /// Create an empty container.
    pub fn new(id: WidgetId, config: ContainerConfig) -> Self {
        let size = Vec2::new(config.width, config.height);
        Self {
            id,
            node: Node::new(),
            params: config.layout,
            size,
            background: config.background.map(|bg| bg.build(size)),
            children: Vec::new(),
            disposed: false,
        }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn background(&self) -> Option<&ShapeVisual> {
        self.background.as_ref()
    }

    pub fn background_mut(&mut self) -> Option<&mut ShapeVisual> {
        self.background.as_mut()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// First child with the given id.
    pub fn child(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.children
            .iter()
            .find(|child| child.id() == id)
            .map(|child| child.as_ref())
    }

    /// First child with the given id, mutably.
    ///
    /// Call [`relayout`](Self::relayout) after changing the child's size.
    pub fn child_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        match self.children.iter_mut().find(|child| child.id() == id) {
            Some(child) => Some(child.as_mut()),
            None => None,
        }
    }

    /// Children in layout order, mutably.
    ///
    /// Call [`relayout`](Self::relayout) after changing a child's size.
    pub fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    /// Append a child and relayout.
    pub fn add_child(&mut self, child: Box<dyn Widget>) {
        self.children.push(child);
        self.relayout();
    }

    /// Insert a child at `index` (clamped to the end) and relayout.
    pub fn insert_child(&mut self, index: usize, child: Box<dyn Widget>) {
        let index = index.min(self.children.len());
        self.children.insert(index, child);
        self.relayout();
    }

    /// Remove the first child with the given id and relayout.
    pub fn remove_child(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let index = self.children.iter().position(|child| child.id() == id)?;
        let child = self.children.remove(index);
        self.relayout();
        Some(child)
    }

    /// Remove every child. The container keeps its last size.
    pub fn clear_children(&mut self) -> Vec<Box<dyn Widget>> {
        let children = std::mem::take(&mut self.children);
        self.relayout();
        children
    }

    pub fn set_layout(&mut self, params: LayoutParams) {
        self.params = params;
        self.relayout();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.params.direction = direction;
        self.relayout();
    }

    pub fn set_align(&mut self, align: Align) {
        self.params.align = align;
        self.relayout();
    }

    pub fn set_justify(&mut self, justify: Justify) {
        self.params.justify = justify;
        self.relayout();
    }

    pub fn set_gap(&mut self, gap: f32) {
        self.params.gap = gap;
        self.relayout();
    }

    pub fn set_padding(&mut self, padding: impl Into<Padding>) {
        self.params.padding = padding.into();
        self.relayout();
    }

    pub fn set_auto_size(&mut self, auto_size: bool) {
        self.params.auto_size = auto_size;
        self.relayout();
    }

    /// Resize the container and relayout.
    ///
    /// With auto-size enabled the next pass derives the size from the
    /// children again, so this only sticks while the container is empty.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.sync_background();
        self.relayout();
    }

    /// Re-run the layout with the current children and parameters.
    pub fn relayout(&mut self) -> Option<LayoutOutcome> {
        let outcome = arrange(&mut self.children, &self.params, self.size)?;
        if let Some(size) = outcome.container_size {
            if size != self.size {
                tracing::debug!(
                    id = %self.id,
                    width = size.x,
                    height = size.y,
                    "container auto-sized"
                );
                self.size = size;
            }
        }
        self.sync_background();
        Some(outcome)
    }

    fn sync_background(&mut self) {
        if let Some(background) = &mut self.background {
            background.set_size(self.size.x, self.size.y);
        }
    }
}

impl LayoutBox for Container {
    fn layout_size(&self) -> Vec2 {
        self.size
    }

    fn set_layout_position(&mut self, position: Vec3) {
        self.node.position = position;
    }
}

impl Widget for Container {
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
        for child in &mut self.children {
            child.update(dt);
        }
    }

    fn shape_text(&mut self, measure: &mut dyn TextMeasure) {
        for child in &mut self.children {
            child.shape_text(measure);
        }
        self.relayout();
    }

    fn hit_targets(&self) -> Vec<HitTarget> {
        match &self.background {
            Some(_) => vec![HitTarget::new(self.id, Vec2::ZERO, self.size)],
            None => Vec::new(),
        }
    }

    fn visuals(&self) -> Vec<&ShapeVisual> {
        self.background.iter().collect()
    }

    fn children(&self) -> Vec<&dyn Widget> {
        self.children.iter().map(|child| child.as_ref()).collect()
    }

    fn dispose(&mut self) {
        if self.disposed {
            tracing::warn!(id = %self.id, "container disposed twice");
            return;
        }
        self.disposed = true;
        if let Some(background) = &mut self.background {
            background.dispose();
        }
        for child in &mut self.children {
            child.dispose();
        }
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdAllocator;
    use crate::text::{MonospaceMeasure, TextStyle};
    use crate::widget::{Button, ButtonConfig, Label};

    fn button(ids: &mut IdAllocator, width: f32, height: f32) -> Box<dyn Widget> {
        Box::new(Button::new(ids.next_id(), ButtonConfig::new().size(width, height)))
    }

    fn positions(container: &Container) -> Vec<Vec3> {
        container.children().iter().map(|c| c.position()).collect()
    }

    #[test]
    fn test_add_child_relayouts() {
        let mut ids = IdAllocator::new();
        let mut column = Container::new(ids.next_id(), ContainerConfig::new().size(2.0, 4.0));

        column.add_child(button(&mut ids, 1.0, 1.0));
        assert_eq!(positions(&column)[0], Vec3::new(0.0, 1.5, 0.01));

        column.add_child(button(&mut ids, 1.0, 1.0));
        assert_eq!(positions(&column)[1], Vec3::new(0.0, 0.5, 0.01));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut ids = IdAllocator::new();
        let mut column = Container::new(ids.next_id(), ContainerConfig::new().size(2.0, 4.0));
        let first = button(&mut ids, 1.0, 1.0);
        let first_id = first.id();
        column.add_child(first);
        column.add_child(button(&mut ids, 1.0, 1.0));

        let removed = column.remove_child(first_id).unwrap();
        assert_eq!(removed.id(), first_id);
        assert_eq!(column.len(), 1);
        // the remaining child moved up to the start edge
        assert_eq!(positions(&column)[0].y, 1.5);

        assert!(column.remove_child(first_id).is_none());

        let cleared = column.clear_children();
        assert_eq!(cleared.len(), 1);
        assert!(column.is_empty());
        assert_eq!(column.size(), Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_duplicate_ids_remove_first() {
        let mut column = Container::new(WidgetId(0), ContainerConfig::new().size(2.0, 4.0));
        let shared = WidgetId(7);
        column.add_child(Box::new(Button::new(shared, ButtonConfig::new().size(1.0, 1.0))));
        column.add_child(Box::new(Button::new(shared, ButtonConfig::new().size(1.0, 2.0))));
        assert_eq!(column.len(), 2);

        column.remove_child(shared);
        assert_eq!(column.len(), 1);
        assert_eq!(column.children()[0].size(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_auto_size_syncs_background() {
        let mut ids = IdAllocator::new();
        let mut panel = Container::new(
            ids.next_id(),
            ContainerConfig::new()
                .size(10.0, 10.0)
                .layout(LayoutParams::new().auto_size(true).gap(0.5).padding(0.25))
                .background(BackgroundConfig::new()),
        );

        // Empty: untouched.
        assert!(panel.relayout().is_none());
        assert_eq!(panel.size(), Vec2::new(10.0, 10.0));

        panel.add_child(button(&mut ids, 1.0, 1.0));
        panel.add_child(button(&mut ids, 2.0, 2.0));

        let expected = Vec2::new(2.0 + 0.5, 3.5 + 0.5);
        assert_eq!(panel.size(), expected);
        assert_eq!(panel.background().unwrap().size(), expected);
        assert_eq!(panel.background().unwrap().position().z, BACKGROUND_DEPTH);
    }

    #[test]
    fn test_setters_relayout() {
        let mut ids = IdAllocator::new();
        let mut row = Container::new(
            ids.next_id(),
            ContainerConfig::new()
                .size(6.0, 2.0)
                .layout(LayoutParams::new().direction(Direction::Horizontal)),
        );
        row.add_child(button(&mut ids, 1.0, 1.0));
        row.add_child(button(&mut ids, 1.0, 1.0));
        assert_eq!(positions(&row)[0].x, -2.5);

        row.set_gap(1.0);
        assert_eq!(positions(&row)[1].x, -2.5 + 2.0);

        row.set_justify(Justify::End);
        assert_eq!(positions(&row)[1].x, 2.5);

        row.set_align(Align::Start);
        assert_eq!(positions(&row)[0].y, -0.5);

        row.set_padding([0.0, 0.5, 0.0, 0.0]);
        assert_eq!(positions(&row)[1].x, 2.0);

        row.set_direction(Direction::Vertical);
        assert_eq!(positions(&row)[0].x, -2.5);

        row.set_size(6.0, 4.0);
        assert_eq!(positions(&row)[1].y, -1.5);
    }

    #[test]
    fn test_set_size_resizes_background() {
        let mut container = Container::new(
            WidgetId(0),
            ContainerConfig::new().size(1.0, 1.0).background(BackgroundConfig::new()),
        );
        container.set_size(3.0, 2.0);
        assert_eq!(container.background().unwrap().size(), Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_shape_text_relayouts_stale_sizes() {
        let mut ids = IdAllocator::new();
        let mut row = Container::new(
            ids.next_id(),
            ContainerConfig::new().layout(
                LayoutParams::new()
                    .direction(Direction::Horizontal)
                    .auto_size(true),
            ),
        );
        let style = TextStyle::new().font_size(0.1).line_height(1.0);
        row.add_child(Box::new(Label::new(ids.next_id(), "abcd", style)));
        row.add_child(Box::new(Label::new(ids.next_id(), "ab", style)));
        assert_eq!(row.size(), Vec2::ZERO);

        row.shape_text(&mut MonospaceMeasure { advance: 0.5 });
        assert!((row.size().x - 0.3).abs() < 1e-6);
        assert!((row.size().y - 0.1).abs() < 1e-6);
        assert!((positions(&row)[1].x - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_dispose_cascades() {
        let mut ids = IdAllocator::new();
        let mut container = Container::new(
            ids.next_id(),
            ContainerConfig::new().background(BackgroundConfig::new()),
        );
        container.add_child(button(&mut ids, 1.0, 1.0));
        container.dispose();
        assert!(container.is_disposed());
        assert!(container.background().unwrap().is_disposed());
        assert!(container.children()[0].is_disposed());
    }
}
