//! Panel
//!
//! A background container whose first child is an optional title.

use super::{HitTarget, Label, Widget};
use crate::id::{IdAllocator, WidgetId};
use crate::layout::{BackgroundConfig, Container, ContainerConfig, LayoutBox, LayoutParams};
use crate::scene::Node;
use crate::shape::ShapeVisual;
use crate::text::{TextMeasure, TextStyle};
use glam::{Vec2, Vec3};

/// Settings for creating a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    /// Title shown above the content. Default: none.
    pub title: Option<String>,
    pub title_style: TextStyle,
    /// Width. Default: 0.5.
    pub width: f32,
    /// Height. Default: 0.4.
    pub height: f32,
    /// Default: gap 0.02, padding 0.02.
    pub layout: LayoutParams,
    pub background: BackgroundConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: None,
            title_style: TextStyle::default().font_size(0.05),
            width: 0.5,
            height: 0.4,
            layout: LayoutParams::default().gap(0.02).padding(0.02),
            background: BackgroundConfig::default(),
        }
    }
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_style(mut self, style: TextStyle) -> Self {
        self.title_style = style;
        self
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
        self.background = background;
        self
    }
}

pub struct Panel {
    container: Container,
    title_id: WidgetId,
    title_style: TextStyle,
    has_title: bool,
}

impl Panel {
    /// Takes one id for the panel and one for its title label.
    pub fn new(ids: &mut IdAllocator, config: PanelConfig) -> Self {
        let mut container = Container::new(
            ids.next_id(),
            ContainerConfig::new()
                .size(config.width, config.height)
                .layout(config.layout)
                .background(config.background),
        );
        let title_id = ids.next_id();
        let has_title = config.title.is_some();
        if let Some(title) = config.title {
            container.add_child(Box::new(Label::new(title_id, title, config.title_style)));
        }
        Self {
            container,
            title_id,
            title_style: config.title_style,
            has_title,
        }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    /// The inner container. Children at index 0 may be the title.
    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    pub fn title_id(&self) -> WidgetId {
        self.title_id
    }

    pub fn has_title(&self) -> bool {
        self.has_title
    }

    /// Replace the title, or remove it with `None`.
    pub fn set_title(&mut self, title: Option<String>) {
        if self.has_title {
            if let Some(mut old) = self.container.remove_child(self.title_id) {
                old.dispose();
            }
        }
        self.has_title = title.is_some();
        if let Some(title) = title {
            let label = Label::new(self.title_id, title, self.title_style);
            self.container.insert_child(0, Box::new(label));
        }
    }

    /// Append content after the title.
    pub fn add_child(&mut self, child: Box<dyn Widget>) {
        self.container.add_child(child);
    }

    /// Remove the first content child with the given id. The title cannot be
    /// removed this way; use [`set_title`](Self::set_title).
    pub fn remove_child(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        if self.has_title && id == self.title_id {
            return None;
        }
        self.container.remove_child(id)
    }

    /// Remove every content child and keep the title.
    pub fn clear_children(&mut self) -> Vec<Box<dyn Widget>> {
        let mut removed = self.container.clear_children();
        if self.has_title {
            if let Some(index) = removed.iter().position(|child| child.id() == self.title_id) {
                let title = removed.remove(index);
                self.container.add_child(title);
            }
        }
        removed
    }
}

impl LayoutBox for Panel {
    fn layout_size(&self) -> Vec2 {
        self.container.layout_size()
    }

    fn set_layout_position(&mut self, position: Vec3) {
        self.container.set_layout_position(position);
    }
}

impl Widget for Panel {
    fn id(&self) -> WidgetId {
        self.container.id()
    }

    fn node(&self) -> &Node {
        self.container.node()
    }

    fn node_mut(&mut self) -> &mut Node {
        self.container.node_mut()
    }

    fn size(&self) -> Vec2 {
        self.container.size()
    }

    fn update(&mut self, dt: f32) {
        self.container.update(dt);
    }

    fn shape_text(&mut self, measure: &mut dyn TextMeasure) {
        self.container.shape_text(measure);
    }

    fn hit_targets(&self) -> Vec<HitTarget> {
        self.container.hit_targets()
    }

    fn visuals(&self) -> Vec<&ShapeVisual> {
        self.container.visuals()
    }

    fn children(&self) -> Vec<&dyn Widget> {
        self.container.children()
    }

    fn dispose(&mut self) {
        self.container.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.container.is_disposed()
    }
}
