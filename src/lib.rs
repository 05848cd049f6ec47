//! Rein UI
//!
//! Retained-mode UI widgets for 3D scenes, built around a box layout engine.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **id** - Widget and stencil reference allocation
//! 2. **scene** - Local transforms (position, visibility)
//! 3. **shape** - Primitive visuals (rounded rect, circle, pill)
//! 4. **text** - Text styles and measurement (glyphon with feature = "text")
//! 5. **layout** - Box layout engine and the [`Container`] widget
//! 6. **widget** - Buttons, sliders, scroll views and the other widgets
//!
//! Rendering and pointer input belong to the host: it walks the widget tree
//! with [`widget::traverse`], draws [`Widget::visuals`] and [`Widget::labels`],
//! and feeds raycast hits back through the widgets' state setters.

pub mod error;
pub mod id;
pub mod layout;
pub mod scene;
pub mod shape;
pub mod text;
pub mod widget;

// Re-export commonly used types
pub use error::UiError;

pub use id::{IdAllocator, StencilAllocator, WidgetId};

pub use layout::{
    arrange, compute, Align, BackgroundConfig, Container, ContainerConfig, Direction, Justify,
    LayoutBox, LayoutOutcome, LayoutParams, Padding,
};

pub use scene::Node;

pub use shape::{Border, Color, ShapeKind, ShapeVisual};

pub use text::{MonospaceMeasure, TextAlign, TextMeasure, TextStyle};

#[cfg(feature = "text")]
pub use text::GlyphonMeasure;

pub use widget::{
    collect_hit_targets, traverse, Button, ButtonColors, ButtonConfig, ButtonState, Checkbox,
    CheckboxConfig, FloatingText, FloatingTextConfig, HitTarget, Label, Panel, PanelConfig,
    ProgressBar, ProgressBarConfig, ScrollView, ScrollViewConfig, ShapingState, Slider,
    SliderConfig, Toggle, ToggleConfig, Tooltip, TooltipConfig, Widget,
};

// Re-export glam for convenience
pub use glam;
