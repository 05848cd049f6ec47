//! Box layout
//!
//! Positions an ordered list of children inside a container along a main
//! axis, aligns them on the cross axis and, in auto-size mode, derives the
//! container's own size from its children.
//!
//! # Coordinate conventions
//!
//! Positions are child centers in the container's local space, with the
//! container centered on the origin. The horizontal main axis runs toward
//! +X; the vertical main axis runs top to bottom, toward -Y. Children are
//! placed at [`CHILD_DEPTH_OFFSET`] so they draw in front of the
//! container's background at [`BACKGROUND_DEPTH`].

pub mod container;

pub use container::{BackgroundConfig, Container, ContainerConfig};

use glam::{Vec2, Vec3};

/// Depth of a container's background visual.
pub const BACKGROUND_DEPTH: f32 = 0.0;

/// Depth at which children are placed, in front of the background.
pub const CHILD_DEPTH_OFFSET: f32 = 0.01;

/// Axis along which children are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Horizontal,
    #[default]
    Vertical,
}

impl Direction {
    /// Split a size into (main, cross) extents.
    pub fn main_cross(self, size: Vec2) -> (f32, f32) {
        match self {
            Direction::Horizontal => (size.x, size.y),
            Direction::Vertical => (size.y, size.x),
        }
    }
}

/// Cross-axis placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Start,
    /// Centered on the container's axis, independent of the child's size.
    #[default]
    Center,
    End,
}

/// Main-axis distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    /// Slack goes between children; the configured gap is ignored when there
    /// are two or more.
    SpaceBetween,
    /// Slack is split evenly between and around children.
    SpaceAround,
}

/// Insets between a container's edge and its content box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same inset on every side.
    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// `vertical` on top and bottom, `horizontal` on left and right.
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Left plus right.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Top plus bottom.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl From<[f32; 4]> for Padding {
    /// `[top, right, bottom, left]`.
    fn from([top, right, bottom, left]: [f32; 4]) -> Self {
        Self::new(top, right, bottom, left)
    }
}

impl From<f32> for Padding {
    fn from(value: f32) -> Self {
        Self::all(value)
    }
}

/// Layout configuration of a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Main axis. Default: vertical.
    pub direction: Direction,
    /// Cross-axis placement. Default: center.
    pub align: Align,
    /// Main-axis distribution. Default: start.
    pub justify: Justify,
    /// Space between consecutive children. Default: 0.
    pub gap: f32,
    /// Content insets. Default: 0 on every side.
    pub padding: Padding,
    /// Derive the container size from the children. Default: false.
    pub auto_size: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            direction: Direction::Vertical,
            align: Align::Center,
            justify: Justify::Start,
            gap: 0.0,
            padding: Padding::ZERO,
            auto_size: false,
        }
    }
}

impl LayoutParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
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

    pub fn auto_size(mut self, auto_size: bool) -> Self {
        self.auto_size = auto_size;
        self
    }
}

/// A child that takes part in layout.
pub trait LayoutBox {
    /// Current width and height.
    fn layout_size(&self) -> Vec2;

    /// Receive the position computed for this child.
    fn set_layout_position(&mut self, position: Vec3);
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOutcome {
    /// Center of each child, in input order.
    pub positions: Vec<Vec3>,
    /// New container size when auto-sizing.
    pub container_size: Option<Vec2>,
}

/// Compute child positions without touching any child.
///
/// Returns `None` when there are no children; the container size is then
/// left as it is.
pub fn compute(
    sizes: &[Vec2],
    params: &LayoutParams,
    container_size: Vec2,
) -> Option<LayoutOutcome> {
    if sizes.is_empty() {
        return None;
    }

    let count = sizes.len();
    let direction = params.direction;
    let padding = params.padding;

    let mut sum_main = 0.0f32;
    let mut max_cross = 0.0f32;
    for &size in sizes {
        let (main, cross) = direction.main_cross(size);
        sum_main += main;
        max_cross = max_cross.max(cross);
    }
    let total_main = sum_main + params.gap * (count - 1) as f32;

    let mut size = container_size;
    let new_size = if params.auto_size {
        size = match direction {
            Direction::Horizontal => Vec2::new(
                total_main + padding.horizontal(),
                max_cross + padding.vertical(),
            ),
            Direction::Vertical => Vec2::new(
                max_cross + padding.horizontal(),
                total_main + padding.vertical(),
            ),
        };
        Some(size)
    } else {
        None
    };

    let content = Vec2::new(
        size.x - padding.horizontal(),
        size.y - padding.vertical(),
    );

    // Distances below are measured along the main axis from its start edge.
    let (main_size, main_start, sign) = match direction {
        Direction::Horizontal => (content.x, -size.x / 2.0 + padding.left, 1.0),
        Direction::Vertical => (content.y, size.y / 2.0 - padding.top, -1.0),
    };

    let (offset, spacing) = match params.justify {
        Justify::Start => (0.0, params.gap),
        Justify::Center => ((main_size - total_main) / 2.0, params.gap),
        Justify::End => (main_size - total_main, params.gap),
        Justify::SpaceBetween => {
            if count > 1 {
                (0.0, (main_size - sum_main) / (count - 1) as f32)
            } else {
                (0.0, params.gap)
            }
        }
        Justify::SpaceAround => {
            let spacing = (main_size - sum_main) / (count + 1) as f32;
            (spacing, spacing)
        }
    };

    let mut main_pos = main_start + sign * offset;
    let mut positions = Vec::with_capacity(count);
    for &child in sizes {
        let (main, cross) = direction.main_cross(child);
        let cross_pos = cross_position(params, size, cross);
        let center = main_pos + sign * main / 2.0;
        main_pos += sign * (main + spacing);

        positions.push(match direction {
            Direction::Horizontal => Vec3::new(center, cross_pos, CHILD_DEPTH_OFFSET),
            Direction::Vertical => Vec3::new(cross_pos, center, CHILD_DEPTH_OFFSET),
        });
    }

    Some(LayoutOutcome {
        positions,
        container_size: new_size,
    })
}

fn cross_position(params: &LayoutParams, size: Vec2, cross: f32) -> f32 {
    let padding = params.padding;
    // (negative edge, padding at it, positive edge, padding at it)
    let (low_edge, low_pad, high_edge, high_pad) = match params.direction {
        Direction::Horizontal => (-size.y / 2.0, padding.bottom, size.y / 2.0, padding.top),
        Direction::Vertical => (-size.x / 2.0, padding.left, size.x / 2.0, padding.right),
    };
    match params.align {
        Align::Start => low_edge + low_pad + cross / 2.0,
        Align::Center => 0.0,
        Align::End => high_edge - high_pad - cross / 2.0,
    }
}

/// Lay out `children` and write each position through its sink.
pub fn arrange<B: LayoutBox + ?Sized>(
    children: &mut [Box<B>],
    params: &LayoutParams,
    container_size: Vec2,
) -> Option<LayoutOutcome> {
    let sizes: Vec<Vec2> = children.iter().map(|child| child.layout_size()).collect();
    let outcome = compute(&sizes, params, container_size)?;

    for (child, position) in children.iter_mut().zip(&outcome.positions) {
        child.set_layout_position(*position);
    }

    tracing::trace!(
        children = children.len(),
        direction = ?params.direction,
        justify = ?params.justify,
        "layout pass"
    );

    Some(outcome)
}
