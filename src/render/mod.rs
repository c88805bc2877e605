//! Pure rendering of a bar array into a draw list
//!
//! [`render`] maps `(bars, highlight)` to a [`DrawList`]: a flat sequence of
//! draw operations in surface coordinates (origin top-left, y grows down).
//! The function has no knowledge of algorithms and never touches the array.
//!
//! A [`DrawList`] is handed to a [`Surface`], which is whatever actually shows
//! it. The terminal UI keeps only the latest frame (`Option<DrawList>`); tests
//! record every frame (`Vec<DrawList>`).

use crate::bars::constants::BAR_GAP;
use crate::bars::Bar;
use rustc_hash::FxHashSet;

/// Width of the drawing surface, in surface units
pub const SURFACE_WIDTH: u32 = 800;

/// Height of the drawing surface, in surface units
pub const SURFACE_HEIGHT: u32 = 400;

/// Distance below a bar's bottom edge at which its label baseline sits
const LABEL_DROP: i64 = 15;

/// Half of the nominal label width, used to centre it under the bar
const LABEL_HALF_WIDTH: i64 = 6;

/// Indices touched by the most recent step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    indices: FxHashSet<usize>,
}

impl Highlight {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn single(index: usize) -> Self {
        [index].into_iter().collect()
    }

    pub fn pair(a: usize, b: usize) -> Self {
        [a, b].into_iter().collect()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Indices in ascending order
    pub fn sorted(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.indices.iter().copied().collect();
        indices.sort_unstable();
        indices
    }
}

impl FromIterator<usize> for Highlight {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Highlight {
            indices: iter.into_iter().collect(),
        }
    }
}

/// Rectangle in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Fill style of a bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Normal,
    Highlighted,
}

/// One drawing operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// Wipe the whole surface
    Clear { width: u32, height: u32 },
    FillRect { rect: SurfaceRect, fill: Fill },
    StrokeRect { rect: SurfaceRect },
    /// Text whose baseline starts at `(x, y)`
    Label { x: i32, y: i32, text: String },
}

/// A complete frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawList {
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn iter(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter()
    }

    /// Rectangles that were filled with the highlight style
    pub fn highlighted_rects(&self) -> Vec<SurfaceRect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect {
                    rect,
                    fill: Fill::Highlighted,
                } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

/// Something that can show a frame
pub trait Surface {
    fn present(&mut self, frame: DrawList);
}

/// Keeps every frame, oldest first
impl Surface for Vec<DrawList> {
    fn present(&mut self, frame: DrawList) {
        self.push(frame);
    }
}

/// Keeps only the latest frame
impl Surface for Option<DrawList> {
    fn present(&mut self, frame: DrawList) {
        *self = Some(frame);
    }
}

/// Render `bars` with the indices in `highlight` drawn in the alternate style
pub fn render(bars: &[Bar], highlight: &Highlight) -> DrawList {
    let mut ops = Vec::with_capacity(1 + bars.len() * 3);
    ops.push(DrawOp::Clear {
        width: SURFACE_WIDTH,
        height: SURFACE_HEIGHT,
    });

    for (index, bar) in bars.iter().enumerate() {
        let rect = bar_rect(index, bar);
        let fill = if highlight.contains(index) {
            Fill::Highlighted
        } else {
            Fill::Normal
        };

        ops.push(DrawOp::FillRect { rect, fill });
        ops.push(DrawOp::StrokeRect { rect });
        ops.push(DrawOp::Label {
            x: clamp_i32(i64::from(rect.x) + i64::from(bar.width / 2) - LABEL_HALF_WIDTH),
            y: clamp_i32(i64::from(rect.y) + i64::from(bar.height) + LABEL_DROP),
            text: bar.height.to_string(),
        });
    }

    DrawList { ops }
}

/// Position of bar `index`, anchored to the bottom edge of the surface.
/// Coordinates past the `i32` range are clamped; such bars are off-surface.
fn bar_rect(index: usize, bar: &Bar) -> SurfaceRect {
    let index = i64::try_from(index).unwrap_or(i64::MAX);
    let stride = i64::from(bar.width) + i64::from(BAR_GAP);
    SurfaceRect {
        x: clamp_i32(index.saturating_mul(stride)),
        y: clamp_i32(i64::from(SURFACE_HEIGHT) - i64::from(bar.height)),
        width: bar.width,
        height: bar.height,
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
