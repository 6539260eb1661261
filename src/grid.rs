//! One-call grid planning: scale, optionally reorder, and place 1-4 images.
//!
//! # Example
//!
//! ```
//! use zengrid::{GridLayout, Justification, OrderBy, Position, Size, Viewport};
//!
//! let plan = GridLayout::new(Viewport::new(200, 150, 10))
//!     .justification(Justification::Centered)
//!     .order_by(OrderBy::Width)
//!     .compute(&[
//!         Size::new(300, 600),
//!         Size::new(1920, 1080),
//!         Size::new(500, 500),
//!         Size::new(400, 500),
//!     ])
//!     .unwrap();
//!
//! // Widest scaled image (the 16:9 one) takes the top-left cell.
//! assert_eq!(plan.placements[0].source_index, 1);
//! assert_eq!(plan.placements[0].position, Position::new(0, 150 - 112));
//! assert_eq!(plan.grid_size(), Size::new(410, 310));
//! ```

use alloc::vec::Vec;

use crate::justify::Justification;
use crate::order::{OrderBy, order_by_size};
use crate::position::{Quadrant, check_slot_count, position_all};
use crate::viewport::{LayoutError, Position, Size, Viewport};

/// Grid layout configuration.
///
/// Describes the cell size, gutter, justification, and optional size-based
/// ordering. Immutable once built; reuse it for every layout request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridLayout {
    pub viewport: Viewport,
    pub justification: Justification,
    /// Reorder images by scaled width or height before placing them.
    /// `None` keeps input order.
    pub order: Option<OrderBy>,
}

impl GridLayout {
    /// Layout with left/top justification and input order.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            justification: Justification::default(),
            order: None,
        }
    }

    /// Set the justification.
    pub fn justification(mut self, justification: Justification) -> Self {
        self.justification = justification;
        self
    }

    /// Reorder images by the given scaled dimension before placing them.
    pub fn order_by(mut self, by: OrderBy) -> Self {
        self.order = Some(by);
        self
    }

    /// Keep images in input order.
    pub fn input_order(mut self) -> Self {
        self.order = None;
        self
    }

    /// Compute placements for images of the given natural sizes.
    ///
    /// Either a placement for every source is returned, or an error.
    pub fn compute(&self, sources: &[Size]) -> Result<GridPlan, LayoutError> {
        self.viewport.validate()?;
        check_slot_count(sources.len(), self.justification)?;

        // Step 1: scale every source into one cell.
        let mut scaled = sources
            .iter()
            .enumerate()
            .map(|(i, &source)| Ok((i, source, self.viewport.fit(source)?)))
            .collect::<Result<Vec<(usize, Size, Size)>, LayoutError>>()?;

        // Step 2: optional size-based ordering, on scaled dimensions.
        if let Some(by) = self.order {
            let keys: Vec<u32> = scaled.iter().map(|&(_, _, s)| by.key(s)).collect();
            scaled = order_by_size(&keys, scaled)?;
        }

        // Step 3: place.
        let sizes: Vec<Size> = scaled.iter().map(|&(_, _, s)| s).collect();
        let positions = position_all(&self.viewport, &sizes, self.justification)?;

        let placements: Vec<Placement> = scaled
            .into_iter()
            .zip(positions)
            .zip(Quadrant::ALL)
            .map(
                |(((source_index, source, resize_to), position), quadrant)| Placement {
                    source_index,
                    source,
                    resize_to,
                    quadrant,
                    position,
                },
            )
            .collect();

        log::debug!(
            "grid: {} image(s) in {}x{} cells (gutter {}), {}, order {:?}",
            placements.len(),
            self.viewport.width,
            self.viewport.height,
            self.viewport.gutter,
            self.justification,
            self.order
        );

        Ok(GridPlan {
            viewport: self.viewport,
            justification: self.justification,
            placements,
        })
    }
}

/// Where one image goes, and at what size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Index of this image in the slice passed to [`GridLayout::compute`].
    pub source_index: usize,
    /// Natural dimensions of the source image.
    pub source: Size,
    /// Dimensions to resize the image to before drawing it.
    pub resize_to: Size,
    /// Grid cell the image occupies.
    pub quadrant: Quadrant,
    /// Top-left canvas offset to draw the resized image at.
    pub position: Position,
}

impl Placement {
    /// Right edge (exclusive) on the canvas.
    pub fn right(&self) -> i64 {
        self.position.x + i64::from(self.resize_to.width)
    }

    /// Bottom edge (exclusive) on the canvas.
    pub fn bottom(&self) -> i64 {
        self.position.y + i64::from(self.resize_to.height)
    }
}

/// Computed grid layout.
///
/// `placements` are in display order: `placements[i]` occupies
/// `Quadrant::ALL[i]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridPlan {
    pub viewport: Viewport,
    pub justification: Justification,
    pub placements: Vec<Placement>,
}

impl GridPlan {
    /// Extent of the occupied grid cells, gutters included.
    ///
    /// One image occupies a single cell; two use both columns; three or
    /// four use both rows.
    pub fn grid_size(&self) -> Size {
        let n = self.placements.len();
        let cols: u32 = if n >= 2 { 2 } else { 1 };
        let rows: u32 = if n >= 3 { 2 } else { 1 };
        let vp = &self.viewport;
        Size::new(
            span(vp.width, vp.gutter, cols),
            span(vp.height, vp.gutter, rows),
        )
    }

    /// Smallest canvas holding every placed image, measured from the origin.
    ///
    /// Lets a host shrink its drawing surface so no empty cell space is left
    /// below or to the right of the images.
    pub fn content_extent(&self) -> Size {
        let right = self.placements.iter().map(Placement::right).max().unwrap_or(0);
        let bottom = self.placements.iter().map(Placement::bottom).max().unwrap_or(0);
        Size::new(to_extent(right), to_extent(bottom))
    }

    /// The placement of the source image at `source_index`, if any.
    pub fn placement_for(&self, source_index: usize) -> Option<&Placement> {
        self.placements
            .iter()
            .find(|p| p.source_index == source_index)
    }

    /// Positions in display order.
    pub fn positions(&self) -> Vec<Position> {
        self.placements.iter().map(|p| p.position).collect()
    }
}

fn span(cell: u32, gutter: u32, count: u32) -> u32 {
    cell.saturating_mul(count).saturating_add(gutter.saturating_mul(count - 1))
}

fn to_extent(edge: i64) -> u32 {
    u32::try_from(edge.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::justify::{HAlign, VAlign};
    use alloc::vec;

    const VP: Viewport = Viewport::new(200, 150, 10);

    // ── compute ─────────────────────────────────────────────────────────

    #[test]
    fn single_image_scaled_and_placed() {
        let plan = GridLayout::new(VP).compute(&[Size::new(300, 200)]).unwrap();
        assert_eq!(
            plan.placements,
            vec![Placement {
                source_index: 0,
                source: Size::new(300, 200),
                resize_to: Size::new(200, 133),
                quadrant: Quadrant::TopLeft,
                position: Position::new(0, 0),
            }]
        );
    }

    #[test]
    fn four_images_input_order() {
        let sources = [
            Size::new(300, 200),
            Size::new(500, 1000),
            Size::new(400, 300),
            Size::new(1000, 500),
        ];
        let plan = GridLayout::new(VP)
            .justification(Justification::aligned(HAlign::Center, VAlign::Center))
            .compute(&sources)
            .unwrap();

        let sizes: Vec<Size> = plan.placements.iter().map(|p| p.resize_to).collect();
        assert_eq!(
            sizes,
            vec![
                Size::new(200, 133),
                Size::new(75, 150),
                Size::new(200, 150),
                Size::new(200, 100),
            ]
        );
        assert_eq!(
            plan.positions(),
            vec![
                Position::new(0, 8),
                Position::new(210 + 62, 0),
                Position::new(0, 160),
                Position::new(210, 160 + 25),
            ]
        );
        for (i, p) in plan.placements.iter().enumerate() {
            assert_eq!(p.source_index, i);
            assert_eq!(p.quadrant.index(), i);
        }
    }

    #[test]
    fn ordering_uses_scaled_width() {
        // Scaled widths: 200, 75, 200, 112 (ties between 0 and 2 keep order).
        let sources = [
            Size::new(300, 200),
            Size::new(500, 1000),
            Size::new(400, 300),
            Size::new(600, 800),
        ];
        let plan = GridLayout::new(VP)
            .order_by(OrderBy::Width)
            .compute(&sources)
            .unwrap();
        let order: Vec<usize> = plan.placements.iter().map(|p| p.source_index).collect();
        assert_eq!(order, vec![0, 1, 3, 2]);
        assert_eq!(plan.placement_for(1).unwrap().quadrant, Quadrant::TopRight);
        assert_eq!(plan.placement_for(2).unwrap().quadrant, Quadrant::BottomRight);
    }

    #[test]
    fn ordering_by_height() {
        // Scaled heights: 133, 150 → taller first.
        let plan = GridLayout::new(VP)
            .order_by(OrderBy::Height)
            .compute(&[Size::new(300, 200), Size::new(500, 1000)])
            .unwrap();
        assert_eq!(plan.placements[0].source_index, 1);
        assert_eq!(plan.placements[1].position, Position::new(210, 0));
    }

    #[test]
    fn input_order_clears_ordering() {
        let layout = GridLayout::new(VP).order_by(OrderBy::Width).input_order();
        assert_eq!(layout.order, None);
    }

    #[test]
    fn centered_needs_four() {
        let err = GridLayout::new(VP)
            .justification(Justification::Centered)
            .compute(&[Size::new(1, 1); 2]);
        assert_eq!(err, Err(LayoutError::InsufficientSlots { needed: 4, got: 2 }));
    }

    #[test]
    fn count_checked_before_scaling() {
        // Five sources including an invalid one: the count error wins.
        let mut sources = vec![Size::new(10, 10); 4];
        sources.push(Size::new(0, 0));
        assert_eq!(
            GridLayout::new(VP).compute(&sources),
            Err(LayoutError::TooManySlots { max: 4, got: 5 })
        );
        assert_eq!(
            GridLayout::new(VP).compute(&[]),
            Err(LayoutError::InsufficientSlots { needed: 1, got: 0 })
        );
    }

    #[test]
    fn invalid_source_fails_whole_plan() {
        assert_eq!(
            GridLayout::new(VP).compute(&[Size::new(10, 10), Size::new(10, 0)]),
            Err(LayoutError::InvalidDimension {
                what: "image height"
            })
        );
    }

    #[test]
    fn invalid_viewport() {
        assert_eq!(
            GridLayout::new(Viewport::new(0, 150, 10)).compute(&[Size::new(1, 1)]),
            Err(LayoutError::InvalidDimension {
                what: "viewport width"
            })
        );
    }

    // ── Extents ─────────────────────────────────────────────────────────

    #[test]
    fn grid_size_by_count() {
        let layout = GridLayout::new(VP);
        let s = Size::new(4, 3);
        let sizes: Vec<Size> = (1..=4)
            .map(|n| layout.compute(&vec![s; n]).unwrap().grid_size())
            .collect();
        assert_eq!(
            sizes,
            vec![
                Size::new(200, 150),
                Size::new(410, 150),
                Size::new(410, 310),
                Size::new(410, 310),
            ]
        );
    }

    #[test]
    fn content_extent_tight_to_images() {
        // Left/top: the bottom row ends at 160 + tallest bottom image.
        let plan = GridLayout::new(VP)
            .compute(&[
                Size::new(300, 200),
                Size::new(500, 1000),
                Size::new(1000, 500),
            ])
            .unwrap();
        // Right column: 210 + 75; bottom row: 160 + 100.
        assert_eq!(plan.content_extent(), Size::new(285, 260));
    }

    #[test]
    fn content_extent_centered_fills_to_far_edges() {
        let plan = GridLayout::new(VP)
            .justification(Justification::Centered)
            .compute(&[Size::new(4, 3); 4])
            .unwrap();
        assert_eq!(plan.content_extent(), plan.grid_size());
    }
}
