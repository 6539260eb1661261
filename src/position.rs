//! Placement of scaled images within the 2×2 grid.
//!
//! Images fill the grid in reading order: top-left, top-right, bottom-left,
//! bottom-right. The right column is offset by `width + gutter`, the bottom
//! row by `height + gutter`.
//!
//! ```text
//!     x=0          x=w+g
//!     ┌──────┐ g ┌──────┐   y=0
//!     │  0   │   │  1   │
//!     └──────┘   └──────┘
//!        g
//!     ┌──────┐   ┌──────┐   y=h+g
//!     │  2   │   │  3   │
//!     └──────┘   └──────┘
//! ```

use alloc::vec::Vec;

use crate::justify::Justification;
use crate::viewport::{LayoutError, Position, Size, Viewport};

/// Maximum number of images the grid holds.
pub const MAX_SLOTS: usize = 4;

/// One cell of the 2×2 grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants in fill order.
    pub const ALL: [Self; MAX_SLOTS] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Quadrant that the image at `index` is placed in. `None` past the fourth.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < MAX_SLOTS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Fill-order index (0-3).
    pub const fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomLeft => 2,
            Self::BottomRight => 3,
        }
    }

    /// Whether this quadrant is in the right column.
    pub const fn shift_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    /// Whether this quadrant is in the bottom row.
    pub const fn shift_down(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }

    /// Top-left corner of this cell on the canvas.
    pub fn origin(self, viewport: &Viewport) -> Position {
        Position::new(
            if self.shift_right() {
                viewport.column_stride()
            } else {
                0
            },
            if self.shift_down() {
                viewport.row_stride()
            } else {
                0
            },
        )
    }
}

/// Position one image of `size` within a grid cell.
///
/// The image is aligned inside the top-left cell, then moved one column
/// right and/or one row down. For [`Justification::Centered`] the
/// alignment points toward the gutter of the cell chosen by the shifts.
pub fn position_one(
    viewport: &Viewport,
    size: Size,
    justification: Justification,
    shift_right: bool,
    shift_down: bool,
) -> Result<Position, LayoutError> {
    viewport.validate()?;
    let size = size.validate()?;

    let (horizontal, vertical) = justification.resolve(shift_right, shift_down);
    let mut x = horizontal.offset(i64::from(viewport.width) - i64::from(size.width));
    let mut y = vertical.offset(i64::from(viewport.height) - i64::from(size.height));

    if shift_right {
        x += viewport.column_stride();
    }
    if shift_down {
        y += viewport.row_stride();
    }

    log::trace!(
        "position_one: {}x{} {justification} right={shift_right} down={shift_down} -> ({x}, {y})",
        size.width,
        size.height
    );
    Ok(Position::new(x, y))
}

/// Position 1-4 images, image `i` in [`Quadrant::from_index(i)`](Quadrant::from_index).
///
/// [`Justification::Centered`] delegates to [`position_centered`], which
/// requires exactly four images. Either every position is returned or an
/// error is.
pub fn position_all(
    viewport: &Viewport,
    sizes: &[Size],
    justification: Justification,
) -> Result<Vec<Position>, LayoutError> {
    if justification.is_centered() {
        return position_centered(viewport, sizes);
    }
    check_slot_count(sizes.len(), justification)?;

    sizes
        .iter()
        .zip(Quadrant::ALL)
        .map(|(&size, quadrant)| {
            position_one(
                viewport,
                size,
                justification,
                quadrant.shift_right(),
                quadrant.shift_down(),
            )
        })
        .collect()
}

/// Position exactly four images so the grid converges on its center.
///
/// Every image's inner edges touch the gutter:
///
/// | slot | x | y |
/// |---|---|---|
/// | 0 | `w − w0` | `h − h0` |
/// | 1 | `w + g` | `h − h1` |
/// | 2 | `w − w2` | `h + g` |
/// | 3 | `w + g` | `h + g` |
pub fn position_centered(
    viewport: &Viewport,
    sizes: &[Size],
) -> Result<Vec<Position>, LayoutError> {
    check_slot_count(sizes.len(), Justification::Centered)?;

    sizes
        .iter()
        .zip(Quadrant::ALL)
        .map(|(&size, quadrant)| {
            position_one(
                viewport,
                size,
                Justification::Centered,
                quadrant.shift_right(),
                quadrant.shift_down(),
            )
        })
        .collect()
}

/// Check an image count against the range a justification mode supports.
pub(crate) fn check_slot_count(
    count: usize,
    justification: Justification,
) -> Result<(), LayoutError> {
    let needed = if justification.is_centered() {
        MAX_SLOTS
    } else {
        1
    };
    if count < needed {
        return Err(LayoutError::InsufficientSlots { needed, got: count });
    }
    if count > MAX_SLOTS {
        return Err(LayoutError::TooManySlots {
            max: MAX_SLOTS,
            got: count,
        });
    }
    Ok(())
}
