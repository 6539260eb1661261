//! Viewport geometry and aspect-preserving scaling.
//!
//! Every image shown in the grid is first scaled so that exactly one axis
//! matches its viewport cell and the other fits inside it. Pure geometry:
//! no pixel operations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zengrid::{Size, Viewport};
//!
//! let viewport = Viewport::new(200, 150, 10);
//!
//! // 3:2 source into a 4:3 cell: the width constrains.
//! assert_eq!(viewport.fit(Size::new(300, 200)).unwrap(), Size::new(200, 133));
//! ```

use alloc::string::String;

use num_traits::Float;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are non-zero.
    pub fn validate(self) -> Result<Self, LayoutError> {
        if self.width == 0 {
            return Err(LayoutError::InvalidDimension {
                what: "image width",
            });
        }
        if self.height == 0 {
            return Err(LayoutError::InvalidDimension {
                what: "image height",
            });
        }
        Ok(self)
    }

    /// Rescale this size to fit a single canvas of `canvas` dimensions.
    ///
    /// Used when a host canvas is resized and its one image must follow.
    /// Same policy as [`Viewport::fit`]: one axis always matches the canvas.
    pub fn fit_within(self, canvas: Size) -> Result<Size, LayoutError> {
        Viewport::new(canvas.width, canvas.height, 0).fit(self)
    }
}

/// Top-left offset of an image relative to the canvas origin.
///
/// Offsets are signed: an image larger than its cell placed with
/// right/bottom/center justification starts before the cell edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// Create a new position.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// One cell of the 2×2 display grid.
///
/// The gutter is the spacing between a cell and its right/bottom neighbor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub gutter: u32,
}

impl Viewport {
    /// Create a viewport cell. Dimensions are checked when a layout is computed.
    pub const fn new(width: u32, height: u32, gutter: u32) -> Self {
        Self {
            width,
            height,
            gutter,
        }
    }

    /// Check that width and height are non-zero.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.width == 0 {
            return Err(LayoutError::InvalidDimension {
                what: "viewport width",
            });
        }
        if self.height == 0 {
            return Err(LayoutError::InvalidDimension {
                what: "viewport height",
            });
        }
        Ok(())
    }

    /// Width / height of the cell.
    pub fn ratio(&self) -> Result<f64, LayoutError> {
        self.validate()?;
        Ok(self.width as f64 / self.height as f64)
    }

    /// Horizontal distance from a left-column cell to the right-column cell.
    pub fn column_stride(&self) -> i64 {
        i64::from(self.width) + i64::from(self.gutter)
    }

    /// Vertical distance from a top-row cell to the bottom-row cell.
    pub fn row_stride(&self) -> i64 {
        i64::from(self.height) + i64::from(self.gutter)
    }

    /// Scale `image` so one axis matches this cell and the other fits inside it.
    pub fn fit(&self, image: Size) -> Result<Size, LayoutError> {
        let image_ratio = aspect_ratio(image)?;
        scale(self.ratio()?, image_ratio, self.width, self.height)
    }
}

/// Width / height of an image.
pub fn aspect_ratio(size: Size) -> Result<f64, LayoutError> {
    let size = size.validate()?;
    Ok(size.width as f64 / size.height as f64)
}

/// Scale an image into a viewport, preserving its aspect ratio.
///
/// When the viewport is relatively wider than the image, the height is
/// matched and the width derived; otherwise the width is matched and the
/// height derived. The derived axis is truncated, then clamped to
/// `1..=viewport` so the result is always a valid size inside the viewport.
///
/// Images smaller than the viewport are upscaled: there is no native-size
/// path.
///
/// `viewport_ratio` must describe `viewport_width / viewport_height` to
/// within one pixel of width; a mismatched ratio is rejected as
/// [`LayoutError::InvalidDimension`] with `what: "viewport ratio"`.
pub fn scale(
    viewport_ratio: f64,
    image_ratio: f64,
    viewport_width: u32,
    viewport_height: u32,
) -> Result<Size, LayoutError> {
    check_ratio(viewport_ratio, "viewport ratio")?;
    check_ratio(image_ratio, "image ratio")?;
    Viewport::new(viewport_width, viewport_height, 0).validate()?;
    if (viewport_ratio * viewport_height as f64 - viewport_width as f64).abs() > 1.0 {
        return Err(LayoutError::InvalidDimension {
            what: "viewport ratio",
        });
    }

    let size = if viewport_ratio > image_ratio {
        // Height constrains, derive width.
        let height = viewport_height;
        Size::new(truncate(height as f64 * image_ratio, viewport_width), height)
    } else {
        // Width constrains, derive height.
        let width = viewport_width;
        Size::new(width, truncate(width as f64 / image_ratio, viewport_height))
    };

    log::trace!(
        "scale: viewport {viewport_width}x{viewport_height} (ratio {viewport_ratio:.4}), \
         image ratio {image_ratio:.4} -> {}x{}",
        size.width,
        size.height
    );
    Ok(size)
}

fn check_ratio(ratio: f64, what: &'static str) -> Result<(), LayoutError> {
    if ratio.is_finite() && ratio > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension { what })
    }
}

/// Floor a derived dimension into `1..=max`.
fn truncate(value: f64, max: u32) -> u32 {
    (Float::floor(value) as u32).clamp(1, max)
}

/// Layout computation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A width, height or ratio is zero, negative, or non-finite.
    #[error("invalid {what}: must be finite and greater than zero")]
    InvalidDimension { what: &'static str },
    /// A justification token outside left/center/right, top/center/bottom, centered.
    #[error("unrecognized justification {token:?}")]
    UnrecognizedJustification { token: String },
    /// Fewer images than the layout mode requires.
    #[error("layout needs at least {needed} image(s), got {got}")]
    InsufficientSlots { needed: usize, got: usize },
    /// More images than the grid holds.
    #[error("layout holds at most {max} images, got {got}")]
    TooManySlots { max: usize, got: usize },
    /// Ordering keys and items differ in count.
    #[error("{dimensions} ordering dimensions supplied for {items} items")]
    LengthMismatch { dimensions: usize, items: usize },
}
