//! Horizontal and vertical justification of an image within its cell.
//!
//! Hosts usually drive these from two independent selections (one per axis)
//! plus a "centered" toggle. [`Justification::from_tokens`] turns those
//! selections into a value, failing on anything outside the known set.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::viewport::LayoutError;

/// Alignment along the horizontal axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HAlign {
    /// Flush with the left edge of the cell.
    #[default]
    Left,
    /// Centered horizontally.
    Center,
    /// Flush with the right edge of the cell.
    Right,
}

/// Alignment along the vertical axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VAlign {
    /// Flush with the top edge of the cell.
    #[default]
    Top,
    /// Centered vertically.
    Center,
    /// Flush with the bottom edge of the cell.
    Bottom,
}

impl HAlign {
    /// Offset from the cell's left edge, given `space` = cell width − image width.
    pub fn offset(self, space: i64) -> i64 {
        match self {
            Self::Left => 0,
            Self::Center => space.div_euclid(2),
            Self::Right => space,
        }
    }

    /// The token accepted by [`FromStr`].
    pub const fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl VAlign {
    /// Offset from the cell's top edge, given `space` = cell height − image height.
    pub fn offset(self, space: i64) -> i64 {
        match self {
            Self::Top => 0,
            Self::Center => space.div_euclid(2),
            Self::Bottom => space,
        }
    }

    /// The token accepted by [`FromStr`].
    pub const fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for HAlign {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("left") {
            Ok(Self::Left)
        } else if t.eq_ignore_ascii_case("center") {
            Ok(Self::Center)
        } else if t.eq_ignore_ascii_case("right") {
            Ok(Self::Right)
        } else {
            Err(unrecognized(s))
        }
    }
}

impl FromStr for VAlign {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("top") {
            Ok(Self::Top)
        } else if t.eq_ignore_ascii_case("center") {
            Ok(Self::Center)
        } else if t.eq_ignore_ascii_case("bottom") {
            Ok(Self::Bottom)
        } else {
            Err(unrecognized(s))
        }
    }
}

impl fmt::Display for HAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for VAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Token selecting [`Justification::Centered`] when given for both axes.
pub const CENTERED_TOKEN: &str = "centered";

/// How images are aligned within the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Justification {
    /// Each image aligned within its own cell, independently per axis.
    Aligned {
        horizontal: HAlign,
        vertical: VAlign,
    },
    /// All images pulled toward the shared center of the 2×2 grid.
    ///
    /// Left-column images sit flush right, right-column images flush left,
    /// top-row images flush bottom, bottom-row images flush top.
    Centered,
}

impl Default for Justification {
    fn default() -> Self {
        Self::Aligned {
            horizontal: HAlign::Left,
            vertical: VAlign::Top,
        }
    }
}

impl Justification {
    /// Per-cell alignment on both axes.
    pub const fn aligned(horizontal: HAlign, vertical: VAlign) -> Self {
        Self::Aligned {
            horizontal,
            vertical,
        }
    }

    /// Whether this selects the centered-grid layout.
    pub const fn is_centered(&self) -> bool {
        matches!(self, Self::Centered)
    }

    /// Parse a pair of axis selections.
    ///
    /// `("centered", "centered")` selects [`Justification::Centered`]. Any
    /// other token must belong to its axis; the first one that doesn't is
    /// reported as [`LayoutError::UnrecognizedJustification`].
    ///
    /// ```
    /// use zengrid::{HAlign, Justification, VAlign};
    ///
    /// assert_eq!(
    ///     Justification::from_tokens("right", "center").unwrap(),
    ///     Justification::aligned(HAlign::Right, VAlign::Center),
    /// );
    /// assert!(Justification::from_tokens("centered", "centered").unwrap().is_centered());
    /// assert!(Justification::from_tokens("centered", "top").is_err());
    /// ```
    pub fn from_tokens(horizontal: &str, vertical: &str) -> Result<Self, LayoutError> {
        let centered = |t: &str| t.trim().eq_ignore_ascii_case(CENTERED_TOKEN);
        if centered(horizontal) && centered(vertical) {
            return Ok(Self::Centered);
        }
        Ok(Self::Aligned {
            horizontal: horizontal.parse()?,
            vertical: vertical.parse()?,
        })
    }

    /// Axis alignments to use for an image in the given column/row.
    ///
    /// For [`Aligned`](Self::Aligned) this ignores the cell. For
    /// [`Centered`](Self::Centered) each axis aligns toward the gutter.
    pub const fn resolve(&self, right_column: bool, bottom_row: bool) -> (HAlign, VAlign) {
        match *self {
            Self::Aligned {
                horizontal,
                vertical,
            } => (horizontal, vertical),
            Self::Centered => (
                if right_column {
                    HAlign::Left
                } else {
                    HAlign::Right
                },
                if bottom_row {
                    VAlign::Top
                } else {
                    VAlign::Bottom
                },
            ),
        }
    }
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aligned {
                horizontal,
                vertical,
            } => write!(f, "{horizontal} {vertical}"),
            Self::Centered => write!(f, "{CENTERED_TOKEN} {CENTERED_TOKEN}"),
        }
    }
}

fn unrecognized(token: &str) -> LayoutError {
    LayoutError::UnrecognizedJustification {
        token: String::from(token),
    }
}
