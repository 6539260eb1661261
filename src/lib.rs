//! Aspect-preserving placement of up to four images in a 2×2 viewport grid.
//!
//! Pure geometry: no pixel operations, no I/O, no global state, `no_std`
//! compatible (requires `alloc`).
//!
//! # Modules
//!
//! - [`viewport`] — Viewport, size and position types, aspect scaling
//! - [`justify`] — Horizontal/vertical justification and token parsing
//! - [`position`] — Per-quadrant, multi-image and centered positioning
//! - [`order`] — Size-based display ordering across the grid diagonal
//! - [`grid`] — One-call planning: scale, order and place a set of images
//! - `query` — Query-string layout configuration (feature `query`)
//! - `svg` — SVG visualization of a computed plan (feature `svg`)
//!
//! # Example
//!
//! ```
//! use zengrid::{GridLayout, HAlign, Justification, Size, VAlign, Viewport};
//!
//! let plan = GridLayout::new(Viewport::new(200, 150, 10))
//!     .justification(Justification::aligned(HAlign::Center, VAlign::Bottom))
//!     .compute(&[Size::new(300, 200), Size::new(100, 400)])
//!     .unwrap();
//!
//! assert_eq!(plan.placements[0].resize_to, Size::new(200, 133));
//! assert_eq!(plan.placements[1].position.x, 210 + (200 - 37) / 2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod grid;
pub mod justify;
pub mod order;
pub mod position;
pub mod viewport;

#[cfg(feature = "query")]
pub mod query;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types
pub use grid::{GridLayout, GridPlan, Placement};
pub use justify::{HAlign, Justification, VAlign};
pub use order::{ImageSlot, OrderBy, order_by_size, order_slots, size_order};
pub use position::{Quadrant, position_all, position_centered, position_one};
pub use viewport::{LayoutError, Position, Size, Viewport, aspect_ratio, scale};
