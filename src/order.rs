//! Size-based display order.
//!
//! Places the two largest images on the grid diagonal (top-left and
//! bottom-right) and the two smallest on the anti-diagonal, so that visual
//! weight is balanced instead of clustered in one row or column.

use alloc::vec;
use alloc::vec::Vec;

use crate::position::MAX_SLOTS;
use crate::viewport::{LayoutError, Size};

/// Which dimension ranks images for ordering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OrderBy {
    #[default]
    Width,
    Height,
}

impl OrderBy {
    /// The ranking key of `size`.
    pub const fn key(self, size: Size) -> u32 {
        match self {
            Self::Width => size.width,
            Self::Height => size.height,
        }
    }
}

/// A caller-owned image handle paired with its (scaled) size.
///
/// The engine never looks inside `handle`; it may be a path, a texture id,
/// or an index into the host's own image list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageSlot<H> {
    pub handle: H,
    pub size: Size,
}

impl<H> ImageSlot<H> {
    pub const fn new(handle: H, size: Size) -> Self {
        Self { handle, size }
    }
}

/// Display order for items ranked by `dimensions`, as input indices.
///
/// Items are ranked largest first by a stable sort, so equal dimensions
/// keep their input order: of two tied items the earlier one ranks as the
/// larger. `[10, 80, 80, 20]` ranks `1, 2, 3, 0` and displays as
/// `[1, 0, 3, 2]`. Then:
///
/// - 4 items → `[largest, smallest, 2nd smallest, 2nd largest]`
/// - 3 items → `[largest, smallest, middle]`
/// - 2 items → `[larger, smaller]`
/// - 0 or 1 item → unchanged
///
/// ```
/// use zengrid::size_order;
///
/// // widths 50, 80, 30, 90 → 90, 30, 50, 80
/// assert_eq!(size_order(&[50, 80, 30, 90]).unwrap(), vec![3, 2, 0, 1]);
/// ```
pub fn size_order(dimensions: &[u32]) -> Result<Vec<usize>, LayoutError> {
    if dimensions.len() > MAX_SLOTS {
        return Err(LayoutError::TooManySlots {
            max: MAX_SLOTS,
            got: dimensions.len(),
        });
    }

    let mut ranked: Vec<usize> = (0..dimensions.len()).collect();
    ranked.sort_by(|&a, &b| dimensions[b].cmp(&dimensions[a]));

    // Largest stays top-left; the smallest takes the slot beside it.
    let order = match ranked.len() {
        4 => vec![ranked[0], ranked[3], ranked[2], ranked[1]],
        3 => vec![ranked[0], ranked[2], ranked[1]],
        _ => ranked,
    };
    log::trace!("size_order: {dimensions:?} -> {order:?}");
    Ok(order)
}

/// Reorder `items` by [`size_order`] of `dimensions`.
///
/// `dimensions[i]` is the ranking key of `items[i]`.
pub fn order_by_size<T>(dimensions: &[u32], items: Vec<T>) -> Result<Vec<T>, LayoutError> {
    if dimensions.len() != items.len() {
        return Err(LayoutError::LengthMismatch {
            dimensions: dimensions.len(),
            items: items.len(),
        });
    }
    let order = size_order(dimensions)?;
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    // `order` is a permutation, so every slot is taken exactly once.
    Ok(order.into_iter().filter_map(|i| slots[i].take()).collect())
}

/// Reorder image slots by their width or height.
pub fn order_slots<H>(
    slots: Vec<ImageSlot<H>>,
    by: OrderBy,
) -> Result<Vec<ImageSlot<H>>, LayoutError> {
    let dimensions: Vec<u32> = slots.iter().map(|s| by.key(s.size)).collect();
    order_by_size(&dimensions, slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_widths_diagonal() {
        let paths = vec!["a", "b", "c", "d"];
        assert_eq!(
            order_by_size(&[50, 80, 30, 90], paths),
            Ok(vec!["d", "c", "a", "b"])
        );
    }

    #[test]
    fn four_places_largest_two_on_diagonal() {
        let order = size_order(&[10, 40, 20, 30]).unwrap();
        // Slots 0 and 3 are the diagonal.
        assert_eq!(order[0], 1);
        assert_eq!(order[3], 3);
        assert_eq!(order, vec![1, 0, 2, 3]);
    }

    #[test]
    fn three_items() {
        assert_eq!(
            order_by_size(&[20, 30, 10], vec!['x', 'y', 'z']),
            Ok(vec!['y', 'z', 'x'])
        );
    }

    #[test]
    fn two_items() {
        assert_eq!(order_by_size(&[3, 9], vec![1, 2]), Ok(vec![2, 1]));
        assert_eq!(order_by_size(&[9, 3], vec![1, 2]), Ok(vec![1, 2]));
    }

    #[test]
    fn ties_keep_input_order() {
        assert_eq!(order_by_size(&[5, 5], vec!["a", "b"]), Ok(vec!["a", "b"]));
        // 80 ties: b stays ahead of c among the largest.
        assert_eq!(size_order(&[10, 80, 80, 20]).unwrap(), vec![1, 0, 3, 2]);
    }

    #[test]
    fn zero_and_one_are_no_ops() {
        assert_eq!(size_order(&[]).unwrap(), Vec::<usize>::new());
        assert_eq!(order_by_size(&[7], vec!["only"]), Ok(vec!["only"]));
    }

    #[test]
    fn length_mismatch() {
        assert_eq!(
            order_by_size(&[1, 2, 3], vec!['a', 'b']),
            Err(LayoutError::LengthMismatch {
                dimensions: 3,
                items: 2
            })
        );
    }

    #[test]
    fn too_many() {
        assert_eq!(
            size_order(&[1, 2, 3, 4, 5]),
            Err(LayoutError::TooManySlots { max: 4, got: 5 })
        );
    }

    #[test]
    fn slots_by_height() {
        let slots = vec![
            ImageSlot::new("wide", Size::new(200, 100)),
            ImageSlot::new("tall", Size::new(75, 150)),
            ImageSlot::new("mid", Size::new(200, 133)),
        ];
        let ordered = order_slots(slots, OrderBy::Height).unwrap();
        let handles: Vec<&str> = ordered.iter().map(|s| s.handle).collect();
        assert_eq!(handles, vec!["tall", "wide", "mid"]);
    }

    #[test]
    fn slots_by_width() {
        let slots = vec![
            ImageSlot::new(0u8, Size::new(75, 150)),
            ImageSlot::new(1u8, Size::new(200, 133)),
        ];
        let ordered = order_slots(slots, OrderBy::Width).unwrap();
        assert_eq!(ordered[0].handle, 1);
        assert_eq!(ordered[1].size, Size::new(75, 150));
    }

    #[test]
    fn every_order_is_a_permutation() {
        let keys = [0u32, 1, 1, 2, 7];
        for n in 0..=4 {
            for a in keys {
                for b in keys {
                    for c in keys {
                        for d in keys {
                            let all = [a, b, c, d];
                            let dims = &all[..n];
                            let mut order = size_order(dims).unwrap();
                            order.sort_unstable();
                            assert_eq!(order, (0..n).collect::<Vec<_>>(), "{dims:?}");
                        }
                    }
                }
            }
        }
    }
}
