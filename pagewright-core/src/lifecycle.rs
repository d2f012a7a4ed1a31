//! Ordered-list algorithms behind insertion, duplication, deletion and
//! reordering.
//!
//! All functions are pure: they return a new list and leave the input
//! untouched. Items are never re-identified; only positions change.
//!
//! Two distinct move operations exist:
//!
//! - [`swap_neighbor`] exchanges an item with the one directly above or
//!   below it and does nothing at either end of the list.
//! - [`array_move`] removes an item and reinserts it at another index.
//!
//! For a distance of one the two agree. For longer drags they do not:
//! moving `a` onto `c` in `[a, b, c]` gives `[b, c, a]`, not `[c, b, a]`.

/// Direction of an adjacent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the start of the list.
    Up,
    /// Toward the end of the list.
    Down,
}

/// Index of the first item matching `pred`.
#[must_use]
pub fn position<T>(items: &[T], pred: impl Fn(&T) -> bool) -> Option<usize> {
    items.iter().position(pred)
}

/// Copy of `items` with the item at `index` replaced.
///
/// Every other item is cloned as-is, which for `Arc` items keeps them
/// pointer-equal to the originals.
#[must_use]
pub fn replace_at<T: Clone>(items: &[T], index: usize, item: T) -> Vec<T> {
    let mut out = items.to_vec();
    out[index] = item;
    out
}

/// Copy of `items` with `item` inserted directly after `index`.
#[must_use]
pub fn insert_after<T: Clone>(items: &[T], index: usize, item: T) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend_from_slice(&items[..=index]);
    out.push(item);
    out.extend_from_slice(&items[index + 1..]);
    out
}

/// Copy of `items` without the item at `index`.
#[must_use]
pub fn remove_at<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    let mut out = items.to_vec();
    out.remove(index);
    out
}

/// Swap the item at `index` with its neighbor in `direction`.
///
/// Returns `None` when the item is already at that end of the list.
#[must_use]
pub fn swap_neighbor<T: Clone>(items: &[T], index: usize, direction: Direction) -> Option<Vec<T>> {
    let other = match direction {
        Direction::Up => index.checked_sub(1)?,
        Direction::Down => {
            let next = index + 1;
            if next >= items.len() {
                return None;
            }
            next
        }
    };
    let mut out = items.to_vec();
    out.swap(index, other);
    Some(out)
}

/// Remove the item at `from` and reinsert it at `to`.
///
/// After the call the moved item sits at index `to`.
#[must_use]
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    let item = out.remove(from);
    out.insert(to, item);
    out
}
