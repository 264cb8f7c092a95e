//! Change-detecting writes into interior-mutable attribute slots.
//!
//! # Invariants
//! - Every helper has released its borrow by the time it returns, so a caller
//!   may fire a notification whose listeners read the same slot.

use std::cell::{Cell, RefCell};

/// Stores `value` in `slot` unless it is already equal. Returns whether the
/// slot changed.
pub(crate) fn set_if_changed<T: Copy + PartialEq>(slot: &Cell<T>, value: T) -> bool {
    if slot.get() == value {
        return false;
    }
    slot.set(value);
    true
}

/// `set_if_changed` for non-`Copy` attributes.
pub(crate) fn replace_if_changed<T: PartialEq>(slot: &RefCell<T>, value: T) -> bool {
    if *slot.borrow() == value {
        return false;
    }
    slot.replace(value);
    true
}
