//! IEEE-unordered comparisons for [`Comp`].
//!
//! A NaN operand makes every ordered predicate false, so `Comp` only
//! gets `PartialEq`/`PartialOrd`, never `Eq`/`Ord`.

use std::cmp::Ordering;

use crate::comp::Comp;

impl PartialEq for Comp {
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        self.to_bits() == other.to_bits()
    }
}

impl PartialOrd for Comp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        Some((self.to_bits() as i64).cmp(&(other.to_bits() as i64)))
    }
}
