//! Unit identification.
//!
//! Every unit that can stand on a board has a unique `UnitId`. Identity is
//! what ability targeting compares: a `Self`-targeted ability accepts only
//! the id of its own caster, never "some unit standing where the caster is".
//!
//! ## Allocation
//!
//! IDs come from a process-wide counter, so units built for different games
//! (or before any game exists) never collide.
//!
//! ```
//! use rune_chess::core::UnitId;
//!
//! let a = UnitId::fresh();
//! let b = UnitId::fresh();
//! assert_ne!(a, b);
//! ```

use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_UNIT_ID: AtomicU32 = AtomicU32::new(1);

/// Unique identifier for a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Allocate an identifier no other unit in this process has.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_UNIT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl From<u32> for UnitId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_unique() {
        let ids: Vec<_> = (0..100).map(|_| UnitId::fresh()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }

    #[test]
    fn test_fresh_ids_increase() {
        let a = UnitId::fresh();
        let b = UnitId::fresh();
        assert!(b > a);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", UnitId(42)), "Unit(42)");
    }

    #[test]
    fn test_serialization() {
        let id = UnitId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: UnitId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
