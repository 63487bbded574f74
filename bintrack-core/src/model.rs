//! Domain data structures for waste-collection bins and their status flags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fill percentage at or above which a bin counts as full.
pub const FULL_THRESHOLD: u8 = 90;

/// Maximum length of a waste-type label, enforced by the input layer.
pub const MAX_TYPE_LEN: usize = 20;

/// Maximum length of a location label, enforced by the input layer.
pub const MAX_LOCATION_LEN: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a bin record.
///
/// Ids are caller-supplied and not required to be unique; lookups act on the
/// first record carrying the id in collection order.
pub struct BinId(pub u32);

impl fmt::Display for BinId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Status flags of a bin.
pub struct BinStatus {
    /// Bin is in service.
    pub active: bool,
    /// Fill level reached [`FULL_THRESHOLD`] at creation or the last fill update.
    pub full: bool,
    /// Bin has been flagged for cleaning.
    pub needs_cleaning: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A tracked waste-collection bin.
pub struct Bin {
    /// Caller-supplied identifier.
    pub id: BinId,
    /// Waste-type label such as "Plastic", matched case-sensitively.
    pub waste_type: String,
    /// Site label such as "Sector17", matched case-sensitively.
    pub location: String,
    /// Total capacity in litres.
    pub capacity: u32,
    /// Current fill percentage in `0..=100`.
    pub fill_level: u8,
    /// Status flags.
    pub status: BinStatus,
}

impl Bin {
    /// Create a bin from caller input.
    ///
    /// New bins are always active, never flagged for cleaning, and `full` is
    /// derived from the fill level.
    #[must_use]
    pub fn new<T: Into<String>, L: Into<String>>(
        id: BinId,
        waste_type: T,
        location: L,
        capacity: u32,
        fill_level: u8,
    ) -> Self {
        Self {
            id,
            waste_type: waste_type.into(),
            location: location.into(),
            capacity,
            fill_level,
            status: BinStatus {
                active: true,
                full: fill_level >= FULL_THRESHOLD,
                needs_cleaning: false,
            },
        }
    }

    /// Set the fill percentage, re-deriving the `full` flag.
    ///
    /// This is the only mutation that clears `full` once it has been set.
    pub fn set_fill_level(&mut self, fill_level: u8) {
        self.fill_level = fill_level;
        self.status.full = fill_level >= FULL_THRESHOLD;
    }
}

#[cfg(test)]
mod tests {
    use super::{Bin, BinId};

    #[test]
    fn new_bin_is_active_with_derived_full_flag() {
        let bin = Bin::new(BinId(1), "Plastic", "Sector17", 100, 95);
        assert!(bin.status.active, "new bins start active");
        assert!(bin.status.full, "95% is at or above the full threshold");
        assert!(!bin.status.needs_cleaning, "new bins start clean");

        let bin = Bin::new(BinId(2), "Paper", "Sector19", 80, 89);
        assert!(!bin.status.full, "89% is below the full threshold");
    }

    #[test]
    fn set_fill_level_rederives_full_at_threshold() {
        let mut bin = Bin::new(BinId(1), "Glass", "Sector21", 120, 10);
        bin.set_fill_level(90);
        assert!(bin.status.full, "90% sets the full flag");
        bin.set_fill_level(89);
        assert!(!bin.status.full, "dropping below 90% clears the full flag");
    }
}
