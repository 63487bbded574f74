//! Bounded in-memory store holding the main inventory and the zone staging set.

use crate::model::{Bin, BinId, FULL_THRESHOLD};
use crate::sample;

/// Maximum number of bins each collection can hold.
pub const MAX_BINS: usize = 100;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors reported by store operations.
///
/// All of these are recoverable; no operation mutates state before its checks
/// have passed.
pub enum StoreError {
    /// No bin with the requested id exists in the main collection.
    #[error("Bin not found")]
    NotFound,
    /// The target collection already holds [`MAX_BINS`] records.
    #[error("Cannot add more bins")]
    CapacityExceeded,
    /// The operation requires at least one existing record.
    #[error("No bins available")]
    EmptyCollection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single field mutation applied by [`BinStore::update`].
pub enum BinUpdate {
    /// Set the fill percentage, re-deriving the `full` flag.
    FillLevel(u8),
    /// Replace the location label.
    Location(String),
    /// Invert the needs-cleaning flag.
    ToggleCleaning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-record result of a zone merge, in zone order.
pub enum MergeOutcome {
    /// The record was copied into the main collection; carries its waste type.
    Merged(String),
    /// A record of the same waste type already existed in the main collection.
    Skipped(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Outcome report of [`BinStore::merge_zone_into_main`].
///
/// Zone records dropped because the main collection was at capacity appear in
/// neither list.
pub struct MergeReport {
    /// One entry per reportable zone record, in zone order.
    pub outcomes: Vec<MergeOutcome>,
}

impl MergeReport {
    /// Waste types that were copied into the main collection.
    pub fn merged(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            MergeOutcome::Merged(waste_type) => Some(waste_type.as_str()),
            MergeOutcome::Skipped(_) => None,
        })
    }

    /// Waste types that were skipped as duplicates.
    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            MergeOutcome::Skipped(waste_type) => Some(waste_type.as_str()),
            MergeOutcome::Merged(_) => None,
        })
    }
}

#[derive(Debug, Default)]
/// In-memory inventory of bins plus a secondary zone staging set.
///
/// Both collections keep insertion order unless explicitly resorted and are
/// bounded by [`MAX_BINS`]. The store is synchronous and not internally
/// synchronized; wrap it in exclusive access when sharing across threads.
pub struct BinStore {
    main: Vec<Bin>,
    zone: Vec<Bin>,
}

impl BinStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All bins in the main collection, in collection order.
    #[must_use]
    pub fn bins(&self) -> &[Bin] {
        &self.main
    }

    /// All bins staged in the zone collection, in collection order.
    #[must_use]
    pub fn zone_bins(&self) -> &[Bin] {
        &self.zone
    }

    /// Number of bins in the main collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.main.len()
    }

    /// Whether the main collection holds no bins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main.is_empty()
    }

    /// Seed the main collection with the four sample bins.
    ///
    /// Returns `false` without touching anything when the main collection
    /// already holds records.
    pub fn populate_sample(&mut self) -> bool {
        if !self.main.is_empty() {
            return false;
        }
        self.main = sample::main_bins();
        true
    }

    /// Reset the zone collection to the three zone sample bins.
    ///
    /// Unlike [`populate_sample`](Self::populate_sample) this overwrites any
    /// prior zone content unconditionally.
    pub fn populate_zone_sample(&mut self) {
        self.zone = sample::zone_bins();
    }

    /// Append a bin to the main collection.
    ///
    /// The stored record is always active and its `full` flag is re-derived
    /// from the fill level, whatever flags the caller set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CapacityExceeded`] when the main collection is
    /// already at [`MAX_BINS`].
    pub fn add(&mut self, bin: Bin) -> Result<(), StoreError> {
        if self.main.len() >= MAX_BINS {
            return Err(StoreError::CapacityExceeded);
        }
        let mut bin = bin;
        bin.status.active = true;
        bin.status.full = bin.fill_level >= FULL_THRESHOLD;
        self.main.push(bin);
        Ok(())
    }

    /// Look up the first bin with the given id in the main collection.
    #[must_use]
    pub fn find_by_id(&self, id: BinId) -> Option<&Bin> {
        self.main.iter().find(|bin| bin.id == id)
    }

    /// Apply a single field mutation to the first bin with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyCollection`] when the main collection is
    /// empty and [`StoreError::NotFound`] when no bin carries the id.
    pub fn update(&mut self, id: BinId, update: BinUpdate) -> Result<(), StoreError> {
        if self.main.is_empty() {
            return Err(StoreError::EmptyCollection);
        }
        let bin = self
            .main
            .iter_mut()
            .find(|bin| bin.id == id)
            .ok_or(StoreError::NotFound)?;
        match update {
            BinUpdate::FillLevel(level) => bin.set_fill_level(level),
            BinUpdate::Location(location) => bin.location = location,
            BinUpdate::ToggleCleaning => bin.status.needs_cleaning = !bin.status.needs_cleaning,
        }
        Ok(())
    }

    /// Remove the first bin with the given id, preserving the order of the
    /// remaining records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyCollection`] when the main collection is
    /// empty and [`StoreError::NotFound`] when no bin carries the id.
    pub fn remove(&mut self, id: BinId) -> Result<Bin, StoreError> {
        if self.main.is_empty() {
            return Err(StoreError::EmptyCollection);
        }
        let index = self
            .main
            .iter()
            .position(|bin| bin.id == id)
            .ok_or(StoreError::NotFound)?;
        Ok(self.main.remove(index))
    }

    /// All main-collection bins whose waste type matches exactly.
    #[must_use]
    pub fn search_by_type(&self, waste_type: &str) -> Vec<&Bin> {
        self.main
            .iter()
            .filter(|bin| bin.waste_type == waste_type)
            .collect()
    }

    /// All main-collection bins whose location matches exactly.
    #[must_use]
    pub fn search_by_location(&self, location: &str) -> Vec<&Bin> {
        self.main
            .iter()
            .filter(|bin| bin.location == location)
            .collect()
    }

    /// All main-collection bins filled to at least `threshold` percent.
    #[must_use]
    pub fn bins_at_or_above(&self, threshold: u8) -> Vec<&Bin> {
        self.main
            .iter()
            .filter(|bin| bin.fill_level >= threshold)
            .collect()
    }

    /// Sort the main collection by fill level, fullest first.
    pub fn sort_by_fill_level_descending(&mut self) {
        self.main
            .sort_by(|left, right| right.fill_level.cmp(&left.fill_level));
    }

    /// Sort the main collection by waste type in lexicographic order.
    pub fn sort_by_type_ascending(&mut self) {
        self.main
            .sort_by(|left, right| left.waste_type.cmp(&right.waste_type));
    }

    /// Invert the active flag of the first bin with the given id.
    ///
    /// Returns the new state of the flag.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyCollection`] when the main collection is
    /// empty and [`StoreError::NotFound`] when no bin carries the id.
    pub fn toggle_active(&mut self, id: BinId) -> Result<bool, StoreError> {
        if self.main.is_empty() {
            return Err(StoreError::EmptyCollection);
        }
        let bin = self
            .main
            .iter_mut()
            .find(|bin| bin.id == id)
            .ok_or(StoreError::NotFound)?;
        bin.status.active = !bin.status.active;
        Ok(bin.status.active)
    }

    /// Copy zone records whose waste type is absent from the main collection
    /// into it, in zone order.
    ///
    /// The duplicate check runs against the current main content, so a type
    /// merged earlier in the same call blocks later zone records of that type.
    /// Once the main collection is at capacity, non-duplicate records are
    /// dropped without a report entry while duplicates keep being reported.
    /// The zone collection itself is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyCollection`] when the zone collection is
    /// empty.
    pub fn merge_zone_into_main(&mut self) -> Result<MergeReport, StoreError> {
        if self.zone.is_empty() {
            return Err(StoreError::EmptyCollection);
        }
        let mut report = MergeReport::default();
        for zone_bin in &self.zone {
            let duplicate = self
                .main
                .iter()
                .any(|bin| bin.waste_type == zone_bin.waste_type);
            if duplicate {
                report
                    .outcomes
                    .push(MergeOutcome::Skipped(zone_bin.waste_type.clone()));
            } else if self.main.len() < MAX_BINS {
                self.main.push(zone_bin.clone());
                report
                    .outcomes
                    .push(MergeOutcome::Merged(zone_bin.waste_type.clone()));
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::{BinStore, BinUpdate, MAX_BINS, MergeOutcome, StoreError};
    use crate::model::{Bin, BinId};

    fn bin(id: u32, waste_type: &str, location: &str, fill_level: u8) -> Bin {
        Bin::new(BinId(id), waste_type, location, 100, fill_level)
    }

    #[test]
    fn add_then_find_returns_the_record_with_derived_flags() {
        let mut store = BinStore::new();
        store
            .add(bin(105, "Metal", "Sector30", 95))
            .expect("store has room");

        let found = store.find_by_id(BinId(105)).expect("bin was just added");
        assert_eq!(found.waste_type, "Metal");
        assert_eq!(found.location, "Sector30");
        assert!(found.status.active, "added bins are always active");
        assert!(found.status.full, "95% derives the full flag");
    }

    #[test]
    fn add_normalizes_caller_supplied_flags() {
        let mut store = BinStore::new();
        let mut tampered = bin(1, "Glass", "Sector21", 10);
        tampered.status.active = false;
        tampered.status.full = true;
        store.add(tampered).expect("store has room");

        let found = store.find_by_id(BinId(1)).expect("bin was just added");
        assert!(found.status.active, "active is forced on insertion");
        assert!(!found.status.full, "full is re-derived from the fill level");
    }

    #[test]
    fn add_fails_at_capacity_without_mutating() {
        let mut store = BinStore::new();
        for index in 0..MAX_BINS {
            let id = u32::try_from(index).expect("index fits in u32");
            store
                .add(bin(id, "Plastic", "Sector1", 50))
                .expect("below capacity");
        }
        assert_eq!(
            store.add(bin(9999, "Metal", "Sector2", 50)),
            Err(StoreError::CapacityExceeded)
        );
        assert_eq!(store.len(), MAX_BINS, "length unchanged after failure");
    }

    #[test]
    fn remove_preserves_order_of_remaining_bins() {
        let mut store = BinStore::new();
        store.populate_sample();

        let removed = store.remove(BinId(102)).expect("sample contains 102");
        assert_eq!(removed.waste_type, "Organic");
        assert_eq!(store.find_by_id(BinId(102)), None);
        assert_eq!(store.len(), 3);

        let ids: Vec<u32> = store.bins().iter().map(|bin| bin.id.0).collect();
        assert_eq!(ids, vec![101, 103, 104], "relative order is preserved");
    }

    #[test]
    fn mutations_report_empty_collection_then_not_found() {
        let mut store = BinStore::new();
        assert_eq!(
            store.update(BinId(1), BinUpdate::ToggleCleaning),
            Err(StoreError::EmptyCollection)
        );
        assert_eq!(store.remove(BinId(1)), Err(StoreError::EmptyCollection));
        assert_eq!(
            store.toggle_active(BinId(1)),
            Err(StoreError::EmptyCollection)
        );

        store.populate_sample();
        assert_eq!(
            store.update(BinId(999), BinUpdate::ToggleCleaning),
            Err(StoreError::NotFound)
        );
        assert_eq!(store.remove(BinId(999)), Err(StoreError::NotFound));
        assert_eq!(store.toggle_active(BinId(999)), Err(StoreError::NotFound));
    }

    #[test]
    fn fill_level_update_is_the_only_path_that_clears_full() {
        let mut store = BinStore::new();
        store
            .add(bin(105, "Metal", "Sector30", 95))
            .expect("store has room");

        store
            .update(BinId(105), BinUpdate::FillLevel(50))
            .expect("bin exists");
        let found = store.find_by_id(BinId(105)).expect("bin exists");
        assert_eq!(found.fill_level, 50);
        assert!(!found.status.full, "dropping the fill level clears full");

        store
            .update(BinId(105), BinUpdate::FillLevel(90))
            .expect("bin exists");
        let found = store.find_by_id(BinId(105)).expect("bin exists");
        assert!(found.status.full, "90% sets full again");
    }

    #[test]
    fn update_replaces_location_and_toggles_cleaning() {
        let mut store = BinStore::new();
        store.populate_sample();

        store
            .update(BinId(104), BinUpdate::Location("Sector33".to_owned()))
            .expect("bin exists");
        let found = store.find_by_id(BinId(104)).expect("bin exists");
        assert_eq!(found.location, "Sector33");

        store
            .update(BinId(104), BinUpdate::ToggleCleaning)
            .expect("bin exists");
        assert!(
            store
                .find_by_id(BinId(104))
                .expect("bin exists")
                .status
                .needs_cleaning,
            "first toggle sets the flag"
        );
        store
            .update(BinId(104), BinUpdate::ToggleCleaning)
            .expect("bin exists");
        assert!(
            !store
                .find_by_id(BinId(104))
                .expect("bin exists")
                .status
                .needs_cleaning,
            "second toggle clears it again"
        );
    }

    #[test]
    fn duplicate_ids_are_allowed_and_first_match_wins() {
        let mut store = BinStore::new();
        store
            .add(bin(7, "Plastic", "SectorA", 10))
            .expect("store has room");
        store
            .add(bin(7, "Glass", "SectorB", 20))
            .expect("duplicate ids are not rejected");
        assert_eq!(store.len(), 2);

        store
            .update(BinId(7), BinUpdate::FillLevel(99))
            .expect("bin exists");
        let levels: Vec<u8> = store.bins().iter().map(|bin| bin.fill_level).collect();
        assert_eq!(levels, vec![99, 20], "only the first match is updated");

        let removed = store.remove(BinId(7)).expect("bin exists");
        assert_eq!(removed.location, "SectorA", "only the first match is removed");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn search_is_exact_and_case_sensitive() {
        let mut store = BinStore::new();
        store.populate_sample();

        let hits = store.search_by_type("Plastic");
        assert_eq!(hits.len(), 1);
        assert!(store.search_by_type("plastic").is_empty(), "case matters");
        assert!(store.search_by_type("Plast").is_empty(), "no prefix match");

        let hits = store.search_by_location("Sector22");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|found| found.id), Some(BinId(102)));
        assert!(store.search_by_location("Sector99").is_empty());
    }

    #[test]
    fn fill_threshold_filter_keeps_collection_order() {
        let mut store = BinStore::new();
        store.populate_sample();

        let alerts = store.bins_at_or_above(80);
        let ids: Vec<u32> = alerts.iter().map(|found| found.id.0).collect();
        assert_eq!(ids, vec![101, 103], "95% and 90% are at or above 80%");
        assert_eq!(store.bins_at_or_above(0).len(), 4, "0% matches everything");
        assert!(store.bins_at_or_above(96).is_empty());
    }

    #[test]
    fn sort_by_fill_level_descending_is_ordered_and_idempotent() {
        let mut store = BinStore::new();
        store.populate_sample();

        store.sort_by_fill_level_descending();
        let once: Vec<u8> = store.bins().iter().map(|bin| bin.fill_level).collect();
        assert_eq!(once, vec![95, 90, 70, 40]);

        store.sort_by_fill_level_descending();
        let twice: Vec<u8> = store.bins().iter().map(|bin| bin.fill_level).collect();
        assert_eq!(once, twice, "sorting again changes nothing");
    }

    #[test]
    fn sort_by_type_is_lexicographic_ascending() {
        let mut store = BinStore::new();
        store.populate_sample();

        store.sort_by_type_ascending();
        let types: Vec<&str> = store
            .bins()
            .iter()
            .map(|bin| bin.waste_type.as_str())
            .collect();
        assert_eq!(types, vec!["Glass", "Organic", "Paper", "Plastic"]);
    }

    #[test]
    fn toggle_active_flips_and_reports_the_new_state() {
        let mut store = BinStore::new();
        store.populate_sample();

        assert_eq!(store.toggle_active(BinId(101)), Ok(false));
        assert_eq!(store.toggle_active(BinId(101)), Ok(true));
    }

    #[test]
    fn populate_sample_seeds_once_and_skips_after() {
        let mut store = BinStore::new();
        assert!(store.populate_sample(), "first call seeds the collection");
        let ids: Vec<u32> = store.bins().iter().map(|bin| bin.id.0).collect();
        assert_eq!(ids, vec![101, 102, 103, 104]);

        assert!(!store.populate_sample(), "second call reports a skip");
        assert_eq!(store.len(), 4, "collection is unchanged");
    }

    #[test]
    fn populate_zone_sample_overwrites_unconditionally() {
        let mut store = BinStore::new();
        store.populate_zone_sample();
        assert_eq!(store.zone_bins().len(), 3);

        store.populate_zone_sample();
        assert_eq!(store.zone_bins().len(), 3, "reset, not appended");
        let ids: Vec<u32> = store.zone_bins().iter().map(|bin| bin.id.0).collect();
        assert_eq!(ids, vec![201, 202, 203]);
    }

    #[test]
    fn merge_skips_duplicate_types_and_copies_the_rest() {
        let mut store = BinStore::new();
        store.populate_sample();
        store.populate_zone_sample();

        let organic_before = store.search_by_type("Organic").len();
        let report = store.merge_zone_into_main().expect("zone is populated");

        assert_eq!(
            report.outcomes,
            vec![
                MergeOutcome::Skipped("Organic".to_owned()),
                MergeOutcome::Skipped("Plastic".to_owned()),
                MergeOutcome::Merged("Metal".to_owned()),
            ]
        );
        assert_eq!(
            store.search_by_type("Organic").len(),
            organic_before,
            "no duplicate appended for a type already present"
        );
        assert_eq!(store.search_by_type("Metal").len(), 1);
        assert_eq!(store.len(), 5);
        assert_eq!(store.zone_bins().len(), 3, "zone is never modified");
    }

    #[test]
    fn merge_dedups_within_a_single_call() {
        let mut store = BinStore::new();
        store.zone.push(bin(301, "Metal", "SectorA", 10));
        store.zone.push(bin(302, "Metal", "SectorB", 20));

        let report = store.merge_zone_into_main().expect("zone is populated");
        assert_eq!(
            report.outcomes,
            vec![
                MergeOutcome::Merged("Metal".to_owned()),
                MergeOutcome::Skipped("Metal".to_owned()),
            ],
            "a record merged earlier in the call counts as duplicate"
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn merge_at_capacity_drops_new_types_but_still_reports_duplicates() {
        let mut store = BinStore::new();
        for index in 0..MAX_BINS {
            let id = u32::try_from(index).expect("index fits in u32");
            store
                .add(bin(id, &format!("Type{index}"), "Sector1", 50))
                .expect("below capacity");
        }
        store.zone.push(bin(301, "Type0", "SectorA", 10));
        store.zone.push(bin(302, "Metal", "SectorB", 20));

        let report = store.merge_zone_into_main().expect("zone is populated");
        assert_eq!(
            report.outcomes,
            vec![MergeOutcome::Skipped("Type0".to_owned())],
            "the non-duplicate beyond capacity is silently dropped"
        );
        assert_eq!(store.len(), MAX_BINS);
    }

    #[test]
    fn merge_with_empty_zone_is_an_error() {
        let mut store = BinStore::new();
        store.populate_sample();
        assert_eq!(
            store.merge_zone_into_main(),
            Err(StoreError::EmptyCollection)
        );
        assert_eq!(store.len(), 4, "main is untouched");
    }

    #[test]
    fn merge_report_exposes_merged_and_skipped_types() {
        let mut store = BinStore::new();
        store.populate_sample();
        store.populate_zone_sample();

        let report = store.merge_zone_into_main().expect("zone is populated");
        let merged: Vec<&str> = report.merged().collect();
        let skipped: Vec<&str> = report.skipped().collect();
        assert_eq!(merged, vec!["Metal"]);
        assert_eq!(skipped, vec!["Organic", "Plastic"]);
    }
}
