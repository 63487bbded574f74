//! Fixed demonstration records for the main and zone collections.

use crate::model::{Bin, BinId};

/// The four demonstration bins used to seed the main collection.
#[must_use]
pub fn main_bins() -> Vec<Bin> {
    vec![
        Bin::new(BinId(101), "Plastic", "Sector17", 100, 95),
        Bin::new(BinId(102), "Organic", "Sector22", 150, 70),
        Bin::new(BinId(103), "Glass", "Sector21", 120, 90),
        Bin::new(BinId(104), "Paper", "Sector19", 80, 40),
    ]
}

/// The three demonstration bins representing the secondary zone site.
#[must_use]
pub fn zone_bins() -> Vec<Bin> {
    vec![
        Bin::new(BinId(201), "Organic", "Sector25", 100, 80),
        Bin::new(BinId(202), "Plastic", "Sector26", 120, 60),
        Bin::new(BinId(203), "Metal", "Sector27", 90, 30),
    ]
}
