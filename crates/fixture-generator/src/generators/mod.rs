//! Field-level value generators.
//!
//! Row builders in the table modules compose these.

pub mod numeric;
pub mod person;
pub mod text;
pub mod timestamp;

use fixture_core::{DefectKind, DefectTally};
use rand::Rng;

/// Roll for a defect and record it in the tally when it hits.
///
/// The roll is always drawn so that the RNG stream does not depend on
/// earlier outcomes.
pub fn roll_defect<R: Rng>(rng: &mut R, rate: f64, kind: DefectKind, tally: &mut DefectTally) -> bool {
    let hit = rng.random_bool(rate);
    if hit {
        tally.record(kind);
    }
    hit
}
