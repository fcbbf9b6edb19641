//! Hand-tuned threshold constants.
//!
//! Rows are indexed by [`Street`] discriminant: preflop, flop, turn, river.
//! Triples are (call, raise_small, raise_big).
//!
//! [`Street`]: crate::cards::Street
use crate::Probability;

pub type Triple = (Probability, Probability, Probability);

/// Base thresholds per street, strictly increasing within each row.
#[rustfmt::skip]
pub const BASE: [Triple; 4] = [
    (0.40, 0.62, 0.75),
    (0.44, 0.65, 0.78),
    (0.47, 0.69, 0.82),
    (0.50, 0.72, 0.85),
];

/// Table-profile offsets per street, indexed by [`Profile`] discriminant.
///
/// [`Profile`]: super::Profile
#[rustfmt::skip]
pub const PROFILE: [[Probability; 4]; 3] = [
    [ 0.030,  0.030,  0.040,  0.040], // tight
    [ 0.000,  0.000,  0.000,  0.000], // normal
    [-0.030, -0.030, -0.020, -0.020], // aggressive
];

/// Seat offsets per street, indexed by [`Position`] discriminant.
///
/// [`Position`]: super::Position
#[rustfmt::skip]
pub const POSITION: [[Probability; 4]; 6] = [
    [ 0.040,  0.030,  0.020,  0.020], // utg
    [ 0.020,  0.015,  0.010,  0.010], // mp
    [-0.010, -0.010, -0.005, -0.005], // co
    [-0.030, -0.025, -0.020, -0.015], // btn
    [ 0.015,  0.010,  0.005,  0.005], // sb
    [ 0.005,  0.005,  0.000,  0.000], // bb
];

/// Penalty per opponent beyond the first.
pub const MULTIWAY_STEP: Triple = (0.025, 0.035, 0.040);
/// Ceiling on the total multiway penalty.
pub const MULTIWAY_CAP: Triple = (0.07, 0.10, 0.12);

/// Ceiling on the pot-odds discount.
pub const POT_ODDS_CAP: Triple = (0.08, 0.05, 0.04);
/// Pot odds at which the full discount applies. Below it the discount is linear.
pub const POT_ODDS_SATURATION: Probability = 0.8;

/// Turn/river stack-to-pot ratio at or below which hero is committed.
pub const SPR_COMMITTED: f64 = 2.5;
/// Discount applied when committed.
pub const SPR_COMMITTED_DISCOUNT: Triple = (0.03, 0.02, 0.02);
/// Preflop/flop stack-to-pot ratio at or above which stacks are deep.
pub const SPR_DEEP: f64 = 8.0;
/// Penalty applied to raises when deep.
pub const SPR_DEEP_PENALTY: Triple = (0.00, 0.02, 0.03);
/// Stack-to-pot ratio reported for an empty pot.
pub const SPR_CAP: f64 = 100.0;

/// Heads-up steal discount on raise_small from the cutoff or button.
pub const STEAL_RAISE_SMALL: Probability = 0.03;
/// Additional steal discount on raise_big on the turn and river.
pub const STEAL_RAISE_BIG_LATE: Probability = 0.02;

/// Minimum gap above call for raise_small, and above raise_small for raise_big.
pub const GAP: (Probability, Probability) = (0.02, 0.03);
/// Floor shared by both clamps.
pub const CALL_FLOOR: Probability = 0.25;
/// Ceilings of the first clamp.
pub const CEILING_FIRST: Triple = (0.90, 0.94, 0.97);
/// Ceilings of the final clamp.
pub const CEILING_FINAL: Triple = (0.92, 0.96, 0.99);

/// Observed cards at which information is considered complete.
pub const INFO_CARDS: usize = 12;
/// Call penalty at zero information.
pub const INFO_PENALTY: Probability = 0.06;
/// Share of the information penalty applied to each threshold.
pub const INFO_WEIGHTS: Triple = (1.0, 0.8, 0.5);
