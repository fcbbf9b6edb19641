//! Equity-to-action mapping.
//!
//! A pure function of the combined equity score and the table [`Context`].
//! Three thresholds (call, small raise, big raise) start from a per-street
//! base row and are shifted by a fixed sequence of adjustments; see
//! [`Thresholds`] for the order, which matters because of the clamps.
pub mod action;
pub use action::*;

pub mod context;
pub use context::*;

pub mod selector;
pub use selector::*;

pub mod tables;
pub use tables::*;

pub mod thresholds;
pub use thresholds::*;
