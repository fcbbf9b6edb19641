//! Outcome integrity auditing.
//!
//! Every observed all-in is a coin flip with a known bias: the equity the
//! player had when the money went in. Over many flips a fair player's win
//! rate converges to their mean equity. [`Auditor`] keeps those flips per
//! opponent and flags players who win far more often than their equity
//! allows.
pub mod auditor;
pub use auditor::*;

pub mod record;
pub use record::*;

pub mod state;
pub use state::*;

pub mod stats;
pub use stats::*;
