//! One decision per tick.
//!
//! The [`Orchestrator`] reads the table through a [`StateProvider`], folds in
//! dead cards remembered by a [`MemoryStore`], estimates equity, picks an
//! action and hands it to an [`ActionExecutor`]. The resulting [`Decision`]
//! overwrites the previous one in memory.
pub mod config;
pub use config::*;

pub mod record;
pub use record::*;

pub mod memory;
pub use memory::*;

pub mod orchestrator;
pub use orchestrator::*;

pub mod snapshot;
pub use snapshot::*;

pub mod traits;
pub use traits::*;
