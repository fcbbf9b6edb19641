use super::snapshot::Snapshot;
use crate::cards::Street;
use crate::threshold::Action;

/// Source of table observations.
pub trait StateProvider {
    fn read_table(&mut self) -> anyhow::Result<Snapshot>;
}

/// Issues actions at the table. The returned description is only logged.
pub trait ActionExecutor {
    fn act(&mut self, action: Action, street: Street) -> anyhow::Result<String>;
}
