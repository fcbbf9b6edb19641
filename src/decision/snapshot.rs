use crate::Chips;

/// Raw table state as reported by the state provider.
///
/// Card tokens are unvalidated. `opponent_ids` lists whoever is still seated
/// in the hand, when the provider can tell.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub hero_cards: Vec<String>,
    pub board_cards: Vec<String>,
    pub dead_cards: Vec<String>,
    pub pot: Chips,
    pub stack: Chips,
    pub opponents: usize,
    pub opponent_ids: Vec<String>,
    pub my_turn: bool,
}

impl Snapshot {
    /// At least one opponent is always assumed.
    pub fn opponents(&self) -> usize {
        self.opponents.max(self.opponent_ids.len()).max(1)
    }
}
