use crate::OPPONENTS;
use crate::SIMULATIONS;
use crate::cards::*;

/// Everything the equity engine needs to know about one spot.
///
/// Cards are already normalized. Dead cards are only ever removed from the
/// unknown pool; they never take part in a showdown.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EquityRequest {
    pub hero_cards: Vec<Card>,
    #[serde(default)]
    pub board_cards: Vec<Card>,
    #[serde(default)]
    pub dead_cards: Vec<Card>,
    #[serde(default = "default_simulations")]
    pub simulations: usize,
    #[serde(default = "default_opponents")]
    pub opponents: usize,
}

fn default_simulations() -> usize {
    SIMULATIONS
}
fn default_opponents() -> usize {
    OPPONENTS
}

impl EquityRequest {
    pub fn new(hero_cards: Vec<Card>, board_cards: Vec<Card>, dead_cards: Vec<Card>) -> Self {
        Self {
            hero_cards,
            board_cards,
            dead_cards,
            simulations: SIMULATIONS,
            opponents: OPPONENTS,
        }
    }
    pub fn simulations(self, simulations: usize) -> Self {
        Self {
            simulations,
            ..self
        }
    }
    pub fn opponents(self, opponents: usize) -> Self {
        Self { opponents, ..self }
    }
    /// Whether hero holds enough cards to simulate at all.
    pub fn is_sufficient(&self) -> bool {
        Hand::from(self.hero_cards.as_slice()).size() >= 2
    }
}

impl TryFrom<&str> for EquityRequest {
    type Error = String;
    /// `"As Ks ~ Qs Js 2d"` style, hero before the separator, board after.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (hero, board) = s.split_once('~').unwrap_or((s, ""));
        let hero = Hand::try_from(hero)?;
        let board = Hand::try_from(board)?;
        Ok(Self::new(hero.collect(), board.collect(), vec![]))
    }
}
