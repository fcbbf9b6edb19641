use crate::Probability;
use crate::Score;
use crate::cards::Card;
use crate::cards::Street;
use crate::equity::EquityEstimate;
use crate::threshold::Action;
use crate::threshold::Context;
use crate::threshold::Position;
use crate::threshold::Profile;
use crate::threshold::Selection;

/// Everything decided in one cycle, persisted verbatim.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Decision {
    pub action: Action,
    pub score: Score,
    pub pot_odds: Probability,
    pub street: Street,
    pub profile: Profile,
    pub position: Position,
    pub opponents: usize,
    pub info_quality: Probability,
    pub observed: usize,
    pub hero_cards: Vec<Card>,
    pub board_cards: Vec<Card>,
    pub dead_cards: Vec<Card>,
    pub estimate: Option<EquityEstimate>,
    /// Seated opponents the auditor flagged.
    pub flagged: Vec<String>,
    /// Why the cycle short-circuited, if it did.
    pub reason: Option<String>,
    pub timestamp: u64,
}

impl Decision {
    fn new(action: Action, score: Score, ctx: &Context) -> Self {
        Self {
            action,
            score,
            pot_odds: ctx.pot_odds(),
            street: ctx.street,
            profile: ctx.profile,
            position: ctx.position,
            opponents: ctx.opponents,
            info_quality: ctx.info_quality(),
            observed: ctx.observed,
            hero_cards: Vec::new(),
            board_cards: Vec::new(),
            dead_cards: Vec::new(),
            estimate: None,
            flagged: Vec::new(),
            reason: None,
            timestamp: crate::now(),
        }
    }

    /// Nothing to act on yet, or nothing trustworthy to act with.
    pub fn wait(ctx: &Context, reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            ..Self::new(Action::Wait, 0., ctx)
        }
    }

    /// Folding away from flagged opponents.
    pub fn evade(ctx: &Context, flagged: Vec<String>) -> Self {
        Self {
            reason: Some(format!("evading {}", flagged.join(", "))),
            flagged,
            ..Self::new(Action::Fold, 0., ctx)
        }
    }

    pub fn selected(ctx: &Context, estimate: EquityEstimate, selection: Selection) -> Self {
        Self {
            estimate: Some(estimate),
            ..Self::new(selection.action, selection.score, ctx)
        }
    }

    pub fn cards(self, hero: &[Card], board: &[Card], dead: &[Card]) -> Self {
        Self {
            hero_cards: hero.to_vec(),
            board_cards: board.to_vec(),
            dead_cards: dead.to_vec(),
            ..self
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<5} {} score {:.3} odds {:.3}",
            self.street, self.action, self.score, self.pot_odds
        )?;
        match &self.reason {
            Some(reason) => write!(f, " ({})", reason),
            None => Ok(()),
        }
    }
}
