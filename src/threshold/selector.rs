use super::action::Action;
use super::context::Context;
use super::thresholds::Thresholds;
use crate::Probability;
use crate::Score;
use crate::equity::EquityEstimate;

/// Result of mapping a score onto an action.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Selection {
    pub action: Action,
    pub score: Score,
    pub pot_odds: Probability,
}

/// Picks the most aggressive action whose threshold the score reaches.
///
/// The score is `win_rate + tie_rate / 2`. Pure and deterministic.
pub fn select(win_rate: Probability, tie_rate: Probability, ctx: &Context) -> Selection {
    let score = win_rate + 0.5 * tie_rate;
    let t = Thresholds::from(ctx);
    let action = if score >= t.raise_big {
        Action::RaiseBig
    } else if score >= t.raise_small {
        Action::RaiseSmall
    } else if score >= t.call {
        Action::Call
    } else {
        Action::Fold
    };
    log::debug!("{} score {:.3} ({}) -> {}", ctx.street, score, t, action);
    Selection {
        action,
        score,
        pot_odds: ctx.pot_odds(),
    }
}

impl From<(&EquityEstimate, &Context)> for Selection {
    fn from((estimate, ctx): (&EquityEstimate, &Context)) -> Self {
        select(estimate.win_rate, estimate.tie_rate, ctx)
    }
}
