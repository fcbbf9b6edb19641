use crate::Probability;
use crate::Score;

/// Outcome frequencies of a Monte Carlo run.
///
/// `simulations` counts iterations actually played out. Zero means the
/// inputs could not support a single deal and both rates are zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EquityEstimate {
    pub win_rate: Probability,
    pub tie_rate: Probability,
    pub simulations: usize,
}

impl EquityEstimate {
    /// The defined result for spots we cannot evaluate.
    pub fn insufficient() -> Self {
        Self::default()
    }
    pub fn is_insufficient(&self) -> bool {
        self.simulations == 0
    }
    /// Split pots count half.
    pub fn score(&self) -> Score {
        self.win_rate + 0.5 * self.tie_rate
    }
}

impl From<(usize, usize, usize)> for EquityEstimate {
    fn from((wins, ties, simulations): (usize, usize, usize)) -> Self {
        match simulations {
            0 => Self::insufficient(),
            n => Self {
                win_rate: wins as Probability / n as Probability,
                tie_rate: ties as Probability / n as Probability,
                simulations: n,
            },
        }
    }
}

impl std::fmt::Display for EquityEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "win {:>6.2}% tie {:>6.2}% ({} sims)",
            self.win_rate * 100.,
            self.tie_rate * 100.,
            self.simulations
        )
    }
}
