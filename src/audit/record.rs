use super::stats::PlayerStats;
use crate::Probability;
use std::collections::VecDeque;

/// Standard errors below this are treated as zero.
const DEGENERATE: f64 = 1e-12;

/// One player's all-in history as `(equity, outcome)` pairs.
///
/// Outcomes are 1.0 for a win and 0.0 for a loss. Capacity is bounded:
/// pushing past `capacity` drops the oldest sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerRecord {
    samples: VecDeque<(Probability, Probability)>,
}

impl PlayerRecord {
    pub fn push(&mut self, equity: Probability, won: bool, capacity: usize) {
        self.samples.push_back((equity.clamp(0., 1.), if won { 1. } else { 0. }));
        while self.samples.len() > capacity {
            self.samples.pop_front();
        }
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    /// The most recent `n` samples, oldest first.
    pub fn recent(&self, n: usize) -> Vec<(Probability, Probability)> {
        self.samples
            .iter()
            .skip(self.samples.len().saturating_sub(n))
            .copied()
            .collect()
    }

    /// Observed versus expected win rate under a normal approximation.
    ///
    /// Each all-in is a Bernoulli trial with success probability `e_i`, so the
    /// observed rate has mean `Σe_i / n` and standard error
    /// `sqrt(Σ e_i (1 - e_i)) / n`. A zero standard error yields `z = 0`.
    pub fn stats(&self) -> PlayerStats {
        let n = self.samples.len();
        if n == 0 {
            return PlayerStats::default();
        }
        let count = n as f64;
        let expected = self.samples.iter().map(|(e, _)| e).sum::<f64>() / count;
        let observed = self.samples.iter().map(|(_, o)| o).sum::<f64>() / count;
        let variance = self.samples.iter().map(|(e, _)| e * (1. - e)).sum::<f64>();
        let error = variance.sqrt() / count;
        let mean_deviation = observed - expected;
        let std_deviation = (self
            .samples
            .iter()
            .map(|(e, o)| o - e - mean_deviation)
            .map(|d| d * d)
            .sum::<f64>()
            / count)
            .sqrt();
        let z_score = if error > DEGENERATE {
            mean_deviation / error
        } else {
            0.
        };
        PlayerStats {
            sample_count: n,
            observed_rate: observed,
            expected_rate: expected,
            mean_deviation,
            std_deviation,
            z_score,
            is_super_user: false,
        }
    }
}

impl From<Vec<(Probability, Probability)>> for PlayerRecord {
    fn from(samples: Vec<(Probability, Probability)>) -> Self {
        Self {
            samples: samples.into(),
        }
    }
}
