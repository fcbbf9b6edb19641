use crate::Probability;

/// Derived statistics of one player's all-in history.
///
/// Recomputed on demand from the stored samples, never cached.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerStats {
    pub sample_count: usize,
    /// Fraction of all-ins won.
    pub observed_rate: Probability,
    /// Mean equity at the time of the all-in.
    pub expected_rate: Probability,
    /// Mean of `outcome - equity`.
    pub mean_deviation: f64,
    /// Population standard deviation of `outcome - equity`.
    pub std_deviation: f64,
    pub z_score: f64,
    pub is_super_user: bool,
}

impl std::fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "n {:>5} won {:>5.1}% expected {:>5.1}% z {:>+6.2}{}",
            self.sample_count,
            self.observed_rate * 100.,
            self.expected_rate * 100.,
            self.z_score,
            if self.is_super_user { " FLAGGED" } else { "" }
        )
    }
}
