use super::tables::INFO_CARDS;
use super::tables::SPR_CAP;
use crate::Chips;
use crate::Probability;
use crate::cards::Street;

/// How the table as a whole is playing.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Tight = 0,
    #[default]
    Normal = 1,
    Aggressive = 2,
}

/// Hero's seat relative to the button.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Utg = 0,
    #[default]
    Mp = 1,
    Co = 2,
    Btn = 3,
    Sb = 4,
    Bb = 5,
}

impl Profile {
    pub const fn all() -> [Self; 3] {
        [Self::Tight, Self::Normal, Self::Aggressive]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Tight => "tight",
            Self::Normal => "normal",
            Self::Aggressive => "aggressive",
        }
    }
}

impl Position {
    pub const fn all() -> [Self; 6] {
        [Self::Utg, Self::Mp, Self::Co, Self::Btn, Self::Sb, Self::Bb]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Utg => "utg",
            Self::Mp => "mp",
            Self::Co => "co",
            Self::Btn => "btn",
            Self::Sb => "sb",
            Self::Bb => "bb",
        }
    }
    /// Seats from which heads-up steals are encouraged.
    pub const fn is_steal(&self) -> bool {
        matches!(self, Self::Co | Self::Btn)
    }
}

impl TryFrom<&str> for Profile {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| anyhow::anyhow!("invalid table profile: {}", s))
    }
}

impl TryFrom<&str> for Position {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| anyhow::anyhow!("invalid position: {}", s))
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Everything besides equity that moves the thresholds.
///
/// Rebuilt every cycle. `observed` is the number of distinct cards seen
/// across hero's hand, the board and the dead pile.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Context {
    pub street: Street,
    pub profile: Profile,
    pub position: Position,
    pub opponents: usize,
    pub pot: Chips,
    pub stack: Chips,
    pub observed: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            street: Street::Pref,
            profile: Profile::default(),
            position: Position::default(),
            opponents: 1,
            pot: 0.,
            stack: 0.,
            observed: 0,
        }
    }
}

impl Context {
    pub fn new(street: Street) -> Self {
        Self {
            street,
            ..Self::default()
        }
    }
    /// Street from a free-form label. Unknown labels read as the flop.
    pub fn labelled(street: &str) -> Self {
        Self::new(
            Street::try_from(street)
                .inspect_err(|e| log::debug!("{}, using flop thresholds", e))
                .unwrap_or(Street::Flop),
        )
    }
    pub fn profile(self, profile: Profile) -> Self {
        Self { profile, ..self }
    }
    pub fn position(self, position: Position) -> Self {
        Self { position, ..self }
    }
    pub fn opponents(self, opponents: usize) -> Self {
        Self { opponents, ..self }
    }
    pub fn pot(self, pot: Chips, stack: Chips) -> Self {
        Self { pot, stack, ..self }
    }
    pub fn observed(self, observed: usize) -> Self {
        Self { observed, ..self }
    }

    /// Price offered to continue, `pot / (pot + stack)`.
    /// Zero unless both pot and stack are positive.
    pub fn pot_odds(&self) -> Probability {
        if self.pot > 0. && self.stack > 0. {
            self.pot / (self.pot + self.stack)
        } else {
            0.
        }
    }
    /// Stack-to-pot ratio, capped. An empty pot with chips behind is maximally deep.
    pub fn spr(&self) -> f64 {
        if !(self.stack > 0.) {
            0.
        } else if !(self.pot > 0.) {
            SPR_CAP
        } else {
            (self.stack / self.pot).min(SPR_CAP)
        }
    }
    /// Fraction of a full picture of the deck, saturating at [`INFO_CARDS`].
    pub fn info_quality(&self) -> Probability {
        (self.observed as Probability / INFO_CARDS as Probability).min(1.)
    }
    /// Exactly one opponent left in the hand.
    pub fn is_heads_up(&self) -> bool {
        self.opponents == 1
    }
}
