/// The four betting rounds in Texas Hold'em.
///
/// The street is never tracked directly: it is inferred from how many
/// community cards are visible.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    #[default]
    #[serde(rename = "preflop")]
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    #[serde(rename = "river")]
    Rive = 3isize,
}

impl Street {
    /// All four streets in order.
    pub const fn all() -> [Self; 4] {
        [Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pref => "preflop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::Rive => "river",
        }
    }
    /// Number of board cards visible on this street.
    pub const fn n_board(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// Infers the street from the number of board cards.
    /// A partially read flop (one or two cards) still counts as preflop.
    pub const fn from_board(n: usize) -> Self {
        match n {
            0..=2 => Self::Pref,
            3 => Self::Flop,
            4 => Self::Turn,
            _ => Self::Rive,
        }
    }
    /// Turn or river.
    pub const fn is_late(&self) -> bool {
        matches!(self, Self::Turn | Self::Rive)
    }
}

impl TryFrom<&str> for Street {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "preflop" | "pref" | "p" => Ok(Self::Pref),
            "flop" | "f" => Ok(Self::Flop),
            "turn" | "t" => Ok(Self::Turn),
            "river" | "rive" | "r" => Ok(Self::Rive),
            _ => Err(anyhow::anyhow!("invalid street: {}", s)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl crate::Arbitrary for Street {
    fn random() -> Self {
        use rand::Rng;
        Self::all()[rand::rng().random_range(0..4)]
    }
}
