/// What the agent does this cycle.
///
/// The four betting actions are ordered from most to least conservative.
/// `Wait` sits outside that order: it means there was not enough
/// information to decide.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Fold,
    Call,
    RaiseSmall,
    RaiseBig,
    Wait,
}

impl Action {
    /// Aggression rank, fold < call < raise_small < raise_big.
    pub const fn rank(&self) -> Option<u8> {
        match self {
            Self::Fold => Some(0),
            Self::Call => Some(1),
            Self::RaiseSmall => Some(2),
            Self::RaiseBig => Some(3),
            Self::Wait => None,
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fold => "fold",
            Self::Call => "call",
            Self::RaiseSmall => "raise_small",
            Self::RaiseBig => "raise_big",
            Self::Wait => "wait",
        }
    }
    pub const fn all() -> [Self; 5] {
        [
            Self::Fold,
            Self::Call,
            Self::RaiseSmall,
            Self::RaiseBig,
            Self::Wait,
        ]
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|a| a.label() == s)
            .ok_or_else(|| anyhow::anyhow!("invalid action: {}", s))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
