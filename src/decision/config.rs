use crate::SIMULATIONS;
use crate::threshold::Position;
use crate::threshold::Profile;

/// Table-level knobs, fixed for the lifetime of an orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    pub profile: Profile,
    pub position: Position,
    pub simulations: usize,
    /// Fold whenever a flagged opponent is seated.
    pub evade: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            position: Position::default(),
            simulations: SIMULATIONS,
            evade: true,
        }
    }
}

impl Config {
    /// Reads `ROBOBRAIN_PROFILE`, `ROBOBRAIN_POSITION`, `ROBOBRAIN_SIMULATIONS`
    /// and `ROBOBRAIN_EVADE`. Missing or unparseable values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            profile: Self::field(&lookup, "ROBOBRAIN_PROFILE", |s| Profile::try_from(s).ok())
                .unwrap_or(default.profile),
            position: Self::field(&lookup, "ROBOBRAIN_POSITION", |s| Position::try_from(s).ok())
                .unwrap_or(default.position),
            simulations: Self::field(&lookup, "ROBOBRAIN_SIMULATIONS", |s| {
                s.trim().parse::<usize>().ok().filter(|n| *n > 0)
            })
            .unwrap_or(default.simulations),
            evade: Self::field(&lookup, "ROBOBRAIN_EVADE", |s| {
                match s.trim().to_lowercase().as_str() {
                    "1" | "true" | "yes" | "on" => Some(true),
                    "0" | "false" | "no" | "off" => Some(false),
                    _ => None,
                }
            })
            .unwrap_or(default.evade),
        }
    }

    fn field<T>(
        lookup: &impl Fn(&str) -> Option<String>,
        key: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Option<T> {
        let raw = lookup(key)?;
        let value = parse(&raw);
        if value.is_none() {
            log::warn!("ignoring {}={:?}, using default", key, raw);
        }
        value
    }

    pub fn profile(self, profile: Profile) -> Self {
        Self { profile, ..self }
    }
    pub fn position(self, position: Position) -> Self {
        Self { position, ..self }
    }
    pub fn simulations(self, simulations: usize) -> Self {
        Self {
            simulations,
            ..self
        }
    }
    pub fn evade(self, evade: bool) -> Self {
        Self { evade, ..self }
    }
}
