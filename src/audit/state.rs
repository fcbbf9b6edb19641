use crate::AUDIT_STATE_VERSION;
use crate::Probability;
use std::collections::BTreeMap;

/// Persisted auditor payload.
///
/// `{"version": 1, "players": {"villain": [[0.35, 1.0], [0.8, 0.0]]}}`
///
/// Each pair is `[equity, outcome]`, oldest first.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuditState {
    pub version: u32,
    #[serde(default)]
    pub players: BTreeMap<String, Vec<(Probability, Probability)>>,
}

impl Default for AuditState {
    fn default() -> Self {
        Self {
            version: AUDIT_STATE_VERSION,
            players: BTreeMap::new(),
        }
    }
}

impl AuditState {
    pub fn is_current(&self) -> bool {
        self.version == AUDIT_STATE_VERSION
    }
    /// Drops non-finite pairs, clamps equity, snaps outcomes to 0 or 1.
    pub fn sanitized(self) -> Self {
        let players = self
            .players
            .into_iter()
            .map(|(id, samples)| {
                let samples = samples
                    .into_iter()
                    .filter(|(e, o)| e.is_finite() && o.is_finite())
                    .map(|(e, o)| (e.clamp(0., 1.), if o >= 0.5 { 1. } else { 0. }))
                    .collect();
                (id, samples)
            })
            .collect();
        Self {
            version: self.version,
            players,
        }
    }
}

/// A payload from an unknown schema version reads as the empty state.
/// Anything without a numeric version, or that does not match the current
/// schema, is an error.
impl TryFrom<&serde_json::Value> for AuditState {
    type Error = anyhow::Error;
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let version = value
            .get("version")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| anyhow::anyhow!("audit state without a version"))?;
        if version != AUDIT_STATE_VERSION as u64 {
            log::warn!("unknown audit state version {}, reading as empty", version);
            return Ok(Self::default());
        }
        Ok(serde_json::from_value::<Self>(value.clone())?.sanitized())
    }
}

impl From<&AuditState> for serde_json::Value {
    fn from(state: &AuditState) -> Self {
        serde_json::to_value(state).unwrap_or(serde_json::Value::Null)
    }
}
