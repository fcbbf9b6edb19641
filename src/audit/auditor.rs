use super::record::PlayerRecord;
use super::state::AuditState;
use super::stats::PlayerStats;
use crate::AUDIT_MIN_SAMPLES;
use crate::AUDIT_RETENTION;
use crate::AUDIT_Z_THRESHOLD;
use crate::Probability;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// Flagging policy.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuditorConfig {
    pub min_samples: usize,
    pub z_threshold: f64,
    /// Samples retained per player.
    pub max_samples: usize,
}

impl Default for AuditorConfig {
    fn default() -> Self {
        Self {
            min_samples: AUDIT_MIN_SAMPLES,
            z_threshold: AUDIT_Z_THRESHOLD,
            max_samples: AUDIT_RETENTION,
        }
    }
}

/// Per-opponent all-in ledger.
///
/// Shared between the decision loop and whatever feeds showdown results, so
/// every method takes `&self`. One lock guards all records. Every method is
/// total: bad equities are clamped, unknown players read as empty, and bad
/// payloads are ignored.
#[derive(Debug, Default)]
pub struct Auditor {
    config: AuditorConfig,
    players: Mutex<HashMap<String, PlayerRecord>>,
}

impl Auditor {
    pub fn new(config: AuditorConfig) -> Self {
        Self {
            config,
            players: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &AuditorConfig {
        &self.config
    }

    /// Canonical player id: lowercased and trimmed. `None` for blank ids.
    pub fn id(player: &str) -> Option<String> {
        Some(player.trim().to_lowercase()).filter(|id| !id.is_empty())
    }

    /// A poisoned lock still holds consistent records; every write is a
    /// single push or a whole-map swap.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, PlayerRecord>> {
        self.players.lock().unwrap_or_else(|poison| poison.into_inner())
    }

    pub fn add_allin_result(&self, player: &str, equity: Probability, won: bool) {
        let Some(id) = Self::id(player) else {
            log::debug!("ignoring all-in result without a player id");
            return;
        };
        if equity.is_nan() {
            log::debug!("ignoring all-in result for {} without equity", id);
            return;
        }
        self.lock()
            .entry(id)
            .or_default()
            .push(equity, won, self.config.max_samples);
    }

    pub fn player_stats(&self, player: &str) -> PlayerStats {
        Self::id(player)
            .and_then(|id| self.lock().get(&id).map(PlayerRecord::stats))
            .map(|stats| self.judge(stats))
            .unwrap_or_default()
    }

    pub fn is_super_user(&self, player: &str) -> bool {
        self.player_stats(player).is_super_user
    }

    /// Whether hero should stay out of pots with this player.
    pub fn should_evade(&self, player: &str) -> bool {
        let stats = self.player_stats(player);
        if stats.is_super_user {
            log::info!("evading {} ({})", player.trim(), stats);
        }
        stats.is_super_user
    }

    pub fn super_users(&self) -> BTreeSet<String> {
        self.lock()
            .iter()
            .filter(|(_, record)| self.judge(record.stats()).is_super_user)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Snapshot of every record, each cut to its most recent `max_samples`.
    pub fn export_state(&self, max_samples: usize) -> AuditState {
        let players = self
            .lock()
            .iter()
            .map(|(id, record)| (id.clone(), record.recent(max_samples)))
            .collect();
        AuditState {
            players,
            ..AuditState::default()
        }
    }

    /// Replaces every record with the payload's. A payload from an unknown
    /// version clears the auditor. Malformed payloads leave it untouched.
    pub fn import_state(&self, payload: &serde_json::Value) {
        match AuditState::try_from(payload) {
            Err(e) => log::warn!("ignoring audit state: {}", e),
            Ok(state) => {
                let mut players = HashMap::<String, PlayerRecord>::new();
                for (id, samples) in state.players {
                    let Some(id) = Self::id(&id) else { continue };
                    let record = players.entry(id).or_default();
                    for (equity, outcome) in samples {
                        record.push(equity, outcome >= 0.5, self.config.max_samples);
                    }
                }
                log::info!("imported audit state for {} players", players.len());
                *self.lock() = players;
            }
        }
    }

    pub fn to_json(&self, max_samples: usize) -> String {
        serde_json::to_string(&self.export_state(max_samples)).unwrap_or_default()
    }

    pub fn from_json(&self, json: &str) {
        match serde_json::from_str::<serde_json::Value>(json) {
            Ok(value) => self.import_state(&value),
            Err(e) => log::warn!("ignoring unparseable audit state: {}", e),
        }
    }

    fn judge(&self, stats: PlayerStats) -> PlayerStats {
        PlayerStats {
            is_super_user: stats.sample_count >= self.config.min_samples
                && stats.z_score >= self.config.z_threshold,
            ..stats
        }
    }
}
