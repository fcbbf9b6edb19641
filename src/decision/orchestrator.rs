use super::Config;
use super::Decision;
use super::Snapshot;
use super::traits::ActionExecutor;
use super::memory::MemoryStore;
use super::traits::StateProvider;
use crate::KEY_DEAD_CARDS;
use crate::KEY_DECISION;
use crate::KEY_HERO_CARDS;
use crate::audit::Auditor;
use crate::cards::*;
use crate::equity::EquityRequest;
use crate::equity::Estimator;
use crate::threshold::Action;
use crate::threshold::Context;
use crate::threshold::Selection;
use serde_json::Value;
use std::sync::Arc;

/// Drives one decision per call to [`Orchestrator::tick`].
///
/// Holds no state between ticks apart from what it writes to memory: the
/// dead cards seen so far this hand, the hero cards that identify the hand,
/// and the last decision. No tick ever fails. Collaborator errors are
/// logged and the cycle degrades to waiting.
pub struct Orchestrator<S, M, X, E>
where
    S: StateProvider,
    M: MemoryStore,
    X: ActionExecutor,
    E: Estimator,
{
    config: Config,
    state: S,
    memory: M,
    executor: X,
    estimator: E,
    auditor: Option<Arc<Auditor>>,
}

impl<S, M, X, E> Orchestrator<S, M, X, E>
where
    S: StateProvider,
    M: MemoryStore,
    X: ActionExecutor,
    E: Estimator,
{
    pub fn new(config: Config, state: S, memory: M, executor: X, estimator: E) -> Self {
        Self {
            config,
            state,
            memory,
            executor,
            estimator,
            auditor: None,
        }
    }
    pub fn auditor(self, auditor: Arc<Auditor>) -> Self {
        Self {
            auditor: Some(auditor),
            ..self
        }
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// The most recently persisted decision.
    pub fn last_decision(&self) -> Option<Decision> {
        self.memory
            .get(KEY_DECISION)
            .and_then(|value| serde_json::from_value(value).ok())
    }

    /// One full cycle. `None` when there was nothing to decide: the table
    /// could not be read or it is not hero's turn.
    pub fn tick(&mut self) -> Option<Decision> {
        let snapshot = self
            .state
            .read_table()
            .inspect_err(|e| log::warn!("could not read table: {}", e))
            .ok()?;
        let hero = normalize_cards(&snapshot.hero_cards);
        let board = Self::board(&hero, &snapshot);
        let dead = self.dead(&hero, &board, &snapshot);
        if !snapshot.my_turn {
            log::debug!("waiting for our turn");
            return None;
        }
        let ctx = self.context(&snapshot, &hero, &board, &dead);
        let decision = self.decide(&ctx, &snapshot, &hero, &board, &dead);
        let decision = decision.cards(&hero, &board, &dead);
        log::info!("{}", decision);
        if decision.action != Action::Wait {
            match self.executor.act(decision.action, decision.street) {
                Ok(result) => log::debug!("executed {}: {}", decision.action, result),
                Err(e) => log::warn!("failed to execute {}: {}", decision.action, e),
            }
        }
        self.persist(KEY_DECISION, &decision);
        Some(decision)
    }

    fn decide(
        &self,
        ctx: &Context,
        snapshot: &Snapshot,
        hero: &[Card],
        board: &[Card],
        dead: &[Card],
    ) -> Decision {
        if hero.len() < 2 {
            return Decision::wait(ctx, "fewer than two hero cards");
        }
        let flagged = self.flagged(snapshot);
        if self.config.evade && !flagged.is_empty() {
            return Decision::evade(ctx, flagged);
        }
        let request = EquityRequest::new(hero.to_vec(), board.to_vec(), dead.to_vec())
            .simulations(self.config.simulations)
            .opponents(ctx.opponents);
        let decision = match self.estimator.estimate(&request) {
            Err(e) => {
                log::warn!("equity estimation failed: {}", e);
                return Decision::wait(ctx, "hold: equity unavailable");
            }
            Ok(estimate) if estimate.is_insufficient() => {
                Decision::wait(ctx, "insufficient information")
            }
            Ok(estimate) => {
                Decision::selected(ctx, estimate, Selection::from((&estimate, ctx)))
            }
        };
        Decision { flagged, ..decision }
    }

    /// Board tokens that are not hero's cards.
    fn board(hero: &[Card], snapshot: &Snapshot) -> Vec<Card> {
        normalize_cards(&snapshot.board_cards)
            .into_iter()
            .filter(|card| !hero.contains(card))
            .take(Street::Rive.n_board())
            .collect()
    }

    /// Remembered dead cards plus newly seen ones, minus whatever is visible.
    /// Memory is reset when two hero cards are read and they differ from the
    /// remembered ones. Partial reads of hero's hand never reset it.
    fn dead(&self, hero: &[Card], board: &[Card], snapshot: &Snapshot) -> Vec<Card> {
        let remembered = Self::recall(self.memory.get(KEY_HERO_CARDS));
        let read = hero.len() >= 2;
        let new_hand = read && Hand::from(remembered.as_slice()) != Hand::from(hero);
        let carried = if new_hand {
            log::debug!("new hand, forgetting dead cards");
            Vec::new()
        } else {
            Self::recall(self.memory.get(KEY_DEAD_CARDS))
        };
        let seen = normalize_cards(&snapshot.dead_cards);
        let visible = Hand::add(Hand::from(hero), Hand::from(board));
        let dead = merge_dead_cards(&[carried.as_slice(), seen.as_slice()])
            .into_iter()
            .filter(|card| !visible.contains(card))
            .collect::<Vec<Card>>();
        if read {
            self.persist(KEY_HERO_CARDS, hero);
        }
        self.persist(KEY_DEAD_CARDS, &dead);
        dead
    }

    fn context(&self, snapshot: &Snapshot, hero: &[Card], board: &[Card], dead: &[Card]) -> Context {
        Context::new(street_from_board(board))
            .profile(self.config.profile)
            .position(self.config.position)
            .opponents(snapshot.opponents())
            .pot(snapshot.pot, snapshot.stack)
            .observed(hero.len() + board.len() + dead.len())
    }

    /// Seated opponents the auditor wants us to avoid.
    fn flagged(&self, snapshot: &Snapshot) -> Vec<String> {
        match &self.auditor {
            None => Vec::new(),
            Some(auditor) => snapshot
                .opponent_ids
                .iter()
                .filter_map(|id| Auditor::id(id))
                .filter(|id| auditor.should_evade(id))
                .collect(),
        }
    }

    fn recall(value: Option<Value>) -> Vec<Card> {
        value
            .and_then(|value| serde_json::from_value::<Vec<String>>(value).ok())
            .map(|tokens| normalize_cards(&tokens))
            .unwrap_or_default()
    }

    fn persist<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = serde_json::to_value(value)
            .map_err(anyhow::Error::from)
            .and_then(|value| self.memory.set(key, value))
        {
            log::warn!("failed to persist {}: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Memory;
    use crate::equity::EquityEstimate;
    use crate::equity::Engine;
    use crate::threshold::Position;
    use crate::threshold::Profile;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Replays snapshots in order, then errors.
    struct Script(VecDeque<Snapshot>);
    impl StateProvider for Script {
        fn read_table(&mut self) -> anyhow::Result<Snapshot> {
            self.0.pop_front().ok_or_else(|| anyhow::anyhow!("screen unavailable"))
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<(Action, Street)>>>);
    impl ActionExecutor for Recorder {
        fn act(&mut self, action: Action, street: Street) -> anyhow::Result<String> {
            self.0.borrow_mut().push((action, street));
            Ok(format!("clicked {}", action))
        }
    }

    struct Fixed(EquityEstimate);
    impl Estimator for Fixed {
        fn estimate(&self, _: &EquityRequest) -> anyhow::Result<EquityEstimate> {
            Ok(self.0)
        }
    }

    struct Offline;
    impl Estimator for Offline {
        fn estimate(&self, _: &EquityRequest) -> anyhow::Result<EquityEstimate> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    /// Accepts nothing.
    struct ReadOnly;
    impl MemoryStore for ReadOnly {
        fn get(&self, _: &str) -> Option<Value> {
            None
        }
        fn set(&self, _: &str, _: Value) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("disk full"))
        }
    }

    fn snapshot(hero: &[&str], board: &[&str], dead: &[&str]) -> Snapshot {
        let strings = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect();
        Snapshot {
            hero_cards: strings(hero),
            board_cards: strings(board),
            dead_cards: strings(dead),
            pot: 100.,
            stack: 400.,
            opponents: 1,
            opponent_ids: vec!["villain".into()],
            my_turn: true,
        }
    }

    fn estimate(win_rate: f64) -> Fixed {
        Fixed(EquityEstimate {
            win_rate,
            tie_rate: 0.,
            simulations: 1000,
        })
    }

    fn orchestrator<E: Estimator>(
        snapshots: Vec<Snapshot>,
        estimator: E,
    ) -> (Orchestrator<Script, Arc<Memory>, Recorder, E>, Arc<Memory>, Recorder) {
        let memory = Arc::new(Memory::default());
        let recorder = Recorder::default();
        let orchestrator = Orchestrator::new(
            Config::default(),
            Script(snapshots.into()),
            memory.clone(),
            recorder.clone(),
            estimator,
        );
        (orchestrator, memory, recorder)
    }

    #[test]
    fn strong_hand_raises_and_persists() {
        let (mut o, memory, recorder) = orchestrator(vec![snapshot(&["As", "Ah"], &[], &[])], estimate(0.95));
        let decision = o.tick().unwrap();
        assert_eq!(decision.action, Action::RaiseBig);
        assert_eq!(decision.street, Street::Pref);
        assert_eq!(decision.profile, Profile::Normal);
        assert_eq!(decision.position, Position::Mp);
        assert!((decision.pot_odds - 0.2).abs() < 1e-12);
        assert_eq!(recorder.0.borrow().as_slice(), &[(Action::RaiseBig, Street::Pref)]);
        assert_eq!(o.last_decision().map(|d| d.timestamp), Some(decision.timestamp));
        assert_eq!(memory.get(KEY_DECISION).unwrap()["action"], json!("raise_big"));
    }

    #[test]
    fn missing_hero_cards_wait() {
        let (mut o, _, recorder) =
            orchestrator(vec![snapshot(&["As", "garbage"], &["Kd", "Qc", "2s"], &[])], estimate(0.99));
        let decision = o.tick().unwrap();
        assert_eq!(decision.action, Action::Wait);
        assert_eq!(decision.score, 0.);
        assert!((decision.pot_odds - 0.2).abs() < 1e-12);
        assert_eq!(decision.street, Street::Flop);
        assert!(recorder.0.borrow().is_empty());
        assert_eq!(o.last_decision().map(|d| d.action), Some(Action::Wait));
    }

    #[test]
    fn not_our_turn_still_remembers() {
        let mut idle = snapshot(&["As", "Ah"], &[], &["2c", "3d"]);
        idle.my_turn = false;
        let (mut o, memory, recorder) = orchestrator(vec![idle], estimate(0.5));
        assert_eq!(o.tick(), None);
        assert!(recorder.0.borrow().is_empty());
        assert_eq!(memory.get(KEY_DEAD_CARDS), Some(json!(["2c", "3d"])));
        assert_eq!(memory.get(KEY_DECISION), None);
    }

    #[test]
    fn dead_cards_accumulate_within_hand() {
        let (mut o, memory, _) = orchestrator(
            vec![
                snapshot(&["As", "Ah"], &[], &["2c", "3d"]),
                snapshot(&["As", "Ah"], &["Kd", "Qc", "2c"], &["9h"]),
                snapshot(&["7s", "7h"], &[], &["Tc"]),
            ],
            estimate(0.5),
        );
        o.tick();
        assert_eq!(memory.get(KEY_DEAD_CARDS), Some(json!(["2c", "3d"])));
        let second = o.tick().unwrap();
        assert_eq!(second.dead_cards.len(), 2);
        assert_eq!(memory.get(KEY_DEAD_CARDS), Some(json!(["3d", "9h"])));
        assert_eq!(second.observed, 2 + 3 + 2);
        o.tick();
        assert_eq!(memory.get(KEY_DEAD_CARDS), Some(json!(["Tc"])));
        assert_eq!(memory.get(KEY_HERO_CARDS), Some(json!(["7s", "7h"])));
    }

    #[test]
    fn misread_hero_card_keeps_memory() {
        let (mut o, memory, _) = orchestrator(
            vec![
                snapshot(&["As", "Ah"], &[], &["2c", "3d"]),
                snapshot(&["As", "??"], &[], &[]),
                snapshot(&["As", "Ah"], &[], &[]),
            ],
            estimate(0.5),
        );
        o.tick();
        let misread = o.tick().unwrap();
        assert_eq!(misread.action, Action::Wait);
        assert_eq!(misread.dead_cards.len(), 2);
        assert_eq!(memory.get(KEY_HERO_CARDS), Some(json!(["As", "Ah"])));
        let third = o.tick().unwrap();
        assert_eq!(third.dead_cards.len(), 2);
        assert_eq!(memory.get(KEY_DEAD_CARDS), Some(json!(["2c", "3d"])));
    }

    #[test]
    fn estimator_failure_holds() {
        let (mut o, _, recorder) = orchestrator(vec![snapshot(&["As", "Ah"], &[], &[])], Offline);
        let decision = o.tick().unwrap();
        assert_eq!(decision.action, Action::Wait);
        assert!(decision.reason.unwrap().starts_with("hold"));
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn unreadable_table_skips() {
        let (mut o, _, recorder) = orchestrator(vec![], estimate(0.5));
        assert_eq!(o.tick(), None);
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn persistence_failure_still_acts() {
        let recorder = Recorder::default();
        let mut o = Orchestrator::new(
            Config::default(),
            Script(vec![snapshot(&["As", "Ah"], &[], &[])].into()),
            ReadOnly,
            recorder.clone(),
            estimate(0.95),
        );
        assert_eq!(o.tick().unwrap().action, Action::RaiseBig);
        assert_eq!(recorder.0.borrow().len(), 1);
        assert_eq!(o.last_decision(), None);
    }

    #[test]
    fn evades_flagged_opponents() {
        let auditor = Arc::new(Auditor::default());
        (0..40).for_each(|_| auditor.add_allin_result("Villain", 0.2, true));
        let (o, _, recorder) = orchestrator(vec![snapshot(&["As", "Ah"], &[], &[])], estimate(0.95));
        let mut o = o.auditor(auditor.clone());
        let decision = o.tick().unwrap();
        assert_eq!(decision.action, Action::Fold);
        assert_eq!(decision.flagged, vec!["villain".to_string()]);
        assert_eq!(recorder.0.borrow().as_slice(), &[(Action::Fold, Street::Pref)]);
    }

    #[test]
    fn flagged_ids_are_normalized() {
        let auditor = Arc::new(Auditor::default());
        (0..40).for_each(|_| auditor.add_allin_result("villain", 0.2, true));
        let mut table = snapshot(&["As", "Ah"], &[], &[]);
        table.opponent_ids = vec![" Villain ".into(), "hero2".into(), "  ".into()];
        let (o, _, _) = orchestrator(vec![table], estimate(0.95));
        let mut o = o.auditor(auditor);
        let decision = o.tick().unwrap();
        assert_eq!(decision.action, Action::Fold);
        assert_eq!(decision.flagged, vec!["villain".to_string()]);
    }

    #[test]
    fn evasion_can_be_disabled() {
        let auditor = Arc::new(Auditor::default());
        (0..40).for_each(|_| auditor.add_allin_result("villain", 0.2, true));
        let memory = Arc::new(Memory::default());
        let mut o = Orchestrator::new(
            Config::default().evade(false),
            Script(vec![snapshot(&["As", "Ah"], &[], &[])].into()),
            memory,
            Recorder::default(),
            estimate(0.95),
        )
        .auditor(auditor);
        let decision = o.tick().unwrap();
        assert_eq!(decision.action, Action::RaiseBig);
        assert_eq!(decision.flagged, vec!["villain".to_string()]);
    }

    #[test]
    fn runs_with_real_engine() {
        let (o, _, _) = orchestrator(
            vec![snapshot(&["As", "Ks"], &["Qs", "Js", "Ts", "2d", "3c"], &[])],
            Engine,
        );
        let mut o = Orchestrator {
            config: o.config.simulations(200),
            ..o
        };
        let decision = o.tick().unwrap();
        assert_eq!(decision.action, Action::RaiseBig);
        assert_eq!(decision.estimate.map(|e| e.win_rate), Some(1.));
    }
}
