use super::EquityEstimate;
use super::EquityRequest;
use super::Estimator;
use crate::cards::*;
use rand::Rng;
use std::cmp::Ordering;

/// Monte Carlo equity against uniformly random opponent holdings.
///
/// Each iteration completes the board from the unknown pool, deals two cards
/// to every simulated opponent from what is left, and compares hero's best
/// hand with the best opposing hand. Hero wins only by beating all of them
/// and ties when the strongest opponent is exactly as strong.
///
/// # Conflicting input
///
/// Observations can disagree with each other. A card seen both in hero's
/// hand and on the board is kept as hero's; dead cards that are visible
/// elsewhere are ignored. When the unknown pool cannot seat every requested
/// opponent, the opponent count is reduced to what fits, and if not even one
/// fits the estimate is the insufficient-information result.
#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

impl Engine {
    pub fn simulate(&self, request: &EquityRequest) -> EquityEstimate {
        self.simulate_with(request, &mut rand::rng())
    }

    pub fn simulate_with<R: Rng>(&self, request: &EquityRequest, rng: &mut R) -> EquityEstimate {
        let Some(spot) = Spot::try_from(request).ok() else {
            return EquityEstimate::insufficient();
        };
        let (wins, ties, played) = (0..request.simulations)
            .filter_map(|_| spot.playout(rng))
            .fold((0, 0, 0), |(w, t, n), ord| match ord {
                Ordering::Greater => (w + 1, t, n + 1),
                Ordering::Equal => (w, t + 1, n + 1),
                Ordering::Less => (w, t, n + 1),
            });
        let estimate = EquityEstimate::from((wins, ties, played));
        log::debug!("{} vs {} opponents", estimate, spot.opponents);
        estimate
    }
}

impl Estimator for Engine {
    fn estimate(&self, request: &EquityRequest) -> anyhow::Result<EquityEstimate> {
        Ok(self.simulate(request))
    }
}

/// A validated, conflict-free view of a request.
struct Spot {
    hero: Hand,
    board: Hand,
    deck: Deck,
    missing: usize,
    opponents: usize,
}

impl Spot {
    /// One random runout. Hero's strength compared to the best opponent.
    fn playout<R: Rng>(&self, rng: &mut R) -> Option<Ordering> {
        let mut deck = self.deck;
        let board = Hand::add(self.board, deck.deal(self.missing, rng)?);
        let hero = Strength::from(Hand::add(self.hero, board));
        let best = (0..self.opponents)
            .map(|_| deck.deal(2, rng))
            .map(|hole| hole.map(|hole| Strength::from(Hand::add(hole, board))))
            .collect::<Option<Vec<Strength>>>()?
            .into_iter()
            .max()?;
        Some(hero.cmp(&best))
    }
}

impl TryFrom<&EquityRequest> for Spot {
    type Error = &'static str;
    fn try_from(request: &EquityRequest) -> Result<Self, Self::Error> {
        let hero = Hand::from(request.hero_cards.as_slice());
        if hero.size() < 2 {
            return Err("fewer than two hero cards");
        }
        if request.simulations == 0 {
            return Err("zero simulations requested");
        }
        let board = request
            .board_cards
            .iter()
            .filter(|card| !hero.contains(card))
            .take(Street::Rive.n_board())
            .copied()
            .collect::<Vec<Card>>();
        let board = Hand::from(board);
        let dead = Hand::minus(
            Hand::from(request.dead_cards.as_slice()),
            Hand::add(hero, board),
        );
        let deck = Deck::without(Hand::add(Hand::add(hero, board), dead));
        let missing = Street::Rive.n_board() - board.size();
        let seats = deck.size().saturating_sub(missing) / 2;
        let opponents = request.opponents.max(1).min(seats);
        if deck.size() < missing || opponents == 0 {
            log::warn!(
                "unknown pool of {} cards cannot complete board and seat an opponent",
                deck.size()
            );
            return Err("unknown pool exhausted");
        }
        if opponents < request.opponents {
            log::warn!(
                "seating {} of {} requested opponents, unknown pool has {} cards",
                opponents,
                request.opponents,
                deck.size()
            );
        }
        Ok(Self {
            hero,
            board,
            deck,
            missing,
            opponents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn cards(s: &str) -> Vec<Card> {
        normalize_cards(&s.split_whitespace().collect::<Vec<_>>())
    }

    fn run(request: EquityRequest, seed: u64) -> EquityEstimate {
        Engine.simulate_with(&request, &mut SmallRng::seed_from_u64(seed))
    }

    #[test]
    fn insufficient_hero_cards() {
        for hero in ["", "As", "As As", "junk Kd"] {
            let estimate = run(EquityRequest::new(cards(hero), cards("2c 3d 4h"), vec![]), 1);
            assert_eq!(estimate.simulations, 0);
            assert_eq!(estimate.win_rate, 0.);
            assert_eq!(estimate.tie_rate, 0.);
        }
    }

    #[test]
    fn pocket_aces_heads_up() {
        let estimate = run(EquityRequest::new(cards("As Ah"), vec![], vec![]).simulations(4000), 2);
        assert_eq!(estimate.simulations, 4000);
        assert!(estimate.win_rate > 0.80 && estimate.win_rate < 0.90, "{}", estimate);
        assert!(estimate.tie_rate < 0.02, "{}", estimate);
    }

    #[test]
    fn more_opponents_less_equity() {
        let hero = cards("As Ah");
        let one = run(EquityRequest::new(hero.clone(), vec![], vec![]).simulations(3000), 3);
        let four = run(EquityRequest::new(hero, vec![], vec![]).simulations(3000).opponents(4), 3);
        assert!(four.win_rate + 0.15 < one.win_rate, "{} vs {}", one, four);
    }

    #[test]
    fn nuts_on_the_river() {
        let request = EquityRequest::new(cards("As Ks"), cards("Qs Js Ts 2d 3c"), vec![]);
        let estimate = run(request.simulations(500).opponents(3), 4);
        assert_eq!(estimate.win_rate, 1.);
        assert_eq!(estimate.tie_rate, 0.);
    }

    #[test]
    fn board_plays_splits() {
        let request = EquityRequest::new(cards("2c 3d"), cards("As Ks Qs Js Ts"), vec![]);
        let estimate = run(request.simulations(500).opponents(2), 5);
        assert_eq!(estimate.win_rate, 0.);
        assert_eq!(estimate.tie_rate, 1.);
    }

    #[test]
    fn rates_are_bounded() {
        let ref mut rng = SmallRng::seed_from_u64(6);
        for street in Street::all() {
            for _ in 0..8 {
                let mut deck = Deck::new();
                let hero = deck.deal(2, rng).unwrap().collect();
                let board = deck.deal(street.n_board(), rng).unwrap().collect();
                let dead = deck.deal(4, rng).unwrap().collect();
                let request = EquityRequest::new(hero, board, dead).simulations(200).opponents(2);
                let estimate = Engine.simulate_with(&request, rng);
                assert!(estimate.win_rate >= 0.);
                assert!(estimate.tie_rate >= 0.);
                assert!(estimate.win_rate + estimate.tie_rate <= 1.);
                assert_eq!(estimate.simulations, 200);
            }
        }
    }

    #[test]
    fn conflicting_cards_do_not_duplicate() {
        let hero = cards("As Ah");
        let board = cards("As Kd Qc");
        let dead = cards("Ah Kd 2c 2c");
        let estimate = run(EquityRequest::new(hero, board, dead).simulations(300), 7);
        assert_eq!(estimate.simulations, 300);
        assert!(estimate.win_rate + estimate.tie_rate <= 1.);
    }

    #[test]
    fn exhausted_pool_is_insufficient() {
        let hero = cards("As Ah");
        let dead = Vec::<Card>::from(Hand::from(hero.clone()).complement())
            .into_iter()
            .skip(4)
            .collect();
        let estimate = run(EquityRequest::new(hero, vec![], dead), 8);
        assert!(estimate.is_insufficient());
    }

    #[test]
    fn opponents_clamped_to_pool() {
        let hero = cards("As Ah");
        let board = cards("2c 3d 4h 5s 7c");
        let dead = Vec::<Card>::from(Hand::from(cards("As Ah 2c 3d 4h 5s 7c")).complement())
            .into_iter()
            .skip(5)
            .collect();
        let request = EquityRequest::new(hero, board, dead).simulations(100).opponents(6);
        let estimate = run(request, 9);
        assert_eq!(estimate.simulations, 100);
    }

    #[test]
    fn parses_compact_notation() {
        let request = EquityRequest::try_from("As Ah ~ Kd Qc 2s").unwrap();
        assert_eq!(request.hero_cards.len(), 2);
        assert_eq!(request.board_cards.len(), 3);
        assert!(EquityRequest::try_from("As Xx").is_err());
    }
}
