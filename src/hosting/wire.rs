use crate::MAX_SIMULATIONS;
use crate::cards::normalize_cards;
use crate::equity::EquityRequest;

/// Request body of `POST /equity`.
///
/// Card lists must be JSON arrays of strings. Unreadable tokens inside them
/// are dropped, not rejected.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EquityBody {
    pub hero_cards: Vec<String>,
    #[serde(default)]
    pub board_cards: Vec<String>,
    #[serde(default)]
    pub dead_cards: Vec<String>,
    #[serde(default)]
    pub simulations: Option<usize>,
    #[serde(default)]
    pub opponents: Option<usize>,
}

impl TryFrom<EquityBody> for EquityRequest {
    type Error = anyhow::Error;
    fn try_from(body: EquityBody) -> Result<Self, Self::Error> {
        let hero = normalize_cards(&body.hero_cards);
        if hero.len() < 2 {
            return Err(anyhow::anyhow!(
                "need two hero cards, got {} valid of {}",
                hero.len(),
                body.hero_cards.len()
            ));
        }
        let mut request = EquityRequest::new(
            hero,
            normalize_cards(&body.board_cards),
            normalize_cards(&body.dead_cards),
        );
        if let Some(n) = body.simulations {
            request = request.simulations(n.min(MAX_SIMULATIONS));
        }
        if let Some(n) = body.opponents {
            request = request.opponents(n.max(1));
        }
        Ok(request)
    }
}
