use super::context::Context;
use super::tables::*;
use crate::Probability;
use crate::cards::Street;

/// The three score cut-offs for one decision.
///
/// Built from a [`Context`] in nine steps, each an additive offset applied to
/// all three values, in this order:
///
/// 1. table profile
/// 2. position
/// 3. multiway penalty
/// 4. pot-odds discount
/// 5. stack-to-pot adjustment
/// 6. heads-up steal bonus
/// 7. first clamp
/// 8. information-quality penalty
/// 9. final clamp
///
/// After the final clamp `call < raise_small < raise_big` always holds.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Thresholds {
    pub call: Probability,
    pub raise_small: Probability,
    pub raise_big: Probability,
}

impl From<Triple> for Thresholds {
    fn from((call, raise_small, raise_big): Triple) -> Self {
        Self {
            call,
            raise_small,
            raise_big,
        }
    }
}

impl From<Street> for Thresholds {
    fn from(street: Street) -> Self {
        Self::from(BASE[street as usize])
    }
}

impl From<&Context> for Thresholds {
    fn from(ctx: &Context) -> Self {
        Self::from(ctx.street)
            .profile(ctx)
            .position(ctx)
            .multiway(ctx)
            .pot_odds(ctx)
            .spr(ctx)
            .steal(ctx)
            .clamp(CEILING_FIRST)
            .information(ctx)
            .clamp(CEILING_FINAL)
    }
}

impl Thresholds {
    fn shift(self, (c, s, b): Triple) -> Self {
        Self {
            call: self.call + c,
            raise_small: self.raise_small + s,
            raise_big: self.raise_big + b,
        }
    }
    fn uniform(self, x: Probability) -> Self {
        self.shift((x, x, x))
    }

    fn profile(self, ctx: &Context) -> Self {
        self.uniform(PROFILE[ctx.profile as usize][ctx.street as usize])
    }
    fn position(self, ctx: &Context) -> Self {
        self.uniform(POSITION[ctx.position as usize][ctx.street as usize])
    }
    fn multiway(self, ctx: &Context) -> Self {
        let extra = ctx.opponents.saturating_sub(1) as Probability;
        let (c, s, b) = MULTIWAY_STEP;
        let (cc, cs, cb) = MULTIWAY_CAP;
        self.shift(((extra * c).min(cc), (extra * s).min(cs), (extra * b).min(cb)))
    }
    fn pot_odds(self, ctx: &Context) -> Self {
        let weight = (ctx.pot_odds() / POT_ODDS_SATURATION).min(1.);
        let (c, s, b) = POT_ODDS_CAP;
        self.shift((-c * weight, -s * weight, -b * weight))
    }
    fn spr(self, ctx: &Context) -> Self {
        let spr = ctx.spr();
        match ctx.street {
            Street::Turn | Street::Rive if spr <= SPR_COMMITTED => {
                let (c, s, b) = SPR_COMMITTED_DISCOUNT;
                self.shift((-c, -s, -b))
            }
            Street::Pref | Street::Flop if spr >= SPR_DEEP => self.shift(SPR_DEEP_PENALTY),
            _ => self,
        }
    }
    fn steal(self, ctx: &Context) -> Self {
        if ctx.is_heads_up() && ctx.position.is_steal() {
            let late = if ctx.street.is_late() {
                STEAL_RAISE_BIG_LATE
            } else {
                0.
            };
            self.shift((0., -STEAL_RAISE_SMALL, -late))
        } else {
            self
        }
    }
    fn information(self, ctx: &Context) -> Self {
        let penalty = (1. - ctx.info_quality()).max(0.) * INFO_PENALTY;
        let (c, s, b) = INFO_WEIGHTS;
        self.shift((penalty * c, penalty * s, penalty * b))
    }
    fn clamp(self, (c, s, b): Triple) -> Self {
        let (gs, gb) = GAP;
        let call = self.call.clamp(CALL_FLOOR, c);
        let raise_small = self.raise_small.max(call + gs).min(s);
        let raise_big = self.raise_big.max(raise_small + gb).min(b);
        Self {
            call,
            raise_small,
            raise_big,
        }
    }
}

impl std::fmt::Display for Thresholds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "call {:.3} raise_small {:.3} raise_big {:.3}",
            self.call, self.raise_small, self.raise_big
        )
    }
}
