use crate::oipd;
use crate::strikes;
use crate::types::{CandidateSpread, OptionChain, ScoredStrategy};

/// Probability floor: spreads at or below this are discarded.
const MIN_PROBABILITY: f64 = 0.4;
/// Above this the spread is rated HIGH EDGE.
const HIGH_EDGE_PROBABILITY: f64 = 0.6;

pub const STATUS_HIGH_EDGE: &str = "HIGH EDGE";
pub const STATUS_MEDIUM: &str = "MEDIUM";
pub const STATUS_LOW_PROB: &str = "LOW PROB";

/// Score candidate spreads against the option-implied distribution and keep
/// only those with meaningful probability of finishing past breakeven.
///
/// The distribution is extracted once per chain; each candidate is then
/// scored independently (candidates never interact), so the per-spread loop
/// could be fanned out across workers without changing the result.
///
/// Breakeven precedence per spread: explicit `short_strike`, else explicit
/// `breakeven`, else first leg strike minus credit. A spread carrying none
/// of the three scores against spot itself (neutral) with a warning.
///
/// Output is sorted by probability descending and excludes everything with
/// probability <= 0.4.
pub fn score_and_filter(
    candidates: Vec<CandidateSpread>,
    chain: &OptionChain,
    spot_price: f64,
) -> Vec<ScoredStrategy> {
    let distribution = oipd::extract(chain);

    let mut scored: Vec<ScoredStrategy> = candidates
        .into_iter()
        .map(|spread| {
            let breakeven = breakeven_for(&spread, spot_price);
            let probability = distribution.probability_above(breakeven);
            let (edge_score, status) = rate(probability);
            ScoredStrategy {
                spread,
                probability,
                edge_score,
                status,
            }
        })
        .filter(|s| s.probability > MIN_PROBABILITY)
        .collect();

    scored.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    scored
}

#[inline]
fn rate(probability: f64) -> (u32, &'static str) {
    if probability > HIGH_EDGE_PROBABILITY {
        (95, STATUS_HIGH_EDGE)
    } else if probability > MIN_PROBABILITY {
        (75, STATUS_MEDIUM)
    } else {
        (40, STATUS_LOW_PROB)
    }
}

fn breakeven_for(spread: &CandidateSpread, spot_price: f64) -> f64 {
    if let Some(short_strike) = spread.short_strike {
        return short_strike;
    }
    if let Some(breakeven) = spread.breakeven {
        return breakeven;
    }
    if let Some(first_leg) = spread.legs.first() {
        let strike = strikes::resolve(first_leg.option_type, &first_leg.strike, spot_price);
        return strike - spread.credit;
    }
    tracing::warn!(
        spread = %spread.name,
        "no breakeven information on spread, scoring against spot"
    );
    spot_price
}
