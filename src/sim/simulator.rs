use crate::errors::{EngineError, EngineResult};
use crate::models::black_scholes::price_leg;
use crate::models::QuoteParams;
use crate::strikes;
use crate::types::{SimulationPoint, SimulationResult, StrategyDefinition};
use chrono::{Days, NaiveDate};

pub const DEFAULT_RISK_FREE_RATE: f64 = 0.05;

/// Day-by-day theta-decay simulator for a multi-leg strategy.
///
/// Walks from the evaluation date to expiry one calendar day at a time,
/// re-pricing every leg with its remaining time and summing value and
/// per-day theta weighted by signed quantity. The curve truncates at
/// expiry: no point is emitted once remaining time reaches zero.
///
/// Pure computation: same strategy, spot, and date always produce the
/// same result. Each leg, and each day, is independent of the others.
#[derive(Debug, Clone, Copy)]
pub struct StrategySimulator {
    /// Annualized risk-free rate used for every leg.
    pub risk_free_rate: f64,
}

impl Default for StrategySimulator {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
        }
    }
}

impl StrategySimulator {
    pub fn new(risk_free_rate: f64) -> Self {
        Self { risk_free_rate }
    }

    /// Simulate the strategy mark from `evaluation_date` to expiry.
    ///
    /// Fails fast on structural problems (empty legs, blank ticker,
    /// non-future expiry). Leg-level pricing guards reject degenerate
    /// caller inputs (non-positive vol or strike) as validation errors
    /// rather than letting NaN flow into the curve.
    pub fn simulate(
        &self,
        strategy: &StrategyDefinition,
        spot_price: f64,
        evaluation_date: NaiveDate,
    ) -> EngineResult<SimulationResult> {
        if strategy.legs.is_empty() || strategy.ticker.trim().is_empty() {
            return Err(EngineError::Validation(
                "missing required parameters".into(),
            ));
        }

        let days_to_expiry = (strategy.expiry - evaluation_date).num_days();
        if days_to_expiry <= 0 {
            return Err(EngineError::Validation(
                "expiry must be in the future".into(),
            ));
        }

        if spot_price <= 0.0 || !spot_price.is_finite() {
            return Err(EngineError::Validation(format!(
                "spot price must be positive, got {spot_price}"
            )));
        }

        let total_days = (days_to_expiry as f64).ceil() as u32;
        let mut points = Vec::with_capacity(total_days as usize);

        for day in 0..total_days {
            let t_remaining = (days_to_expiry as f64 - day as f64) / 365.0;
            if t_remaining <= 0.0 {
                break;
            }

            let mut value = 0.0;
            let mut theta = 0.0;

            for leg in &strategy.legs {
                let strike = strikes::resolve(leg.option_type, &leg.strike, spot_price);
                let params =
                    QuoteParams::new(spot_price, strike, t_remaining, self.risk_free_rate, leg.vol())
                        .map_err(|e| {
                            // Caller-supplied leg inputs were degenerate
                            EngineError::Validation(e.message().to_string())
                        })?;
                let quote = price_leg(&params, leg.option_type);
                let quantity = leg.quantity as f64;
                value += quote.price * quantity;
                theta += quote.theta * quantity;
            }

            let date = evaluation_date
                .checked_add_days(Days::new(day as u64))
                .ok_or_else(|| {
                    EngineError::Validation(format!("evaluation date overflow at day {day}"))
                })?;

            points.push(SimulationPoint {
                day,
                date,
                value,
                theta,
            });
        }

        let net_theta = points.first().map(|p| p.theta).unwrap_or(0.0);
        let avg_theta = if points.is_empty() {
            0.0
        } else {
            points.iter().map(|p| p.theta).sum::<f64>() / points.len() as f64
        };

        Ok(SimulationResult {
            points,
            net_theta,
            avg_theta,
            spot_price,
        })
    }
}
