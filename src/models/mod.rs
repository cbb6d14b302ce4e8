pub mod black_scholes;

use crate::errors::{EngineError, EngineResult};

/// Precomputed pricing inputs for one leg. Stack-allocated, Copy.
///
/// The constructor is the computation boundary: degenerate inputs that would
/// otherwise surface as NaN or division-by-zero downstream are rejected here.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct QuoteParams {
    pub spot: f64,
    pub strike: f64,
    pub t_years: f64,
    pub rate: f64,
    pub vol: f64,
    // Precomputed
    pub ln_s_k: f64,
    pub sqrt_t: f64,
    pub vol_sqrt_t: f64,
    pub discount: f64,
}

impl QuoteParams {
    pub fn new(spot: f64, strike: f64, t_years: f64, rate: f64, vol: f64) -> EngineResult<Self> {
        if spot <= 0.0 || !spot.is_finite() {
            return Err(EngineError::Computation(format!("spot must be positive, got {spot}")));
        }
        if strike <= 0.0 || !strike.is_finite() {
            return Err(EngineError::Computation(format!(
                "strike must be positive, got {strike}"
            )));
        }
        if t_years <= 0.0 || !t_years.is_finite() {
            return Err(EngineError::Computation(format!(
                "time to expiry must be positive, got {t_years}"
            )));
        }
        if vol <= 0.0 || !vol.is_finite() {
            return Err(EngineError::Computation(format!(
                "volatility must be positive, got {vol}"
            )));
        }

        let sqrt_t = t_years.sqrt();
        Ok(Self {
            spot,
            strike,
            t_years,
            rate,
            vol,
            ln_s_k: (spot / strike).ln(),
            sqrt_t,
            vol_sqrt_t: vol * sqrt_t,
            discount: (-rate * t_years).exp(),
        })
    }
}

/// Closed-form price and greeks for one leg. Stack-allocated.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct LegQuote {
    pub price: f64,
    /// Price sensitivity to spot.
    pub delta: f64,
    /// Time decay per calendar day (annualized theta / 365).
    pub theta: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_inputs_rejected() {
        assert!(QuoteParams::new(0.0, 100.0, 0.1, 0.05, 0.2).is_err());
        assert!(QuoteParams::new(100.0, -5.0, 0.1, 0.05, 0.2).is_err());
        assert!(QuoteParams::new(100.0, 100.0, 0.0, 0.05, 0.2).is_err());
        assert!(QuoteParams::new(100.0, 100.0, 0.1, 0.05, 0.0).is_err());
        assert!(QuoteParams::new(f64::NAN, 100.0, 0.1, 0.05, 0.2).is_err());
    }

    #[test]
    fn test_precompute_consistency() {
        let p = QuoteParams::new(100.0, 95.0, 30.0 / 365.0, 0.05, 0.2).unwrap();
        assert!((p.ln_s_k - (100.0_f64 / 95.0).ln()).abs() < 1e-15);
        assert!((p.vol_sqrt_t - 0.2 * p.sqrt_t).abs() < 1e-15);
        assert!((p.discount - (-0.05 * p.t_years).exp()).abs() < 1e-15);
    }
}
