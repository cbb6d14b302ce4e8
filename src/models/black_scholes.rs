use crate::models::{LegQuote, QuoteParams};
use crate::types::OptionType;

/// Black-Scholes pricing for one European leg.
///
/// d1 = (ln(S/K) + (r + sigma^2/2)*T) / (sigma * sqrt(T))
/// d2 = d1 - sigma * sqrt(T)
///
/// Call: price = S*N(d1) - K*e^{-rT}*N(d2), delta = N(d1)
/// Put:  price = K*e^{-rT}*N(-d2) - S*N(-d1), delta = N(d1) - 1
///
/// Theta is returned per calendar day (annualized / 365).
///
/// N(x) is the Zelen-Severo polynomial approximation, kept for numeric
/// parity with downstream consumers. All computation uses precomputed
/// QuoteParams. Pure function, no allocations.

// Zelen-Severo polynomial coefficients
const A1: f64 = 0.319381530;
const A2: f64 = -0.356563782;
const A3: f64 = 1.781477937;
const A4: f64 = -1.821255978;
const A5: f64 = 1.330274429;
const P: f64 = 0.2316419;
/// 1/sqrt(2*pi)
const C: f64 = 0.39894228;

const DAYS_PER_YEAR: f64 = 365.0;

/// Standard normal CDF via the Zelen-Severo polynomial.
/// Branches on the sign of x to keep the approximation accurate on both
/// tails; max absolute error is below 1e-7 on the real line.
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    if x < 0.0 {
        return 1.0 - norm_cdf(-x);
    }
    let k = 1.0 / (1.0 + P * x);
    let poly = k * (A1 + k * (A2 + k * (A3 + k * (A4 + k * A5))));
    1.0 - C * (-0.5 * x * x).exp() * poly
}

/// Standard normal density.
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    C * (-0.5 * x * x).exp()
}

/// Price one leg from precomputed params.
///
/// Pure function: deterministic output from inputs only. Preconditions
/// (S, K, T, sigma all positive) are enforced by `QuoteParams::new`, so no
/// branch here can produce NaN.
#[inline]
pub fn price_leg(params: &QuoteParams, option_type: OptionType) -> LegQuote {
    let d1 = (params.ln_s_k + (params.rate + 0.5 * params.vol * params.vol) * params.t_years)
        / params.vol_sqrt_t;
    let d2 = d1 - params.vol_sqrt_t;

    let s = params.spot;
    let k_disc = params.strike * params.discount;
    let decay = -(s * params.vol * norm_pdf(d1)) / (2.0 * params.sqrt_t);

    let (price, delta, annual_theta) = match option_type {
        OptionType::Call => {
            let nd1 = norm_cdf(d1);
            let nd2 = norm_cdf(d2);
            (
                s * nd1 - k_disc * nd2,
                nd1,
                decay - params.rate * k_disc * nd2,
            )
        }
        OptionType::Put => {
            let nd1 = norm_cdf(d1);
            let n_neg_d2 = norm_cdf(-d2);
            (
                k_disc * n_neg_d2 - s * norm_cdf(-d1),
                nd1 - 1.0,
                decay + params.rate * k_disc * n_neg_d2,
            )
        }
    };

    LegQuote {
        price,
        delta,
        theta: annual_theta / DAYS_PER_YEAR,
    }
}
