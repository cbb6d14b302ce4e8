use crate::types::OptionChain;

/// Option-implied probability distribution.
///
/// Discrete probability mass per strike, extracted from call prices via an
/// absolute second difference. This is deliberately the simplified
/// finite-difference estimate, not a Breeden-Litzenberger risk-neutral
/// density (no discount-factor scaling, no continuous-strike limit); the
/// simplification is part of the contract and must not be corrected here.
///
/// Chain problems (missing strikes, misaligned arrays, zero total density)
/// never abort: the distribution degrades to "no information" and consumers
/// receive a neutral 0.5 prior from `probability_above`.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct ProbabilityDistribution {
    /// (strike, mass) pairs in chain order. Masses are non-negative and sum
    /// to 1 when the chain carried any density.
    pub masses: Vec<(f64, f64)>,
}

impl ProbabilityDistribution {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Cumulative probability that the underlying finishes at or above
    /// `target_price`. Clamped to [0, 1]. An empty or zero-density
    /// distribution reports the neutral prior 0.5 rather than 0: no
    /// information is not the same as zero probability everywhere.
    pub fn probability_above(&self, target_price: f64) -> f64 {
        if self.masses.is_empty() {
            return 0.5;
        }
        let total: f64 = self.masses.iter().map(|(_, p)| p).sum();
        if total <= 0.0 {
            return 0.5;
        }

        self.masses
            .iter()
            .filter(|(strike, _)| *strike >= target_price)
            .map(|(_, p)| p)
            .sum::<f64>()
            .clamp(0.0, 1.0)
    }
}

/// Extract the implied distribution from a chain snapshot.
///
/// density[i] = |call[i-1] - 2*call[i] + call[i+1]|, with a missing
/// neighbor at either boundary substituted by call[i] itself (so both end
/// strikes carry zero density). Normalized to sum to 1; an all-zero
/// density chain yields all-zero masses.
pub fn extract(chain: &OptionChain) -> ProbabilityDistribution {
    if chain.strikes.is_empty() {
        tracing::warn!("empty option chain, returning empty distribution");
        return ProbabilityDistribution::default();
    }
    if chain.calls.len() != chain.strikes.len() {
        tracing::warn!(
            strikes = chain.strikes.len(),
            calls = chain.calls.len(),
            "misaligned chain arrays, returning empty distribution"
        );
        return ProbabilityDistribution::default();
    }

    let n = chain.strikes.len();
    let mut densities = Vec::with_capacity(n);
    let mut total = 0.0;

    for i in 0..n {
        // A missing neighbor substitutes the center price itself, which
        // collapses the second difference to zero at both end strikes.
        let density = if i == 0 || i + 1 == n {
            0.0
        } else {
            (chain.calls[i - 1] - 2.0 * chain.calls[i] + chain.calls[i + 1]).abs()
        };
        total += density;
        densities.push(density);
    }

    if total <= 0.0 {
        tracing::warn!("zero total density in chain, distribution carries no information");
        return ProbabilityDistribution {
            masses: chain.strikes.iter().map(|&k| (k, 0.0)).collect(),
        };
    }

    ProbabilityDistribution {
        masses: chain
            .strikes
            .iter()
            .zip(densities)
            .map(|(&k, d)| (k, d / total))
            .collect(),
    }
}
