use crate::types::{Moneyness, OptionType, StrikeSpec};

/// Map a strike spec to an absolute price.
///
/// Absolute specs pass through untouched. Symbolic specs resolve against
/// spot with direction depending on option type: OTM is above spot for
/// calls and below spot for puts, ITM the reverse.
///
/// Pure function: deterministic from inputs.
#[inline]
pub fn resolve(option_type: OptionType, spec: &StrikeSpec, spot: f64) -> f64 {
    let moneyness = match spec {
        StrikeSpec::Absolute(strike) => return *strike,
        StrikeSpec::Relative(m) => m,
    };

    let multiplier = match (moneyness, option_type) {
        (Moneyness::Atm, _) => 1.0,
        (Moneyness::Itm, OptionType::Call) => 0.95,
        (Moneyness::Itm, OptionType::Put) => 1.05,
        (Moneyness::Otm, OptionType::Call) => 1.05,
        (Moneyness::Otm, OptionType::Put) => 0.95,
        (Moneyness::OtmNear, OptionType::Call) => 1.025,
        (Moneyness::OtmNear, OptionType::Put) => 0.975,
        (Moneyness::OtmFar, OptionType::Call) => 1.10,
        (Moneyness::OtmFar, OptionType::Put) => 0.90,
    };

    spot * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_passthrough() {
        let spec = StrikeSpec::Absolute(123.45);
        assert_eq!(resolve(OptionType::Call, &spec, 100.0), 123.45);
        assert_eq!(resolve(OptionType::Put, &spec, 100.0), 123.45);
    }

    #[test]
    fn test_atm_is_spot_for_both_types() {
        let spec = StrikeSpec::Relative(Moneyness::Atm);
        assert_eq!(resolve(OptionType::Call, &spec, 100.0), 100.0);
        assert_eq!(resolve(OptionType::Put, &spec, 100.0), 100.0);
    }

    #[test]
    fn test_moneyness_table() {
        let spot = 100.0;
        let cases = [
            (Moneyness::Itm, OptionType::Call, 95.0),
            (Moneyness::Itm, OptionType::Put, 105.0),
            (Moneyness::Otm, OptionType::Call, 105.0),
            (Moneyness::Otm, OptionType::Put, 95.0),
            (Moneyness::OtmNear, OptionType::Call, 102.5),
            (Moneyness::OtmNear, OptionType::Put, 97.5),
            (Moneyness::OtmFar, OptionType::Call, 110.0),
            (Moneyness::OtmFar, OptionType::Put, 90.0),
        ];
        for (m, ty, expected) in cases {
            let got = resolve(ty, &StrikeSpec::Relative(m), spot);
            assert!(
                (got - expected).abs() < 1e-12,
                "{m:?}/{ty} resolved to {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_unknown_spec_parses_to_spot() {
        // Parse-time fallback: garbage strings become ATM, which is spot.
        let spec = StrikeSpec::parse_symbolic("way_otm");
        assert_eq!(resolve(OptionType::Call, &spec, 87.5), 87.5);
    }
}
