use chrono::NaiveDate;
use smallvec::SmallVec;
use std::str::FromStr;

/// Assumed implied volatility when a leg does not carry one.
pub const DEFAULT_IMPLIED_VOL: f64 = 0.5;

// ── Option identity ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

// ── Strike specification ──

/// Symbolic strike positioning relative to spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Moneyness {
    Atm,
    Itm,
    Otm,
    OtmNear,
    OtmFar,
}

impl FromStr for Moneyness {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "atm" => Ok(Self::Atm),
            "itm" => Ok(Self::Itm),
            "otm" => Ok(Self::Otm),
            "otm_near" => Ok(Self::OtmNear),
            "otm_far" => Ok(Self::OtmFar),
            _ => Err(()),
        }
    }
}

/// A strike is either an absolute price or a symbolic position.
///
/// Strategy sources supply strikes loosely typed (`105.0` or `"otm_near"`);
/// this union is built once at the deserialization boundary and never
/// re-inspected as a raw value downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrikeSpec {
    Absolute(f64),
    Relative(Moneyness),
}

impl StrikeSpec {
    /// Parse a symbolic spec. Unknown strings attempt a numeric parse; if
    /// that also fails the spec degrades to ATM, which resolves to spot.
    pub fn parse_symbolic(s: &str) -> Self {
        if let Ok(m) = Moneyness::from_str(s) {
            return Self::Relative(m);
        }
        if let Ok(v) = s.parse::<f64>() {
            return Self::Absolute(v);
        }
        tracing::warn!(spec = s, "unknown strike spec, falling back to spot");
        Self::Relative(Moneyness::Atm)
    }
}

impl serde::Serialize for StrikeSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absolute(v) => serializer.serialize_f64(*v),
            Self::Relative(m) => m.serialize(serializer),
        }
    }
}

impl<'de> serde::Deserialize<'de> for StrikeSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecVisitor;

        impl serde::de::Visitor<'_> for SpecVisitor {
            type Value = StrikeSpec;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a strike price or a symbolic strike spec")
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<StrikeSpec, E> {
                Ok(StrikeSpec::Absolute(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<StrikeSpec, E> {
                Ok(StrikeSpec::Absolute(v as f64))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<StrikeSpec, E> {
                Ok(StrikeSpec::Absolute(v as f64))
            }

            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<StrikeSpec, E> {
                Ok(StrikeSpec::parse_symbolic(s))
            }
        }

        deserializer.deserialize_any(SpecVisitor)
    }
}

// ── Strategy inputs ──

/// One leg of a multi-leg strategy. Negative quantity = short.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionLeg {
    #[serde(rename = "type")]
    pub option_type: OptionType,
    pub strike: StrikeSpec,
    pub quantity: i32,
    #[serde(default)]
    pub implied_vol: Option<f64>,
}

impl OptionLeg {
    #[inline]
    pub fn vol(&self) -> f64 {
        self.implied_vol.unwrap_or(DEFAULT_IMPLIED_VOL)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDefinition {
    pub ticker: String,
    pub expiry: NaiveDate,
    /// Leg order is irrelevant to valuation, relevant only for display.
    pub legs: SmallVec<[OptionLeg; 4]>,
}

// ── Market data ──

/// Strikes with index-aligned call/put price arrays.
///
/// Suppliers feeding real quotes must resolve their own price precedence
/// (close vs last quote vs mark) before constructing a chain; the engine
/// never re-derives prices from ambiguous fields.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct OptionChain {
    pub strikes: Vec<f64>,
    pub calls: Vec<f64>,
    pub puts: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub spot_price: f64,
    pub chain: OptionChain,
}

// ── Simulation outputs ──

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SimulationPoint {
    /// 0-based day offset from the evaluation date.
    pub day: u32,
    pub date: NaiveDate,
    /// Aggregate strategy mark across all legs.
    pub value: f64,
    /// Aggregate daily time-decay across all legs.
    pub theta: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub points: Vec<SimulationPoint>,
    /// Theta of the day-0 point.
    pub net_theta: f64,
    /// Arithmetic mean of theta across all points (0 if no points).
    pub avg_theta: f64,
    pub spot_price: f64,
}

// ── Edge-filter inputs/outputs ──

/// A candidate spread submitted for scoring. The optional fields feed the
/// breakeven precedence: `short_strike`, else `breakeven`, else first leg
/// strike minus `credit`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSpread {
    pub name: String,
    #[serde(default)]
    pub legs: SmallVec<[OptionLeg; 4]>,
    #[serde(default)]
    pub short_strike: Option<f64>,
    #[serde(default)]
    pub breakeven: Option<f64>,
    #[serde(default)]
    pub credit: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredStrategy {
    pub spread: CandidateSpread,
    /// P(underlying >= breakeven at expiry) under the option-implied
    /// distribution.
    pub probability: f64,
    /// Categorical rank: 95, 75, or 40.
    pub edge_score: u32,
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strike_spec_from_number_and_string() {
        let abs: StrikeSpec = serde_json::from_str("105.5").unwrap();
        assert_eq!(abs, StrikeSpec::Absolute(105.5));

        let rel: StrikeSpec = serde_json::from_str("\"otm_near\"").unwrap();
        assert_eq!(rel, StrikeSpec::Relative(Moneyness::OtmNear));

        let numeric_string: StrikeSpec = serde_json::from_str("\"120\"").unwrap();
        assert_eq!(numeric_string, StrikeSpec::Absolute(120.0));
    }

    #[test]
    fn test_unknown_spec_degrades_to_atm() {
        let spec: StrikeSpec = serde_json::from_str("\"deep_otm\"").unwrap();
        assert_eq!(spec, StrikeSpec::Relative(Moneyness::Atm));
    }

    #[test]
    fn test_leg_vol_default() {
        let leg = OptionLeg {
            option_type: OptionType::Call,
            strike: StrikeSpec::Relative(Moneyness::Atm),
            quantity: 1,
            implied_vol: None,
        };
        assert_eq!(leg.vol(), DEFAULT_IMPLIED_VOL);
    }

    #[test]
    fn test_leg_deserializes_spec_shape() {
        let leg: OptionLeg = serde_json::from_str(
            r#"{"type":"put","strike":"otm_far","quantity":-1,"impliedVol":0.35}"#,
        )
        .unwrap();
        assert_eq!(leg.option_type, OptionType::Put);
        assert_eq!(leg.strike, StrikeSpec::Relative(Moneyness::OtmFar));
        assert_eq!(leg.quantity, -1);
        assert_eq!(leg.implied_vol, Some(0.35));
    }
}
