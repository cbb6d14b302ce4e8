//! Options-strategy evaluation engine.
//!
//! Pure, synchronous kernels over immutable value types: a Black-Scholes
//! pricing kernel, a symbolic strike resolver, a day-stepped theta-decay
//! simulator, an option-implied probability distribution extractor, and an
//! edge filter that ranks candidate spreads by probability of finishing
//! past breakeven.
//!
//! The crate owns no I/O. Market data, strategy definitions, and candidate
//! spreads arrive from external collaborators as plain structured data;
//! results leave the same way. Every evaluation is a pure function of its
//! inputs, so callers are free to fan work out across threads and recombine
//! by key.

pub mod edge;
pub mod errors;
pub mod models;
pub mod oipd;
pub mod sim;
pub mod strikes;
pub mod types;

pub use edge::score_and_filter;
pub use errors::{EngineError, EngineResult, ErrorPayload};
pub use models::black_scholes::price_leg;
pub use models::{LegQuote, QuoteParams};
pub use oipd::{extract, ProbabilityDistribution};
pub use sim::{StrategySimulator, DEFAULT_RISK_FREE_RATE};
pub use types::{
    CandidateSpread, MarketSnapshot, Moneyness, OptionChain, OptionLeg, OptionType,
    ScoredStrategy, SimulationPoint, SimulationResult, StrategyDefinition, StrikeSpec,
    DEFAULT_IMPLIED_VOL,
};
