pub mod simulator;

pub use simulator::{StrategySimulator, DEFAULT_RISK_FREE_RATE};
