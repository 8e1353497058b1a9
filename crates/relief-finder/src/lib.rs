//! Relief-program matching core: a static program catalog, a weighted
//! eligibility scoring engine, recommendation ranking, and best-effort
//! profile synthesis from extracted credit-report data.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
