//! Monster Hunter Rise build performance calculator.

pub mod calc;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod parallel;
pub mod server;
pub mod state;

pub use calc::performance::{calculate_build_performance, PerformanceResult};
pub use data::database::GameDatabase;
pub use error::{CalcError, StateError};
pub use state::{Build, CalcRequest, CalcState};
