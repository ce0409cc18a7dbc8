pub mod outcome;
pub mod trace;

pub use outcome::{MinimizeReport, Termination};
pub use trace::SolverTraceRecord;
