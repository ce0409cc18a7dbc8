pub mod cg;
pub mod common;
pub mod lbfgs;

pub use cg::ConjugateGradient;
pub use common::{MinimizeReport, SolverTraceRecord, Termination};
pub use lbfgs::Lbfgs;
