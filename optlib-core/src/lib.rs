//! optlib: small unconstrained minimizers for smooth objectives
//!
//! - `Space`: vector operations the solvers need (`EuclideanSpace` on
//!   `Vec<f64>`, `DenseSpace` on nalgebra vectors of fixed or dynamic size)
//! - `Objective`: value and gradient of the function to minimize, with a
//!   central-difference gradient by default
//! - `LineSearch`: Armijo backtracking (`Backtracking`) and a
//!   cubic-interpolating variant (`BacktrackingCurvature`)
//! - `ConjugateGradient`: Fletcher–Reeves nonlinear conjugate gradient
//! - `Lbfgs`: limited-memory BFGS with a fixed-width correction history
//!
//! Solvers update the caller's point in place and return a
//! `MinimizeReport` describing why they stopped.

pub mod error;
pub mod line_search;
pub mod problems;
pub mod solvers;
pub mod spaces;

pub use error::{OptError, OptResult};
pub use line_search::{
    Backtracking, BacktrackingCurvature, LineSearch, LineSearchContext, LineSearchError,
};
pub use problems::{FnObjective, Objective};
pub use solvers::{ConjugateGradient, Lbfgs, MinimizeReport, SolverTraceRecord, Termination};
pub use spaces::{DenseSpace, DynSpace, EuclideanSpace, FixedSpace, Space};
