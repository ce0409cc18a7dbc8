pub mod objective;

pub use objective::{central_difference_gradient, FnObjective, Objective};
