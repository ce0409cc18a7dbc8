mod history;
mod solve;
mod types;

pub use types::Lbfgs;
