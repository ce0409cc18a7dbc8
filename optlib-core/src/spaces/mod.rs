pub mod dense;
pub mod euclidean;
pub mod space;

pub use dense::{DenseSpace, DynSpace, FixedSpace};
pub use euclidean::EuclideanSpace;
pub use space::Space;
