/// Prelude module for the dataset model and the tree learner.
pub mod machine_learning_prelude;
/// Prelude module for mathematical operations.
pub mod math_prelude;
/// Prelude module for embedded datasets.
#[cfg(feature = "dataset")]
pub mod dataset_prelude;
/// Prelude module for utility functions.
#[cfg(feature = "utility")]
pub mod utility_prelude;

pub use machine_learning_prelude::*;
pub use math_prelude::*;

#[cfg(feature = "dataset")]
pub use dataset_prelude::*;
#[cfg(feature = "utility")]
pub use utility_prelude::*;
