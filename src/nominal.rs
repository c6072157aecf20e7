use crate::error::ModelError;
use crate::{Deserialize, Serialize};
use ahash::AHashSet;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Label used in string rows to mark a missing value (ARFF convention)
pub const MISSING_LABEL: &str = "?";

/// Attribute metadata: name, kind and ordered domain of nominal values
pub mod attribute;
/// Tabular dataset of nominal instances together with its header
pub mod instances;

pub use attribute::*;
pub use instances::*;
