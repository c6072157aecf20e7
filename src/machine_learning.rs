use crate::error::ModelError;
use crate::nominal::{Attribute, Header, Instances};
use crate::{Deserialize, Serialize};
use ahash::AHashMap;
use log::{debug, trace, warn};
use ndarray::{Array1, Array2};
use rayon::prelude::*;

/// Per-attribute weights and the estimators that produce them
pub mod attribute_weight;
/// Weighted ID3 decision tree for nominal data
pub mod decision_tree;
/// This module provides helper functions for machine learning models
mod helper_function;

pub use attribute_weight::*;
pub use decision_tree::*;
