//! # weighted-id3
//!
//! An ID3 decision tree learner for purely nominal data, where the information gain of each
//! attribute is multiplied by a per-attribute weight before the split attribute of a node is
//! chosen. Among the attributes whose weighted gain is above the average, the one with the best
//! gain ratio wins; a node becomes a leaf once no attribute is informative anymore.
//!
//! The crate provides:
//! - a small nominal data model (`nominal`) with headers, datasets and label encoding
//! - weight estimators (`machine_learning::AttributeWeightEstimator`) and the tree itself
//!   (`machine_learning::WeightedId3`)
//! - three renderings of a built tree: indented text, Graphviz DOT and Rust source
//! - embedded nominal datasets and a train/test split utility
//!
//! # Example
//! ```rust
//! use weighted_id3::prelude::*;
//!
//! let data = load_weather_nominal();
//! let mut tree = WeightedId3::default();
//! tree.fit(&data).unwrap();
//!
//! let play = tree
//!     .classify_labels(&[Some("overcast"), Some("hot"), Some("high"), Some("FALSE"), None])
//!     .unwrap();
//! assert_eq!(play.as_deref(), Some("yes"));
//! println!("{}", tree.to_graph().unwrap());
//! ```

/// Error types of the crate
pub mod error;

pub use error::{IoError, ModelError};

pub(crate) use serde::{Deserialize, Serialize};

/// A macro that generates a getter method for any field.
///
/// This macro creates a public getter method that returns the value or reference
/// of the specified field. The generated method includes appropriate documentation
/// describing the field being accessed.
///
/// # Parameters
///
/// - `$method_name` - The name of the getter method (e.g., get_tolerance)
/// - `$field_name` - The name of the field to access (e.g., tolerance)
/// - `$return_type` - The return type of the getter method
///
/// # Generated Method
///
/// The macro generates a method that returns the field value,
/// with documentation that describes what field is being accessed.
macro_rules! get_field {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name
        }
    };
}

/// A macro that generates a public getter method returning a reference to an optional field.
///
/// # Parameters
///
/// - `$method_name` - The identifier for the generated getter method name
/// - `$field_name` - The identifier of the struct field to access (an `Option<T>`)
/// - `$return_type` - The type expression for the return value (`Option<&T>`)
///
/// # Generated Method
///
/// The macro generates a method that returns the field through `Option::as_ref`,
/// with documentation that describes what field is being accessed
macro_rules! get_field_as_ref {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field as a reference")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name.as_ref()
        }
    };
}

/// Module `math` contains the count-level functions the tree learner is built on.
///
/// # Core Functions
///
/// - `entropy` - Entropy in bits of a vector of counts (class counts or partition sizes)
/// - `gain_ratio` - Information gain divided by split information, 0 when the split information is 0
/// - `normalize` - Scales a vector of counts into a distribution
/// - `max_index` - First index of the maximum of a vector
///
/// # Example
/// ```rust
/// use weighted_id3::math::{entropy, gain_ratio};
/// use ndarray::array;
///
/// let class_counts = array![9.0, 5.0];
/// let h = entropy(&class_counts);
/// assert!((h - 0.940286).abs() < 1e-6);
/// assert_eq!(gain_ratio(h, 0.0), 0.0);
/// ```
pub mod math;

/// Module `nominal` provides the data model: attributes, headers and datasets of nominal values.
///
/// Values are stored as `f64` cells holding the index of the value in the attribute domain,
/// with `NaN` marking a missing value.
///
/// # Example
/// ```rust
/// use weighted_id3::nominal::Instances;
///
/// let rows = vec![vec!["red", "yes"], vec!["blue", "no"], vec!["?", "yes"]];
/// let data = Instances::from_nominal_rows("colors", &["color", "like"], &rows).unwrap();
///
/// assert_eq!(data.num_instances(), 3);
/// assert_eq!(data.class_attribute().name(), "like");
/// assert!(data.has_missing_value(2));
/// ```
pub mod nominal;

/// Module `machine_learning` provides the weighted ID3 decision tree and the attribute weight
/// estimators it is trained with.
///
/// # Components
///
/// - **WeightedId3**: the classifier facade (fit, classify, distribution, batch prediction, rendering, persistence)
/// - **AttributeWeights**: the attribute-name to weight map consumed by the tree
/// - **AttributeWeightEstimator**: trait for weight estimators, implemented by `UniformWeights` and `OneRWeights`
/// - **decision_tree::gain**: dataset-level entropy, split information and information gain
/// - **decision_tree::render**: text, DOT and source renderings of a tree
pub mod machine_learning;

/// Embedded nominal datasets for experimentation and tests.
///
/// # Available Datasets
/// - **weather_nominal**: the classic play-tennis data (14 instances, 4 attributes, 2 classes)
/// - **contact_lenses**: contact lens prescription data (24 instances, 4 attributes, 3 classes)
///
/// # Examples
/// ```rust
/// use weighted_id3::dataset::weather_nominal::load_weather_nominal;
///
/// let data = load_weather_nominal();
/// assert_eq!(data.num_instances(), 14);
/// assert_eq!(data.class_attribute().name(), "play");
/// ```
#[cfg(feature = "dataset")]
pub mod dataset;

/// Data preparation utilities.
///
/// # Data Preprocessing
/// - **train_test_split**: Splits a dataset into training and test sets with a configurable ratio and seed
///
/// # Examples
/// ```rust
/// use weighted_id3::dataset::weather_nominal::load_weather_nominal;
/// use weighted_id3::utility::train_test_split;
///
/// let data = load_weather_nominal();
/// let (train, test) = train_test_split(&data, Some(0.3), Some(42)).unwrap();
/// assert_eq!(train.num_instances() + test.num_instances(), 14);
/// ```
#[cfg(feature = "utility")]
pub mod utility;

/// A convenience module that re-exports the most commonly used types and traits from this crate.
///
/// # Examples
/// ```rust
/// use weighted_id3::prelude::*;
///
/// let tree = WeightedId3::default();
/// assert!(matches!(tree.classify(&[0.0]), Err(ModelError::NotFitted)));
/// ```
pub mod prelude;
