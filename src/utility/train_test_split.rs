use crate::error::ModelError;
use crate::nominal::Instances;
use rand::{SeedableRng, rng, rngs::StdRng, seq::SliceRandom};

/// Splits a dataset into training and test sets
///
/// Instances are shuffled before the split; with a seed the shuffle, and therefore the split,
/// is reproducible. Both sets keep the header of `data`.
///
/// # Parameters
///
/// - `data` - The dataset to split
/// - `test_size` - Fraction of the instances placed in the test set, default is 0.3 (30%)
/// - `random_state` - Random seed, default is None
///
/// # Returns
///
/// - `Result<(Instances, Instances), ModelError>` - Returns a tuple `(train, test)` if processing successfully
///
/// # Errors
///
/// - Returns `ModelError::InputValidationError` if the dataset has fewer than 2 instances or if `test_size` is not between 0 and 1.
///
/// # Example
/// ```rust
/// use weighted_id3::nominal::Instances;
/// use weighted_id3::utility::train_test_split::train_test_split;
///
/// let rows = vec![
///     vec!["a", "yes"],
///     vec!["b", "no"],
///     vec!["a", "yes"],
///     vec!["b", "no"],
///     vec!["a", "no"],
/// ];
/// let data = Instances::from_nominal_rows("toy", &["x", "class"], &rows).unwrap();
/// let (train, test) = train_test_split(&data, Some(0.4), Some(42)).unwrap();
/// assert_eq!(train.num_instances(), 3);
/// assert_eq!(test.num_instances(), 2);
/// ```
pub fn train_test_split(
    data: &Instances,
    test_size: Option<f64>,
    random_state: Option<u64>,
) -> Result<(Instances, Instances), ModelError> {
    let n_samples = data.num_instances();

    // Set test size, default is 0.3
    let test_size = test_size.unwrap_or(0.3);
    if test_size <= 0.0 || test_size >= 1.0 || test_size.is_nan() {
        return Err(ModelError::InputValidationError(format!(
            "test_size must be between 0 and 1 (exclusive), got {}",
            test_size
        )));
    }

    // Both sets need at least one instance
    let n_test = match n_samples {
        0 | 1 => {
            return Err(ModelError::InputValidationError(format!(
                "Cannot split a dataset with {} instances into train and test sets",
                n_samples
            )));
        }
        2 => 1,
        _ => ((n_samples as f64 * test_size).round() as usize).clamp(1, n_samples - 1),
    };

    let mut indices = data.all_rows();

    match random_state {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            indices.shuffle(&mut rng);
        }
        None => {
            let mut rng = rng();
            indices.shuffle(&mut rng);
        }
    }

    let (test_indices, train_indices) = indices.split_at(n_test);

    Ok((data.subset(train_indices), data.subset(test_indices)))
}
