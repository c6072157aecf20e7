//! Entropy-based split statistics over a subset of the training instances.
//!
//! Every function takes the dataset together with the row indices of the subset it measures,
//! so the builder never copies instances. Pass `data.all_rows()` to measure a whole dataset.

use super::*;
use crate::math::entropy as count_entropy;

/// Class entropy of a set of instances, in bits.
///
/// # Examples
/// ```rust
/// use weighted_id3::machine_learning::decision_tree::gain::entropy;
/// use weighted_id3::nominal::Instances;
///
/// let rows = vec![vec!["a", "yes"], vec!["b", "no"]];
/// let data = Instances::from_nominal_rows("toy", &["x", "class"], &rows).unwrap();
/// assert!((entropy(&data, &data.all_rows()) - 1.0).abs() < 1e-12);
/// ```
pub fn entropy(data: &Instances, rows: &[usize]) -> f64 {
    count_entropy(&data.class_counts(rows))
}

/// Split information of a nominal attribute: the entropy of the group sizes it induces.
///
/// Empty groups contribute nothing, and a set of fewer than two instances has split
/// information 0.
///
/// # Errors
///
/// - `ModelError::InputValidationError` - If the attribute index is out of range or the attribute is not nominal
pub fn split_info(data: &Instances, rows: &[usize], attribute: usize) -> Result<f64, ModelError> {
    nominal_attribute(data, attribute)?;
    let sizes: Array1<f64> = data
        .partition(rows, attribute)
        .iter()
        .map(|group| group.len() as f64)
        .collect();
    Ok(count_entropy(&sizes))
}

/// Unweighted information gain of splitting a set of instances on a nominal attribute.
///
/// `IG(D, a) = H(D) - Σ_v (|D_v| / |D|) * H(D_v)`; an empty set has gain 0.
///
/// # Errors
///
/// - `ModelError::InputValidationError` - If the attribute index is out of range or the attribute is not nominal
pub fn info_gain(data: &Instances, rows: &[usize], attribute: usize) -> Result<f64, ModelError> {
    nominal_attribute(data, attribute)?;
    Ok(split_statistics(data, rows, attribute).0)
}

/// Information gain multiplied by the weight of the attribute.
///
/// # Errors
///
/// - `ModelError::WeightContractError` - If the weight map has no positive, finite weight for the attribute
/// - `ModelError::InputValidationError` - If the attribute index is out of range or the attribute is not nominal
pub fn weighted_info_gain(
    data: &Instances,
    rows: &[usize],
    attribute: usize,
    weights: &AttributeWeights,
) -> Result<f64, ModelError> {
    let weight = weights.weight_of(nominal_attribute(data, attribute)?)?;
    Ok(split_statistics(data, rows, attribute).0 * weight)
}

/// Class entropy of a whole dataset.
pub fn entropy_of(data: &Instances) -> f64 {
    entropy(data, &data.all_rows())
}

/// Split information of an attribute over a whole dataset.
pub fn split_info_of(data: &Instances, attribute: usize) -> Result<f64, ModelError> {
    split_info(data, &data.all_rows(), attribute)
}

/// Unweighted information gain of an attribute over a whole dataset.
pub fn info_gain_of(data: &Instances, attribute: usize) -> Result<f64, ModelError> {
    info_gain(data, &data.all_rows(), attribute)
}

fn nominal_attribute(data: &Instances, attribute: usize) -> Result<&Attribute, ModelError> {
    match data.attribute(attribute) {
        Some(attr) if attr.is_nominal() => Ok(attr),
        Some(attr) => Err(ModelError::InputValidationError(format!(
            "Attribute '{}' is not nominal",
            attr.name()
        ))),
        None => Err(ModelError::InputValidationError(format!(
            "Attribute index {} is out of range",
            attribute
        ))),
    }
}

/// Computes the unweighted information gain and the split information of an attribute from
/// a single contingency table.
///
/// # Returns
///
/// * `(f64, f64)` - `(info_gain, split_info)`
pub(crate) fn split_statistics(data: &Instances, rows: &[usize], attribute: usize) -> (f64, f64) {
    let table = data.contingency(rows, attribute);
    let sizes = table.sum_axis(Axis(1));
    let total = sizes.sum();
    if total <= 0.0 {
        return (0.0, 0.0);
    }

    let parent = count_entropy(&table.sum_axis(Axis(0)));
    let remainder: f64 = table
        .rows()
        .into_iter()
        .zip(sizes.iter())
        .filter(|(_, size)| **size > 0.0)
        .map(|(counts, size)| size / total * count_entropy(&counts))
        .sum();

    ((parent - remainder).max(0.0), count_entropy(&sizes))
}
