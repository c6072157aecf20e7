use super::*;
use super::gain::split_statistics;

/// Split statistics of one candidate attribute at a node.
///
/// # Fields
///
/// - `attribute` - Column index of the attribute
/// - `weighted_gain` - Information gain multiplied by the attribute weight
/// - `split_info` - Split information of the attribute over the node's instances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeScore {
    pub attribute: usize,
    pub weighted_gain: f64,
    pub split_info: f64,
}

impl AttributeScore {
    /// Gain ratio of the weighted gain, 0.0 when the split information is 0.
    pub fn gain_ratio(&self) -> f64 {
        gain_ratio(self.weighted_gain, self.split_info)
    }
}

/// Outcome of split selection at a node.
///
/// # Variants
///
/// - `Leaf` - No attribute is informative enough; the node becomes a leaf
/// - `Split` - The node splits on the attribute with this column index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDecision {
    Leaf,
    Split(usize),
}

/// Chooses the split attribute among scored candidates.
///
/// Attributes whose weighted gain is strictly above the average weighted gain compete on
/// gain ratio. When no attribute is above the average (all gains equal), the attribute with
/// the largest weighted gain wins. Ties go to the lowest attribute index in both rounds.
///
/// # Parameters
///
/// * `scores` - One score per attribute still available at the node
///
/// # Returns
///
/// * `Option<AttributeScore>` - The winning score, `None` if `scores` is empty
///
/// # Examples
/// ```rust
/// use weighted_id3::machine_learning::{choose_attribute, AttributeScore};
///
/// let scores = [
///     AttributeScore { attribute: 0, weighted_gain: 0.30, split_info: 2.0 },
///     AttributeScore { attribute: 1, weighted_gain: 0.25, split_info: 1.0 },
///     AttributeScore { attribute: 2, weighted_gain: 0.05, split_info: 1.0 },
/// ];
/// // Attributes 0 and 1 are above the average; attribute 1 has the better gain ratio
/// assert_eq!(choose_attribute(&scores).map(|s| s.attribute), Some(1));
/// ```
pub fn choose_attribute(scores: &[AttributeScore]) -> Option<AttributeScore> {
    if scores.is_empty() {
        return None;
    }

    let average = scores.iter().map(|s| s.weighted_gain).sum::<f64>() / scores.len() as f64;

    let mut best: Option<(AttributeScore, f64)> = None;
    for score in scores.iter().filter(|s| s.weighted_gain > average) {
        let ratio = score.gain_ratio();
        let better = match best {
            None => true,
            Some((current, best_ratio)) => {
                ratio > best_ratio || (ratio == best_ratio && score.attribute < current.attribute)
            }
        };
        if better {
            best = Some((*score, ratio));
        }
    }

    if let Some((score, _)) = best {
        return Some(score);
    }

    scores.iter().copied().reduce(|current, score| {
        if score.weighted_gain > current.weighted_gain
            || (score.weighted_gain == current.weighted_gain
                && score.attribute < current.attribute)
        {
            score
        } else {
            current
        }
    })
}

/// Scores the attributes available at a node and decides whether and where to split.
///
/// Scoring is spread over the rayon thread pool once `rows * attributes` reaches the
/// parallel threshold. The result does not depend on whether scoring ran in parallel.
#[derive(Debug, Clone, Copy)]
pub struct SplitSelector<'a> {
    data: &'a Instances,
    weights: &'a AttributeWeights,
    tolerance: f64,
    parallel_threshold: usize,
}

impl<'a> SplitSelector<'a> {
    /// Creates a selector over a training dataset.
    ///
    /// # Parameters
    ///
    /// - `data` - Training instances (nominal, no missing non-class values)
    /// - `weights` - Weight map covering every non-class attribute
    /// - `tolerance` - A winning weighted gain within this distance of zero makes the node a leaf
    /// - `parallel_threshold` - Minimum `rows * attributes` before scoring runs in parallel
    pub fn new(
        data: &'a Instances,
        weights: &'a AttributeWeights,
        tolerance: f64,
        parallel_threshold: usize,
    ) -> Self {
        Self {
            data,
            weights,
            tolerance,
            parallel_threshold,
        }
    }

    get_field!(get_tolerance, tolerance, f64);
    get_field!(get_parallel_threshold, parallel_threshold, usize);

    /// Scores each attribute over a set of instances.
    ///
    /// # Returns
    ///
    /// - `Result<Vec<AttributeScore>, ModelError>` - Scores in the order of `attributes`
    ///
    /// # Errors
    ///
    /// - `ModelError::WeightContractError` - If an attribute has no valid weight
    /// - `ModelError::InputValidationError` - If an attribute index is out of range
    pub fn score_attributes(
        &self,
        rows: &[usize],
        attributes: &[usize],
    ) -> Result<Vec<AttributeScore>, ModelError> {
        let score = |&attribute: &usize| -> Result<AttributeScore, ModelError> {
            let attr = self.data.attribute(attribute).ok_or_else(|| {
                ModelError::InputValidationError(format!(
                    "Attribute index {} is out of range",
                    attribute
                ))
            })?;
            let weight = self.weights.weight_of(attr)?;
            let (gain, split_info) = split_statistics(self.data, rows, attribute);

            Ok(AttributeScore {
                attribute,
                weighted_gain: gain * weight,
                split_info,
            })
        };

        if rows.len().saturating_mul(attributes.len()) >= self.parallel_threshold {
            attributes.par_iter().map(score).collect()
        } else {
            attributes.iter().map(score).collect()
        }
    }

    /// Decides how to treat a node holding `rows`, with `attributes` still available.
    ///
    /// An empty attribute list, or a winning weighted gain indistinguishable from zero, makes
    /// the node a leaf.
    pub fn select(&self, rows: &[usize], attributes: &[usize]) -> Result<SplitDecision, ModelError> {
        let scores = self.score_attributes(rows, attributes)?;

        let decision = match choose_attribute(&scores) {
            Some(best) if best.weighted_gain.abs() > self.tolerance => {
                trace!(
                    "Split on attribute {} over {} instances (weighted gain {:.6}, gain ratio {:.6})",
                    best.attribute,
                    rows.len(),
                    best.weighted_gain,
                    best.gain_ratio()
                );
                SplitDecision::Split(best.attribute)
            }
            _ => {
                trace!("Leaf over {} instances", rows.len());
                SplitDecision::Leaf
            }
        };

        Ok(decision)
    }
}
