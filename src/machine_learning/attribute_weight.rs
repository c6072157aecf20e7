use super::*;

/// Mapping from attribute name to a strictly positive weight.
///
/// The information gain of every attribute is multiplied by its weight before the split
/// attribute of a node is chosen, so the map damps or amplifies how informative an
/// attribute appears. A map used for training must cover every non-class attribute of the
/// training header with a positive, finite weight (see `validate_for`).
///
/// # Example
/// ```rust
/// use weighted_id3::machine_learning::AttributeWeights;
///
/// let weights = AttributeWeights::from_pairs([("outlook", 2.0), ("windy", 0.5)]);
/// assert_eq!(weights.get("outlook"), Some(2.0));
/// assert_eq!(weights.get("humidity"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeWeights {
    weights: AHashMap<String, f64>,
}

impl AttributeWeights {
    /// Creates an empty weight map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a weight map from `(name, weight)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            weights: pairs
                .into_iter()
                .map(|(name, weight)| (name.into(), weight))
                .collect(),
        }
    }

    /// Creates a map giving the same weight to every non-class attribute of `header`.
    pub fn uniform(header: &Header, weight: f64) -> Self {
        Self::from_pairs(
            header
                .non_class_attributes()
                .map(|a| (a.name().to_string(), weight)),
        )
    }

    /// Sets the weight of an attribute, returning the previous weight if there was one.
    pub fn insert<S: Into<String>>(&mut self, name: S, weight: f64) -> Option<f64> {
        self.weights.insert(name.into(), weight)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.weights.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates over `(name, weight)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Checks that the map satisfies the weight contract for a training header.
    ///
    /// Entries naming attributes that are not part of the header are ignored (and logged).
    ///
    /// # Parameters
    ///
    /// * `header` - Header of the training dataset
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If every non-class attribute has a positive, finite weight
    /// - `Err(ModelError::WeightContractError)` - Naming the first attribute that violates the contract
    pub fn validate_for(&self, header: &Header) -> Result<(), ModelError> {
        for attribute in header.non_class_attributes() {
            self.weight_of(attribute)?;
        }

        for (name, _) in self.iter() {
            match header.attribute_by_name(name) {
                Some(a) if a.index() != header.class_index() => {}
                _ => warn!("Ignoring weight for '{}', which is not a non-class attribute", name),
            }
        }

        Ok(())
    }

    /// Returns the weight of an attribute, enforcing the weight contract.
    pub(crate) fn weight_of(&self, attribute: &Attribute) -> Result<f64, ModelError> {
        match self.get(attribute.name()) {
            None => Err(ModelError::WeightContractError(format!(
                "no weight for attribute '{}'",
                attribute.name()
            ))),
            Some(w) if w > 0.0 && w.is_finite() => Ok(w),
            Some(w) => Err(ModelError::WeightContractError(format!(
                "weight {} for attribute '{}' is not strictly positive and finite",
                w,
                attribute.name()
            ))),
        }
    }
}

/// Computes one weight per non-class attribute from a labeled dataset.
///
/// Implementations must be deterministic for a fixed dataset and cover every non-class
/// attribute. The decision tree validates the returned map before it starts building and
/// fails with `ModelError::WeightContractError` if the contract is broken.
pub trait AttributeWeightEstimator {
    /// Estimates the attribute weights for `data`.
    ///
    /// # Parameters
    ///
    /// * `data` - The training dataset (instances with a missing class are already removed)
    ///
    /// # Returns
    ///
    /// - `Result<AttributeWeights, ModelError>` - The estimated weights
    fn estimate(&self, data: &Instances) -> Result<AttributeWeights, ModelError>;
}

/// Estimator giving every attribute the weight 1.0, which reduces the learner to plain
/// information gain with the gain-ratio fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UniformWeights;

impl AttributeWeightEstimator for UniformWeights {
    fn estimate(&self, data: &Instances) -> Result<AttributeWeights, ModelError> {
        Ok(AttributeWeights::uniform(data.header(), 1.0))
    }
}

/// Estimator weighting each attribute by the training accuracy of its one-attribute rule.
///
/// For every non-class attribute, the one-attribute rule predicts, for each value of the
/// attribute, the majority class among the instances holding that value (ties go to the
/// lowest class index). The weight is the fraction of instances this rule classifies
/// correctly, which lies in (0, 1] for a dataset without missing values. An empty dataset
/// gives every attribute the weight 1.0.
///
/// # Example
/// ```rust
/// use weighted_id3::machine_learning::{AttributeWeightEstimator, OneRWeights};
/// use weighted_id3::nominal::Instances;
///
/// let rows = vec![
///     vec!["sunny", "hot", "play"],
///     vec!["sunny", "cold", "play"],
///     vec!["rainy", "hot", "stay"],
///     vec!["rainy", "cold", "play"],
/// ];
/// let data = Instances::from_nominal_rows("weather", &["sky", "temp", "class"], &rows).unwrap();
/// let weights = OneRWeights.estimate(&data).unwrap();
///
/// assert_eq!(weights.get("sky"), Some(0.75));
/// assert_eq!(weights.get("temp"), Some(0.75));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OneRWeights;

impl OneRWeights {
    /// Returns the training accuracy of the one-attribute rule built on `attribute`.
    fn rule_accuracy(data: &Instances, rows: &[usize], attribute: usize) -> f64 {
        let total = rows.len() as f64;
        if total == 0.0 {
            return 1.0;
        }

        let table = data.contingency(rows, attribute);
        let correct: f64 = table
            .rows()
            .into_iter()
            .map(|counts| counts.fold(0.0_f64, |best, &c| best.max(c)))
            .sum();

        correct / total
    }
}

impl AttributeWeightEstimator for OneRWeights {
    fn estimate(&self, data: &Instances) -> Result<AttributeWeights, ModelError> {
        let rows = data.all_rows();
        let attributes: Vec<&Attribute> = data.header().non_class_attributes().collect();

        if let Some(a) = attributes.iter().find(|a| !a.is_nominal()) {
            return Err(ModelError::CapabilityError(format!(
                "attribute '{}' is not nominal",
                a.name()
            )));
        }

        let weights: Vec<(String, f64)> = attributes
            .par_iter()
            .map(|a| {
                (
                    a.name().to_string(),
                    Self::rule_accuracy(data, &rows, a.index()),
                )
            })
            .collect();

        for (name, weight) in &weights {
            debug!("One-attribute rule accuracy of '{}': {:.4}", name, weight);
        }

        Ok(AttributeWeights::from_pairs(weights))
    }
}
