use super::helper_function::{check_capabilities, validate_instance, validate_tolerance};
use super::*;
use crate::error::IoError;
use crate::math::{gain_ratio, max_index, normalize};
use ndarray::Axis;
use serde_json::{from_reader, to_writer_pretty};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Top-down tree construction
pub mod builder;
/// Entropy, split information and (weighted) information gain
pub mod gain;
/// Tree nodes and traversal
pub mod node;
/// Text, DOT and source renderings
pub mod render;
/// Split attribute selection
pub mod selector;

pub use builder::*;
pub use node::*;
pub use selector::*;

/// Weighted gains closer to zero than this make a node a leaf.
pub const DEFAULT_GAIN_TOLERANCE: f64 = 1e-6;

/// Minimum `instances * attributes` at a node before attribute scoring runs in parallel.
pub const DECISION_TREE_PARALLEL_THRESHOLD: usize = 10_000;

/// Parameters controlling how a weighted ID3 tree is grown.
///
/// # Fields
///
/// - `gain_tolerance` - A node becomes a leaf when the weighted gain of its best attribute is within this distance of zero
/// - `exclude_used_attributes` - When `true`, an attribute already tested on the path from the root is not considered again below it
/// - `parallel_threshold` - Minimum `instances * attributes` at a node before attribute scoring is spread over the rayon thread pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedId3Params {
    pub gain_tolerance: f64,
    pub exclude_used_attributes: bool,
    pub parallel_threshold: usize,
}

/// Default parameters: tolerance `1e-6`, used attributes excluded, parallel scoring from
/// 10 000 instance-attribute pairs.
impl Default for WeightedId3Params {
    fn default() -> Self {
        Self {
            gain_tolerance: DEFAULT_GAIN_TOLERANCE,
            exclude_used_attributes: true,
            parallel_threshold: DECISION_TREE_PARALLEL_THRESHOLD,
        }
    }
}

impl WeightedId3Params {
    /// Checks that the parameters are usable.
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If `gain_tolerance` is negative or not finite
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_tolerance(self.gain_tolerance)
    }
}

/// Weighted ID3 decision tree classifier for nominal data.
///
/// The tree splits on one nominal attribute per internal node with one branch per domain
/// value. The split attribute is chosen from information gains multiplied by per-attribute
/// weights: among the attributes whose weighted gain is above the average, the one with the
/// best gain ratio wins. A node becomes a leaf when no attribute has a weighted gain above the
/// gain tolerance. Leaves keep the class distribution of the training instances that reached
/// them; a leaf reached by none classifies as `None`.
///
/// # Fields
///
/// - `params` - Build parameters
/// - `header` - Header of the training data, `None` until the model is fitted
/// - `weights` - Attribute weights used for the build, `None` until the model is fitted
/// - `root` - Root of the tree, `None` until the model is fitted
///
/// # Examples
/// ```rust
/// use weighted_id3::machine_learning::{UniformWeights, WeightedId3};
/// use weighted_id3::nominal::Instances;
///
/// let rows = vec![
///     vec!["sunny", "high", "no"],
///     vec!["sunny", "normal", "yes"],
///     vec!["overcast", "high", "yes"],
///     vec!["rainy", "high", "no"],
///     vec!["rainy", "normal", "yes"],
/// ];
/// let data = Instances::from_nominal_rows("weather", &["outlook", "humidity", "play"], &rows).unwrap();
///
/// let mut tree = WeightedId3::default();
/// tree.fit_with_estimator(&data, &UniformWeights).unwrap();
///
/// let label = tree.classify_labels(&[Some("sunny"), Some("normal"), None]).unwrap();
/// assert_eq!(label.as_deref(), Some("yes"));
/// println!("{}", tree);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightedId3 {
    params: WeightedId3Params,
    header: Option<Header>,
    weights: Option<AttributeWeights>,
    root: Option<Node>,
}

impl WeightedId3 {
    /// Creates an unfitted tree.
    ///
    /// # Parameters
    ///
    /// * `params` - Build parameters
    ///
    /// # Returns
    ///
    /// - `Ok(WeightedId3)` - A new untrained tree
    /// - `Err(ModelError::InputValidationError)` - If the parameters are invalid
    pub fn new(params: WeightedId3Params) -> Result<Self, ModelError> {
        params.validate()?;

        Ok(Self {
            params,
            header: None,
            weights: None,
            root: None,
        })
    }

    // Getters
    get_field_as_ref!(get_header, header, Option<&Header>);
    get_field_as_ref!(get_weights, weights, Option<&AttributeWeights>);
    get_field_as_ref!(get_root, root, Option<&Node>);

    /// Gets the build parameters.
    pub fn get_params(&self) -> &WeightedId3Params {
        &self.params
    }

    /// Trains the tree with weights from the default estimator, `OneRWeights`.
    ///
    /// # Parameters
    ///
    /// * `data` - Training instances; all attributes nominal, no missing non-class values
    ///
    /// # Returns
    ///
    /// * `Result<&mut Self, ModelError>` - A mutable reference to `self` for method chaining
    pub fn fit(&mut self, data: &Instances) -> Result<&mut Self, ModelError> {
        self.fit_with_estimator(data, &OneRWeights)
    }

    /// Trains the tree with weights computed by an estimator.
    ///
    /// The estimator sees the training data after instances with a missing class have been
    /// removed. On failure the model keeps its previous state.
    ///
    /// # Parameters
    ///
    /// - `data` - Training instances
    /// - `estimator` - Produces one weight per non-class attribute
    ///
    /// # Returns
    ///
    /// * `Result<&mut Self, ModelError>` - A mutable reference to `self` for method chaining
    ///
    /// # Errors
    ///
    /// - `ModelError::CapabilityError` - If an attribute is not nominal or a non-class value is missing
    /// - `ModelError::WeightContractError` - If the estimated weights break the weight contract
    pub fn fit_with_estimator<E>(
        &mut self,
        data: &Instances,
        estimator: &E,
    ) -> Result<&mut Self, ModelError>
    where
        E: AttributeWeightEstimator + ?Sized,
    {
        check_capabilities(data)?;
        let data = self.drop_missing_class(data);
        let weights = estimator.estimate(&data)?;
        self.build(&data, weights)
    }

    /// Trains the tree with an explicit weight map.
    ///
    /// # Parameters
    ///
    /// - `data` - Training instances
    /// - `weights` - Weight map covering every non-class attribute with a positive, finite weight
    ///
    /// # Returns
    ///
    /// * `Result<&mut Self, ModelError>` - A mutable reference to `self` for method chaining
    ///
    /// # Errors
    ///
    /// - `ModelError::CapabilityError` - If an attribute is not nominal or a non-class value is missing
    /// - `ModelError::WeightContractError` - If the weight map breaks the weight contract
    pub fn fit_with_weights(
        &mut self,
        data: &Instances,
        weights: AttributeWeights,
    ) -> Result<&mut Self, ModelError> {
        check_capabilities(data)?;
        let data = self.drop_missing_class(data);
        self.build(&data, weights)
    }

    fn drop_missing_class(&self, data: &Instances) -> Instances {
        let cleaned = data.delete_with_missing_class();
        let dropped = data.num_instances() - cleaned.num_instances();
        if dropped > 0 {
            debug!("Dropped {} instances with a missing class value", dropped);
        }
        cleaned
    }

    fn build(
        &mut self,
        data: &Instances,
        weights: AttributeWeights,
    ) -> Result<&mut Self, ModelError> {
        let root = build_tree(data, &weights, &self.params)?;

        self.header = Some(data.header().clone());
        self.weights = Some(weights);
        self.root = Some(root);

        Ok(self)
    }

    fn fitted(&self) -> Result<(&Header, &Node), ModelError> {
        match (&self.header, &self.root) {
            (Some(header), Some(root)) => Ok((header, root)),
            _ => Err(ModelError::NotFitted),
        }
    }

    /// Predicts the class of one instance.
    ///
    /// # Parameters
    ///
    /// * `instance` - Encoded cells, one per attribute of the training header; the class cell is ignored
    ///
    /// # Returns
    ///
    /// - `Ok(Some(class))` - Index of the predicted class
    /// - `Ok(None)` - The instance reached a leaf no training instance reached
    ///
    /// # Errors
    ///
    /// - `ModelError::NotFitted` - If the model has not been fitted
    /// - `ModelError::InputValidationError` - If the instance width differs from the header
    /// - `ModelError::MissingValueError` - If a non-class value is missing
    /// - `ModelError::UnseenCategoryError` - If a tested value has no branch
    pub fn classify(&self, instance: &[f64]) -> Result<Option<usize>, ModelError> {
        let (header, root) = self.fitted()?;
        validate_instance(header, instance)?;

        match root.reach_leaf(header, instance)? {
            Node::Leaf { class_value, .. } => Ok(*class_value),
            Node::Internal { .. } => Err(ModelError::TreeError("Traversal stopped at an internal node")),
        }
    }

    /// Returns the class distribution of the leaf an instance reaches.
    ///
    /// # Returns
    ///
    /// * `Result<Array1<f64>, ModelError>` - One probability per class summing to one, or all zeros for an empty leaf
    ///
    /// # Errors
    ///
    /// Same as `classify`.
    pub fn distribution_for(&self, instance: &[f64]) -> Result<Array1<f64>, ModelError> {
        let (header, root) = self.fitted()?;
        validate_instance(header, instance)?;

        match root.reach_leaf(header, instance)? {
            Node::Leaf { distribution, .. } => Ok(distribution.clone()),
            Node::Internal { .. } => Err(ModelError::TreeError("Traversal stopped at an internal node")),
        }
    }

    /// Predicts the class label of an instance given as labels.
    ///
    /// # Parameters
    ///
    /// * `labels` - One label per attribute of the training header, `None` for a missing value; the class entry is ignored
    ///
    /// # Returns
    ///
    /// * `Result<Option<String>, ModelError>` - The predicted class label, `None` for an empty leaf
    ///
    /// # Errors
    ///
    /// Same as `classify`. A label outside an attribute domain gives `ModelError::UnseenCategoryError`.
    pub fn classify_labels(&self, labels: &[Option<&str>]) -> Result<Option<String>, ModelError> {
        let (header, _) = self.fitted()?;
        let instance = header.encode_row(labels)?;

        Ok(self
            .classify(&instance)?
            .and_then(|c| header.class_label(c))
            .map(str::to_string))
    }

    fn check_header(&self, data: &Instances) -> Result<(), ModelError> {
        let (header, _) = self.fitted()?;
        if data.header().attributes() != header.attributes()
            || data.class_index() != header.class_index()
        {
            return Err(ModelError::InputValidationError(
                "Dataset attributes do not match the training header".to_string(),
            ));
        }
        Ok(())
    }

    /// Predicts the class of every instance of a dataset using parallel processing.
    ///
    /// # Parameters
    ///
    /// * `data` - Instances sharing the attributes of the training header
    ///
    /// # Returns
    ///
    /// * `Result<Vec<Option<usize>>, ModelError>` - One prediction per instance, in order
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If the dataset attributes differ from the training header
    /// - Any error of `classify` for the first failing instance
    pub fn predict(&self, data: &Instances) -> Result<Vec<Option<usize>>, ModelError> {
        self.check_header(data)?;

        (0..data.num_instances())
            .into_par_iter()
            .map(|r| self.classify(&data.row(r).to_vec()))
            .collect()
    }

    /// Returns the class distribution of every instance of a dataset using parallel processing.
    ///
    /// # Returns
    ///
    /// * `Result<Array2<f64>, ModelError>` - Shape (n_instances, n_classes)
    pub fn predict_proba(&self, data: &Instances) -> Result<Array2<f64>, ModelError> {
        self.check_header(data)?;

        let distributions: Vec<Array1<f64>> = (0..data.num_instances())
            .into_par_iter()
            .map(|r| self.distribution_for(&data.row(r).to_vec()))
            .collect::<Result<_, _>>()?;

        let mut proba = Array2::zeros((data.num_instances(), data.num_classes()));
        for (mut row, distribution) in proba.axis_iter_mut(Axis(0)).zip(distributions) {
            row.assign(&distribution);
        }

        Ok(proba)
    }

    /// Number of nodes in the tree.
    pub fn get_n_nodes(&self) -> Result<usize, ModelError> {
        Ok(self.fitted()?.1.n_nodes())
    }

    /// Number of leaves in the tree.
    pub fn get_n_leaves(&self) -> Result<usize, ModelError> {
        Ok(self.fitted()?.1.n_leaves())
    }

    /// Depth of the tree; a tree that is a single leaf has depth 0.
    pub fn get_depth(&self) -> Result<usize, ModelError> {
        Ok(self.fitted()?.1.depth())
    }

    /// Renders the tree as indented text (see `render::to_text`).
    pub fn generate_tree_structure(&self) -> Result<String, ModelError> {
        let (header, root) = self.fitted()?;
        Ok(render::to_text(root, header))
    }

    /// Renders the tree in the Graphviz DOT language (see `render::to_graph`).
    pub fn to_graph(&self) -> Result<String, ModelError> {
        let (header, root) = self.fitted()?;
        Ok(render::to_graph(root, header))
    }

    /// Renders the tree as the Rust source of a module named `name` (see `render::to_source`).
    pub fn to_source(&self, name: &str) -> Result<String, ModelError> {
        let (header, root) = self.fitted()?;
        render::to_source(root, header, name)
    }

    /// Saves the model to a JSON file.
    ///
    /// # Parameters
    ///
    /// * `path` - File path to write to (e.g., "tree.json"); an existing file is overwritten
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Successfully saved the model
    /// - `Err(IoError::StdIoError)` - File creation or write operation failed
    /// - `Err(IoError::JsonError)` - Serialization to JSON failed
    pub fn save_to_path(&self, path: &str) -> Result<(), IoError> {
        let file = File::create(path).map_err(IoError::StdIoError)?;
        let mut writer = BufWriter::new(file);

        to_writer_pretty(&mut writer, self).map_err(IoError::JsonError)?;

        writer.flush().map_err(IoError::StdIoError)?;

        Ok(())
    }

    /// Replaces this model with one loaded from a JSON file written by `save_to_path`.
    ///
    /// The loaded tree is checked against the loaded header before it replaces the current
    /// model; on any error the current model is left untouched.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Successfully loaded the model
    /// - `Err(IoError::StdIoError)` - File not found, read failure, or a tree inconsistent with its header
    /// - `Err(IoError::JsonError)` - Deserialization from JSON failed
    pub fn load_from_path(&mut self, path: &str) -> Result<(), IoError> {
        let reader = IoError::load_in_buf_reader(path)?;

        let model: WeightedId3 = from_reader(reader).map_err(IoError::JsonError)?;

        let invalid = |msg: String| {
            IoError::StdIoError(std::io::Error::new(std::io::ErrorKind::InvalidData, msg))
        };

        model
            .params
            .validate()
            .map_err(|e| invalid(e.to_string()))?;
        match (&model.header, &model.root) {
            (Some(header), Some(root)) => {
                header.check().map_err(|e| invalid(e.to_string()))?;
                root.check_against(header).map_err(|e| invalid(e.to_string()))?
            }
            (Some(header), None) => header.check().map_err(|e| invalid(e.to_string()))?,
            (None, None) => {}
            (None, Some(_)) => return Err(invalid("Tree stored without a header".to_string())),
        }

        *self = model;

        Ok(())
    }
}

impl std::fmt::Display for WeightedId3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.fitted() {
            Ok((header, root)) => write!(f, "WeightedId3\n\n{}", render::to_text(root, header)),
            Err(_) => write!(f, "WeightedId3: No model built yet."),
        }
    }
}
