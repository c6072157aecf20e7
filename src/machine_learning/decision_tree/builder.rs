use super::*;

/// Grows a weighted ID3 tree top-down.
///
/// Node identifiers come from a counter owned by the builder, so they follow creation order
/// (a pre-order walk) and are unique within one build.
pub struct TreeBuilder<'a> {
    data: &'a Instances,
    selector: SplitSelector<'a>,
    exclude_used_attributes: bool,
    next_id: usize,
    n_leaves: usize,
    max_depth: usize,
}

impl<'a> TreeBuilder<'a> {
    /// Creates a builder over a training dataset.
    ///
    /// The caller is responsible for validating `data` and `weights`; `build_tree` does both.
    pub fn new(
        data: &'a Instances,
        weights: &'a AttributeWeights,
        params: &WeightedId3Params,
    ) -> Self {
        Self {
            data,
            selector: SplitSelector::new(
                data,
                weights,
                params.gain_tolerance,
                params.parallel_threshold,
            ),
            exclude_used_attributes: params.exclude_used_attributes,
            next_id: 0,
            n_leaves: 0,
            max_depth: 0,
        }
    }

    /// Builds the tree from every instance with a known class value.
    pub fn build(mut self) -> Result<Node, ModelError> {
        let rows: Vec<usize> = (0..self.data.num_instances())
            .filter(|&r| self.data.class_value(r).is_some())
            .collect();
        let attributes: Vec<usize> = self
            .data
            .header()
            .non_class_attributes()
            .map(Attribute::index)
            .collect();

        let root = self.build_node(&rows, &attributes, 0)?;

        debug!(
            "Built tree over {} instances: {} nodes, {} leaves, depth {}",
            rows.len(),
            self.next_id,
            self.n_leaves,
            self.max_depth
        );

        Ok(root)
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn build_node(
        &mut self,
        rows: &[usize],
        attributes: &[usize],
        depth: usize,
    ) -> Result<Node, ModelError> {
        let id = self.next_id();
        self.max_depth = self.max_depth.max(depth);

        if rows.is_empty() {
            self.n_leaves += 1;
            return Ok(Node::empty_leaf(id, self.data.num_classes()));
        }

        match self.selector.select(rows, attributes)? {
            SplitDecision::Leaf => {
                self.n_leaves += 1;
                Ok(Node::leaf_from_counts(id, self.data.class_counts(rows)))
            }
            SplitDecision::Split(attribute) => {
                let remaining: Vec<usize> = if self.exclude_used_attributes {
                    attributes
                        .iter()
                        .copied()
                        .filter(|&a| a != attribute)
                        .collect()
                } else {
                    attributes.to_vec()
                };

                let children = self
                    .data
                    .partition(rows, attribute)
                    .iter()
                    .map(|group| self.build_node(group, &remaining, depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(Node::Internal {
                    id,
                    attribute,
                    children,
                })
            }
        }
    }
}

/// Builds a weighted ID3 tree.
///
/// Validates the training data and the weight map, then grows the tree. Instances whose
/// class value is missing are ignored.
///
/// # Parameters
///
/// - `data` - Training instances
/// - `weights` - Weight map covering every non-class attribute
/// - `params` - Build parameters
///
/// # Returns
///
/// - `Result<Node, ModelError>` - The root of the tree
///
/// # Errors
///
/// - `ModelError::CapabilityError` - If an attribute is not nominal or a non-class value is missing
/// - `ModelError::WeightContractError` - If the weight map breaks the weight contract
/// - `ModelError::InputValidationError` - If the parameters are invalid
pub fn build_tree(
    data: &Instances,
    weights: &AttributeWeights,
    params: &WeightedId3Params,
) -> Result<Node, ModelError> {
    params.validate()?;
    check_capabilities(data)?;
    weights.validate_for(data.header())?;

    TreeBuilder::new(data, weights, params).build()
}
