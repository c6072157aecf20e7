use super::*;

/// A node of a weighted ID3 tree.
///
/// Nodes are immutable once the builder returns them. Identifiers are assigned in creation
/// order, which is a pre-order walk of the tree starting at 0 for the root.
///
/// # Variants
///
/// - `Leaf` - A terminal node
///   - `id` - Identifier of the node
///   - `distribution` - Class distribution of the training instances that reached the node, summing to one, or all zeros when none did
///   - `class_value` - Majority class index (ties go to the lowest index), `None` for an empty leaf
/// - `Internal` - A node splitting on a nominal attribute
///   - `id` - Identifier of the node
///   - `attribute` - Column index of the split attribute
///   - `children` - One child per domain value of the split attribute, in domain order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Leaf {
        id: usize,
        distribution: Array1<f64>,
        class_value: Option<usize>,
    },
    Internal {
        id: usize,
        attribute: usize,
        children: Vec<Node>,
    },
}

impl Node {
    /// Creates a leaf from the class counts of the instances that reached it.
    ///
    /// # Parameters
    ///
    /// - `id` - Identifier of the new node
    /// - `counts` - Class counts; all zeros produces an empty leaf
    ///
    /// # Returns
    ///
    /// * `Node` - A leaf with the normalized distribution and the majority class
    pub fn leaf_from_counts(id: usize, mut counts: Array1<f64>) -> Self {
        let class_value = if counts.sum() > 0.0 {
            max_index(&counts)
        } else {
            None
        };
        normalize(&mut counts);

        Node::Leaf {
            id,
            distribution: counts,
            class_value,
        }
    }

    /// Creates a leaf reached by no training instance.
    pub fn empty_leaf(id: usize, n_classes: usize) -> Self {
        Node::Leaf {
            id,
            distribution: Array1::zeros(n_classes),
            class_value: None,
        }
    }

    pub fn id(&self) -> usize {
        match self {
            Node::Leaf { id, .. } | Node::Internal { id, .. } => *id,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn n_nodes(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { children, .. } => {
                1 + children.iter().map(Node::n_nodes).sum::<usize>()
            }
        }
    }

    /// Number of leaves in the subtree rooted here.
    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { children, .. } => children.iter().map(Node::n_leaves).sum(),
        }
    }

    /// Length of the longest path from this node down to a leaf; a lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { children, .. } => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }

    /// Follows the branches matching an instance down to a leaf.
    ///
    /// # Parameters
    ///
    /// - `header` - Header the tree was built for
    /// - `row` - Encoded cells of the instance, one per attribute
    ///
    /// # Returns
    ///
    /// - `Ok(&Node)` - The leaf reached (always a `Node::Leaf`)
    /// - `Err(ModelError::MissingValueError)` - If a tested attribute is missing
    /// - `Err(ModelError::UnseenCategoryError)` - If a tested value has no branch
    /// - `Err(ModelError::TreeError)` - If the node refers to a column outside the row
    pub fn reach_leaf<'a>(&'a self, header: &Header, row: &[f64]) -> Result<&'a Node, ModelError> {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { .. } => return Ok(node),
                Node::Internal {
                    attribute,
                    children,
                    ..
                } => {
                    let (attr, cell) = match (header.attribute(*attribute), row.get(*attribute)) {
                        (Some(attr), Some(&cell)) => (attr, cell),
                        _ => return Err(ModelError::TreeError("Split attribute out of range")),
                    };

                    if cell.is_nan() {
                        return Err(ModelError::MissingValueError(format!(
                            "attribute '{}' is missing",
                            attr.name()
                        )));
                    }

                    node = attr
                        .index_of_cell(cell)
                        .and_then(|v| children.get(v))
                        .ok_or_else(|| ModelError::UnseenCategoryError {
                            attribute: attr.name().to_string(),
                            value: attr.describe_cell(cell),
                        })?;
                }
            }
        }
    }

    /// Checks that the subtree is consistent with a header.
    ///
    /// Every split attribute must be a nominal non-class attribute with exactly one child per
    /// domain value, and every leaf must carry one probability per class.
    pub fn check_against(&self, header: &Header) -> Result<(), ModelError> {
        match self {
            Node::Leaf {
                distribution,
                class_value,
                ..
            } => {
                if distribution.len() != header.num_classes() {
                    return Err(ModelError::TreeError(
                        "Leaf distribution does not match the number of classes",
                    ));
                }
                if class_value.is_some_and(|c| c >= header.num_classes()) {
                    return Err(ModelError::TreeError("Leaf class value out of range"));
                }
                Ok(())
            }
            Node::Internal {
                attribute,
                children,
                ..
            } => {
                let attr = header
                    .attribute(*attribute)
                    .ok_or(ModelError::TreeError("Split attribute out of range"))?;
                if *attribute == header.class_index() || !attr.is_nominal() {
                    return Err(ModelError::TreeError(
                        "Split attribute must be a nominal non-class attribute",
                    ));
                }
                if children.len() != attr.num_values() {
                    return Err(ModelError::TreeError(
                        "Number of children does not match the attribute domain",
                    ));
                }
                children.iter().try_for_each(|c| c.check_against(header))
            }
        }
    }
}
