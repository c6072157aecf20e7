pub use crate::error::{IoError, ModelError};
pub use crate::machine_learning::decision_tree::render::{to_graph, to_source, to_text};
pub use crate::machine_learning::{
    AttributeScore, AttributeWeightEstimator, AttributeWeights, Node, OneRWeights,
    SplitDecision, SplitSelector, UniformWeights, WeightedId3, WeightedId3Params, build_tree,
    choose_attribute,
};
pub use crate::nominal::{Attribute, AttributeKind, Header, Instances, MISSING_LABEL};
