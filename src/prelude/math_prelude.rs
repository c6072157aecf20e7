pub use crate::math::{entropy, gain_ratio, max_index, normalize};
