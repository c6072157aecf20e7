/// Seeded train/test splitting of nominal datasets
pub mod train_test_split;

pub use train_test_split::*;
