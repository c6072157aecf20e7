use std::fs::File;
use std::io::BufReader;

/// Error types that can occur while building or querying a model
///
/// # Variants
///
/// - `NotFitted` - Indicates that the model has not been fitted yet
/// - `InputValidationError` - Indicates the input data provided does not meet the expected format, shape, or validation rules
/// - `TreeError` - Indicates that the tree structure does not match the header it was built for
/// - `CapabilityError` - The training data contains something the learner cannot handle (non-nominal attributes, missing values in non-class attributes). Raised before any node is created
/// - `WeightContractError` - The attribute weight map omits an attribute or supplies a non-positive or non-finite weight
/// - `MissingValueError` - An instance passed for classification has a missing attribute value
/// - `UnseenCategoryError` - An instance passed for classification carries a value outside the domain recorded at training time
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    NotFitted,
    InputValidationError(String),
    TreeError(&'static str),
    CapabilityError(String),
    WeightContractError(String),
    MissingValueError(String),
    UnseenCategoryError { attribute: String, value: String },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::NotFitted => {
                write!(
                    f,
                    "Model has not been fitted. Certain methods require the model to be fitted before use."
                )
            }
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
            ModelError::TreeError(msg) => write!(f, "Tree structure error: {}", msg),
            ModelError::CapabilityError(msg) => write!(f, "Cannot handle data: {}", msg),
            ModelError::WeightContractError(msg) => {
                write!(f, "Attribute weight contract violated: {}", msg)
            }
            ModelError::MissingValueError(msg) => {
                write!(f, "No missing values, please: {}", msg)
            }
            ModelError::UnseenCategoryError { attribute, value } => write!(
                f,
                "Value '{}' was never observed for attribute '{}' during training",
                value, attribute
            ),
        }
    }
}

impl std::error::Error for ModelError {}

/// Input/Output error types that can occur during model serialization and file operations
///
/// # Variants
///
/// - `StdIoError` - Wraps standard I/O errors from file system operations (reading, writing, file access)
/// - `JsonError` - Wraps JSON serialization/deserialization errors
#[derive(Debug)]
pub enum IoError {
    StdIoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl IoError {
    pub fn load_in_buf_reader(path: &str) -> Result<BufReader<File>, IoError> {
        let file = File::open(path).map_err(IoError::StdIoError)?;
        Ok(BufReader::new(file))
    }
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIoError(e) => write!(f, "IO error: {}", e),
            IoError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for IoError {}
