use super::*;

/// Checks that a training dataset only contains what the tree learner can handle.
///
/// This function validates that:
/// - Every attribute, the class attribute included, is nominal
/// - No instance has a missing value in a non-class attribute
///
/// Missing class values are allowed; those instances are dropped before building.
///
/// # Parameters
///
/// * `data` - The training dataset
///
/// # Returns
///
/// - `Ok(())` - If the dataset can be used for training
/// - `Err(ModelError::CapabilityError)` - If any check fails, with an informative message
pub fn check_capabilities(data: &Instances) -> Result<(), ModelError> {
    for attribute in data.header().attributes() {
        if !attribute.is_nominal() {
            let role = if attribute.index() == data.class_index() {
                "class attribute"
            } else {
                "attribute"
            };
            return Err(ModelError::CapabilityError(format!(
                "{} '{}' is not nominal",
                role,
                attribute.name()
            )));
        }
    }

    for row in 0..data.num_instances() {
        if data.has_missing_value(row) {
            return Err(ModelError::CapabilityError(format!(
                "instance {} has a missing value in a non-class attribute",
                row
            )));
        }
    }

    Ok(())
}

/// Validates that the zero-gain tolerance is non-negative and finite.
///
/// # Parameters
///
/// * `tolerance` - The tolerance value to validate
///
/// # Returns
///
/// - `Ok(())` - If the tolerance is valid
/// - `Err(ModelError::InputValidationError)` - If the tolerance is negative, NaN, or infinite
pub fn validate_tolerance(tolerance: f64) -> Result<(), ModelError> {
    if tolerance < 0.0 || !tolerance.is_finite() {
        return Err(ModelError::InputValidationError(format!(
            "gain_tolerance must be non-negative and finite, got {}",
            tolerance
        )));
    }

    Ok(())
}

/// Checks that an instance to classify matches the training header and has no missing values.
///
/// # Parameters
///
/// - `header` - Header recorded at training time
/// - `row` - Encoded cells of the instance, one per attribute (the class cell is ignored)
///
/// # Returns
///
/// - `Ok(())` - If the instance can be classified
/// - `Err(ModelError::InputValidationError)` - If the row width differs from the header
/// - `Err(ModelError::MissingValueError)` - If a non-class value is missing
pub fn validate_instance(header: &Header, row: &[f64]) -> Result<(), ModelError> {
    if row.len() != header.num_attributes() {
        return Err(ModelError::InputValidationError(format!(
            "Instance has {} values, expected {}",
            row.len(),
            header.num_attributes()
        )));
    }

    for attribute in header.non_class_attributes() {
        if row[attribute.index()].is_nan() {
            return Err(ModelError::MissingValueError(format!(
                "attribute '{}' is missing",
                attribute.name()
            )));
        }
    }

    Ok(())
}
