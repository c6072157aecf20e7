use super::*;

#[test]
fn test_attribute_weights_map() {
    let mut weights = AttributeWeights::new();
    assert!(weights.is_empty());

    assert_eq!(weights.insert("outlook", 2.0), None);
    assert_eq!(weights.insert("outlook", 3.0), Some(2.0));
    assert_eq!(weights.get("outlook"), Some(3.0));
    assert_eq!(weights.get("windy"), None);
    assert_eq!(weights.len(), 1);
    assert_eq!(weights.iter().collect::<Vec<_>>(), vec![("outlook", 3.0)]);
}

#[test]
fn test_uniform_covers_non_class_attributes() {
    let data = weather();
    let weights = AttributeWeights::uniform(data.header(), 0.5);

    assert_eq!(weights.len(), 4);
    assert_eq!(weights.get("humidity"), Some(0.5));
    assert_eq!(weights.get("play"), None);
    assert!(weights.validate_for(data.header()).is_ok());
}

#[test]
fn test_validate_for_rejects_broken_contracts() {
    let data = weather();
    let header = data.header();

    let missing = AttributeWeights::from_pairs([("outlook", 1.0), ("temperature", 1.0)]);
    assert!(matches!(
        missing.validate_for(header),
        Err(ModelError::WeightContractError(_))
    ));

    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let mut weights = AttributeWeights::uniform(header, 1.0);
        weights.insert("windy", bad);
        assert!(matches!(
            weights.validate_for(header),
            Err(ModelError::WeightContractError(_))
        ));
    }
}

// Extra entries are ignored
#[test]
fn test_validate_for_ignores_unknown_attributes() {
    let data = weather();
    let mut weights = AttributeWeights::uniform(data.header(), 1.0);
    weights.insert("visibility", 4.0);
    weights.insert("play", 2.0);

    assert!(weights.validate_for(data.header()).is_ok());
}

#[test]
fn test_uniform_estimator() {
    let data = weather();
    let weights = UniformWeights.estimate(&data).unwrap();

    assert_eq!(weights, AttributeWeights::uniform(data.header(), 1.0));
}

// One-attribute rule accuracies on the weather data
#[test]
fn test_one_r_weights_weather() {
    let data = weather();
    let weights = OneRWeights.estimate(&data).unwrap();

    assert_eq!(weights.len(), 4);
    assert_abs_diff_eq!(weights.get("outlook").unwrap(), 10.0 / 14.0, epsilon = 1e-12);
    assert_abs_diff_eq!(weights.get("temperature").unwrap(), 9.0 / 14.0, epsilon = 1e-12);
    assert_abs_diff_eq!(weights.get("humidity").unwrap(), 10.0 / 14.0, epsilon = 1e-12);
    assert_abs_diff_eq!(weights.get("windy").unwrap(), 9.0 / 14.0, epsilon = 1e-12);
    assert!(weights.validate_for(data.header()).is_ok());
}

#[test]
fn test_one_r_weights_empty_dataset() {
    let data = Instances::empty(weather().header().clone());
    let weights = OneRWeights.estimate(&data).unwrap();

    for (_, weight) in weights.iter() {
        assert_eq!(weight, 1.0);
    }
    assert_eq!(weights.len(), 4);
}

#[test]
fn test_one_r_weights_reject_numeric() {
    let header = Header::with_last_class(
        "mixed",
        vec![
            Attribute::numeric("temperature"),
            Attribute::nominal("play", vec!["yes", "no"]),
        ],
    )
    .unwrap();
    let data = Instances::from_string_rows(header, &[vec!["20.0", "yes"]]).unwrap();

    assert!(matches!(
        OneRWeights.estimate(&data),
        Err(ModelError::CapabilityError(_))
    ));
}

// Estimators can be used as trait objects
#[test]
fn test_estimator_trait_object() {
    let data = weather();
    let estimators: Vec<Box<dyn AttributeWeightEstimator>> =
        vec![Box::new(UniformWeights), Box::new(OneRWeights)];

    for estimator in &estimators {
        let weights = estimator.estimate(&data).unwrap();
        assert!(weights.validate_for(data.header()).is_ok());
    }
}
