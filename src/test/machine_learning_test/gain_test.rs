use super::*;

// Test class entropy of the weather data
#[test]
fn test_entropy_weather() {
    let data = weather();
    assert_abs_diff_eq!(gain::entropy_of(&data), 0.940286, epsilon = 1e-6);
    // Sunny days: 2 yes, 3 no
    assert_abs_diff_eq!(
        gain::entropy(&data, &[0, 1, 7, 8, 10]),
        0.970951,
        epsilon = 1e-6
    );
    assert_eq!(gain::entropy(&data, &[]), 0.0);
}

// Test information gain of every weather attribute
#[test]
fn test_info_gain_weather() {
    let data = weather();
    assert_abs_diff_eq!(gain::info_gain_of(&data, 0).unwrap(), 0.246750, epsilon = 1e-6);
    assert_abs_diff_eq!(gain::info_gain_of(&data, 1).unwrap(), 0.029223, epsilon = 1e-6);
    assert_abs_diff_eq!(gain::info_gain_of(&data, 2).unwrap(), 0.151836, epsilon = 1e-6);
    assert_abs_diff_eq!(gain::info_gain_of(&data, 3).unwrap(), 0.048127, epsilon = 1e-6);
}

#[test]
fn test_split_info_weather() {
    let data = weather();
    assert_abs_diff_eq!(gain::split_info_of(&data, 0).unwrap(), 1.577406, epsilon = 1e-6);
    assert_abs_diff_eq!(gain::split_info_of(&data, 2).unwrap(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(gain::split_info_of(&data, 3).unwrap(), 0.985228, epsilon = 1e-6);
    // A single instance always forms a single group
    assert_eq!(gain::split_info(&data, &[4], 0).unwrap(), 0.0);
}

// Test that unweighted gain stays within [0, H(D)]
#[test]
fn test_info_gain_bounds() {
    let data = weather();
    let subsets: Vec<Vec<usize>> = vec![
        data.all_rows(),
        vec![0, 1, 7, 8, 10],
        vec![3, 4, 5, 9, 13],
        vec![2, 6],
        vec![],
    ];

    for rows in &subsets {
        let h = gain::entropy(&data, rows);
        for attribute in 0..4 {
            let g = gain::info_gain(&data, rows, attribute).unwrap();
            assert!(g >= 0.0);
            assert!(g <= h + 1e-12);
        }
    }
}

#[test]
fn test_weighted_info_gain() {
    let data = weather();
    let rows = data.all_rows();
    let weights = AttributeWeights::from_pairs([
        ("outlook", 2.0),
        ("temperature", 1.0),
        ("humidity", 0.5),
        ("windy", 1.0),
    ]);

    assert_abs_diff_eq!(
        gain::weighted_info_gain(&data, &rows, 0, &weights).unwrap(),
        2.0 * 0.246750,
        epsilon = 1e-5
    );
    assert_abs_diff_eq!(
        gain::weighted_info_gain(&data, &rows, 2, &weights).unwrap(),
        0.5 * 0.151836,
        epsilon = 1e-6
    );

    let partial = AttributeWeights::from_pairs([("outlook", 1.0)]);
    assert!(matches!(
        gain::weighted_info_gain(&data, &rows, 1, &partial),
        Err(ModelError::WeightContractError(_))
    ));
}

// A perfectly predictive attribute carries all the class entropy
#[test]
fn test_perfect_split() {
    let rows = vec![vec!["sunny", "play"], vec!["rainy", "stay"]];
    let data = Instances::from_nominal_rows("weather", &["weather", "class"], &rows).unwrap();

    assert_abs_diff_eq!(gain::entropy_of(&data), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(gain::info_gain_of(&data, 0).unwrap(), 1.0, epsilon = 1e-12);
}

// Out-of-range or numeric attributes are rejected instead of indexed
#[test]
fn test_invalid_attribute() {
    let data = weather();
    let rows = data.all_rows();

    assert!(matches!(
        gain::info_gain_of(&data, 99),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        gain::split_info_of(&data, 5),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        gain::info_gain(&data, &rows, 99),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        gain::split_info(&data, &rows, 99),
        Err(ModelError::InputValidationError(_))
    ));

    let header = Header::with_last_class(
        "mixed",
        vec![
            Attribute::numeric("size"),
            Attribute::nominal("class", vec!["a", "b"]),
        ],
    )
    .unwrap();
    let mixed = Instances::from_string_rows(header, &[vec!["1.5", "a"], vec!["2.0", "b"]]).unwrap();
    assert!(matches!(
        gain::info_gain_of(&mixed, 0),
        Err(ModelError::InputValidationError(_))
    ));
}
