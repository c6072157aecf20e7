use super::*;

#[test]
fn test_params_default() {
    let params = WeightedId3Params::default();
    assert_eq!(params.gain_tolerance, 1e-6);
    assert!(params.exclude_used_attributes);
    assert_eq!(params.parallel_threshold, DECISION_TREE_PARALLEL_THRESHOLD);
}

#[test]
fn test_new_rejects_invalid_tolerance() {
    for tolerance in [-1e-3, f64::NAN, f64::INFINITY] {
        let params = WeightedId3Params {
            gain_tolerance: tolerance,
            ..WeightedId3Params::default()
        };
        assert!(matches!(
            WeightedId3::new(params),
            Err(ModelError::InputValidationError(_))
        ));
    }
}

// Test that an unfitted model reports NotFitted everywhere
#[test]
fn test_not_fitted() {
    let tree = WeightedId3::default();

    assert!(tree.get_root().is_none());
    assert!(tree.get_header().is_none());
    assert!(tree.get_weights().is_none());
    assert!(matches!(tree.classify(&[0.0]), Err(ModelError::NotFitted)));
    assert!(matches!(tree.distribution_for(&[0.0]), Err(ModelError::NotFitted)));
    assert!(matches!(tree.get_n_nodes(), Err(ModelError::NotFitted)));
    assert!(matches!(tree.generate_tree_structure(), Err(ModelError::NotFitted)));
    assert!(matches!(tree.to_graph(), Err(ModelError::NotFitted)));
    assert!(matches!(tree.to_source("tree"), Err(ModelError::NotFitted)));
    assert_eq!(tree.to_string(), "WeightedId3: No model built yet.");
}

#[test]
fn test_fit_weather_structure() {
    let data = weather();
    let mut tree = WeightedId3::default();
    tree.fit(&data).unwrap();

    assert_eq!(tree.get_n_nodes().unwrap(), 8);
    assert_eq!(tree.get_n_leaves().unwrap(), 5);
    assert_eq!(tree.get_depth().unwrap(), 2);
    assert_eq!(tree.generate_tree_structure().unwrap(), WEATHER_TREE);
    assert_eq!(tree.to_string(), format!("WeightedId3\n\n{}", WEATHER_TREE));

    match tree.get_root().unwrap() {
        Node::Internal {
            id,
            attribute,
            children,
        } => {
            assert_eq!(*id, 0);
            assert_eq!(*attribute, 0);
            assert_eq!(children.len(), 3);
            let ids: Vec<usize> = children.iter().map(Node::id).collect();
            assert_eq!(ids, vec![1, 4, 5]);
        }
        other => panic!("Expected an internal root, got {:?}", other),
    }
}

// Every weather instance lands in a pure leaf with its own class
#[test]
fn test_classify_training_instances() {
    let data = weather();
    let mut tree = WeightedId3::default();
    tree.fit(&data).unwrap();

    for row in 0..data.num_instances() {
        let instance = data.row(row).to_vec();
        assert_eq!(tree.classify(&instance).unwrap(), data.class_value(row));

        let distribution = tree.distribution_for(&instance).unwrap();
        assert_abs_diff_eq!(distribution.sum(), 1.0, epsilon = 1e-12);
        assert_eq!(distribution[data.class_value(row).unwrap()], 1.0);
    }
}

#[test]
fn test_classify_labels() {
    let mut tree = WeightedId3::default();
    tree.fit(&weather()).unwrap();

    let label = tree
        .classify_labels(&[Some("rainy"), Some("hot"), Some("high"), Some("TRUE"), None])
        .unwrap();
    assert_eq!(label.as_deref(), Some("no"));

    let label = tree
        .classify_labels(&[Some("sunny"), Some("hot"), Some("normal"), Some("TRUE"), Some("no")])
        .unwrap();
    assert_eq!(label.as_deref(), Some("yes"));
}

#[test]
fn test_classify_errors() {
    let mut tree = WeightedId3::default();
    tree.fit(&weather()).unwrap();

    // Missing non-class value, even one the path never tests
    assert!(matches!(
        tree.classify(&[1.0, f64::NAN, 0.0, 0.0, f64::NAN]),
        Err(ModelError::MissingValueError(_))
    ));

    // Wrong width
    assert!(matches!(
        tree.classify(&[0.0, 0.0, 0.0]),
        Err(ModelError::InputValidationError(_))
    ));

    // Outlook index 7 has no branch
    match tree.classify(&[7.0, 0.0, 0.0, 0.0, f64::NAN]) {
        Err(ModelError::UnseenCategoryError { attribute, value }) => {
            assert_eq!(attribute, "outlook");
            assert_eq!(value, "7");
        }
        other => panic!("Expected UnseenCategoryError, got {:?}", other),
    }

    assert!(matches!(
        tree.classify_labels(&[Some("foggy"), Some("hot"), Some("high"), Some("TRUE"), None]),
        Err(ModelError::UnseenCategoryError { .. })
    ));
}

// Capability violations abort before any tree is stored
#[test]
fn test_fit_capability_errors() {
    let mut tree = WeightedId3::default();
    tree.fit(&weather()).unwrap();
    let before = tree.get_root().cloned();

    let header = Header::with_last_class(
        "mixed",
        vec![
            Attribute::numeric("temperature"),
            Attribute::nominal("play", vec!["yes", "no"]),
        ],
    )
    .unwrap();
    let numeric = Instances::from_string_rows(header, &[vec!["20.0", "yes"]]).unwrap();
    assert!(matches!(
        tree.fit(&numeric),
        Err(ModelError::CapabilityError(_))
    ));

    let header = Header::with_last_class(
        "numeric class",
        vec![
            Attribute::nominal("outlook", vec!["sunny"]),
            Attribute::numeric("hours"),
        ],
    )
    .unwrap();
    let numeric_class = Instances::from_string_rows(header, &[vec!["sunny", "3"]]).unwrap();
    assert!(matches!(
        tree.fit(&numeric_class),
        Err(ModelError::CapabilityError(_))
    ));

    let rows = vec![vec!["sunny", "yes"], vec!["?", "no"]];
    let missing = Instances::from_nominal_rows("missing", &["outlook", "play"], &rows).unwrap();
    assert!(matches!(
        tree.fit(&missing),
        Err(ModelError::CapabilityError(_))
    ));

    assert_eq!(tree.get_root().cloned(), before);
}

#[test]
fn test_fit_weight_contract_errors() {
    let data = weather();
    let mut tree = WeightedId3::default();

    let partial = AttributeWeights::from_pairs([("outlook", 1.0), ("humidity", 1.0)]);
    assert!(matches!(
        tree.fit_with_weights(&data, partial),
        Err(ModelError::WeightContractError(_))
    ));

    let mut zero = AttributeWeights::uniform(data.header(), 1.0);
    zero.insert("temperature", 0.0);
    assert!(matches!(
        tree.fit_with_weights(&data, zero),
        Err(ModelError::WeightContractError(_))
    ));

    assert!(tree.get_root().is_none());
}

// Instances with a missing class are dropped before building
#[test]
fn test_fit_drops_missing_class() {
    let data = weather();
    let labels = vec![
        vec!["sunny", "hot", "high", "FALSE", "?"],
        vec!["overcast", "cool", "high", "TRUE", "?"],
    ];
    let header = data.header().clone();
    let extra = Instances::from_string_rows(header.clone(), &labels).unwrap();

    let values =
        ndarray::concatenate(ndarray::Axis(0), &[data.values(), extra.values()]).unwrap();
    let with_missing = Instances::new(header, values).unwrap();
    assert_eq!(with_missing.num_instances(), 16);

    let mut tree = WeightedId3::default();
    tree.fit(&with_missing).unwrap();
    assert_eq!(tree.generate_tree_structure().unwrap(), WEATHER_TREE);
}

// Scenario: empty training data gives an undefined leaf
#[test]
fn test_fit_empty_dataset() {
    let data = Instances::empty(weather().header().clone());
    let mut tree = WeightedId3::default();
    tree.fit(&data).unwrap();

    assert_eq!(tree.get_n_nodes().unwrap(), 1);
    assert_eq!(tree.get_depth().unwrap(), 0);
    assert_eq!(tree.generate_tree_structure().unwrap(), ": null");

    let instance = [0.0, 0.0, 0.0, 0.0, f64::NAN];
    assert_eq!(tree.classify(&instance).unwrap(), None);
    assert_eq!(tree.distribution_for(&instance).unwrap(), array![0.0, 0.0]);
}

// Scenario: a single class gives an immediate leaf
#[test]
fn test_fit_single_class() {
    let rows = vec![
        vec!["sunny", "hot", "yes"],
        vec!["rainy", "cold", "yes"],
        vec!["sunny", "cold", "yes"],
    ];
    let data = Instances::from_nominal_rows("single", &["sky", "temp", "play"], &rows).unwrap();
    let mut tree = WeightedId3::default();
    tree.fit(&data).unwrap();

    assert_eq!(tree.get_n_nodes().unwrap(), 1);
    assert_eq!(tree.generate_tree_structure().unwrap(), ": yes");
    assert_eq!(tree.classify(&[1.0, 0.0, f64::NAN]).unwrap(), Some(0));
    assert_eq!(tree.distribution_for(&[1.0, 0.0, f64::NAN]).unwrap(), array![1.0]);
}

// Scenario: weight 10 against weight 1 changes the root
#[test]
fn test_weights_flip_root() {
    let data = weighted_flip();

    let mut uniform = WeightedId3::default();
    uniform.fit_with_estimator(&data, &UniformWeights).unwrap();
    assert!(matches!(
        uniform.get_root(),
        Some(Node::Internal { attribute: 1, .. })
    ));
    assert_eq!(uniform.get_n_nodes().unwrap(), 3);

    let mut skewed = WeightedId3::default();
    skewed
        .fit_with_weights(&data, AttributeWeights::from_pairs([("a", 10.0), ("b", 1.0)]))
        .unwrap();
    assert!(matches!(
        skewed.get_root(),
        Some(Node::Internal { attribute: 0, .. })
    ));
    assert_eq!(skewed.get_n_nodes().unwrap(), 7);
    assert_eq!(skewed.get_weights().unwrap().get("a"), Some(10.0));
}

// Values never seen in training get an empty leaf
#[test]
fn test_empty_branch() {
    let header = Header::with_last_class(
        "sparse",
        vec![
            Attribute::nominal("x", vec!["a", "b", "c"]),
            Attribute::nominal("class", vec!["yes", "no"]),
        ],
    )
    .unwrap();
    let data = Instances::from_string_rows(header, &[vec!["a", "yes"], vec!["b", "no"]]).unwrap();

    let mut tree = WeightedId3::default();
    tree.fit(&data).unwrap();

    assert_eq!(
        tree.generate_tree_structure().unwrap(),
        "\nx = a: yes\nx = b: no\nx = c: null"
    );
    assert_eq!(tree.classify(&[2.0, f64::NAN]).unwrap(), None);
    assert_eq!(tree.distribution_for(&[2.0, f64::NAN]).unwrap(), array![0.0, 0.0]);
    assert_eq!(tree.classify_labels(&[Some("c"), None]).unwrap(), None);
}

#[test]
fn test_build_is_deterministic() {
    let data = weather();
    let mut first = WeightedId3::default();
    let mut second = WeightedId3::default();
    first.fit(&data).unwrap();
    second.fit(&data).unwrap();

    assert_eq!(first.get_root(), second.get_root());
    assert_eq!(first.to_graph().unwrap(), second.to_graph().unwrap());
}

#[test]
fn test_params_do_not_change_weather_tree() {
    let data = weather();

    let parallel = WeightedId3Params {
        parallel_threshold: 0,
        ..WeightedId3Params::default()
    };
    let reuse = WeightedId3Params {
        exclude_used_attributes: false,
        ..WeightedId3Params::default()
    };

    for params in [parallel, reuse] {
        let mut tree = WeightedId3::new(params).unwrap();
        tree.fit(&data).unwrap();
        assert_eq!(tree.generate_tree_structure().unwrap(), WEATHER_TREE);
    }
}

#[test]
fn test_build_tree_directly() {
    let data = weather();
    let weights = AttributeWeights::uniform(data.header(), 1.0);
    let root = build_tree(&data, &weights, &WeightedId3Params::default()).unwrap();

    assert_eq!(root.n_nodes(), 8);
    assert_eq!(root.n_leaves(), 5);
    assert!(root.check_against(data.header()).is_ok());
    assert_eq!(render::to_text(&root, data.header()), WEATHER_TREE);
}

#[test]
fn test_predict_batch() {
    let data = weather();
    let mut tree = WeightedId3::default();
    tree.fit(&data).unwrap();

    let predictions = tree.predict(&data).unwrap();
    let expected: Vec<Option<usize>> = (0..data.num_instances())
        .map(|r| data.class_value(r))
        .collect();
    assert_eq!(predictions, expected);

    let proba = tree.predict_proba(&data).unwrap();
    assert_eq!(proba.shape(), &[14, 2]);
    for (row, prediction) in proba.rows().into_iter().zip(&predictions) {
        assert_abs_diff_eq!(row.sum(), 1.0, epsilon = 1e-12);
        assert_eq!(row[prediction.unwrap()], 1.0);
    }

    // A dataset with different attributes is rejected
    let other = weighted_flip();
    assert!(matches!(
        tree.predict(&other),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn test_leaf_from_counts() {
    let leaf = Node::leaf_from_counts(3, array![1.0, 3.0, 0.0]);
    match leaf {
        Node::Leaf {
            id,
            distribution,
            class_value,
        } => {
            assert_eq!(id, 3);
            assert_eq!(distribution, array![0.25, 0.75, 0.0]);
            assert_eq!(class_value, Some(1));
        }
        other => panic!("Expected a leaf, got {:?}", other),
    }

    // Ties go to the lowest class index
    match Node::leaf_from_counts(0, array![2.0, 2.0]) {
        Node::Leaf { class_value, .. } => assert_eq!(class_value, Some(0)),
        other => panic!("Expected a leaf, got {:?}", other),
    }

    let empty = Node::empty_leaf(9, 3);
    assert_eq!(empty.id(), 9);
    assert!(empty.is_leaf());
    assert_eq!(empty.depth(), 0);
}

#[test]
fn test_check_against_detects_mismatch() {
    let data = weather();
    let bad_children = Node::Internal {
        id: 0,
        attribute: 0,
        children: vec![Node::empty_leaf(1, 2)],
    };
    assert!(matches!(
        bad_children.check_against(data.header()),
        Err(ModelError::TreeError(_))
    ));

    let class_split = Node::Internal {
        id: 0,
        attribute: 4,
        children: vec![Node::empty_leaf(1, 2), Node::empty_leaf(2, 2)],
    };
    assert!(matches!(
        class_split.check_against(data.header()),
        Err(ModelError::TreeError(_))
    ));

    assert!(matches!(
        Node::empty_leaf(0, 3).check_against(data.header()),
        Err(ModelError::TreeError(_))
    ));
}

// Identical rows with conflicting classes end in a mixed leaf, whether or not used
// attributes may be tested again
#[test]
fn test_conflicting_duplicates_terminate() {
    let rows = vec![
        vec!["a", "x", "p"],
        vec!["a", "x", "s"],
        vec!["a", "x", "p"],
        vec!["b", "y", "s"],
        vec!["b", "x", "s"],
    ];
    let data = Instances::from_nominal_rows("conflict", &["u", "v", "class"], &rows).unwrap();

    for exclude_used_attributes in [true, false] {
        let params = WeightedId3Params {
            exclude_used_attributes,
            ..WeightedId3Params::default()
        };
        let mut tree = WeightedId3::new(params).unwrap();
        tree.fit(&data).unwrap();

        assert_eq!(tree.generate_tree_structure().unwrap(), "\nu = a: p\nu = b: s");
        assert_eq!(tree.get_n_nodes().unwrap(), 3);

        let distribution = tree.distribution_for(&data.row(0).to_vec()).unwrap();
        assert_abs_diff_eq!(distribution[0], 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(distribution[1], 1.0 / 3.0, epsilon = 1e-12);
        assert_eq!(tree.classify(&data.row(1).to_vec()).unwrap(), Some(0));
    }
}
