use ndarray::{ArrayBase, Data, DataMut, Ix1};

/// Computes `x * log2(x)` with the convention `0 * log2(0) = 0`.
#[inline]
fn x_log2_x(x: f64) -> f64 {
    if x > 0.0 { x * x.log2() } else { 0.0 }
}

/// Calculates the entropy, in bits, of a vector of counts.
///
/// Uses the count form `log2(n) - (1/n) * Σ c * log2(c)` with `n = Σ c`, which equals the
/// Shannon entropy of the distribution the counts describe. Applied to class counts it gives
/// the class entropy of a dataset; applied to the sizes of the groups an attribute induces it
/// gives that attribute's split information (intrinsic value).
///
/// # Parameters
///
/// * `counts` - Non-negative counts stored in a 1D array
///
/// # Returns
///
/// * `f64` - Entropy in bits (0.0 when the counts sum to zero or a single count is non-zero)
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use weighted_id3::math::entropy;
///
/// let counts = array![2.0, 2.0];
/// // Two classes with equal frequency carry one bit
/// assert!((entropy(&counts) - 1.0).abs() < 1e-12);
///
/// let pure = array![4.0, 0.0];
/// assert_eq!(entropy(&pure), 0.0);
/// ```
#[inline]
pub fn entropy<S>(counts: &ArrayBase<S, Ix1>) -> f64
where
    S: Data<Elem = f64>,
{
    let total = counts.sum();
    if total <= 0.0 {
        return 0.0;
    }

    let weighted_logs = counts.fold(0.0, |acc, &c| acc + x_log2_x(c));

    // Rounding can push a pure distribution slightly below zero
    (total.log2() - weighted_logs / total).max(0.0)
}

/// Calculates the gain ratio of an attribute.
///
/// Gain ratio normalizes information gain by the split information of the attribute to reduce
/// the bias toward attributes with many values.
///
/// # Parameters
///
/// - `info_gain` - Information gain of the attribute (weighted or not)
/// - `split_info` - Split information of the attribute
///
/// # Returns
///
/// * `f64` - `info_gain / split_info`, or 0.0 when `split_info` is not positive
///
/// # Examples
/// ```rust
/// use weighted_id3::math::gain_ratio;
///
/// assert!((gain_ratio(0.5, 2.0) - 0.25).abs() < 1e-12);
/// assert_eq!(gain_ratio(0.5, 0.0), 0.0);
/// ```
#[inline]
pub fn gain_ratio(info_gain: f64, split_info: f64) -> f64 {
    if split_info > 0.0 {
        info_gain / split_info
    } else {
        0.0
    }
}

/// Scales a vector of non-negative values so that it sums to one.
///
/// A vector summing to zero is left untouched.
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use weighted_id3::math::normalize;
///
/// let mut counts = array![3.0, 1.0];
/// normalize(&mut counts);
/// assert_eq!(counts, array![0.75, 0.25]);
/// ```
pub fn normalize<S>(values: &mut ArrayBase<S, Ix1>)
where
    S: DataMut<Elem = f64>,
{
    let total = values.sum();
    if total > 0.0 {
        values.mapv_inplace(|v| v / total);
    }
}

/// Returns the index of the largest value, preferring the lowest index on ties.
///
/// # Returns
///
/// * `Option<usize>` - `None` for an empty vector
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use weighted_id3::math::max_index;
///
/// assert_eq!(max_index(&array![0.2, 0.4, 0.4]), Some(1));
/// ```
pub fn max_index<S>(values: &ArrayBase<S, Ix1>) -> Option<usize>
where
    S: Data<Elem = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, best_value)) if v <= best_value => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
