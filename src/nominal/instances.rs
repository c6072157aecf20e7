use super::*;

/// A dataset: a header plus a matrix of data cells, one row per instance.
///
/// Every cell holds either the domain index of a nominal value, a numeric value,
/// or `NaN` for "missing". The constructor guarantees that each nominal cell is a
/// valid index into its attribute's domain.
///
/// # Fields
///
/// - `header` - Relation name, attributes and class index
/// - `values` - Data cells with shape (n_instances, n_attributes), the class column included
///
/// # Example
/// ```rust
/// use weighted_id3::nominal::Instances;
///
/// let rows = vec![
///     vec!["sunny", "play"],
///     vec!["sunny", "play"],
///     vec!["rainy", "stay"],
///     vec!["rainy", "stay"],
/// ];
/// let data = Instances::from_nominal_rows("weather", &["weather", "class"], &rows).unwrap();
///
/// assert_eq!(data.num_instances(), 4);
/// assert_eq!(data.num_classes(), 2);
/// assert_eq!(data.class_value(2), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instances {
    header: Header,
    values: Array2<f64>,
}

impl Instances {
    /// Creates a dataset from a header and a matrix of encoded cells.
    ///
    /// # Parameters
    ///
    /// - `header` - Dataset schema
    /// - `values` - Encoded cells with shape (n_instances, header.num_attributes())
    ///
    /// # Returns
    ///
    /// - `Result<Self, ModelError>` - The dataset if every cell fits its attribute
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If the column count does not match the header, or a cell
    ///   is not a valid domain index (nominal) or finite number (numeric)
    pub fn new(header: Header, values: Array2<f64>) -> Result<Self, ModelError> {
        if values.ncols() != header.num_attributes() {
            return Err(ModelError::InputValidationError(format!(
                "Data has {} columns but the header declares {} attributes",
                values.ncols(),
                header.num_attributes()
            )));
        }

        for (j, column) in values.axis_iter(Axis(1)).enumerate() {
            for &cell in column.iter() {
                header.check_cell(j, cell)?;
            }
        }

        Ok(Self { header, values })
    }

    /// Creates a dataset with the given header and no instances.
    pub fn empty(header: Header) -> Self {
        let n_attributes = header.num_attributes();
        Self {
            header,
            values: Array2::zeros((0, n_attributes)),
        }
    }

    /// Creates a dataset by encoding string rows against an existing header.
    ///
    /// `MISSING_LABEL` marks a missing value.
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If a row has the wrong width or a numeric label cannot be parsed
    /// - `ModelError::UnseenCategoryError` - If a label is not part of its attribute's domain
    pub fn from_string_rows(header: Header, rows: &[Vec<&str>]) -> Result<Self, ModelError> {
        let n_attributes = header.num_attributes();
        let mut cells = Vec::with_capacity(rows.len() * n_attributes);

        for row in rows {
            let labels: Vec<Option<&str>> = row.iter().map(|&label| Some(label)).collect();
            cells.extend(header.encode_row(&labels)?);
        }

        let values = Array2::from_shape_vec((rows.len(), n_attributes), cells)
            .map_err(|e| ModelError::InputValidationError(e.to_string()))?;

        Self::new(header, values)
    }

    /// Creates an all-nominal dataset from string rows, inferring the header.
    ///
    /// Domains list labels in first-seen order and the class attribute is the last column.
    pub fn from_nominal_rows<R: Into<String>>(
        relation: R,
        names: &[&str],
        rows: &[Vec<&str>],
    ) -> Result<Self, ModelError> {
        let header = Header::infer_nominal(relation, names, rows)?;
        Self::from_string_rows(header, rows)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    pub fn num_instances(&self) -> usize {
        self.values.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.values.nrows() == 0
    }

    pub fn num_attributes(&self) -> usize {
        self.header.num_attributes()
    }

    pub fn num_classes(&self) -> usize {
        self.header.num_classes()
    }

    pub fn attribute(&self, index: usize) -> Option<&Attribute> {
        self.header.attribute(index)
    }

    pub fn class_attribute(&self) -> &Attribute {
        self.header.class_attribute()
    }

    pub fn class_index(&self) -> usize {
        self.header.class_index()
    }

    /// Returns the cells of one instance.
    pub fn row(&self, row: usize) -> ArrayView1<'_, f64> {
        self.values.row(row)
    }

    pub fn value(&self, row: usize, attribute: usize) -> f64 {
        self.values[[row, attribute]]
    }

    pub fn is_missing(&self, row: usize, attribute: usize) -> bool {
        self.values[[row, attribute]].is_nan()
    }

    /// Returns the class value of an instance, or `None` when it is missing.
    pub fn class_value(&self, row: usize) -> Option<usize> {
        self.header
            .class_attribute()
            .index_of_cell(self.values[[row, self.header.class_index()]])
    }

    /// Checks whether an instance has a missing value in any non-class attribute.
    pub fn has_missing_value(&self, row: usize) -> bool {
        let class_index = self.header.class_index();
        self.values
            .row(row)
            .iter()
            .enumerate()
            .any(|(j, v)| j != class_index && v.is_nan())
    }

    /// Returns the indices of all instances, in order.
    pub fn all_rows(&self) -> Vec<usize> {
        (0..self.num_instances()).collect()
    }

    /// Returns a new dataset holding the given instances, in the given order.
    pub fn subset(&self, rows: &[usize]) -> Instances {
        Self {
            header: self.header.clone(),
            values: self.values.select(Axis(0), rows),
        }
    }

    /// Returns a copy of the dataset without the instances whose class value is missing.
    pub fn delete_with_missing_class(&self) -> Instances {
        let kept: Vec<usize> = (0..self.num_instances())
            .filter(|&r| self.class_value(r).is_some())
            .collect();
        self.subset(&kept)
    }

    /// Partitions a set of instances by the values of a nominal attribute.
    ///
    /// Returns one group of row indices per domain value, in domain order; groups may be
    /// empty. Instances whose value for `attribute` is missing belong to no group.
    ///
    /// # Parameters
    ///
    /// - `rows` - Row indices to partition
    /// - `attribute` - Column index of a nominal attribute
    pub fn partition(&self, rows: &[usize], attribute: usize) -> Vec<Vec<usize>> {
        let attr = &self.header.attributes()[attribute];
        let mut groups = vec![Vec::new(); attr.num_values()];
        for &r in rows {
            if let Some(v) = attr.index_of_cell(self.values[[r, attribute]]) {
                groups[v].push(r);
            }
        }
        groups
    }

    /// Splits the dataset by the values of a nominal attribute.
    ///
    /// # Parameters
    ///
    /// * `attribute` - Column index of the attribute to split on
    ///
    /// # Returns
    ///
    /// - `Result<Vec<Instances>, ModelError>` - One dataset per domain value, in domain order (possibly empty)
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If the attribute does not exist or is not nominal
    pub fn split_by(&self, attribute: usize) -> Result<Vec<Instances>, ModelError> {
        match self.header.attribute(attribute) {
            Some(attr) if attr.is_nominal() => Ok(self
                .partition(&self.all_rows(), attribute)
                .iter()
                .map(|rows| self.subset(rows))
                .collect()),
            Some(attr) => Err(ModelError::InputValidationError(format!(
                "Cannot split on numeric attribute '{}'",
                attr.name()
            ))),
            None => Err(ModelError::InputValidationError(format!(
                "Attribute index {} is out of range",
                attribute
            ))),
        }
    }

    /// Counts the class values of a set of instances.
    ///
    /// # Returns
    ///
    /// * `Array1<f64>` - One count per class value; instances with a missing class are not counted
    pub fn class_counts(&self, rows: &[usize]) -> Array1<f64> {
        let mut counts = Array1::zeros(self.num_classes());
        for &r in rows {
            if let Some(c) = self.class_value(r) {
                counts[c] += 1.0;
            }
        }
        counts
    }

    /// Cross-tabulates a nominal attribute against the class.
    ///
    /// # Returns
    ///
    /// * `Array2<f64>` - Counts with shape (attribute domain size, number of classes)
    pub fn contingency(&self, rows: &[usize], attribute: usize) -> Array2<f64> {
        let attr = &self.header.attributes()[attribute];
        let mut table = Array2::zeros((attr.num_values(), self.num_classes()));
        for &r in rows {
            if let (Some(v), Some(c)) = (
                attr.index_of_cell(self.values[[r, attribute]]),
                self.class_value(r),
            ) {
                table[[v, c]] += 1.0;
            }
        }
        table
    }
}
