use super::*;

/// Kind of values an attribute can hold.
///
/// # Variants
///
/// - `Nominal` - A categorical attribute with a fixed, finite, named domain of values
/// - `Numeric` - A continuous attribute. It can be represented in a header, but the
///   tree learner rejects it with a `ModelError::CapabilityError`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeKind {
    Nominal,
    Numeric,
}

/// Metadata of one column of a dataset.
///
/// A nominal value is stored in the data matrix as the index of its label in
/// `values`, so the domain order defined here is also the order in which a
/// decision tree lays out the children of a node splitting on this attribute.
///
/// # Fields
///
/// - `name` - Attribute name, unique within a header
/// - `index` - Column position in the header (assigned by `Header::new`)
/// - `kind` - Nominal or numeric
/// - `values` - Ordered domain of labels (empty for numeric attributes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    index: usize,
    kind: AttributeKind,
    values: Vec<String>,
}

impl Attribute {
    /// Creates a nominal attribute with the given ordered domain.
    ///
    /// # Parameters
    ///
    /// - `name` - Attribute name
    /// - `values` - Domain labels, in the order they should be indexed
    ///
    /// # Returns
    ///
    /// * `Attribute` - A nominal attribute whose index is assigned once it is placed in a `Header`
    ///
    /// # Examples
    /// ```rust
    /// use weighted_id3::nominal::Attribute;
    ///
    /// let outlook = Attribute::nominal("outlook", vec!["sunny", "overcast", "rainy"]);
    /// assert_eq!(outlook.num_values(), 3);
    /// assert_eq!(outlook.index_of_value("rainy"), Some(2));
    /// ```
    pub fn nominal<N, V>(name: N, values: Vec<V>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            index: 0,
            kind: AttributeKind::Nominal,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a numeric attribute.
    pub fn numeric<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            index: 0,
            kind: AttributeKind::Numeric,
            values: Vec::new(),
        }
    }

    pub(crate) fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn is_nominal(&self) -> bool {
        self.kind == AttributeKind::Nominal
    }

    /// Returns the ordered domain of the attribute.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns the size of the domain (0 for numeric attributes).
    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    /// Returns the label stored at `index` in the domain, if any.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Returns the domain index of `label`, if the label belongs to the domain.
    pub fn index_of_value(&self, label: &str) -> Option<usize> {
        self.values.iter().position(|v| v == label)
    }

    /// Converts a data cell into its domain index.
    ///
    /// Returns `None` for missing cells (`NaN`) and for cells that are not a valid
    /// integral index into the domain.
    pub fn index_of_cell(&self, cell: f64) -> Option<usize> {
        if !cell.is_finite() || cell < 0.0 || cell.fract() != 0.0 {
            return None;
        }
        let index = cell as usize;
        if index < self.values.len() {
            Some(index)
        } else {
            None
        }
    }

    /// Renders a data cell for messages: its label when it is a valid index, the raw number otherwise.
    pub(crate) fn describe_cell(&self, cell: f64) -> String {
        if cell.is_nan() {
            return MISSING_LABEL.to_string();
        }
        match (self.kind, self.index_of_cell(cell)) {
            (AttributeKind::Nominal, Some(i)) => self.values[i].clone(),
            _ => cell.to_string(),
        }
    }
}

/// Schema of a dataset: relation name, ordered attributes and the class attribute.
///
/// # Fields
///
/// - `relation` - Name of the dataset
/// - `attributes` - All attributes in column order, the class attribute included
/// - `class_index` - Column index of the class attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    relation: String,
    attributes: Vec<Attribute>,
    class_index: usize,
}

impl Header {
    /// Creates a header and assigns each attribute its column index.
    ///
    /// # Parameters
    ///
    /// - `relation` - Name of the dataset
    /// - `attributes` - Attributes in column order
    /// - `class_index` - Column index of the class attribute
    ///
    /// # Returns
    ///
    /// - `Result<Self, ModelError>` - The header if it is well formed
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If there are no attributes, `class_index` is out of range,
    ///   two attributes share a name, or a nominal domain is empty or contains duplicate labels
    pub fn new<R: Into<String>>(
        relation: R,
        attributes: Vec<Attribute>,
        class_index: usize,
    ) -> Result<Self, ModelError> {
        if attributes.is_empty() {
            return Err(ModelError::InputValidationError(
                "A header needs at least one attribute".to_string(),
            ));
        }

        if class_index >= attributes.len() {
            return Err(ModelError::InputValidationError(format!(
                "class_index {} is out of range for {} attributes",
                class_index,
                attributes.len()
            )));
        }

        let mut names = AHashSet::with_capacity(attributes.len());
        for attribute in &attributes {
            if !names.insert(attribute.name()) {
                return Err(ModelError::InputValidationError(format!(
                    "Duplicate attribute name '{}'",
                    attribute.name()
                )));
            }

            if attribute.is_nominal() {
                if attribute.values.is_empty() {
                    return Err(ModelError::InputValidationError(format!(
                        "Nominal attribute '{}' has an empty domain",
                        attribute.name()
                    )));
                }
                let mut labels = AHashSet::with_capacity(attribute.values.len());
                for label in &attribute.values {
                    if !labels.insert(label.as_str()) {
                        return Err(ModelError::InputValidationError(format!(
                            "Attribute '{}' lists value '{}' more than once",
                            attribute.name(),
                            label
                        )));
                    }
                }
            }
        }

        let attributes = attributes
            .into_iter()
            .enumerate()
            .map(|(i, attribute)| attribute.with_index(i))
            .collect();

        Ok(Self {
            relation: relation.into(),
            attributes,
            class_index,
        })
    }

    /// Re-validates a header that did not come from `Header::new`, such as a deserialized one.
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If `Header::new` would reject the attributes or
    ///   class index, or an attribute's index differs from its column
    pub fn check(&self) -> Result<(), ModelError> {
        let rebuilt = Header::new(
            self.relation.clone(),
            self.attributes.clone(),
            self.class_index,
        )?;
        if rebuilt != *self {
            return Err(ModelError::InputValidationError(
                "Attribute indices do not match their columns".to_string(),
            ));
        }
        Ok(())
    }

    /// Creates a header whose class attribute is the last column.
    pub fn with_last_class<R: Into<String>>(
        relation: R,
        attributes: Vec<Attribute>,
    ) -> Result<Self, ModelError> {
        let class_index = attributes.len().saturating_sub(1);
        Self::new(relation, attributes, class_index)
    }

    /// Infers an all-nominal header from string rows.
    ///
    /// Each attribute's domain lists its labels in first-seen order; `MISSING_LABEL`
    /// cells are skipped. The class attribute is the last column.
    ///
    /// # Parameters
    ///
    /// - `relation` - Name of the dataset
    /// - `names` - Attribute names in column order
    /// - `rows` - Data rows, each with one label per attribute
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If a row width differs from `names.len()`,
    ///   or a column never holds a non-missing label
    ///
    /// # Examples
    /// ```rust
    /// use weighted_id3::nominal::Header;
    ///
    /// let rows = vec![vec!["sunny", "play"], vec!["rainy", "stay"]];
    /// let header = Header::infer_nominal("weather", &["weather", "class"], &rows).unwrap();
    /// assert_eq!(header.class_attribute().values(), &["play", "stay"]);
    /// ```
    pub fn infer_nominal<R: Into<String>>(
        relation: R,
        names: &[&str],
        rows: &[Vec<&str>],
    ) -> Result<Self, ModelError> {
        let mut domains: Vec<Vec<String>> = vec![Vec::new(); names.len()];

        for (r, row) in rows.iter().enumerate() {
            if row.len() != names.len() {
                return Err(ModelError::InputValidationError(format!(
                    "Row {} has {} values, expected {}",
                    r,
                    row.len(),
                    names.len()
                )));
            }
            for (domain, &label) in domains.iter_mut().zip(row.iter()) {
                if label != MISSING_LABEL && !domain.iter().any(|v| v == label) {
                    domain.push(label.to_string());
                }
            }
        }

        let attributes = names
            .iter()
            .zip(domains)
            .map(|(&name, domain)| Attribute::nominal(name, domain))
            .collect();

        Self::with_last_class(relation, attributes)
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, index: usize) -> Option<&Attribute> {
        self.attributes.get(index)
    }

    /// Looks an attribute up by name.
    pub fn attribute_by_name(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> &Attribute {
        &self.attributes[self.class_index]
    }

    /// Returns the size of the class domain.
    pub fn num_classes(&self) -> usize {
        self.class_attribute().num_values()
    }

    /// Returns the label of a class value.
    pub fn class_label(&self, class_value: usize) -> Option<&str> {
        self.class_attribute().value(class_value)
    }

    /// Iterates over every attribute except the class attribute.
    pub fn non_class_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes
            .iter()
            .filter(move |a| a.index() != self.class_index)
    }

    /// Encodes one row of labels into data cells.
    ///
    /// `None` (or `MISSING_LABEL`) becomes `NaN`. Nominal labels are replaced by their
    /// domain index, numeric labels are parsed as `f64`.
    ///
    /// # Parameters
    ///
    /// * `labels` - One optional label per attribute, in column order
    ///
    /// # Returns
    ///
    /// - `Result<Vec<f64>, ModelError>` - The encoded row
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If the row width is wrong or a numeric label cannot be parsed
    /// - `ModelError::UnseenCategoryError` - If a nominal label is not part of its attribute's domain
    pub fn encode_row(&self, labels: &[Option<&str>]) -> Result<Vec<f64>, ModelError> {
        if labels.len() != self.attributes.len() {
            return Err(ModelError::InputValidationError(format!(
                "Row has {} values, expected {}",
                labels.len(),
                self.attributes.len()
            )));
        }

        labels
            .iter()
            .zip(self.attributes.iter())
            .map(|(label, attribute)| match label {
                None => Ok(f64::NAN),
                Some(label) if *label == MISSING_LABEL => Ok(f64::NAN),
                Some(label) => match attribute.kind() {
                    AttributeKind::Nominal => attribute
                        .index_of_value(label)
                        .map(|i| i as f64)
                        .ok_or_else(|| ModelError::UnseenCategoryError {
                            attribute: attribute.name().to_string(),
                            value: label.to_string(),
                        }),
                    AttributeKind::Numeric => label.trim().parse::<f64>().map_err(|_| {
                        ModelError::InputValidationError(format!(
                            "Cannot parse '{}' as a number for attribute '{}'",
                            label,
                            attribute.name()
                        ))
                    }),
                },
            })
            .collect()
    }

    /// Validates a single data cell against the attribute at `column`.
    pub(crate) fn check_cell(&self, column: usize, cell: f64) -> Result<(), ModelError> {
        if cell.is_nan() {
            return Ok(());
        }
        let attribute = &self.attributes[column];
        let valid = match attribute.kind() {
            AttributeKind::Nominal => attribute.index_of_cell(cell).is_some(),
            AttributeKind::Numeric => cell.is_finite(),
        };
        if valid {
            Ok(())
        } else {
            Err(ModelError::InputValidationError(format!(
                "Value {} is not valid for attribute '{}'",
                cell,
                attribute.name()
            )))
        }
    }
}
