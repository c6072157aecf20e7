use crate::nominal::{Attribute, Header, Instances};

/// This module provides access to the contact lenses dataset
pub mod contact_lenses;
/// Internal module for raw dataset content
mod raw_data;
/// This module provides access to the nominal weather dataset
pub mod weather_nominal;

/// Parses an embedded dataset.
///
/// `schema` holds one `name: value,value,...` line per attribute with the class attribute
/// last, and `data` holds one comma-separated row per line.
fn parse_embedded(relation: &str, schema: &str, data: &str) -> Instances {
    let attributes = schema
        .trim()
        .lines()
        .map(|line| {
            let (name, values) = line
                .split_once(':')
                .expect("embedded schema line has a name and a domain");
            Attribute::nominal(name.trim(), values.split(',').map(str::trim).collect::<Vec<&str>>())
        })
        .collect();
    let header =
        Header::with_last_class(relation, attributes).expect("embedded schema is a valid header");

    let rows: Vec<Vec<&str>> = data
        .trim()
        .lines()
        .map(|line| line.split(',').map(str::trim).collect())
        .collect();

    Instances::from_string_rows(header, &rows).expect("embedded rows match the embedded schema")
}
