use super::parse_embedded;
use super::raw_data::contact_lenses_raw::*;
use crate::nominal::Instances;

/// Loads the contact lenses dataset
///
/// The dataset lists every combination of four patient attributes with the type of contact
/// lenses to prescribe:
/// - age: young, pre-presbyopic, presbyopic
/// - spectacle-prescrip: myope, hypermetrope
/// - astigmatism: no, yes
/// - tear-prod-rate: reduced, normal
/// - contact-lenses (class): soft, hard, none
///
/// # Returns
///
/// * `Instances` - 24 instances with the class attribute `contact-lenses` last
///
/// # Example
///
/// ```
/// use weighted_id3::dataset::contact_lenses::load_contact_lenses;
///
/// let data = load_contact_lenses();
/// assert_eq!(data.num_instances(), 24);
/// assert_eq!(data.num_classes(), 3);
/// ```
pub fn load_contact_lenses() -> Instances {
    let (schema, data) = load_contact_lenses_raw_data();
    parse_embedded("contact-lenses", schema, data)
}
