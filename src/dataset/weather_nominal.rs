use super::parse_embedded;
use super::raw_data::weather_nominal_raw::*;
use crate::nominal::Instances;

/// Loads the nominal weather dataset
///
/// The weather dataset records 14 days of weather conditions and whether a game was played:
/// - outlook: sunny, overcast, rainy
/// - temperature: hot, mild, cool
/// - humidity: high, normal
/// - windy: TRUE, FALSE
/// - play (class): yes, no
///
/// # Returns
///
/// * `Instances` - 14 instances with the class attribute `play` last
///
/// # Example
///
/// ```
/// use weighted_id3::dataset::weather_nominal::load_weather_nominal;
///
/// let data = load_weather_nominal();
/// assert_eq!(data.num_instances(), 14);
/// assert_eq!(data.num_attributes(), 5);
/// assert_eq!(data.class_attribute().values(), &["yes", "no"]);
/// ```
pub fn load_weather_nominal() -> Instances {
    let (schema, data) = load_weather_nominal_raw_data();
    parse_embedded("weather.symbolic", schema, data)
}
